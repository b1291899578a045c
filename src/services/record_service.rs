// src/services/record_service.rs
//! Acesso a dados genérico para as tabelas de esquema fixo.
//!
//! Cada função pede uma conexão ao pool, executa exatamente uma instrução
//! parametrizada e devolve a conexão quando o guard sai de âmbito (também
//! nos caminhos de erro). Não há transações multi-instrução: cada escrita
//! fica confirmada logo que a instrução termina.
use crate::{
    error::AppResult,
    models::{JsonObject, Table},
};
use serde_json::{Number, Value};
use sqlx::{
    query::Query,
    sqlite::{Sqlite, SqliteArguments, SqliteRow},
    Column, Row, SqlitePool, TypeInfo, ValueRef,
};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// `SELECT *` sem filtro nem ordenação; uma entrada por linha, chaves pela
/// ordem das colunas.
pub async fn list_all(db_pool: &SqlitePool, table: &Table) -> AppResult<Vec<JsonObject>> {
    let sql = table.select_all_sql();
    let mut conn = db_pool.acquire().await?;
    let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
    drop(conn);

    tracing::debug!("{}: {} linhas lidas.", table.name, rows.len());
    rows.iter().map(row_to_json).collect()
}

/// Insere uma linha com todos os campos da tabela e devolve o id gerado.
pub async fn insert(db_pool: &SqlitePool, table: &Table, payload: &JsonObject) -> AppResult<i64> {
    // Validação antes de tocar na base: um campo em falta não muta nada
    let values = table.values_from(payload)?;
    let sql = table.insert_sql();

    let mut conn = db_pool.acquire().await?;
    let result = bind_all(sqlx::query(&sql), &values)
        .execute(&mut *conn)
        .await?;

    let id = result.last_insert_rowid();
    tracing::debug!("{}: linha {} inserida.", table.name, id);
    Ok(id)
}

/// Substitui a linha completa. Devolve o número de linhas afetadas (0 = não existe).
pub async fn update_by_id(
    db_pool: &SqlitePool,
    table: &Table,
    id: i64,
    payload: &JsonObject,
) -> AppResult<u64> {
    let values = table.values_from(payload)?;
    let sql = table.update_sql();

    let mut conn = db_pool.acquire().await?;
    let rows_affected = bind_all(sqlx::query(&sql), &values)
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    tracing::debug!("{}: update id={} afetou {} linhas.", table.name, id, rows_affected);
    Ok(rows_affected)
}

/// Apaga por id. Devolve o número de linhas afetadas (0 = não existe).
pub async fn delete_by_id(db_pool: &SqlitePool, table: &Table, id: i64) -> AppResult<u64> {
    let sql = table.delete_sql();

    let mut conn = db_pool.acquire().await?;
    let rows_affected = sqlx::query(&sql)
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    tracing::debug!("{}: delete id={} afetou {} linhas.", table.name, id, rows_affected);
    Ok(rows_affected)
}

fn bind_all<'q>(query: SqliteQuery<'q>, values: &[&'q Value]) -> SqliteQuery<'q> {
    values.iter().fold(query, |query, value| bind_json(query, *value))
}

// O tipo SQLite segue o tipo JSON do valor recebido
fn bind_json<'q>(query: SqliteQuery<'q>, value: &'q Value) -> SqliteQuery<'q> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => query.bind(i),
            None => query.bind(n.as_f64()),
        },
        Value::String(s) => query.bind(s.as_str()),
        // Arrays e objetos são guardados como texto JSON
        other => query.bind(other.to_string()),
    }
}

fn row_to_json(row: &SqliteRow) -> AppResult<JsonObject> {
    let mut object = JsonObject::with_capacity(row.len());
    for column in row.columns() {
        let value = column_to_json(row, column.ordinal())?;
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

fn column_to_json(row: &SqliteRow, index: usize) -> AppResult<Value> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    // Tipo do valor guardado (não o declarado na coluna)
    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => Number::from_f64(row.try_get_unchecked::<f64, _>(index)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Value::String(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}
