// src/models/table.rs
use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};

/// Corpo JSON de um pedido, tal como chega (objeto chave → valor).
pub type JsonObject = Map<String, Value>;

/// Um campo do corpo JSON e a coluna onde é guardado.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub column: &'static str,
}

impl Field {
    pub const fn new(key: &'static str) -> Self {
        Self { key, column: key }
    }

    // Para colunas cujo nome difere da chave JSON (ex: "Assigned To")
    pub const fn stored_as(key: &'static str, column: &'static str) -> Self {
        Self { key, column }
    }
}

/// Descreve uma tabela de esquema fixo e o conjunto de campos que cada
/// insert/update tem de receber.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    /// Nome usado nas mensagens de resposta ("Machine added successfully").
    pub label: &'static str,
    pub id_column: &'static str,
    pub fields: &'static [Field],
    /// Se a resposta de criação devolve o id gerado.
    pub returns_id: bool,
}

impl Table {
    /// Extrai os valores de todos os campos, pela ordem da tabela.
    /// A primeira chave em falta dá `MissingField`; chaves extra são ignoradas.
    pub fn values_from<'a>(&self, payload: &'a JsonObject) -> AppResult<Vec<&'a Value>> {
        self.fields
            .iter()
            .map(|field| {
                payload
                    .get(field.key)
                    .ok_or_else(|| AppError::MissingField(field.key.to_string()))
            })
            .collect()
    }

    pub fn select_all_sql(&self) -> String {
        format!("SELECT * FROM {}", quote_ident(self.name))
    }

    pub fn insert_sql(&self) -> String {
        let columns: Vec<String> = self.fields.iter().map(|f| quote_ident(f.column)).collect();
        let placeholders: Vec<String> = (1..=self.fields.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(self.name),
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// UPDATE de linha completa; o id é o último parâmetro.
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{} = ?{}", quote_ident(f.column), i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            quote_ident(self.name),
            assignments.join(", "),
            quote_ident(self.id_column),
            self.fields.len() + 1
        )
    }

    pub fn delete_sql(&self) -> String {
        format!(
            "DELETE FROM {} WHERE {} = ?1",
            quote_ident(self.name),
            quote_ident(self.id_column)
        )
    }
}

/// Aspas duplas à volta de um identificador SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: Table = Table {
        name: "sample",
        label: "Sample",
        id_column: "id",
        fields: &[Field::new("a"), Field::stored_as("b_key", "b column")],
        returns_id: true,
    };

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn values_follow_field_order_and_ignore_extras() {
        let payload = object(json!({ "b_key": 2, "extra": true, "a": "x" }));
        let values = SAMPLE.values_from(&payload).unwrap();
        assert_eq!(values, vec![&json!("x"), &json!(2)]);
    }

    #[test]
    fn null_counts_as_present() {
        let payload = object(json!({ "a": null, "b_key": null }));
        assert_eq!(SAMPLE.values_from(&payload).unwrap().len(), 2);
    }

    #[test]
    fn first_absent_key_is_reported() {
        let payload = object(json!({ "a": 1 }));
        match SAMPLE.values_from(&payload) {
            Err(AppError::MissingField(name)) => assert_eq!(name, "b_key"),
            other => panic!("esperado MissingField, obtido {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn statements_quote_legacy_column_names() {
        assert_eq!(
            SAMPLE.insert_sql(),
            r#"INSERT INTO "sample" ("a", "b column") VALUES (?1, ?2)"#
        );
        assert_eq!(
            SAMPLE.update_sql(),
            r#"UPDATE "sample" SET "a" = ?1, "b column" = ?2 WHERE "id" = ?3"#
        );
        assert_eq!(SAMPLE.delete_sql(), r#"DELETE FROM "sample" WHERE "id" = ?1"#);
        assert_eq!(SAMPLE.select_all_sql(), r#"SELECT * FROM "sample""#);
    }

    #[test]
    fn embedded_quotes_are_escaped() {
        assert_eq!(quote_ident(r#"we"ird"#), r#""we""ird""#);
    }
}
