// src/models/machine.rs
use super::table::{Field, Table};

// Tabela `Machine`: única entidade com update e delete por id.
pub const MACHINES: Table = Table {
    name: "Machine",
    label: "Machine",
    id_column: "id",
    fields: &[
        Field::new("Description"),
        Field::new("Nserie"),
        Field::new("constructeur"),
        Field::new("Nmachine"),
        Field::new("poids"),
        Field::new("Dimension"),
        Field::new("machine_name"),
        Field::new("status"),
        Field::new("health"),
    ],
    returns_id: true,
};
