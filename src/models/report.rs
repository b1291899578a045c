// src/models/report.rs
use super::table::{Field, Table};

pub const REPORTS: Table = Table {
    name: "rapport",
    label: "Report",
    id_column: "id",
    fields: &[
        Field::new("periode"),
        // Grafia da coluna mantida tal como existe na base
        Field::stored_as("contenu", "co√ßntenu"),
    ],
    returns_id: true,
};
