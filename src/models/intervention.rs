// src/models/intervention.rs
use super::table::{Field, Table};

pub const INTERVENTIONS: Table = Table {
    name: "intervention",
    label: "Intervention",
    id_column: "id",
    fields: &[
        Field::new("id_machine"),
        Field::stored_as("date_intervention", "date-intervention"),
        Field::new("responsable"),
        Field::new("description"),
    ],
    returns_id: true,
};
