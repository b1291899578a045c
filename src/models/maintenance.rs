// src/models/maintenance.rs
use super::table::{Field, Table};

pub const MAINTENANCE_TASKS: Table = Table {
    name: "maintenance_task",
    label: "Maintenance task",
    id_column: "id",
    fields: &[
        Field::new("Task_Title"),
        Field::new("Machine"),
        Field::new("Task_Type"),
        Field::new("Priority"),
        Field::new("Scheduled_Date"),
        Field::new("Estimate_Hours"),
        // A coluna tem um espaço; a chave JSON usa underscore
        Field::stored_as("Assigned_To", "Assigned To"),
    ],
    returns_id: false,
};

pub const MAINTENANCE_SCHEDULES: Table = Table {
    name: "maintenance_schedule",
    label: "Maintenance schedule",
    id_column: "id",
    fields: &[
        Field::new("Schedule_Name"),
        Field::new("Machine"),
        Field::new("Frequency"),
        Field::new("Assign_To"),
        Field::new("Start_Date"),
        Field::new("End_Date"),
    ],
    returns_id: false,
};
