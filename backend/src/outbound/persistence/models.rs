//! Diesel row structs for the students table.

use diesel::prelude::*;

use super::schema::students;

/// Queryable row projecting the four student columns.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub nim: String,
    pub nama: String,
    pub email: String,
    pub alamat: String,
}

/// Insertable row borrowing from a validated domain record.
#[derive(Debug, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub nim: &'a str,
    pub nama: &'a str,
    pub email: &'a str,
    pub alamat: &'a str,
}
