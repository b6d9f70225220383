//! Diesel table definition for the PostgreSQL schema.
//!
//! Must match the deployed table exactly. The expected DDL:
//!
//! ```sql
//! CREATE TABLE students (
//!     nim    VARCHAR PRIMARY KEY,
//!     nama   VARCHAR NOT NULL,
//!     email  VARCHAR NOT NULL,
//!     alamat VARCHAR NOT NULL
//! );
//! ```
//!
//! `nim` being the primary key is load-bearing: duplicate creates are
//! rejected by the constraint, not by a pre-insert existence check.

diesel::table! {
    /// Student records keyed by registration number.
    students (nim) {
        /// Registration number, the unique student key.
        nim -> Varchar,
        /// Student name.
        nama -> Varchar,
        /// Contact email.
        email -> Varchar,
        /// Postal address.
        alamat -> Varchar,
    }
}
