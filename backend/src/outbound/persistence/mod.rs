//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementation of the `StudentRepository` port, backed by
//! `diesel-async` with `bb8` connection pooling. Row structs and the schema
//! definition are internal; the domain only ever sees `Student` values and
//! port errors.

mod diesel_student_repository;
mod models;
mod pool;
mod schema;

pub use diesel_student_repository::DieselStudentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
