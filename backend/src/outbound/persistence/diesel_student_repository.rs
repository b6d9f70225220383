//! PostgreSQL-backed `StudentRepository` implementation using Diesel.
//!
//! A thin adapter: each method checks a pooled connection out, runs one
//! statement, and translates Diesel errors into the port's error type. The
//! duplicate-identifier outcome comes from the primary-key constraint on
//! `nim`, so concurrent creates with the same identifier serialise at the
//! database and the loser surfaces as a unique violation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{StudentPersistenceError, StudentRepository};
use crate::domain::{Student, StudentPatch};

use super::models::{NewStudentRow, StudentRow};
use super::pool::{DbPool, PoolError};
use super::schema::students;

/// Diesel-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a repository on top of the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> StudentPersistenceError {
    let (PoolError::Checkout { message } | PoolError::Build { message }) = error;
    StudentPersistenceError::connection(message)
}

fn map_diesel_error(error: diesel::result::Error) -> StudentPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StudentPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => StudentPersistenceError::query("database error"),
        _ => StudentPersistenceError::query("database error"),
    }
}

fn map_insert_error(error: diesel::result::Error, nim: &str) -> StudentPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        debug!(nim, message = info.message(), "duplicate student insert");
        return StudentPersistenceError::duplicate(nim);
    }
    map_diesel_error(error)
}

fn row_to_student(row: StudentRow) -> Result<Student, StudentPersistenceError> {
    Student::try_from_parts(row.nim, row.nama, row.email, row.alamat)
        .map_err(|err| StudentPersistenceError::query(format!("stored record is invalid: {err}")))
}

fn rows_to_students(rows: Vec<StudentRow>) -> Result<Vec<Student>, StudentPersistenceError> {
    rows.into_iter().map(row_to_student).collect()
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn insert(&self, student: &Student) -> Result<(), StudentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewStudentRow {
            nim: student.nim(),
            nama: student.nama(),
            email: student.email(),
            alamat: student.alamat(),
        };
        diesel::insert_into(students::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, student.nim()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Student>, StudentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentRow> = students::table
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_students(rows)
    }

    async fn search_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, StudentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // The fragment is a bound parameter, so only LIKE wildcard
        // metacharacters pass through, not SQL.
        let pattern = format!("%{fragment}%");
        let rows: Vec<StudentRow> = students::table
            .filter(students::nama.like(pattern))
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_students(rows)
    }

    async fn update(
        &self,
        nim: &str,
        patch: &StudentPatch,
    ) -> Result<bool, StudentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(students::table.filter(students::nim.eq(nim)))
            .set((
                students::nama.eq(patch.nama()),
                students::email.eq(patch.email()),
                students::alamat.eq(patch.alamat()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, nim: &str) -> Result<bool, StudentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(students::table.filter(students::nim.eq(nim)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("simulated".to_owned()))
    }

    #[test]
    fn pool_errors_map_to_connection() {
        let mapped = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, StudentPersistenceError::connection("timed out"));
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection),
        StudentPersistenceError::connection("database connection error")
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown),
        StudentPersistenceError::query("database error")
    )]
    #[case(
        DieselError::NotFound,
        StudentPersistenceError::query("database error")
    )]
    fn diesel_errors_map_to_port_errors(
        #[case] error: DieselError,
        #[case] expected: StudentPersistenceError,
    ) {
        assert_eq!(map_diesel_error(error), expected);
    }

    #[test]
    fn unique_violation_maps_to_duplicate() {
        let mapped = map_insert_error(database_error(DatabaseErrorKind::UniqueViolation), "A1");
        assert_eq!(mapped, StudentPersistenceError::duplicate("A1"));
    }

    #[test]
    fn other_insert_errors_keep_the_generic_mapping() {
        let mapped = map_insert_error(database_error(DatabaseErrorKind::Unknown), "A1");
        assert_eq!(mapped, StudentPersistenceError::query("database error"));
    }

    #[test]
    fn valid_rows_convert_to_domain_records() {
        let row = StudentRow {
            nim: "A1".into(),
            nama: "Ann".into(),
            email: "a@x.com".into(),
            alamat: "St1".into(),
        };

        let student = row_to_student(row).expect("row converts");
        assert_eq!(student.nim(), "A1");
    }

    #[test]
    fn invalid_rows_abort_the_whole_scan() {
        let rows = vec![
            StudentRow {
                nim: "A1".into(),
                nama: "Ann".into(),
                email: "a@x.com".into(),
                alamat: "St1".into(),
            },
            StudentRow {
                nim: "A2".into(),
                nama: String::new(),
                email: "b@x.com".into(),
                alamat: "St2".into(),
            },
        ];

        let err = rows_to_students(rows).expect_err("invalid row must fail the scan");
        assert!(matches!(err, StudentPersistenceError::Query { .. }));
    }
}
