//! Student CRUD handlers.
//!
//! ```text
//! POST   /api/students
//! GET    /api/students
//! GET    /api/students/search/{nama}
//! PUT    /api/students/{nim}
//! DELETE /api/students/{nim}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::StudentPersistenceError;
use crate::domain::{Error, ErrorBody, Student, StudentPatch, StudentValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Confirmation text returned by a successful delete.
const DELETED_MESSAGE: &str = "student record deleted";

/// Request body for `POST /api/students`.
///
/// Example JSON:
/// `{"nim":"A1","nama":"Ann","email":"a@x.com","alamat":"St1"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateStudentRequest {
    pub nim: String,
    pub nama: String,
    pub email: String,
    pub alamat: String,
}

/// Request body for `PUT /api/students/{nim}`.
///
/// A `nim` field is accepted for wire compatibility but ignored: the path
/// segment is authoritative and the identifier is immutable.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateStudentRequest {
    #[serde(default)]
    pub nim: Option<String>,
    pub nama: String,
    pub email: String,
    pub alamat: String,
}

/// Student record as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub nim: String,
    pub nama: String,
    pub email: String,
    pub alamat: String,
}

impl From<&Student> for StudentResponse {
    fn from(value: &Student) -> Self {
        Self {
            nim: value.nim().to_owned(),
            nama: value.nama().to_owned(),
            email: value.email().to_owned(),
            alamat: value.alamat().to_owned(),
        }
    }
}

/// Body of a successful delete response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Fixed confirmation text.
    #[schema(example = "student record deleted")]
    pub message: String,
}

fn map_validation_error(err: StudentValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn map_persistence_error(err: StudentPersistenceError) -> Error {
    match err {
        StudentPersistenceError::Duplicate { nim } => {
            Error::conflict(format!("a student with identifier {nim} is already registered"))
        }
        other => Error::internal(other.to_string()),
    }
}

/// Register a new student.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 409, description = "Identifier already registered", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStudentRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let student = Student::try_from_parts(body.nim, body.nama, body.email, body.alamat)
        .map_err(map_validation_error)?;

    state
        .students
        .insert(&student)
        .await
        .map_err(map_persistence_error)?;

    Ok(HttpResponse::Created().json(StudentResponse::from(&student)))
}

/// List every registered student.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = [StudentResponse]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "getAllStudents"
)]
#[get("/students")]
pub async fn get_all_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<StudentResponse>>> {
    let students = state.students.list().await.map_err(map_persistence_error)?;

    Ok(web::Json(
        students.iter().map(StudentResponse::from).collect(),
    ))
}

/// Search students by name fragment.
///
/// The fragment is matched with SQL `LIKE` semantics and passed through
/// unescaped, so `%` and `_` in the fragment act as wildcards.
#[utoipa::path(
    get,
    path = "/api/students/search/{nama}",
    params(
        ("nama" = String, Path, description = "Name fragment; LIKE wildcards pass through")
    ),
    responses(
        (status = 200, description = "Matching students", body = [StudentResponse]),
        (status = 404, description = "No matching students", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "getStudentByName"
)]
#[get("/students/search/{nama}")]
pub async fn get_student_by_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<StudentResponse>>> {
    let fragment = path.into_inner();
    let matches = state
        .students
        .search_by_name(&fragment)
        .await
        .map_err(map_persistence_error)?;

    if matches.is_empty() {
        return Err(Error::not_found("no students match that name"));
    }

    Ok(web::Json(matches.iter().map(StudentResponse::from).collect()))
}

/// Replace the mutable fields of a student.
#[utoipa::path(
    put,
    path = "/api/students/{nim}",
    params(
        ("nim" = String, Path, description = "Registration number of the record to update")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Updated student", body = StudentResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 404, description = "No student with that identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{nim}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStudentRequest>,
) -> ApiResult<web::Json<StudentResponse>> {
    let nim = path.into_inner();
    let body = payload.into_inner();
    // body.nim is deliberately ignored: the identifier is immutable.
    let patch = StudentPatch::try_from_parts(body.nama, body.email, body.alamat)
        .map_err(map_validation_error)?;
    let student = Student::try_from_parts(nim, patch.nama(), patch.email(), patch.alamat())
        .map_err(map_validation_error)?;

    let updated = state
        .students
        .update(student.nim(), &patch)
        .await
        .map_err(map_persistence_error)?;

    if !updated {
        return Err(Error::not_found("no student with that identifier"));
    }

    Ok(web::Json(StudentResponse::from(&student)))
}

/// Remove a student record.
#[utoipa::path(
    delete,
    path = "/api/students/{nim}",
    params(
        ("nim" = String, Path, description = "Registration number of the record to delete")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DeleteConfirmation),
        (status = 404, description = "No student with that identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{nim}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteConfirmation>> {
    let nim = path.into_inner();
    let deleted = state
        .students
        .delete(&nim)
        .await
        .map_err(map_persistence_error)?;

    if !deleted {
        return Err(Error::not_found("no student with that identifier"));
    }

    Ok(web::Json(DeleteConfirmation {
        message: DELETED_MESSAGE.to_owned(),
    }))
}
