//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the specification for the REST surface. Swagger UI
//! serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::ErrorBody;
use crate::inbound::http::students::{
    CreateStudentRequest, DeleteConfirmation, StudentResponse, UpdateStudentRequest,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student records API",
        description = "CRUD interface over the students table, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::get_all_students,
        crate::inbound::http::students::get_student_by_name,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateStudentRequest,
        UpdateStudentRequest,
        StudentResponse,
        DeleteConfirmation,
        ErrorBody
    )),
    tags(
        (name = "students", description = "Operations on student records"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_the_student_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/api/students"));
        assert!(paths.contains_key("/api/students/search/{nama}"));
        assert!(paths.contains_key("/api/students/{nim}"));
        assert!(paths.contains_key("/health/ready"));
    }
}
