//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the domain port and stay testable with stub repositories.

use std::sync::Arc;

use crate::domain::ports::StudentRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Persistence port for student records.
    pub students: Arc<dyn StudentRepository>,
}

impl HttpState {
    /// Bundle the given repository for handler injection.
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}
