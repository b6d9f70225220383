//! Student record aggregate.
//!
//! A student is identified by `nim`, the registration number used for lookup,
//! update, and delete targeting. The identifier is immutable after creation;
//! `nama`, `email`, and `alamat` are mutable through [`StudentPatch`].

use std::fmt;

/// Validation errors raised by the fallible constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyNim,
    EmptyNama,
    EmptyEmail,
    EmptyAlamat,
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNim => write!(f, "nim must not be empty"),
            Self::EmptyNama => write!(f, "nama must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyAlamat => write!(f, "alamat must not be empty"),
        }
    }
}

impl std::error::Error for StudentValidationError {}

fn require_non_empty(
    value: String,
    error: StudentValidationError,
) -> Result<String, StudentValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

/// Full student record.
///
/// ## Invariants
/// - All four fields are non-empty once trimmed of whitespace.
/// - `nim` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    nim: String,
    nama: String,
    email: String,
    alamat: String,
}

impl Student {
    /// Validate and build a record from its four parts.
    pub fn try_from_parts(
        nim: impl Into<String>,
        nama: impl Into<String>,
        email: impl Into<String>,
        alamat: impl Into<String>,
    ) -> Result<Self, StudentValidationError> {
        Ok(Self {
            nim: require_non_empty(nim.into(), StudentValidationError::EmptyNim)?,
            nama: require_non_empty(nama.into(), StudentValidationError::EmptyNama)?,
            email: require_non_empty(email.into(), StudentValidationError::EmptyEmail)?,
            alamat: require_non_empty(alamat.into(), StudentValidationError::EmptyAlamat)?,
        })
    }

    /// Registration number, the unique lookup key.
    pub fn nim(&self) -> &str {
        &self.nim
    }

    /// Student name.
    pub fn nama(&self) -> &str {
        &self.nama
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Postal address.
    pub fn alamat(&self) -> &str {
        &self.alamat
    }
}

/// The three mutable fields of a student, validated for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPatch {
    nama: String,
    email: String,
    alamat: String,
}

impl StudentPatch {
    /// Validate and build an update payload.
    pub fn try_from_parts(
        nama: impl Into<String>,
        email: impl Into<String>,
        alamat: impl Into<String>,
    ) -> Result<Self, StudentValidationError> {
        Ok(Self {
            nama: require_non_empty(nama.into(), StudentValidationError::EmptyNama)?,
            email: require_non_empty(email.into(), StudentValidationError::EmptyEmail)?,
            alamat: require_non_empty(alamat.into(), StudentValidationError::EmptyAlamat)?,
        })
    }

    /// Replacement name.
    pub fn nama(&self) -> &str {
        &self.nama
    }

    /// Replacement email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replacement address.
    pub fn alamat(&self) -> &str {
        &self.alamat
    }
}
