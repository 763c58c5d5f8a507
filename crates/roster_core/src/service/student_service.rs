//! Student use-case service.
//!
//! # Responsibility
//! - Provide the add/get/update/delete/list/search/courses entry points used
//!   by presentation layers.
//! - Validate new students before anything reaches the store.
//!
//! # Invariants
//! - `add_student` never touches the store when validation fails.
//! - Email uniqueness is decided by the store constraint only; the service
//!   does not pre-check it.
//! - `update_student` forwards the record without validation.

use crate::model::student::{NewStudent, StudentId, StudentRecord};
use crate::repo::student_repo::StudentRepository;
use crate::repo::RepoError;
use crate::validate::{validate_new_student, ValidationError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for student use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A field rule failed; the store was not touched.
    Validation(ValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Validation + persistence facade over a borrowed student store.
pub struct StudentService<'store, R: StudentRepository + ?Sized> {
    store: &'store R,
}

impl<'store, R: StudentRepository + ?Sized> StudentService<'store, R> {
    pub fn new(store: &'store R) -> Self {
        Self { store }
    }

    /// Validates and inserts a new student.
    ///
    /// # Errors
    /// - `ServiceError::Validation` naming the first failing field.
    /// - `ServiceError::Repo(RepoError::ConstraintViolation)` for a duplicate
    ///   email.
    pub fn add_student(&self, student: &NewStudent) -> ServiceResult<StudentId> {
        if let Err(err) = validate_new_student(student) {
            warn!(
                "event=student_add module=service status=rejected field={}",
                err.field
            );
            return Err(err.into());
        }

        let id = self.store.insert(student).map_err(|err| {
            warn!(
                "event=student_add module=service status=error error={}",
                error_code(&err)
            );
            err
        })?;
        info!("event=student_add module=service status=ok id={id}");
        Ok(id)
    }

    pub fn get_student(&self, id: StudentId) -> ServiceResult<Option<StudentRecord>> {
        Ok(self.store.get_by_id(id)?)
    }

    /// Replaces the mutable fields of an existing student.
    ///
    /// No field validation runs here; a missing id is a silent no-op.
    pub fn update_student(&self, record: &StudentRecord) -> ServiceResult<()> {
        self.store.update(record)?;
        info!(
            "event=student_update module=service status=ok id={}",
            record.id
        );
        Ok(())
    }

    pub fn delete_student(&self, id: StudentId) -> ServiceResult<()> {
        self.store.delete_by_id(id)?;
        info!("event=student_delete module=service status=ok id={id}");
        Ok(())
    }

    pub fn list_students(&self) -> ServiceResult<Vec<StudentRecord>> {
        Ok(self.store.list_all()?)
    }

    /// Name search; a blank term returns the full listing.
    ///
    /// Non-blank terms are matched as given, surrounding spaces included.
    pub fn search_students(&self, term: &str) -> ServiceResult<Vec<StudentRecord>> {
        if term.trim().is_empty() {
            return self.list_students();
        }
        Ok(self.store.search_by_name_substring(term)?)
    }

    pub fn list_courses(&self) -> ServiceResult<Vec<String>> {
        Ok(self.store.list_distinct_courses()?)
    }
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Connection(_) => "connection",
        RepoError::ConstraintViolation(_) => "constraint_violation",
        RepoError::Db(_) => "db",
        RepoError::InvalidData(_) => "invalid_data",
    }
}
