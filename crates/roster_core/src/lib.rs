//! Core domain logic for the student roster.
//! This crate is the single source of truth for student field rules and
//! storage behavior; presentation layers only talk to `StudentService`.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validate;

pub use config::{ConfigError, StoreConfig, DEFAULT_DATABASE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::student::{NewStudent, StudentId, StudentRecord};
pub use repo::student_repo::{SqliteStudentStore, StudentRepository};
pub use repo::{RepoError, RepoResult, Repository};
pub use service::student_service::{ServiceError, ServiceResult, StudentService};
pub use validate::{StudentField, ValidationError, VALID_GRADES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
