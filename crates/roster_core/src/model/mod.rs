//! Student domain model.
//!
//! # Invariants
//! - Every persisted student is identified by a database-assigned
//!   `StudentId` that is never reused.
//! - Deletion is a hard delete; there are no tombstones.

pub mod student;
