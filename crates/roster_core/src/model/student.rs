//! Student record and its insertable field set.
//!
//! # Invariants
//! - `id` and `registered_at` are assigned by the store and never written by
//!   application code.
//! - Field values are stored exactly as given; validation does not normalize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database-assigned identifier of a student row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl StudentId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Mutable student fields, as submitted for insert or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub course: String,
    /// Letter grade; `None` when not yet graded.
    pub grade: Option<String>,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        email: impl Into<String>,
        course: impl Into<String>,
        grade: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
            course: course.into(),
            grade: grade.map(str::to_string),
        }
    }
}

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub course: String,
    pub grade: Option<String>,
    /// Unix epoch milliseconds, set by the database on insert.
    pub registered_at: i64,
}

impl StudentRecord {
    /// Returns the mutable part of this record.
    pub fn fields(&self) -> NewStudent {
        NewStudent {
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
            course: self.course.clone(),
            grade: self.grade.clone(),
        }
    }

    /// Replaces every mutable field, keeping `id` and `registered_at`.
    pub fn apply(&mut self, fields: NewStudent) {
        self.name = fields.name;
        self.age = fields.age;
        self.email = fields.email;
        self.course = fields.course;
        self.grade = fields.grade;
    }

    /// Single-line summary used by list views.
    pub fn display_text(&self) -> String {
        format!(
            "Student | #{} | {} | {} | {} | Course: {} | Grade: {}",
            self.id,
            self.name,
            self.age,
            self.email,
            self.course,
            self.grade_label()
        )
    }

    /// Grade for display; `-` when absent or blank.
    pub fn grade_label(&self) -> &str {
        match self.grade.as_deref().map(str::trim) {
            Some(grade) if !grade.is_empty() => grade,
            _ => "-",
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.name, self.course, self.grade_label())
    }
}

#[cfg(test)]
mod tests {
    use super::{NewStudent, StudentId, StudentRecord};

    fn sample() -> StudentRecord {
        StudentRecord {
            id: StudentId(7),
            name: "Jane Smith".to_string(),
            age: 21,
            email: "jane.smith@university.edu".to_string(),
            course: "Mathematics".to_string(),
            grade: Some("B+".to_string()),
            registered_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn display_uses_name_course_and_grade() {
        assert_eq!(sample().to_string(), "Jane Smith - Mathematics (B+)");
    }

    #[test]
    fn missing_grade_renders_placeholder() {
        let mut record = sample();
        record.grade = None;
        assert_eq!(record.grade_label(), "-");
        record.grade = Some("  ".to_string());
        assert!(record.display_text().ends_with("Grade: -"));
    }

    #[test]
    fn apply_keeps_identity_and_timestamp() {
        let mut record = sample();
        record.apply(NewStudent::new(
            "Jane Doe",
            22,
            "jane.doe@university.edu",
            "Physics",
            None,
        ));

        assert_eq!(record.id, StudentId(7));
        assert_eq!(record.registered_at, 1_700_000_000_000);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.grade, None);
        assert_eq!(record.fields().course, "Physics");
    }
}
