//! Field rules for student records.
//!
//! # Responsibility
//! - Provide pure predicates for each student field.
//! - Map the first failing predicate to a field-scoped `ValidationError`.
//!
//! # Invariants
//! - Predicates never touch storage and never mutate their input.
//! - `validate_new_student` checks fields in the order name, age, email,
//!   course, grade.

use crate::model::student::NewStudent;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 100;

/// Letter grades accepted by `is_valid_grade`, in display order.
pub const VALID_GRADES: [&str; 13] = [
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F",
];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Student field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Age,
    Email,
    Course,
    Grade,
}

impl StudentField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Email => "email",
            Self::Course => "course",
            Self::Grade => "grade",
        }
    }
}

impl Display for StudentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student field failed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: StudentField,
    /// User-facing description of the violated rule.
    pub rule: &'static str,
}

impl ValidationError {
    fn for_field(field: StudentField) -> Self {
        let rule = match field {
            StudentField::Name => "Name must be at least 2 characters",
            StudentField::Age => "Age must be between 16 and 100",
            StudentField::Email => "Invalid email format",
            StudentField::Course => "Course is required",
            StudentField::Grade => "Invalid grade format. Use A+, A, A-, B+, etc.",
        };
        Self { field, rule }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rule)
    }
}

impl Error for ValidationError {}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}

pub fn is_valid_age(age: i32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_course(course: &str) -> bool {
    !course.trim().is_empty()
}

/// Grade is optional: `None` and blank strings pass.
pub fn is_valid_grade(grade: Option<&str>) -> bool {
    let Some(grade) = grade.map(str::trim).filter(|value| !value.is_empty()) else {
        return true;
    };
    let normalized = grade.to_ascii_uppercase();
    VALID_GRADES.contains(&normalized.as_str())
}

/// Runs every field rule and reports the first failure.
pub fn validate_new_student(student: &NewStudent) -> Result<(), ValidationError> {
    let checks = [
        (StudentField::Name, is_valid_name(&student.name)),
        (StudentField::Age, is_valid_age(student.age)),
        (StudentField::Email, is_valid_email(&student.email)),
        (StudentField::Course, is_valid_course(&student.course)),
        (StudentField::Grade, is_valid_grade(student.grade.as_deref())),
    ];

    match checks.into_iter().find(|(_, passed)| !passed) {
        Some((field, _)) => Err(ValidationError::for_field(field)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_trimmed_chars() {
        assert!(is_valid_name("Al"));
        assert!(!is_valid_name(" A "));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(is_valid_age(16));
        assert!(is_valid_age(100));
        assert!(!is_valid_age(15));
        assert!(!is_valid_age(101));
        assert!(!is_valid_age(-1));
    }

    #[test]
    fn email_requires_domain_and_tld() {
        assert!(is_valid_email("ana.lee@u.edu"));
        assert!(is_valid_email("first+tag@mail.example.org"));
        assert!(!is_valid_email("ana.lee@u"));
        assert!(!is_valid_email("ana.lee.u.edu"));
        assert!(!is_valid_email("ana lee@u.edu"));
        assert!(!is_valid_email("ana@u.e"));
    }

    #[test]
    fn course_must_not_be_blank() {
        assert!(is_valid_course("Physics"));
        assert!(!is_valid_course("   "));
    }

    #[test]
    fn grade_is_optional_and_case_insensitive() {
        assert!(is_valid_grade(None));
        assert!(is_valid_grade(Some("")));
        assert!(is_valid_grade(Some("A+")));
        assert!(is_valid_grade(Some("a+")));
        assert!(is_valid_grade(Some(" f ")));
        assert!(!is_valid_grade(Some("A++")));
        assert!(!is_valid_grade(Some("E")));
    }

    #[test]
    fn first_failing_field_wins() {
        let student = NewStudent::new("X", 12, "bad", "", Some("Z"));
        let err = validate_new_student(&student).unwrap_err();
        assert_eq!(err.field, StudentField::Name);

        let student = NewStudent::new("Xavier", 20, "bad", "", Some("Z"));
        let err = validate_new_student(&student).unwrap_err();
        assert_eq!(err.field, StudentField::Email);
        assert_eq!(err.to_string(), "Invalid email format");
    }
}
