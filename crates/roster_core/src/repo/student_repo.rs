//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD, name search and course listing over the `students` table.
//! - Open one connection per operation and release it on every exit path.
//!
//! # Invariants
//! - Write paths do not validate; callers go through `StudentService`.
//! - Read paths reject rows that cannot be decoded instead of masking them.

use super::{is_constraint_violation, RepoError, RepoResult, Repository};
use crate::config::StoreConfig;
use crate::db::{open_connection, open_db};
use crate::model::student::{NewStudent, StudentId, StudentRecord};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    email,
    course,
    grade,
    registration_date
FROM students";

/// Student-specific queries on top of the generic CRUD contract.
pub trait StudentRepository:
    Repository<StudentRecord, Id = StudentId, Draft = NewStudent>
{
    /// Case-insensitive substring match on `name`, ordered by name.
    fn search_by_name_substring(&self, term: &str) -> RepoResult<Vec<StudentRecord>>;
    /// Distinct course values in ascending order.
    fn list_distinct_courses(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed student store.
///
/// Holds only configuration; every call opens its own connection.
#[derive(Debug, Clone)]
pub struct SqliteStudentStore {
    config: StoreConfig,
    db_path: PathBuf,
}

impl SqliteStudentStore {
    /// Bootstraps the database file described by `config` and returns a
    /// store bound to it.
    ///
    /// # Errors
    /// - `RepoError::Connection` when the file cannot be created, opened or
    ///   migrated.
    pub fn open(config: StoreConfig) -> RepoResult<Self> {
        let db_path = config.db_path();
        open_db(&db_path, config.busy_timeout).map_err(RepoError::Connection)?;
        info!(
            "event=store_open module=repo status=ok database={}",
            config.database
        );
        Ok(Self { config, db_path })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> RepoResult<Connection> {
        open_connection(&self.db_path, self.config.busy_timeout).map_err(RepoError::Connection)
    }

    fn query_students(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> RepoResult<Vec<StudentRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }
}

impl Repository<StudentRecord> for SqliteStudentStore {
    type Id = StudentId;
    type Draft = NewStudent;

    fn insert(&self, draft: &NewStudent) -> RepoResult<StudentId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO students (name, age, email, course, grade)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.name.as_str(),
                draft.age,
                draft.email.as_str(),
                draft.course.as_str(),
                draft.grade.as_deref(),
            ],
        )
        .map_err(|err| map_constraint(err, &draft.email))?;

        Ok(StudentId(conn.last_insert_rowid()))
    }

    fn get_by_id(&self, id: StudentId) -> RepoResult<Option<StudentRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id.get()], |row| Ok(parse_student_row(row)))
            .optional()?;

        row.transpose()
    }

    fn update(&self, record: &StudentRecord) -> RepoResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE students
             SET
                name = ?1,
                age = ?2,
                email = ?3,
                course = ?4,
                grade = ?5
             WHERE id = ?6;",
            params![
                record.name.as_str(),
                record.age,
                record.email.as_str(),
                record.course.as_str(),
                record.grade.as_deref(),
                record.id.get(),
            ],
        )
        .map_err(|err| map_constraint(err, &record.email))?;

        Ok(())
    }

    fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM students WHERE id = ?1;", [id.get()])?;
        Ok(())
    }

    fn list_all(&self) -> RepoResult<Vec<StudentRecord>> {
        self.query_students(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"), [])
    }
}

impl StudentRepository for SqliteStudentStore {
    fn search_by_name_substring(&self, term: &str) -> RepoResult<Vec<StudentRecord>> {
        let pattern = format!("%{}%", escape_like(term));
        self.query_students(
            &format!(r"{STUDENT_SELECT_SQL} WHERE name LIKE ?1 ESCAPE '\' ORDER BY name ASC, id ASC;"),
            [pattern],
        )
    }

    fn list_distinct_courses(&self) -> RepoResult<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT DISTINCT course FROM students ORDER BY course ASC;")?;
        let courses = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<StudentRecord> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in students.id"
        )));
    }

    let raw_age: i64 = row.get("age")?;
    let age = i32::try_from(raw_age).map_err(|_| {
        RepoError::InvalidData(format!("invalid age value `{raw_age}` in students.age"))
    })?;

    Ok(StudentRecord {
        id: StudentId(id),
        name: row.get("name")?,
        age,
        email: row.get("email")?,
        course: row.get("course")?,
        grade: row.get("grade")?,
        registered_at: row.get("registration_date")?,
    })
}

/// Duplicate emails get a dedicated message; other constraint failures
/// (column length checks) keep SQLite's own description.
fn map_constraint(err: rusqlite::Error, email: &str) -> RepoError {
    if !is_constraint_violation(&err) {
        return err.into();
    }
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::ConstraintViolation(format!("email `{email}` is already registered"))
        }
        _ => RepoError::ConstraintViolation(format!("student field rejected by store: {err}")),
    }
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_guards_wildcards() {
        assert_eq!(escape_like("jane"), "jane");
        assert_eq!(escape_like("50%_off"), r"50\%\_off");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
    }
}
