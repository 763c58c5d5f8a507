//! Plain-text and JSON output for student listings.

use roster_core::StudentRecord;

const HEADER: [&str; 6] = ["ID", "NAME", "AGE", "EMAIL", "COURSE", "GRADE"];

/// Renders records as an aligned text table.
pub fn student_table(students: &[StudentRecord]) -> String {
    let rows: Vec<[String; 6]> = students
        .iter()
        .map(|student| {
            [
                student.id.to_string(),
                student.name.clone(),
                student.age.to_string(),
                student.email.clone(),
                student.course.clone(),
                student.grade_label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_row(&HEADER.map(str::to_string), &widths);
    for row in &rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

pub fn student_json(students: &[StudentRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(students)
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::student_table;
    use roster_core::{StudentId, StudentRecord};

    #[test]
    fn table_aligns_columns_and_marks_missing_grade() {
        let students = vec![StudentRecord {
            id: StudentId(12),
            name: "Ana Lee".to_string(),
            age: 19,
            email: "ana.lee@u.edu".to_string(),
            course: "Physics".to_string(),
            grade: None,
            registered_at: 0,
        }];

        let table = student_table(&students);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID  NAME   "));
        assert!(lines[1].starts_with("12  Ana Lee"));
        assert!(lines[1].ends_with('-'));
    }
}
