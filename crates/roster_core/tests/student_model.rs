use roster_core::{NewStudent, StudentId, StudentRecord};

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let record = StudentRecord {
        id: StudentId(3),
        name: "Robert Johnson".to_string(),
        age: 22,
        email: "robert.johnson@university.edu".to_string(),
        course: "Physics".to_string(),
        grade: None,
        registered_at: 1_700_000_000_000,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Robert Johnson");
    assert_eq!(json["grade"], serde_json::Value::Null);
    assert_eq!(json["registered_at"], 1_700_000_000_000_i64);

    let decoded: StudentRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn new_student_copies_optional_grade() {
    let draft = NewStudent::new("Emily Williams", 19, "emily@u.edu", "Chemistry", Some("B"));
    assert_eq!(draft.grade.as_deref(), Some("B"));
    assert_eq!(StudentId::from(9).to_string(), "9");
}
