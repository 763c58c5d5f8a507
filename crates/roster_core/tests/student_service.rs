use roster_core::{
    NewStudent, RepoError, ServiceError, SqliteStudentStore, StoreConfig, StudentField,
    StudentService,
};
use tempfile::TempDir;

fn open_store() -> (TempDir, SqliteStudentStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStudentStore::open(StoreConfig::new(dir.path())).unwrap();
    (dir, store)
}

fn ana_lee() -> NewStudent {
    NewStudent::new("Ana Lee", 19, "ana.lee@u.edu", "Physics", Some("B+"))
}

fn assert_validation(err: ServiceError, expected: StudentField) {
    match err {
        ServiceError::Validation(err) => assert_eq!(err.field, expected),
        other => panic!("expected validation error for {expected}, got {other}"),
    }
}

#[test]
fn add_student_scenario_lists_record_and_course() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    let id = service.add_student(&ana_lee()).unwrap();

    let students = service.list_students().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, id);
    assert!(students[0].id.get() > 0);
    assert_eq!(students[0].fields(), ana_lee());
    assert!(service.list_courses().unwrap().contains(&"Physics".to_string()));
}

#[test]
fn valid_inputs_are_stored_verbatim() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    let drafts = [
        NewStudent::new("  Bo  ", 16, "bo@x.io", "Art", None),
        NewStudent::new("Old Timer", 100, "old+timer@mail.example.org", "History", Some("a+")),
        NewStudent::new("Mid Way", 55, "mid_way@x.co", "Law", Some("")),
    ];

    for draft in &drafts {
        let id = service.add_student(draft).unwrap();
        let loaded = service.get_student(id).unwrap().unwrap();
        assert_eq!(&loaded.fields(), draft);
    }
}

#[test]
fn out_of_range_age_is_rejected_without_persisting() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    for age in [-5, 0, 15, 101, 250] {
        let mut draft = ana_lee();
        draft.age = age;
        assert_validation(service.add_student(&draft).unwrap_err(), StudentField::Age);
    }
    assert!(service.list_students().unwrap().is_empty());
}

#[test]
fn malformed_email_is_rejected() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    for email in ["", "ana", "ana@", "ana@u", "@u.edu", "ana@u.e", "ana lee@u.edu"] {
        let mut draft = ana_lee();
        draft.email = email.to_string();
        assert_validation(service.add_student(&draft).unwrap_err(), StudentField::Email);
    }
    assert!(service.list_students().unwrap().is_empty());
}

#[test]
fn duplicate_email_surfaces_constraint_violation() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    service.add_student(&ana_lee()).unwrap();
    let mut twin = ana_lee();
    twin.name = "Ana Twin".to_string();

    let err = service.add_student(&twin).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::ConstraintViolation(_))
    ));
}

#[test]
fn grade_rules_follow_letter_set() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    for (index, grade) in [None, Some(""), Some("A+"), Some("a+")].into_iter().enumerate() {
        let draft = NewStudent::new("Grade Ok", 20, format!("ok{index}@u.edu"), "Art", grade);
        service.add_student(&draft).unwrap();
    }

    let draft = NewStudent::new("Grade Bad", 20, "bad@u.edu", "Art", Some("A++"));
    assert_validation(service.add_student(&draft).unwrap_err(), StudentField::Grade);
}

#[test]
fn validation_reports_fields_in_fixed_order() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    let all_bad = NewStudent::new("X", 5, "nope", " ", Some("Z"));
    assert_validation(service.add_student(&all_bad).unwrap_err(), StudentField::Name);

    let bad_course = NewStudent::new("Xavier", 20, "x@u.edu", " ", Some("Z"));
    let err = service.add_student(&bad_course).unwrap_err();
    assert_eq!(err.to_string(), "Course is required");
}

#[test]
fn deleted_student_is_not_found() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    let id = service.add_student(&ana_lee()).unwrap();
    service.delete_student(id).unwrap();

    assert!(service.get_student(id).unwrap().is_none());
}

#[test]
fn blank_search_returns_full_listing() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    service
        .add_student(&NewStudent::new("John Doe", 20, "john@u.edu", "Physics", Some("A")))
        .unwrap();
    service
        .add_student(&NewStudent::new("Jane Smith", 21, "jane@u.edu", "Mathematics", Some("B+")))
        .unwrap();

    let listing = service.list_students().unwrap();
    assert_eq!(service.search_students("").unwrap(), listing);
    assert_eq!(service.search_students("   ").unwrap(), listing);

    let hits = service.search_students("jane").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jane Smith");
}

#[test]
fn update_roundtrip_returns_updated_fields() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    let id = service.add_student(&ana_lee()).unwrap();
    let mut record = service.get_student(id).unwrap().unwrap();
    record.course = "Astronomy".to_string();
    record.grade = Some("A-".to_string());
    service.update_student(&record).unwrap();

    assert_eq!(service.get_student(id).unwrap().unwrap(), record);
    assert_eq!(service.list_courses().unwrap(), vec!["Astronomy".to_string()]);
}

#[test]
fn update_does_not_revalidate() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    let id = service.add_student(&ana_lee()).unwrap();
    let mut record = service.get_student(id).unwrap().unwrap();
    record.age = 7;
    service.update_student(&record).unwrap();

    assert_eq!(service.get_student(id).unwrap().unwrap().age, 7);
}

#[test]
fn search_keeps_surrounding_spaces_in_term() {
    let (_dir, store) = open_store();
    let service = StudentService::new(&store);

    service
        .add_student(&NewStudent::new("John Doe", 20, "john@u.edu", "Physics", None))
        .unwrap();
    service
        .add_student(&NewStudent::new("Doetsch", 22, "doetsch@u.edu", "Physics", None))
        .unwrap();

    let names: Vec<String> = service
        .search_students(" Doe")
        .unwrap()
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(names, vec!["John Doe".to_string()]);
    assert_eq!(service.search_students("Doe").unwrap().len(), 2);
}
