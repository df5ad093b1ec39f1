use classroster_core::{RosterError, RosterService};

#[test]
fn create_classroom_rejects_duplicate_without_mutation() {
    let mut roster = RosterService::new();

    roster.create_classroom("Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();

    let err = roster.create_classroom("Math101").unwrap_err();
    assert_eq!(err, RosterError::ClassroomExists("Math101".to_string()));

    assert_eq!(roster.classroom_names(), ["Math101"]);
    assert_eq!(roster.students_in("Math101").unwrap(), ["S1"]);
}

#[test]
fn enrollment_is_idempotent_per_classroom() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();

    roster.enroll_student("S1", "Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();

    assert_eq!(roster.students_in("Math101").unwrap(), ["S1"]);
    assert_eq!(roster.student_count(), 1);
}

#[test]
fn enrollment_in_missing_classroom_does_not_create_the_student() {
    let mut roster = RosterService::new();

    let err = roster.enroll_student("S1", "Ghost").unwrap_err();
    assert_eq!(err, RosterError::ClassroomNotFound("Ghost".to_string()));

    assert!(!roster.has_student("S1"));
    assert_eq!(roster.student_count(), 0);
}

#[test]
fn one_student_record_is_shared_across_classrooms() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();
    roster.create_classroom("Art201").unwrap();

    roster.enroll_student("S1", "Math101").unwrap();
    roster.enroll_student("S1", "Art201").unwrap();

    assert_eq!(roster.students_in("Math101").unwrap(), ["S1"]);
    assert_eq!(roster.students_in("Art201").unwrap(), ["S1"]);
    // Two memberships, exactly one canonical record.
    assert_eq!(roster.student_count(), 1);
}

#[test]
fn students_keep_enrollment_order() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();

    roster.enroll_student("S3", "Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();
    roster.enroll_student("S2", "Math101").unwrap();

    assert_eq!(roster.students_in("Math101").unwrap(), ["S3", "S1", "S2"]);
}

#[test]
fn removed_classroom_leaves_students_and_does_not_resurrect_membership() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();

    roster.remove_classroom("Math101").unwrap();
    assert!(roster.classroom_names().is_empty());
    // The student record survives classroom removal.
    assert!(roster.has_student("S1"));

    roster.create_classroom("Math101").unwrap();
    assert!(roster.students_in("Math101").unwrap().is_empty());
}

#[test]
fn remove_missing_classroom_fails_softly() {
    let mut roster = RosterService::new();

    let err = roster.remove_classroom("Ghost").unwrap_err();
    assert_eq!(err, RosterError::ClassroomNotFound("Ghost".to_string()));
}

#[test]
fn list_students_requires_an_existing_classroom() {
    let roster = RosterService::new();

    let err = roster.students_in("Ghost").unwrap_err();
    assert_eq!(err, RosterError::ClassroomNotFound("Ghost".to_string()));
}

#[test]
fn schedule_appends_in_order_and_allows_duplicates() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();

    roster.schedule_assignment("Math101", "HW1").unwrap();
    roster.schedule_assignment("Math101", "HW2").unwrap();
    roster.schedule_assignment("Math101", "HW1").unwrap();

    let room = roster.classroom("Math101").unwrap();
    assert_eq!(room.assignments(), ["HW1", "HW2", "HW1"]);
}

#[test]
fn schedule_requires_an_existing_classroom() {
    let mut roster = RosterService::new();

    let err = roster.schedule_assignment("Ghost", "HW1").unwrap_err();
    assert_eq!(err, RosterError::ClassroomNotFound("Ghost".to_string()));
}

#[test]
fn submit_checks_classroom_before_student() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();

    // Classroom check wins even though the student is unknown too.
    let err = roster.submit_assignment("S9", "Ghost", "HW1").unwrap_err();
    assert_eq!(err, RosterError::ClassroomNotFound("Ghost".to_string()));
}

#[test]
fn submit_rejects_student_unknown_to_the_registry() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();

    let err = roster.submit_assignment("S9", "Math101", "HW1").unwrap_err();
    assert_eq!(err, RosterError::StudentNotFound("S9".to_string()));
}

#[test]
fn submit_is_permissive_about_enrollment_and_scheduled_text() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();
    roster.create_classroom("Art201").unwrap();
    roster.enroll_student("S1", "Art201").unwrap();

    // S1 is known to the registry but not enrolled in Math101, and
    // "HW1" was never scheduled anywhere. Both pass by design.
    roster.submit_assignment("S1", "Math101", "HW1").unwrap();
}

#[test]
fn submit_records_no_state() {
    let mut roster = RosterService::new();
    roster.create_classroom("Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();
    roster.schedule_assignment("Math101", "HW1").unwrap();

    let before = roster.classroom("Math101").unwrap().clone();
    roster.submit_assignment("S1", "Math101", "HW1").unwrap();
    roster.submit_assignment("S1", "Math101", "HW1").unwrap();

    assert_eq!(roster.classroom("Math101").unwrap(), &before);
    assert_eq!(roster.student_count(), 1);
}

#[test]
fn end_to_end_single_classroom_session() {
    let mut roster = RosterService::new();

    roster.create_classroom("Math101").unwrap();
    roster.enroll_student("S1", "Math101").unwrap();
    roster.schedule_assignment("Math101", "HW1").unwrap();
    roster.submit_assignment("S1", "Math101", "HW1").unwrap();

    assert_eq!(roster.students_in("Math101").unwrap(), ["S1"]);
    assert_eq!(roster.classroom_names(), ["Math101"]);
}
