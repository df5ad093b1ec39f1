//! Classroom domain model.
//!
//! # Responsibility
//! - Hold one classroom's membership list and scheduled assignments.
//! - Enforce duplicate-free, insertion-ordered enrollment.
//!
//! # Invariants
//! - `name` is immutable and is the registry key.
//! - `students` never contains the same id twice; order is enrollment order.
//! - `assignments` keeps insertion order; duplicate details are allowed.

use crate::model::student::StudentId;
use serde::{Deserialize, Serialize};

/// Named container of enrolled student ids and scheduled assignment strings.
///
/// Classrooms hold non-owning lookup keys (`StudentId`), not student records;
/// the student registry is the sole owner of `Student` data. Removing a
/// classroom discards its lists but leaves the students themselves intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Registry key, matched verbatim.
    pub name: String,
    students: Vec<StudentId>,
    assignments: Vec<String>,
}

impl Classroom {
    /// Creates an empty classroom with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Adds a student id to the membership list if not already present.
    ///
    /// Returns `true` when the id was newly added, `false` when it was
    /// already enrolled. Callers report both outcomes identically; the
    /// return value exists for observability, not for a distinct message.
    pub fn enroll(&mut self, id: impl Into<StudentId>) -> bool {
        let id = id.into();
        if self.is_enrolled(&id) {
            return false;
        }
        self.students.push(id);
        true
    }

    /// Returns whether the given id is in the membership list.
    pub fn is_enrolled(&self, id: &str) -> bool {
        self.students.iter().any(|enrolled| enrolled == id)
    }

    /// Enrolled student ids in enrollment order.
    pub fn student_ids(&self) -> &[StudentId] {
        &self.students
    }

    /// Appends assignment details verbatim.
    ///
    /// Details are opaque text: no parsing, no dedup.
    pub fn schedule_assignment(&mut self, details: impl Into<String>) {
        self.assignments.push(details.into());
    }

    /// Scheduled assignment details in scheduling order.
    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }
}
