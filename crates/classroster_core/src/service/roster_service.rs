//! Roster facade service.
//!
//! # Responsibility
//! - Coordinate the classroom and student registries behind one API.
//! - Enforce existence preconditions before delegating mutations.
//!
//! # Invariants
//! - This facade is the only component that mutates both registries.
//! - Every operation either fully succeeds or leaves both registries
//!   unchanged; precondition checks happen before any mutation.
//! - `submit_assignment` checks classroom existence before student
//!   existence and records no state on success.

use crate::model::student::StudentId;
use crate::repo::classroom_registry::ClassroomRegistry;
use crate::repo::student_registry::StudentRegistry;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Soft failure raised by roster operations.
///
/// Every variant is recoverable: the front end surfaces it as an
/// informational message and keeps accepting commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Create collided with an existing classroom name.
    ClassroomExists(String),
    /// The named classroom is absent from the registry.
    ClassroomNotFound(String),
    /// The student id was never referenced by any enrollment.
    StudentNotFound(StudentId),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassroomExists(name) => write!(f, "classroom already exists: {name}"),
            Self::ClassroomNotFound(name) => write!(f, "classroom not found: {name}"),
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
        }
    }
}

impl Error for RosterError {}

/// Session-scoped roster state and the operations over it.
///
/// Holds both registries for the lifetime of one interactive session; there
/// is no process-wide singleton. All state is discarded when the service is
/// dropped.
#[derive(Debug, Default)]
pub struct RosterService {
    classrooms: ClassroomRegistry,
    students: StudentRegistry,
}

impl RosterService {
    /// Creates a service with empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty classroom.
    ///
    /// # Errors
    /// - `ClassroomExists` when the name is already taken; no mutation.
    pub fn create_classroom(&mut self, name: &str) -> RosterResult<()> {
        if !self.classrooms.insert(name) {
            warn!("event=classroom_create module=service status=exists name={name}");
            return Err(RosterError::ClassroomExists(name.to_string()));
        }
        info!("event=classroom_create module=service status=ok name={name}");
        Ok(())
    }

    /// Removes a classroom, discarding its membership and assignment lists.
    ///
    /// Students stay in the student registry: a re-created classroom with
    /// the same name starts empty.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when the name is absent.
    pub fn remove_classroom(&mut self, name: &str) -> RosterResult<()> {
        if !self.classrooms.remove(name) {
            warn!("event=classroom_remove module=service status=not_found name={name}");
            return Err(RosterError::ClassroomNotFound(name.to_string()));
        }
        info!("event=classroom_remove module=service status=ok name={name}");
        Ok(())
    }

    /// All classroom names in registry iteration order.
    pub fn classroom_names(&self) -> Vec<String> {
        self.classrooms.names()
    }

    /// Enrolls a student in a classroom, creating the student record lazily.
    ///
    /// The classroom check runs first: when it fails, no student record is
    /// created. Enrollment is idempotent; a repeat call for the same
    /// `(id, class)` pair succeeds without a second membership entry and is
    /// indistinguishable from a first-time enrollment to the caller.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is absent.
    pub fn enroll_student(&mut self, id: &str, class_name: &str) -> RosterResult<()> {
        if !self.classrooms.contains(class_name) {
            warn!("event=student_enroll module=service status=no_classroom class={class_name}");
            return Err(RosterError::ClassroomNotFound(class_name.to_string()));
        }

        self.students.get_or_create(id);
        let classroom = self
            .classrooms
            .get_mut(class_name)
            .ok_or_else(|| RosterError::ClassroomNotFound(class_name.to_string()))?;
        let newly_added = classroom.enroll(id);
        info!(
            "event=student_enroll module=service status=ok id={id} class={class_name} new={newly_added}"
        );
        Ok(())
    }

    /// Enrolled student ids for one classroom, in enrollment order.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is absent.
    pub fn students_in(&self, class_name: &str) -> RosterResult<Vec<StudentId>> {
        let classroom = self
            .classrooms
            .get(class_name)
            .ok_or_else(|| RosterError::ClassroomNotFound(class_name.to_string()))?;
        Ok(classroom.student_ids().to_vec())
    }

    /// Appends assignment details to a classroom's schedule.
    ///
    /// Details are opaque text; duplicates are allowed.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is absent.
    pub fn schedule_assignment(&mut self, class_name: &str, details: &str) -> RosterResult<()> {
        let classroom = self
            .classrooms
            .get_mut(class_name)
            .ok_or_else(|| RosterError::ClassroomNotFound(class_name.to_string()))?;
        classroom.schedule_assignment(details);
        info!("event=assignment_schedule module=service status=ok class={class_name}");
        Ok(())
    }

    /// Confirms an assignment submission without recording it.
    ///
    /// Checks classroom existence first, then student-registry existence.
    /// Deliberately permissive: neither enrollment in `class_name` nor a
    /// matching scheduled assignment is verified, and success mutates
    /// nothing. The only observable effect is the confirmation itself.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is absent.
    /// - `StudentNotFound` when `student_id` was never enrolled anywhere.
    pub fn submit_assignment(
        &self,
        student_id: &str,
        class_name: &str,
        details: &str,
    ) -> RosterResult<()> {
        if !self.classrooms.contains(class_name) {
            warn!("event=assignment_submit module=service status=no_classroom class={class_name}");
            return Err(RosterError::ClassroomNotFound(class_name.to_string()));
        }
        if !self.students.contains(student_id) {
            warn!("event=assignment_submit module=service status=no_student id={student_id}");
            return Err(RosterError::StudentNotFound(student_id.to_string()));
        }
        info!(
            "event=assignment_submit module=service status=ok id={student_id} class={class_name} details_len={}",
            details.len()
        );
        Ok(())
    }

    /// Read access to one classroom's record.
    pub fn classroom(&self, name: &str) -> Option<&crate::model::classroom::Classroom> {
        self.classrooms.get(name)
    }

    /// Returns whether the student registry knows this id.
    pub fn has_student(&self, id: &str) -> bool {
        self.students.contains(id)
    }

    /// Number of distinct student records in the session.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }
}
