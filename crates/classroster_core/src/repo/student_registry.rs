//! Student registry: canonical owner of all `Student` records.
//!
//! # Responsibility
//! - Map id → Student with unique keys.
//! - Provide the create-if-absent dedup point for enrollment.
//!
//! # Invariants
//! - At most one record per id for the whole session.
//! - Records are never removed; removing a classroom does not touch this map.

use crate::model::student::{Student, StudentId};
use std::collections::BTreeMap;

/// Session-scoped map of every student the operator has referenced.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: BTreeMap<StudentId, Student>,
}

impl StudentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the record for `id`, creating it lazily on first reference.
    ///
    /// This is the single dedup point: a second call with the same id
    /// returns the existing record instead of creating another one.
    pub fn get_or_create(&mut self, id: &str) -> &Student {
        self.students
            .entry(id.to_string())
            .or_insert_with(|| Student::new(id))
    }

    /// Returns the record for `id` if it has ever been referenced.
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Returns whether `id` is known to the registry.
    pub fn contains(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    /// Number of distinct student records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns whether no student has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
