//! Classroom registry: map name → Classroom with unique keys.
//!
//! # Responsibility
//! - Insert-if-absent creation and remove-by-name deletion.
//! - Expose read/write access to individual classrooms for the facade.
//!
//! # Invariants
//! - At most one classroom per name.
//! - Removal discards the classroom's membership and assignment lists; it
//!   never reaches into the student registry.

use crate::model::classroom::Classroom;
use std::collections::BTreeMap;

/// Session-scoped map of all live classrooms.
///
/// A `BTreeMap` keeps `names()` deterministic across runs; callers must not
/// rely on any particular order beyond "all names, no duplicates".
#[derive(Debug, Default)]
pub struct ClassroomRegistry {
    classrooms: BTreeMap<String, Classroom>,
}

impl ClassroomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new empty classroom unless the name is taken.
    ///
    /// Returns `true` on insertion, `false` (no mutation) on collision.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.classrooms.contains_key(name) {
            return false;
        }
        self.classrooms
            .insert(name.to_string(), Classroom::new(name));
        true
    }

    /// Removes the classroom with the given name.
    ///
    /// Returns `true` when an entry was removed, `false` when absent.
    pub fn remove(&mut self, name: &str) -> bool {
        self.classrooms.remove(name).is_some()
    }

    /// Returns whether a classroom with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.classrooms.contains_key(name)
    }

    /// Read access to one classroom.
    pub fn get(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    /// Write access to one classroom.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Classroom> {
        self.classrooms.get_mut(name)
    }

    /// All classroom names in registry iteration order.
    pub fn names(&self) -> Vec<String> {
        self.classrooms.keys().cloned().collect()
    }

    /// Number of live classrooms.
    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    /// Returns whether no classroom exists.
    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ClassroomRegistry;

    #[test]
    fn insert_rejects_duplicate_name_without_mutation() {
        let mut registry = ClassroomRegistry::new();

        assert!(registry.insert("Math101"));
        registry
            .get_mut("Math101")
            .unwrap()
            .schedule_assignment("HW1");

        assert!(!registry.insert("Math101"));
        assert_eq!(registry.len(), 1);
        // Collision must not replace the existing entry.
        assert_eq!(registry.get("Math101").unwrap().assignments(), ["HW1"]);
    }

    #[test]
    fn remove_reports_absence() {
        let mut registry = ClassroomRegistry::new();

        assert!(!registry.remove("Math101"));
        registry.insert("Math101");
        assert!(registry.remove("Math101"));
        assert!(registry.is_empty());
    }
}
