//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical learner record shared across classrooms.
//!
//! # Invariants
//! - `id` is immutable for the lifetime of the record and is the sole
//!   identity key: two records with the same id are the same student.
//! - Student records are never deleted; the registry keeps them for the
//!   whole session even after every classroom that listed them is removed.

use serde::{Deserialize, Serialize};

/// Operator-supplied student identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The id string itself is the map key in `StudentRegistry`, so no custom
/// equality contract is needed.
pub type StudentId = String;

/// Canonical learner record.
///
/// One record exists per id regardless of how many classrooms the student is
/// enrolled in; classrooms store only the id and re-resolve through the
/// student registry when full data is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable identity key, matched verbatim (no normalization).
    pub id: StudentId,
}

impl Student {
    /// Creates a student record for the given id.
    pub fn new(id: impl Into<StudentId>) -> Self {
        Self { id: id.into() }
    }
}
