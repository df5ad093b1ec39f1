//! Domain model for classrooms and students.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep entity invariants (unique keys, duplicate-free membership) local to
//!   the types that carry them.
//!
//! # Invariants
//! - A `Student` is identified solely by its `StudentId`.
//! - A `Classroom` never lists the same student id twice.

pub mod classroom;
pub mod student;
