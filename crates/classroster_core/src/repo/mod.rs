//! Registry layer: in-memory canonical storage for the session.
//!
//! # Responsibility
//! - Own the two unique-keyed maps (id → Student, name → Classroom).
//! - Keep map mechanics out of the service facade.
//!
//! # Invariants
//! - Every id listed by any classroom resolves in the student registry.
//! - Registries expose check/insert/remove primitives only; precondition
//!   ordering and error reporting live in the service layer.

pub mod classroom_registry;
pub mod student_registry;
