//! Core domain logic for the classroster session manager.
//! This crate is the single source of truth for roster invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::classroom::Classroom;
pub use model::student::{Student, StudentId};
pub use repo::classroom_registry::ClassroomRegistry;
pub use repo::student_registry::StudentRegistry;
pub use service::roster_service::{RosterError, RosterResult, RosterService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
