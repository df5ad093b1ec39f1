//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into operator-level operations.
//! - Keep the front end decoupled from registry mechanics.

pub mod roster_service;
