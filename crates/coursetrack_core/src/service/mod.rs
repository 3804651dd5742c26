//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and persistence calls into the surface the
//!   presentation layer consumes.
//! - Keep UI layers decoupled from storage and file-format details.

pub mod tracker;
