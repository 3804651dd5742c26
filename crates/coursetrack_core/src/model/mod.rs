//! Domain model for assignment tracking.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep date handling behind a single value type with one text form.
//!
//! # Invariants
//! - Every record is identified by a stable `AssignmentId`.
//! - Dates exist only in the canonical `DD-MM-YYYY` form past this layer.

pub mod assignment;
pub mod due_date;
