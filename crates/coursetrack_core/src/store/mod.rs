//! Record store and its operations.
//!
//! # Responsibility
//! - Hold the in-memory state behind one tracker window.
//! - Keep mutation rules (validation, one-way completion) in one place.
//!
//! # Invariants
//! - Mutations address records by stable ID, never by display position.

pub mod assignment_store;
