//! Read-only todo snapshot model.
//!
//! # Responsibility
//! - Define the todo record shape consumed by overdue classification.
//! - Normalize wire encodings at deserialization time.
//!
//! # Invariants
//! - Records are owned and mutated by the CRUD layer; core only reads them.
//! - Derived state (overdue) is never stored on the record.

pub mod todo;
