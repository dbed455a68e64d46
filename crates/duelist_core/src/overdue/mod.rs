//! Overdue classification.
//!
//! # Responsibility
//! - Classify a todo snapshot as overdue for an explicit `now`.
//! - Expose day-boundary helpers used by refresh scheduling.
//!
//! # Invariants
//! - Classification is pure apart from a warning log on unparseable dates.
//! - A todo stays not-overdue for the whole of its due date in `now`'s zone.

mod predicate;

pub use predicate::{
    end_of_day, is_overdue, next_midnight, next_overdue_transition, parse_due_date,
    DateParseError,
};
