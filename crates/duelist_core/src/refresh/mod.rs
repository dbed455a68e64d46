//! Periodic refresh of the "current time" used for overdue classification.
//!
//! # Responsibility
//! - Republish `now` on a cadence so classification changes without data changes.
//! - Own the only timer in core and release it deterministically.
//!
//! # Invariants
//! - Exactly one timer task per [`RefreshDriver`].
//! - Stopping or dropping a driver aborts its task; no tick is published after.
//! - Todo records are never touched by the driver.

mod clock;
mod driver;

pub use clock::{AnchoredClock, Clock, SystemClock};
pub use driver::RefreshDriver;
