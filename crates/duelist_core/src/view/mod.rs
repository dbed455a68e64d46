//! List view model rendered by the UI layer.
//!
//! # Responsibility
//! - Turn a todo snapshot plus `now` into per-card state and an overdue summary.
//! - Tie a mounted list to one refresh driver for its whole lifetime.
//!
//! # Invariants
//! - Every render recomputes classification; nothing is cached across renders.
//! - The summary is absent when no todo is overdue.

mod card;
mod list;
mod summary;

pub use card::{TodoCard, CARD_CLASS, COMPLETED_CLASS, OVERDUE_CLASS, OVERDUE_GLYPH};
pub use list::{render_list, ListRender, TodoListView, EMPTY_LIST_MESSAGE};
pub use summary::{count_overdue, summarize, OverdueSummary};
