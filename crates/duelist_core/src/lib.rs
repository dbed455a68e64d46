//! Core logic for the duelist todo list.
//! Overdue classification, refresh timing and the list view model live here;
//! rendering and CRUD stay in the UI layer.

pub mod config;
pub mod logging;
pub mod model;
pub mod overdue;
pub mod refresh;
pub mod view;

pub use config::{
    ConfigError, RefreshConfig, RefreshMode, DEFAULT_REFRESH_INTERVAL_SECS,
    MAX_REFRESH_INTERVAL_SECS,
};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::todo::{TodoId, TodoRecord};
pub use overdue::{
    end_of_day, is_overdue, next_midnight, next_overdue_transition, parse_due_date,
    DateParseError,
};
pub use refresh::{AnchoredClock, Clock, RefreshDriver, SystemClock};
pub use view::{
    count_overdue, render_list, summarize, ListRender, OverdueSummary, TodoCard, TodoListView,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
