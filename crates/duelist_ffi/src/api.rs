//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose overdue classification and list summaries to the UI via FRB.
//! - Accept todo snapshots as backend JSON so the UI can pass them through.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - `now` is always supplied by the caller as epoch milliseconds.

use chrono::{DateTime, Local, TimeZone};
use duelist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, is_overdue,
    ping as ping_inner, render_list, ListRender, TodoRecord,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Overdue verdict for one todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueVerdict {
    /// `false` when the input could not be decoded.
    pub ok: bool,
    pub overdue: bool,
    pub message: String,
}

/// Card state for one rendered todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub todo_id: String,
    pub class_name: String,
    pub glyph: Option<String>,
}

/// List render envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummaryResponse {
    pub ok: bool,
    pub overdue_count: u32,
    /// `None` when nothing is overdue (summary hidden).
    pub summary_text: Option<String>,
    /// Empty-state message when the list has no todos.
    pub empty_message: Option<String>,
    pub cards: Vec<CardState>,
    pub message: String,
}

impl ListSummaryResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            overdue_count: 0,
            summary_text: None,
            empty_message: None,
            cards: Vec::new(),
            message: message.into(),
        }
    }
}

/// Classifies one todo JSON object at `now_epoch_ms` (local time zone).
///
/// # FFI contract
/// - Sync call, pure apart from diagnostics.
/// - Never panics; malformed input yields `ok = false, overdue = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_is_overdue(todo_json: String, now_epoch_ms: i64) -> OverdueVerdict {
    let now = match local_instant(now_epoch_ms) {
        Ok(now) => now,
        Err(message) => {
            return OverdueVerdict {
                ok: false,
                overdue: false,
                message,
            }
        }
    };
    match serde_json::from_str::<TodoRecord>(&todo_json) {
        Ok(todo) => OverdueVerdict {
            ok: true,
            overdue: is_overdue(&todo, &now),
            message: String::new(),
        },
        Err(err) => {
            warn!("event=ffi_decode module=ffi status=error kind=todo error={err}");
            OverdueVerdict {
                ok: false,
                overdue: false,
                message: format!("todo_is_overdue failed: {err}"),
            }
        }
    }
}

/// Renders a JSON array of todos at `now_epoch_ms` (local time zone).
///
/// # FFI contract
/// - Sync call, pure apart from diagnostics.
/// - Never panics; malformed input yields `ok = false` and no cards.
#[flutter_rust_bridge::frb(sync)]
pub fn overdue_summary(todos_json: String, now_epoch_ms: i64) -> ListSummaryResponse {
    let now = match local_instant(now_epoch_ms) {
        Ok(now) => now,
        Err(message) => return ListSummaryResponse::failure(message),
    };
    let todos = match serde_json::from_str::<Vec<TodoRecord>>(&todos_json) {
        Ok(todos) => todos,
        Err(err) => {
            warn!("event=ffi_decode module=ffi status=error kind=todo_list error={err}");
            return ListSummaryResponse::failure(format!("overdue_summary failed: {err}"));
        }
    };

    let render = render_list(&todos, &now);
    let summary = render.summary();
    let cards = render
        .cards()
        .iter()
        .map(|card| CardState {
            todo_id: card.id.to_string(),
            class_name: card.class_name(),
            glyph: card.glyph().map(str::to_string),
        })
        .collect::<Vec<_>>();
    let empty_message = match &render {
        ListRender::Empty { message } => Some((*message).to_string()),
        ListRender::Items { .. } => None,
    };

    ListSummaryResponse {
        ok: true,
        overdue_count: summary.map_or(0, |summary| summary.count() as u32),
        summary_text: summary.map(|summary| summary.to_string()),
        empty_message,
        message: format!("Rendered {} todo(s).", cards.len()),
        cards,
    }
}

fn local_instant(epoch_ms: i64) -> Result<DateTime<Local>, String> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .ok_or_else(|| format!("now_epoch_ms out of range: {epoch_ms}"))
}
