//! Mounted todo list and its render output.

use crate::config::{ConfigError, RefreshConfig};
use crate::model::todo::{TodoId, TodoRecord};
use crate::refresh::{Clock, RefreshDriver, SystemClock};
use crate::view::card::TodoCard;
use crate::view::summary::{summarize, OverdueSummary};
use chrono::{DateTime, Local, TimeZone};
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

pub const EMPTY_LIST_MESSAGE: &str = "No todos yet. Add one to get started! 👻";

/// Output of one list render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRender {
    Empty {
        message: &'static str,
    },
    Items {
        /// Epoch milliseconds of the `now` this render was computed for.
        rendered_at_ms: i64,
        summary: Option<OverdueSummary>,
        cards: Vec<TodoCard>,
    },
}

impl ListRender {
    pub fn summary(&self) -> Option<OverdueSummary> {
        match self {
            Self::Empty { .. } => None,
            Self::Items { summary, .. } => *summary,
        }
    }

    pub fn cards(&self) -> &[TodoCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Items { cards, .. } => cards,
        }
    }
}

/// Renders `todos` as of `now`.
pub fn render_list<Tz: TimeZone>(todos: &[TodoRecord], now: &DateTime<Tz>) -> ListRender {
    if todos.is_empty() {
        return ListRender::Empty {
            message: EMPTY_LIST_MESSAGE,
        };
    }
    let cards: Vec<TodoCard> = todos
        .iter()
        .map(|todo| TodoCard::classify(todo, now))
        .collect();
    ListRender::Items {
        rendered_at_ms: now.timestamp_millis(),
        summary: OverdueSummary::from_count(cards.iter().filter(|card| card.overdue).count()),
        cards,
    }
}

/// A todo list view bound to its own refresh driver.
///
/// Mutating methods mirror results the CRUD layer already applied; they only
/// replace the local snapshot.
pub struct TodoListView {
    todos: Vec<TodoRecord>,
    now_rx: watch::Receiver<DateTime<Local>>,
    driver: RefreshDriver,
}

impl TodoListView {
    /// Mounts the view and starts its refresh timer on the system clock.
    pub fn mount(todos: Vec<TodoRecord>, config: &RefreshConfig) -> Result<Self, ConfigError> {
        Self::mount_with_clock(todos, config, Arc::new(SystemClock))
    }

    pub fn mount_with_clock(
        todos: Vec<TodoRecord>,
        config: &RefreshConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let driver = RefreshDriver::start_with_clock(config, clock)?;
        Ok(Self {
            todos,
            now_rx: driver.subscribe(),
            driver,
        })
    }

    pub fn todos(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn current_time(&self) -> DateTime<Local> {
        *self.now_rx.borrow()
    }

    /// Replaces the whole snapshot.
    pub fn replace_todos(&mut self, todos: Vec<TodoRecord>) {
        self.todos = todos;
    }

    /// Replaces the todo with the same ID, or appends it.
    pub fn upsert(&mut self, todo: TodoRecord) {
        match self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(existing) => *existing = todo,
            None => self.todos.push(todo),
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<TodoRecord> {
        let index = self.todos.iter().position(|todo| &todo.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Flips `completed` on the matching todo. Returns `false` when not found.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| &todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Recomputes the render for the latest published time.
    pub fn render(&self) -> ListRender {
        render_list(&self.todos, &self.current_time())
    }

    pub fn overdue_summary(&self) -> Option<OverdueSummary> {
        summarize(&self.todos, &self.current_time())
    }

    /// Waits for the next refresh tick and re-renders.
    ///
    /// Returns `None` once the refresh timer is gone.
    pub async fn next_render(&mut self) -> Option<ListRender> {
        self.now_rx.changed().await.ok()?;
        let render = self.render();
        debug!(
            "event=list_rerender module=view status=ok todos={} overdue={}",
            self.todos.len(),
            render.summary().map_or(0, |summary| summary.count())
        );
        Some(render)
    }

    /// Tears the view down; its timer is cancelled before this returns.
    pub fn unmount(self) {
        self.driver.stop();
    }
}
