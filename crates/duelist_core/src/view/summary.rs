//! Overdue count aggregation.

use crate::model::todo::TodoRecord;
use crate::overdue::is_overdue;
use crate::view::card::OVERDUE_GLYPH;
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Formatter};

/// Non-empty overdue count shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverdueSummary {
    count: usize,
}

impl OverdueSummary {
    /// Returns `None` for a zero count; the summary is hidden then.
    pub fn from_count(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `"<N> overdue item"` or `"<N> overdue items"`.
    pub fn label(&self) -> String {
        let noun = if self.count == 1 { "item" } else { "items" };
        format!("{} overdue {noun}", self.count)
    }
}

impl Display for OverdueSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{OVERDUE_GLYPH} {}", self.label())
    }
}

pub fn count_overdue<'a, Tz, I>(todos: I, now: &DateTime<Tz>) -> usize
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a TodoRecord>,
{
    todos.into_iter().filter(|todo| is_overdue(todo, now)).count()
}

pub fn summarize<'a, Tz, I>(todos: I, now: &DateTime<Tz>) -> Option<OverdueSummary>
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a TodoRecord>,
{
    OverdueSummary::from_count(count_overdue(todos, now))
}
