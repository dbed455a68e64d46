//! Per-todo card state.

use crate::model::todo::{TodoId, TodoRecord};
use crate::overdue::is_overdue;
use chrono::{DateTime, TimeZone};

pub const CARD_CLASS: &str = "todo-card";
pub const COMPLETED_CLASS: &str = "completed";
pub const OVERDUE_CLASS: &str = "overdue";
pub const OVERDUE_GLYPH: &str = "⚠️";

/// Render-ready state of one todo at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoCard {
    pub id: TodoId,
    pub title: String,
    pub due_date: Option<String>,
    pub completed: bool,
    pub overdue: bool,
}

impl TodoCard {
    pub fn classify<Tz: TimeZone>(todo: &TodoRecord, now: &DateTime<Tz>) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            due_date: todo.due_date_text().map(str::to_string),
            completed: todo.completed,
            overdue: is_overdue(todo, now),
        }
    }

    /// State classes in render order, e.g. `["todo-card", "overdue"]`.
    pub fn state_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![CARD_CLASS];
        if self.completed {
            classes.push(COMPLETED_CLASS);
        }
        if self.overdue {
            classes.push(OVERDUE_CLASS);
        }
        classes
    }

    /// Space-joined form of [`Self::state_classes`].
    pub fn class_name(&self) -> String {
        self.state_classes().join(" ")
    }

    /// Warning glyph shown next to overdue cards.
    pub fn glyph(&self) -> Option<&'static str> {
        self.overdue.then_some(OVERDUE_GLYPH)
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoCard, OVERDUE_GLYPH};
    use crate::model::todo::TodoRecord;
    use chrono::{TimeZone, Utc};

    #[test]
    fn overdue_card_carries_class_and_glyph() {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();
        let card = TodoCard::classify(&TodoRecord::new(1, "late").with_due_date("2024-03-10"), &now);
        assert!(card.overdue);
        assert_eq!(card.class_name(), "todo-card overdue");
        assert_eq!(card.glyph(), Some(OVERDUE_GLYPH));
    }

    #[test]
    fn completed_past_due_card_has_no_overdue_indicator() {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();
        let todo = TodoRecord::new(1, "done")
            .with_due_date("2024-03-10")
            .with_completed(true);
        let card = TodoCard::classify(&todo, &now);
        assert_eq!(card.state_classes(), vec!["todo-card", "completed"]);
        assert_eq!(card.glyph(), None);
    }

    #[test]
    fn undated_card_has_no_indicator() {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap();
        let card = TodoCard::classify(&TodoRecord::new(2, "someday"), &now);
        assert_eq!(card.class_name(), "todo-card");
        assert_eq!(card.glyph(), None);
    }
}
