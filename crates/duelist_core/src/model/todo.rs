//! Todo record model.
//!
//! # Responsibility
//! - Mirror the backend's camelCase todo JSON (`id`, `title`, `dueDate`, `completed`).
//! - Collapse the `0`/`1` and `false`/`true` completion encodings into one `bool`.
//!
//! # Invariants
//! - `completed` is always a plain `bool` after deserialization.
//! - `due_date` keeps the raw wire text; parsing happens at classification time.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque stable identifier for a todo, unique within one collection.
///
/// The backend issues integers, but string IDs are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Snapshot of one todo as handed over by the CRUD layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub id: TodoId,
    #[serde(default)]
    pub title: String,
    /// Calendar date text (`YYYY-MM-DD`), or `None` when no due date is set.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Serialized as a boolean; `0`/`1` are accepted on input.
    #[serde(default, deserialize_with = "deserialize_completed")]
    pub completed: bool,
}

impl TodoRecord {
    /// Creates an incomplete todo without a due date.
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            completed: false,
        }
    }

    /// Returns this record with `due_date` set to the given raw text.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Returns this record with the given completion state.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the trimmed due date text, treating blank strings as absent.
    pub fn due_date_text(&self) -> Option<&str> {
        self.due_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

fn deserialize_completed<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Flag(bool),
        Number(i64),
    }

    match Option::<Encoded>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Encoded::Flag(value)) => Ok(value),
        Some(Encoded::Number(0)) => Ok(false),
        Some(Encoded::Number(1)) => Ok(true),
        Some(Encoded::Number(other)) => Err(D::Error::custom(format!(
            "completed must be 0, 1, true or false, got {other}"
        ))),
    }
}
