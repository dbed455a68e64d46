//! Overdue predicate and calendar boundary math.

use crate::model::todo::TodoRecord;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raised when a present `dueDate` is not a recognizable calendar date.
///
/// Never leaves [`is_overdue`]; callers of [`parse_due_date`] see it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    input_len: usize,
}

impl DateParseError {
    fn new(input: &str) -> Self {
        Self {
            input_len: input.chars().count(),
        }
    }
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "due date is not a calendar date (expected YYYY-MM-DD or RFC 3339, got {} chars)",
            self.input_len
        )
    }
}

impl Error for DateParseError {}

/// Parses due-date text into a calendar date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date is taken in `tz`.
/// Surrounding whitespace is ignored.
///
/// # Errors
/// - Returns [`DateParseError`] when neither form matches.
pub fn parse_due_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.with_timezone(tz).date_naive())
        .map_err(|_| DateParseError::new(trimmed))
}

/// Returns the last instant still "on" `date` in `tz`: 23:59:59.999 local time.
///
/// An ambiguous local time (DST fold) resolves to the later instant. A local
/// time skipped by a DST gap is mapped using the zone's offset at that wall time.
pub fn end_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let naive = date.and_time(last_millisecond());
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(_, latest) => latest,
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&naive);
            DateTime::from_naive_utc_and_offset(naive - offset.fix(), offset)
        }
    }
}

/// Returns the first instant of the day after `now`'s local date.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    end_of_day(now.date_naive(), &now.timezone()) + TimeDelta::milliseconds(1)
}

/// Classifies one todo as overdue at `now`.
///
/// Rules, in order:
/// 1. no due date -> `false`
/// 2. completed -> `false`
/// 3. unparseable due date -> `false` (logged at warn level)
/// 4. otherwise `now > end_of_day(due_date)` in `now`'s time zone
pub fn is_overdue<Tz: TimeZone>(todo: &TodoRecord, now: &DateTime<Tz>) -> bool {
    let Some(raw) = todo.due_date_text() else {
        return false;
    };
    if todo.completed {
        return false;
    }

    let tz = now.timezone();
    match parse_due_date(raw, &tz) {
        Ok(date) => *now > end_of_day(date, &tz),
        Err(err) => {
            warn!(
                "event=due_date_invalid module=overdue status=degraded todo_id={} error={}",
                todo.id, err
            );
            false
        }
    }
}

/// Returns the earliest instant after `now` at which one of `todos` flips to overdue.
///
/// Only incomplete todos with a parseable due date are considered. Returns
/// `None` when nothing is pending a transition.
pub fn next_overdue_transition<'a, Tz, I>(todos: I, now: &DateTime<Tz>) -> Option<DateTime<Tz>>
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a TodoRecord>,
{
    let tz = now.timezone();
    todos
        .into_iter()
        .filter(|todo| !todo.completed)
        .filter_map(|todo| todo.due_date_text())
        .filter_map(|raw| parse_due_date(raw, &tz).ok())
        .map(|date| end_of_day(date, &tz) + TimeDelta::milliseconds(1))
        .filter(|transition| transition > now)
        .min()
}

fn last_millisecond() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}
