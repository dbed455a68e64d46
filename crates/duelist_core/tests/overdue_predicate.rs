use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use duelist_core::{end_of_day, is_overdue, next_overdue_transition, TodoRecord};
use serde_json::json;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn todo(value: serde_json::Value) -> TodoRecord {
    serde_json::from_value(value).expect("fixture should decode")
}

#[test]
fn no_due_date_is_never_overdue() {
    let now = at(2024, 3, 11, 9, 0, 0);
    for completed in [json!(0), json!(1), json!(true), json!(false)] {
        assert!(!is_overdue(
            &todo(json!({"id": 1, "title": "t", "dueDate": null, "completed": completed})),
            &now
        ));
        assert!(!is_overdue(
            &todo(json!({"id": 1, "title": "t", "completed": completed})),
            &now
        ));
        assert!(!is_overdue(
            &todo(json!({"id": 1, "title": "t", "dueDate": "", "completed": completed})),
            &now
        ));
    }
}

#[test]
fn completed_todo_is_not_overdue_in_either_encoding() {
    let now = at(2024, 3, 11, 9, 0, 0);
    for completed in [json!(1), json!(true)] {
        let record = todo(json!({"id": 1, "dueDate": "2024-03-10", "completed": completed}));
        assert!(!is_overdue(&record, &now));
    }
}

#[test]
fn due_yesterday_and_incomplete_is_overdue() {
    let now = at(2024, 3, 11, 0, 0, 1);
    for completed in [json!(0), json!(false)] {
        let record = todo(json!({"id": 1, "dueDate": "2024-03-10", "completed": completed}));
        assert!(is_overdue(&record, &now));
    }
    let week_ago = TodoRecord::new(2, "old").with_due_date("2024-03-04");
    assert!(is_overdue(&week_ago, &now));
}

#[test]
fn due_today_is_not_overdue_at_any_time_of_day() {
    let record = TodoRecord::new(1, "today").with_due_date("2024-03-10");
    for hour in 0..24 {
        assert!(!is_overdue(&record, &at(2024, 3, 10, hour, 0, 0)), "hour {hour}");
    }
    assert!(!is_overdue(&record, &at(2024, 3, 10, 23, 59, 59)));
}

#[test]
fn due_tomorrow_is_not_overdue() {
    let record = TodoRecord::new(1, "tomorrow").with_due_date("2024-03-12");
    assert!(!is_overdue(&record, &at(2024, 3, 11, 23, 0, 0)));
}

#[test]
fn boundary_is_strictly_after_last_millisecond() {
    let record = TodoRecord::new(1, "edge").with_due_date("2024-03-10");
    let last_ms = at(2024, 3, 10, 23, 59, 59) + TimeDelta::milliseconds(999);
    assert!(!is_overdue(&record, &last_ms));
    assert!(is_overdue(&record, &at(2024, 3, 11, 0, 0, 0)));
}

#[test]
fn boundary_follows_the_time_zone_of_now() {
    let record = TodoRecord::new(1, "tz").with_due_date("2024-03-10");
    let berlin_winter = FixedOffset::east_opt(3600).unwrap();
    // 23:30 UTC on the 10th is already 00:30 on the 11th at UTC+1.
    let now = at(2024, 3, 10, 23, 30, 0).with_timezone(&berlin_winter);
    assert!(is_overdue(&record, &now));
    assert!(!is_overdue(&record, &at(2024, 3, 10, 23, 30, 0)));
}

#[test]
fn malformed_due_date_degrades_to_not_overdue() {
    let now = at(2024, 3, 11, 9, 0, 0);
    for raw in ["not-a-valid-date-string", "2024-13-01", "10/03/2024"] {
        let record = TodoRecord::new(1, "bad").with_due_date(raw);
        assert!(!is_overdue(&record, &now), "input {raw}");
    }
}

#[test]
fn rfc3339_due_date_uses_its_calendar_date() {
    let record = TodoRecord::new(1, "stamp").with_due_date("2024-03-10T08:30:00Z");
    assert!(!is_overdue(&record, &at(2024, 3, 10, 23, 0, 0)));
    assert!(is_overdue(&record, &at(2024, 3, 11, 0, 0, 0)));
}

#[test]
fn classification_is_idempotent_and_does_not_mutate() {
    let record = TodoRecord::new(1, "same").with_due_date("2024-03-10");
    let before = record.clone();
    let now = at(2024, 3, 12, 0, 0, 0);
    let first = is_overdue(&record, &now);
    let second = is_overdue(&record, &now);
    assert_eq!(first, second);
    assert_eq!(record, before);
}

#[test]
fn next_transition_is_earliest_pending_midnight() {
    let now = at(2024, 3, 10, 12, 0, 0);
    let todos = vec![
        TodoRecord::new(1, "later").with_due_date("2024-03-15"),
        TodoRecord::new(2, "today").with_due_date("2024-03-10"),
        TodoRecord::new(3, "past").with_due_date("2024-03-01"),
        TodoRecord::new(4, "done")
            .with_due_date("2024-03-10")
            .with_completed(true),
        TodoRecord::new(5, "bad").with_due_date("soon"),
        TodoRecord::new(6, "undated"),
    ];
    assert_eq!(
        next_overdue_transition(&todos, &now),
        Some(at(2024, 3, 11, 0, 0, 0))
    );

    let settled = vec![TodoRecord::new(3, "past").with_due_date("2024-03-01")];
    assert_eq!(next_overdue_transition(&settled, &now), None);
}

#[test]
fn end_of_day_matches_boundary_used_by_predicate() {
    let boundary = end_of_day(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(), &Utc);
    let record = TodoRecord::new(1, "edge").with_due_date("2024-03-10");
    assert!(!is_overdue(&record, &boundary));
    assert!(is_overdue(&record, &(boundary + TimeDelta::nanoseconds(1))));
}
