use chrono::{Local, TimeZone};
use duelist_core::{AnchoredClock, RefreshConfig, TodoId, TodoListView, TodoRecord};
use std::sync::Arc;

fn mount_before_midnight(todos: Vec<TodoRecord>) -> TodoListView {
    let anchor = Local
        .with_ymd_and_hms(2024, 5, 14, 23, 59, 30)
        .earliest()
        .unwrap();
    TodoListView::mount_with_clock(
        todos,
        &RefreshConfig::fixed(60),
        Arc::new(AnchoredClock::new(anchor)),
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn todo_flips_to_overdue_after_tick_crosses_midnight() {
    let mut view = mount_before_midnight(vec![
        TodoRecord::new(1, "report").with_due_date("2024-05-14"),
        TodoRecord::new(2, "later").with_due_date("2024-05-20"),
    ]);

    let before = view.render();
    assert_eq!(before.summary(), None);
    assert!(before.cards().iter().all(|card| !card.overdue));

    let after = view.next_render().await.expect("tick while mounted");
    assert_eq!(after.summary().map(|s| s.label()).as_deref(), Some("1 overdue item"));
    assert!(after.cards()[0].overdue);
    assert!(!after.cards()[1].overdue);
}

#[tokio::test(start_paused = true)]
async fn data_changes_are_reflected_without_waiting_for_tick() {
    let mut view = mount_before_midnight(vec![
        TodoRecord::new(1, "a").with_due_date("2024-05-01"),
        TodoRecord::new(2, "b").with_due_date("2024-05-02"),
    ]);
    assert_eq!(view.overdue_summary().map(|s| s.count()), Some(2));

    assert!(view.toggle(&TodoId::from(1)));
    assert_eq!(view.overdue_summary().map(|s| s.count()), Some(1));

    view.upsert(TodoRecord::new(2, "b").with_due_date("2024-06-01"));
    assert_eq!(view.overdue_summary(), None);

    view.upsert(TodoRecord::new(3, "c").with_due_date("2024-05-03"));
    assert_eq!(view.todos().len(), 3);
    assert_eq!(view.overdue_summary().map(|s| s.count()), Some(1));

    assert!(view.remove(&TodoId::from(3)).is_some());
    assert!(!view.toggle(&TodoId::from(3)));
    assert_eq!(view.overdue_summary(), None);
}

#[tokio::test(start_paused = true)]
async fn rerender_is_idempotent_between_ticks() {
    let view = mount_before_midnight(vec![TodoRecord::new(1, "a").with_due_date("2024-05-01")]);
    assert_eq!(view.render(), view.render());
}

#[tokio::test(start_paused = true)]
async fn remount_creates_independent_timer() {
    let first = mount_before_midnight(vec![]);
    first.unmount();

    let mut second = mount_before_midnight(vec![TodoRecord::new(1, "x")]);
    assert!(second.next_render().await.is_some());
}
