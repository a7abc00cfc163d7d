//! Data reshaping tests for the widget groupers.

use pulse::models::groupers::{
    chart_max, device_total, group_tasks_by_status, initials, traffic_total, TaskColumns,
};
use pulse::models::{Task, TaskPriority, TaskStatus};

fn task(id: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        description: "".to_string(),
        status,
        priority,
        assignee: None,
        due_date: None,
    }
}

#[test]
fn test_column_order_matches_board_layout() {
    assert_eq!(
        TaskColumns::ORDER,
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    );
}

#[test]
fn test_relative_order_is_stable_for_any_interleaving() {
    // Interleave statuses aggressively; each column must read in input
    // order regardless
    let statuses = [
        TaskStatus::Done,
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Todo,
        TaskStatus::Done,
        TaskStatus::Todo,
        TaskStatus::InProgress,
    ];
    let tasks: Vec<Task> = statuses
        .iter()
        .enumerate()
        .map(|(index, status)| task(&index.to_string(), *status, TaskPriority::Low))
        .collect();

    let columns = group_tasks_by_status(&tasks);
    let ids = |tasks: &[&Task]| {
        tasks
            .iter()
            .map(|t| t.id.parse::<usize>().unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(&columns.todo), vec![1, 3, 5]);
    assert_eq!(ids(&columns.in_progress), vec![2, 6]);
    assert_eq!(ids(&columns.done), vec![0, 4]);
}

#[test]
fn test_unknown_status_tasks_are_excluded_without_error() {
    // A task whose status came from newer data deserializes as Unknown
    let json = r#"{
        "id": "x",
        "title": "Mystery",
        "description": "",
        "status": "blocked",
        "priority": "low"
    }"#;
    let stray: Task = serde_json::from_str(json).unwrap();
    assert_eq!(stray.status, TaskStatus::Unknown);

    let tasks = vec![stray, task("a", TaskStatus::Todo, TaskPriority::High)];
    let columns = group_tasks_by_status(&tasks);

    assert_eq!(columns.len(), 1);
    assert_eq!(columns.todo[0].id, "a");
    assert!(columns.in_progress.is_empty());
    assert!(columns.done.is_empty());
}

#[test]
fn test_empty_input_yields_empty_board() {
    let columns = group_tasks_by_status(&[]);
    assert!(columns.is_empty());
    for status in TaskColumns::ORDER {
        assert!(columns.column(status).is_empty());
    }
}

#[test]
fn test_demo_dataset_board_is_consistent() {
    let data = pulse::data::demo();
    let columns = group_tasks_by_status(&data.tasks);
    assert_eq!(columns.len(), data.tasks.len());
    assert_eq!(columns.todo.len(), 2);
    assert_eq!(columns.in_progress.len(), 1);
    assert_eq!(columns.done.len(), 1);
}

#[test]
fn test_totals_and_bounds() {
    let data = pulse::data::demo();
    assert_eq!(traffic_total(&data.traffic_sources), 10_000.0);
    assert_eq!(device_total(&data.device_stats), 10_000);
    assert_eq!(chart_max(&data.revenue), 7000.0);
}

#[test]
fn test_initials_for_avatars() {
    assert_eq!(initials("John Doe"), "JD");
    assert_eq!(initials("Sarah Williams"), "SW");
    assert_eq!(initials("Cher"), "C");
}
