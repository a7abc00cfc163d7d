//! Pure reshaping of flat records into render-ready views.

use super::{ChartDataPoint, DeviceStats, Task, TaskStatus, TrafficSource};

/// Tasks split into the three known board columns.
///
/// Borrows from the input slice; relative order within each column matches
/// the input order. Tasks with an unrecognized status land in no column.
#[derive(Debug, Default)]
pub struct TaskColumns<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> TaskColumns<'a> {
    /// Column order as rendered on the board.
    pub const ORDER: [TaskStatus; 3] =
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// The column for a known status; `Unknown` maps to an empty slice.
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
            TaskStatus::Unknown => &[],
        }
    }

    /// Total number of tasks placed on the board.
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group tasks by status, preserving input order within each column.
pub fn group_tasks_by_status(tasks: &[Task]) -> TaskColumns<'_> {
    let mut columns = TaskColumns::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => columns.todo.push(task),
            TaskStatus::InProgress => columns.in_progress.push(task),
            TaskStatus::Done => columns.done.push(task),
            TaskStatus::Unknown => {}
        }
    }
    columns
}

/// Sum of visits across all traffic sources.
pub fn traffic_total(sources: &[TrafficSource]) -> f64 {
    sources.iter().map(|s| s.value).sum()
}

/// Sum of users across all device classes.
pub fn device_total(devices: &[DeviceStats]) -> u64 {
    devices.iter().map(|d| d.users).sum()
}

/// Largest value in a chart series, for scaling bars. Empty series scale
/// against zero.
pub fn chart_max(points: &[ChartDataPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// Avatar initials from a display name ("John Doe" -> "JD").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            status,
            priority: TaskPriority::Medium,
            assignee: None,
            due_date: None,
        }
    }

    #[test]
    fn test_grouping_preserves_input_order() {
        let tasks = vec![
            task("a", TaskStatus::Done),
            task("b", TaskStatus::Todo),
            task("c", TaskStatus::InProgress),
            task("d", TaskStatus::Todo),
            task("e", TaskStatus::Todo),
        ];
        let columns = group_tasks_by_status(&tasks);

        let todo_ids: Vec<&str> = columns.todo.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(todo_ids, vec!["b", "d", "e"]);
        assert_eq!(columns.in_progress.len(), 1);
        assert_eq!(columns.done.len(), 1);
    }

    #[test]
    fn test_grouping_missing_status_yields_empty_column() {
        let tasks = vec![task("a", TaskStatus::Todo)];
        let columns = group_tasks_by_status(&tasks);
        assert!(columns.column(TaskStatus::Done).is_empty());
        assert!(columns.column(TaskStatus::InProgress).is_empty());
    }

    #[test]
    fn test_grouping_excludes_unknown_status() {
        let tasks = vec![
            task("a", TaskStatus::Unknown),
            task("b", TaskStatus::Todo),
        ];
        let columns = group_tasks_by_status(&tasks);
        assert_eq!(columns.len(), 1);
        for status in TaskColumns::ORDER {
            assert!(columns
                .column(status)
                .iter()
                .all(|t| t.status != TaskStatus::Unknown));
        }
    }

    #[test]
    fn test_grouping_empty_input() {
        let columns = group_tasks_by_status(&[]);
        assert!(columns.is_empty());
    }

    #[test]
    fn test_traffic_total() {
        let sources = vec![
            TrafficSource {
                source: "Direct".to_string(),
                value: 100.0,
                percentage: 25.0,
            },
            TrafficSource {
                source: "Search".to_string(),
                value: 300.0,
                percentage: 75.0,
            },
        ];
        assert_eq!(traffic_total(&sources), 400.0);
    }

    #[test]
    fn test_chart_max_of_empty_series() {
        assert_eq!(chart_max(&[]), 0.0);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Sarah"), "S");
        assert_eq!(initials(""), "");
        assert_eq!(initials("mike  van  der berg"), "MVDB");
    }
}
