//! Performance benchmarks for formatting, grouping and a full dashboard
//! draw.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulse::app::App;
use pulse::format::{format_number, format_relative_time};
use pulse::models::groupers::group_tasks_by_status;
use pulse::models::{Task, TaskPriority, TaskStatus};
use pulse::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Generate a synthetic task list of the given size.
fn generate_tasks(count: usize) -> Vec<Task> {
    let statuses = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];
    (0..count)
        .map(|index| Task {
            id: index.to_string(),
            title: format!("Task {}", index),
            description: "Synthetic workload".to_string(),
            status: statuses[index % statuses.len()],
            priority: TaskPriority::Medium,
            assignee: Some("Jane Smith".to_string()),
            due_date: None,
        })
        .collect()
}

fn bench_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");
    for value in [999.0, 45_000.0, 2_500_000.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(value as u64),
            &value,
            |b, value| b.iter(|| format_number(black_box(*value))),
        );
    }
    group.finish();
}

fn bench_relative_time(c: &mut Criterion) {
    let now = chrono::Utc::now();
    let then = now - chrono::Duration::minutes(42);
    c.bench_function("format_relative_time", |b| {
        b.iter(|| format_relative_time(black_box(&then), black_box(&now)))
    });
}

fn bench_group_tasks(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_tasks_by_status");
    for size in [4usize, 64, 512] {
        let tasks = generate_tasks(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| {
                let columns = group_tasks_by_status(black_box(tasks));
                black_box(columns.len())
            });
        });
    }
    group.finish();
}

fn bench_dashboard_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_draw");
    for (width, height) in [(80u16, 24u16), (120, 40), (200, 50)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, (width, height)| {
                let backend = TestBackend::new(*width, *height);
                let mut terminal = Terminal::new(backend).unwrap();
                let mut app = App::new_demo();
                app.navigate_to_admin();
                b.iter(|| {
                    app.mark_dirty();
                    terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_format_number,
    bench_relative_time,
    bench_group_tasks,
    bench_dashboard_draw
);
criterion_main!(benches);
