//! Mock-backed data source for the dashboard.
//!
//! Widgets are fed a [`Dataset`]: a bundle of already-shaped display
//! records. The built-in demo dataset mirrors what a CMS backend would
//! return; `PULSE_DATA` can point at a JSON file with the same shape to
//! demo against different numbers. The UI performs no validation of its
//! own beyond what serde enforces.

use std::path::Path;

use chrono::{Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    ActivityItem, ActivityKind, CalendarEvent, ChartDataPoint, ContentItem, ContentStatus,
    DeviceStats, HealthStatus, MediaFile, ServerMetric, StatCard, Task, TaskPriority, TaskStatus,
    TrafficSource, Trend, UserAccount, UserRole,
};

/// Errors raised while loading a dataset from disk.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the dashboard renders, in one bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub stats: Vec<StatCard>,
    pub revenue: Vec<ChartDataPoint>,
    pub traffic_sources: Vec<TrafficSource>,
    pub activities: Vec<ActivityItem>,
    pub content: Vec<ContentItem>,
    pub device_stats: Vec<DeviceStats>,
    pub server_metrics: Vec<ServerMetric>,
    pub tasks: Vec<Task>,
    pub calendar_events: Vec<CalendarEvent>,
    pub users: Vec<UserAccount>,
    pub media: Vec<MediaFile>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// The built-in demo dataset.
///
/// Activity timestamps and task due dates are expressed relative to the
/// moment the dataset is built so relative-time strings look alive.
pub fn demo() -> Dataset {
    let now = Utc::now();
    // A bad date literal falls back to the epoch
    let date = |y, m, d| {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .unwrap_or_default()
    };

    Dataset {
        stats: vec![
            stat("1", "Total Revenue", "$45,231", 20.1, Trend::Up),
            stat("2", "Active Users", "2,345", 12.5, Trend::Up),
            stat("3", "Total Content", "1,234", 8.2, Trend::Up),
            stat("4", "Conversion Rate", "3.24%", -2.3, Trend::Down),
        ],
        revenue: vec![
            point("Jan", 4000.0),
            point("Feb", 3000.0),
            point("Mar", 5000.0),
            point("Apr", 4500.0),
            point("May", 6000.0),
            point("Jun", 5500.0),
            point("Jul", 7000.0),
        ],
        traffic_sources: vec![
            traffic("Organic Search", 4250.0, 42.5),
            traffic("Direct", 2850.0, 28.5),
            traffic("Social Media", 1900.0, 19.0),
            traffic("Referral", 1000.0, 10.0),
        ],
        activities: vec![
            activity(
                "1",
                "John Doe",
                "created new article 'Getting Started with Pulse'",
                now - Duration::minutes(5),
                ActivityKind::Create,
            ),
            activity(
                "2",
                "Jane Smith",
                "updated user profile",
                now - Duration::minutes(15),
                ActivityKind::Update,
            ),
            activity(
                "3",
                "Mike Johnson",
                "deleted old content",
                now - Duration::minutes(30),
                ActivityKind::Delete,
            ),
            activity(
                "4",
                "Sarah Williams",
                "logged in to dashboard",
                now - Duration::minutes(45),
                ActivityKind::Login,
            ),
            activity(
                "5",
                "Tom Brown",
                "published article 'Advanced Editorial Workflows'",
                now - Duration::hours(1),
                ActivityKind::Create,
            ),
        ],
        content: vec![
            content(
                "1",
                "Getting Started with Pulse",
                ContentStatus::Published,
                "John Doe",
                date(2024, 1, 15),
                date(2024, 1, 20),
                1234,
            ),
            content(
                "2",
                "Advanced Editorial Workflows",
                ContentStatus::Draft,
                "Jane Smith",
                date(2024, 1, 18),
                date(2024, 1, 18),
                0,
            ),
            content(
                "3",
                "Building a CMS Dashboard",
                ContentStatus::Published,
                "Mike Johnson",
                date(2024, 1, 10),
                date(2024, 1, 22),
                2345,
            ),
            content(
                "4",
                "Content Performance Deep Dive",
                ContentStatus::Published,
                "Sarah Williams",
                date(2024, 1, 5),
                date(2024, 1, 15),
                3456,
            ),
            content(
                "5",
                "Style Guide Essentials",
                ContentStatus::Archived,
                "Tom Brown",
                date(2023, 12, 20),
                date(2024, 1, 1),
                987,
            ),
        ],
        device_stats: vec![
            device("Desktop", 5234, 52.3),
            device("Mobile", 3421, 34.2),
            device("Tablet", 1345, 13.5),
        ],
        server_metrics: vec![
            metric("CPU Usage", 45.0, HealthStatus::Healthy, "%"),
            metric("Memory", 68.0, HealthStatus::Warning, "%"),
            metric("Disk Space", 32.0, HealthStatus::Healthy, "%"),
            metric("Network", 89.0, HealthStatus::Critical, "Mbps"),
        ],
        tasks: vec![
            Task {
                id: "1".to_string(),
                title: "Update landing page".to_string(),
                description: "Redesign the hero section with new marketing copy".to_string(),
                status: TaskStatus::InProgress,
                priority: TaskPriority::High,
                assignee: Some("John Doe".to_string()),
                due_date: Some(now + Duration::days(2)),
            },
            Task {
                id: "2".to_string(),
                title: "Fix navigation bug".to_string(),
                description: "Mobile menu not closing on route change".to_string(),
                status: TaskStatus::Todo,
                priority: TaskPriority::Medium,
                assignee: Some("Jane Smith".to_string()),
                due_date: Some(now + Duration::days(5)),
            },
            Task {
                id: "3".to_string(),
                title: "Add user authentication".to_string(),
                description: "Implement token-based authentication".to_string(),
                status: TaskStatus::Todo,
                priority: TaskPriority::High,
                assignee: Some("Mike Johnson".to_string()),
                due_date: None,
            },
            Task {
                id: "4".to_string(),
                title: "Write documentation".to_string(),
                description: "Complete API documentation for all endpoints".to_string(),
                status: TaskStatus::Done,
                priority: TaskPriority::Low,
                assignee: Some("Sarah Williams".to_string()),
                due_date: None,
            },
        ],
        calendar_events: vec![
            event("1", "Team Meeting", date(2024, 1, 25), "Weekly team sync"),
            event("2", "Product Launch", date(2024, 1, 28), "Launch new feature"),
            event("3", "Client Call", date(2024, 1, 30), "Quarterly review"),
        ],
        users: vec![
            user("1", "John Doe", "john@example.com", UserRole::Admin, true, now - Duration::hours(2)),
            user("2", "Jane Smith", "jane@example.com", UserRole::Editor, true, now - Duration::hours(5)),
            user("3", "Mike Johnson", "mike@example.com", UserRole::Editor, true, now - Duration::days(1)),
            user("4", "Sarah Williams", "sarah@example.com", UserRole::Viewer, true, now - Duration::days(2)),
            user("5", "Tom Brown", "tom@example.com", UserRole::Viewer, false, now - Duration::days(7)),
        ],
        media: vec![
            media("1", "hero-image.jpg", 2_400_000, date(2024, 1, 15)),
            media("2", "product-1.png", 1_800_000, date(2024, 1, 14)),
            media("3", "banner.jpg", 3_200_000, date(2024, 1, 12)),
            media("4", "logo.svg", 45_000, date(2024, 1, 10)),
            media("5", "thumbnail.jpg", 890_000, date(2024, 1, 8)),
            media("6", "background.png", 4_100_000, date(2024, 1, 5)),
        ],
    }
}

fn stat(id: &str, label: &str, value: &str, change: f64, trend: Trend) -> StatCard {
    StatCard {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        change,
        trend,
    }
}

fn point(name: &str, value: f64) -> ChartDataPoint {
    ChartDataPoint {
        name: name.to_string(),
        value,
    }
}

fn traffic(source: &str, value: f64, percentage: f64) -> TrafficSource {
    TrafficSource {
        source: source.to_string(),
        value,
        percentage,
    }
}

fn activity(
    id: &str,
    user: &str,
    action: &str,
    timestamp: chrono::DateTime<Utc>,
    kind: ActivityKind,
) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        user: user.to_string(),
        action: action.to_string(),
        timestamp,
        kind,
    }
}

#[allow(clippy::too_many_arguments)]
fn content(
    id: &str,
    title: &str,
    status: ContentStatus,
    author: &str,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
    views: u64,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        status,
        author: author.to_string(),
        created_at,
        updated_at,
        views,
    }
}

fn device(device: &str, users: u64, percentage: f64) -> DeviceStats {
    DeviceStats {
        device: device.to_string(),
        users,
        percentage,
    }
}

fn metric(name: &str, value: f64, status: HealthStatus, unit: &str) -> ServerMetric {
    ServerMetric {
        name: name.to_string(),
        value,
        status,
        unit: unit.to_string(),
    }
}

fn event(id: &str, title: &str, start: chrono::DateTime<Utc>, description: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        start,
        end: start + Duration::hours(1),
        description: Some(description.to_string()),
    }
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    active: bool,
    last_login: chrono::DateTime<Utc>,
) -> UserAccount {
    UserAccount {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        active,
        last_login,
    }
}

fn media(id: &str, name: &str, size_bytes: u64, uploaded_at: chrono::DateTime<Utc>) -> MediaFile {
    MediaFile {
        id: id.to_string(),
        name: name.to_string(),
        size_bytes,
        uploaded_at,
    }
}
