//! Display records for dashboard widgets.
//!
//! These are immutable value objects supplied by the data layer. Widgets
//! read and reshape them; nothing here is mutated after load. All types
//! round-trip through serde so datasets can be swapped in from JSON.

pub mod groupers;

pub use groupers::{group_tasks_by_status, initials, TaskColumns};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a stat card's change indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A headline metric with its change versus the previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub id: String,
    pub label: String,
    pub value: String,
    /// Percentage change, signed; rendered next to the trend glyph
    pub change: f64,
    pub trend: Trend,
}

/// One point in a time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub name: String,
    pub value: f64,
}

/// A traffic channel and its share of total visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub source: String,
    pub value: f64,
    pub percentage: f64,
}

/// What kind of action an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Update,
    Delete,
    Login,
}

/// One row in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

/// Publication state of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Published,
    Draft,
    Archived,
}

impl ContentStatus {
    /// Label as shown in the content table.
    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Published => "published",
            ContentStatus::Draft => "draft",
            ContentStatus::Archived => "archived",
        }
    }
}

/// One row in the content table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub status: ContentStatus,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: u64,
}

/// Visitor count for one device class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStats {
    pub device: String,
    pub users: u64,
    pub percentage: f64,
}

/// Health classification for a server metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Status glyph for the server panel.
    pub fn glyph(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "\u{2713}",
            HealthStatus::Warning => "\u{26a0}",
            HealthStatus::Critical => "\u{2717}",
        }
    }
}

/// A single gauge row in the server-status panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMetric {
    pub name: String,
    pub value: f64,
    pub status: HealthStatus,
    pub unit: String,
}

/// Kanban column a task belongs to.
///
/// Records arriving from outside with a status this build does not know
/// deserialize as [`TaskStatus::Unknown`] and stay off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Column heading for the task board.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

/// Task urgency, drives the badge color on task cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

/// One card on the task board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// A scheduled event shown on the calendar widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
}

/// An account row on the users page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    pub last_login: DateTime<Utc>,
}

/// Permission tier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }
}

/// A file in the media library grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub name: String,
    /// Size in bytes, formatted for display by the media page
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}
