//! Color theme constants for the Pulse UI
//!
//! Defines the dark palette used throughout the dashboard, plus the
//! status-to-color maps widgets share.

use ratatui::style::Color;

use crate::models::{ActivityKind, ContentStatus, HealthStatus, TaskPriority, Trend, UserRole};

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and selected navigation entries
pub const COLOR_ACCENT: Color = Color::Rgb(96, 165, 250); // blue #60A5FA

/// Header and logo text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Positive change, published content, healthy metrics
pub const COLOR_POSITIVE: Color = Color::Rgb(52, 211, 153); // green #34D399

/// Negative change, deletions, critical metrics
pub const COLOR_NEGATIVE: Color = Color::Rgb(248, 113, 113); // red #F87171

/// Warnings, drafts, medium priority
pub const COLOR_WARNING: Color = Color::Rgb(251, 191, 36); // amber #FBBF24

/// Scroll-progress bar fill
pub const COLOR_PROGRESS: Color = Color::Rgb(167, 139, 250); // violet #A78BFA

/// Chart bars and gauge fills
pub const COLOR_CHART: Color = Color::Rgb(96, 165, 250);

/// Series colors for breakdown widgets, in display order
pub const SERIES_COLORS: [Color; 4] = [
    Color::Rgb(96, 165, 250),
    Color::Rgb(167, 139, 250),
    Color::Rgb(52, 211, 153),
    Color::Rgb(251, 191, 36),
];

/// Color for a stat card's trend badge.
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => COLOR_POSITIVE,
        Trend::Down => COLOR_NEGATIVE,
    }
}

/// Color for an activity feed entry's icon.
pub fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Create => COLOR_POSITIVE,
        ActivityKind::Update => COLOR_ACCENT,
        ActivityKind::Delete => COLOR_NEGATIVE,
        ActivityKind::Login => COLOR_PROGRESS,
    }
}

/// Color for a content status badge.
pub fn content_status_color(status: ContentStatus) -> Color {
    match status {
        ContentStatus::Published => COLOR_POSITIVE,
        ContentStatus::Draft => COLOR_WARNING,
        ContentStatus::Archived => COLOR_DIM,
    }
}

/// Color for a server metric's health state.
pub fn health_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Healthy => COLOR_POSITIVE,
        HealthStatus::Warning => COLOR_WARNING,
        HealthStatus::Critical => COLOR_NEGATIVE,
    }
}

/// Color for a task priority badge.
pub fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => COLOR_DIM,
        TaskPriority::Medium => COLOR_WARNING,
        TaskPriority::High => COLOR_NEGATIVE,
    }
}

/// Color for a user role badge.
pub fn role_color(role: UserRole) -> Color {
    match role {
        UserRole::Admin => COLOR_NEGATIVE,
        UserRole::Editor => COLOR_ACCENT,
        UserRole::Viewer => COLOR_DIM,
    }
}
