//! Screen and page enums for navigation.

/// Which top-level screen is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The marketing/launch screen
    Launch,
    /// The admin dashboard shell
    Admin,
}

/// Pages reachable from the admin sidebar, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Overview,
    Content,
    Media,
    Analytics,
    Users,
    Settings,
}

impl AdminPage {
    /// All pages in sidebar order.
    pub const ALL: [AdminPage; 6] = [
        AdminPage::Overview,
        AdminPage::Content,
        AdminPage::Media,
        AdminPage::Analytics,
        AdminPage::Users,
        AdminPage::Settings,
    ];

    /// Sidebar entry label.
    pub fn label(&self) -> &'static str {
        match self {
            AdminPage::Overview => "Dashboard",
            AdminPage::Content => "Content",
            AdminPage::Media => "Media",
            AdminPage::Analytics => "Analytics",
            AdminPage::Users => "Users",
            AdminPage::Settings => "Settings",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            AdminPage::Overview => "Dashboard",
            AdminPage::Content => "Content Management",
            AdminPage::Media => "Media Library",
            AdminPage::Analytics => "Analytics",
            AdminPage::Users => "User Management",
            AdminPage::Settings => "Settings",
        }
    }

    /// Page subheading shown under the title.
    pub fn subtitle(&self) -> &'static str {
        match self {
            AdminPage::Overview => "Welcome back! Here's what's happening with your platform today.",
            AdminPage::Content => "Manage all your content in one place.",
            AdminPage::Media => "Manage your images and media files.",
            AdminPage::Analytics => "Track your website performance and user behavior.",
            AdminPage::Users => "Manage user accounts and permissions.",
            AdminPage::Settings => "Manage your account and application preferences.",
        }
    }

    /// Sidebar entry glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            AdminPage::Overview => "\u{25a6}",
            AdminPage::Content => "\u{2630}",
            AdminPage::Media => "\u{25a3}",
            AdminPage::Analytics => "\u{2593}",
            AdminPage::Users => "\u{263b}",
            AdminPage::Settings => "\u{2699}",
        }
    }

    /// Page for a number-key shortcut (1-based), if in range.
    pub fn from_index(index: usize) -> Option<AdminPage> {
        Self::ALL.get(index.checked_sub(1)?).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_one_based() {
        assert_eq!(AdminPage::from_index(1), Some(AdminPage::Overview));
        assert_eq!(AdminPage::from_index(6), Some(AdminPage::Settings));
        assert_eq!(AdminPage::from_index(0), None);
        assert_eq!(AdminPage::from_index(7), None);
    }

    #[test]
    fn test_all_pages_have_distinct_labels() {
        let labels: std::collections::HashSet<&str> =
            AdminPage::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), AdminPage::ALL.len());
    }
}
