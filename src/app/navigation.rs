//! Screen and page navigation.

use super::{AdminPage, App, Screen};

impl App {
    /// Switch to the admin dashboard.
    pub fn navigate_to_admin(&mut self) {
        if self.screen == Screen::Admin {
            return;
        }
        self.screen = Screen::Admin;
        // The launch screen unmounts: pointer-following state does not
        // survive remounts
        self.magnetic.reset();
        self.cta_rect = None;
        self.mark_dirty();
        tracing::info!("navigated to admin dashboard");
    }

    /// Return to the launch screen.
    pub fn navigate_to_launch(&mut self) {
        if self.screen == Screen::Launch {
            return;
        }
        self.screen = Screen::Launch;
        self.mark_dirty();
        tracing::info!("navigated to launch screen");
    }

    /// Select an admin page and scroll its content to the top.
    pub fn select_page(&mut self, page: AdminPage) {
        if self.page != page {
            self.page = page;
            self.admin_scroll.to_top();
        }
        // A drawer-style sidebar closes after navigation
        if self.layout.sidebar_overlays() {
            self.sidebar.set_open(false);
        }
        self.mark_dirty();
    }

    /// Select the next page in sidebar order, wrapping.
    pub fn next_page(&mut self) {
        let index = AdminPage::ALL
            .iter()
            .position(|p| *p == self.page)
            .unwrap_or(0);
        let next = AdminPage::ALL[(index + 1) % AdminPage::ALL.len()];
        self.select_page(next);
    }

    /// Select the previous page in sidebar order, wrapping.
    pub fn prev_page(&mut self) {
        let index = AdminPage::ALL
            .iter()
            .position(|p| *p == self.page)
            .unwrap_or(0);
        let prev = AdminPage::ALL[(index + AdminPage::ALL.len() - 1) % AdminPage::ALL.len()];
        self.select_page(prev);
    }
}
