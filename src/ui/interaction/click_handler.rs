//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into `App`
//! state mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating `App` state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::ToggleSidebar => {
            app.sidebar.toggle();
            tracing::debug!(open = app.sidebar.is_open(), "click: toggle sidebar");
        }
        ClickAction::Navigate(page) => {
            app.select_page(page);
            tracing::debug!(?page, "click: navigate");
        }
        ClickAction::PressCta => {
            app.navigate_to_admin();
            tracing::debug!("click: open admin dashboard");
        }
        ClickAction::BackToLaunch => {
            app.navigate_to_launch();
            tracing::debug!("click: back to launch screen");
        }
    }
}
