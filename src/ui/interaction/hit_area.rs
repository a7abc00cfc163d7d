//! Hit area system for mouse interactions.
//!
//! Components register clickable regions while rendering; the event loop
//! queries the registry to translate mouse events into actions. Areas are
//! cleared at the start of every frame so stale regions never outlive the
//! layout that produced them; the last pointer position persists across
//! frames so hover feedback does not flicker on redraw.

use ratatui::layout::Rect;

use crate::app::AdminPage;

/// An action triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Collapse or expand the sidebar
    ToggleSidebar,
    /// Switch the admin view to a page
    Navigate(AdminPage),
    /// Return from the admin dashboard to the launch screen
    BackToLaunch,
    /// The launch screen call-to-action
    PressCta,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of clickable regions for the current frame.
///
/// Later registrations win on overlap, matching paint order (overlays
/// register after the content they cover).
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Last observed pointer position; survives frame clears
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas at the start of a render pass.
    pub fn begin_frame(&mut self) {
        self.areas.clear();
    }

    /// Register a clickable region.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea { rect, action });
    }

    /// Topmost area under a point.
    fn index_at(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(index, _)| index)
    }

    /// Find the action under a point, preferring the topmost region.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.index_at(x, y)
            .map(|index| self.areas[index].action.clone())
    }

    /// Track the pointer for hover feedback.
    ///
    /// Returns true when the hovered area changed (a redraw is needed).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self
            .pointer
            .and_then(|(px, py)| self.index_at(px, py));
        let after = self.index_at(x, y);
        self.pointer = Some((x, y));
        before != after
    }

    /// Whether the pointer currently rests on the given action's area.
    pub fn is_hovered(&self, action: &ClickAction) -> bool {
        self.pointer
            .and_then(|(x, y)| self.index_at(x, y))
            .map(|index| &self.areas[index].action == action)
            .unwrap_or(false)
    }

    /// Whether the pointer currently rests inside a rect, registered or
    /// not. Render code uses this for hover styling while it is still
    /// building the frame's areas.
    pub fn pointer_over(&self, rect: Rect) -> bool {
        self.pointer
            .map(|(x, y)| {
                x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
            })
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 5, 20, 3), ClickAction::ToggleSidebar);
        assert!(area.contains(10, 5));
        assert!(area.contains(29, 7));
        assert!(!area.contains(30, 5));
        assert!(!area.contains(10, 8));
        assert!(!area.contains(9, 5));
    }

    #[test]
    fn test_hit_test_returns_topmost() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 40, 10), ClickAction::BackToLaunch);
        registry.register(
            Rect::new(5, 2, 10, 2),
            ClickAction::Navigate(AdminPage::Content),
        );

        assert_eq!(
            registry.hit_test(6, 3),
            Some(ClickAction::Navigate(AdminPage::Content))
        );
        assert_eq!(registry.hit_test(30, 8), Some(ClickAction::BackToLaunch));
        assert_eq!(registry.hit_test(50, 20), None);
    }

    #[test]
    fn test_begin_frame_clears_areas_but_keeps_pointer() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::PressCta);
        registry.update_hover(2, 0);

        registry.begin_frame();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(0, 0), None);

        // Re-registering the same region restores hover from the
        // remembered pointer
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::PressCta);
        assert!(registry.is_hovered(&ClickAction::PressCta));
    }

    #[test]
    fn test_hover_change_detection() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 5, 1), ClickAction::PressCta);

        assert!(registry.update_hover(2, 0), "entering should report change");
        assert!(!registry.update_hover(3, 0), "moving inside is no change");
        assert!(registry.update_hover(10, 5), "leaving should report change");
        assert!(!registry.is_hovered(&ClickAction::PressCta));
    }

    #[test]
    fn test_pointer_over_untracked_rect() {
        let mut registry = HitAreaRegistry::new();
        assert!(!registry.pointer_over(Rect::new(0, 0, 5, 1)));
        registry.update_hover(2, 0);
        assert!(registry.pointer_over(Rect::new(0, 0, 5, 1)));
        assert!(!registry.pointer_over(Rect::new(10, 0, 5, 1)));
    }
}
