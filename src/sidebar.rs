//! Sidebar Layout State
//!
//! Two independent axes: `collapsed` on desktop (persisted) and `shown` on
//! mobile (transient, paired with an overlay and body scroll lock).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub is_mobile: bool,
    pub collapsed: bool,
    pub shown: bool,
}

impl SidebarState {
    /// Initial layout: hidden on mobile, stored preference on desktop
    pub fn initial(is_mobile: bool, saved: Option<&str>) -> Self {
        Self {
            is_mobile,
            collapsed: saved == Some("true"),
            shown: false,
        }
    }

    /// Hamburger click. Returns the value to persist, if any.
    pub fn toggle(&mut self) -> Option<&'static str> {
        if self.is_mobile {
            self.shown = !self.shown;
            None
        } else {
            self.collapsed = !self.collapsed;
            Some(if self.collapsed { "true" } else { "false" })
        }
    }

    /// Overlay click, outside click, Escape or nav-item click
    pub fn dismiss(&mut self) {
        if self.is_mobile {
            self.shown = false;
        }
    }

    /// Debounced resize
    pub fn resize(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
        if !is_mobile {
            self.shown = false;
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.is_mobile && self.shown
    }

    pub fn scroll_locked(&self) -> bool {
        self.overlay_visible()
    }

    pub fn sidebar_class(&self) -> &'static str {
        match (self.is_mobile, self.shown, self.collapsed) {
            (true, true, _) => "sidebar show",
            (true, false, _) => "sidebar",
            (false, _, true) => "sidebar collapsed",
            (false, _, false) => "sidebar",
        }
    }

    /// Main content spans the full width whenever the sidebar is out of
    /// the flow: always on mobile, when collapsed on desktop.
    pub fn main_class(&self) -> &'static str {
        if self.is_mobile || self.collapsed {
            "main-content sidebar-collapsed"
        } else {
            "main-content"
        }
    }

    pub fn trigger_active(&self) -> bool {
        if self.is_mobile {
            self.shown
        } else {
            self.collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_toggle_persists() {
        let mut s = SidebarState::initial(false, None);
        assert_eq!(s.toggle(), Some("true"));
        assert_eq!(s.sidebar_class(), "sidebar collapsed");
        assert_eq!(s.main_class(), "main-content sidebar-collapsed");
        assert_eq!(s.toggle(), Some("false"));
        assert_eq!(s.sidebar_class(), "sidebar");
        assert!(!s.overlay_visible());
    }

    #[test]
    fn test_saved_preference_restored_on_desktop() {
        let s = SidebarState::initial(false, Some("true"));
        assert!(s.collapsed);
        assert!(s.trigger_active());
        let s = SidebarState::initial(false, Some("false"));
        assert!(!s.collapsed);
    }

    #[test]
    fn test_mobile_toggle_not_persisted() {
        let mut s = SidebarState::initial(true, Some("true"));
        assert_eq!(s.sidebar_class(), "sidebar");
        assert_eq!(s.toggle(), None);
        assert!(s.overlay_visible());
        assert!(s.scroll_locked());
        s.dismiss();
        assert!(!s.overlay_visible());
        assert!(!s.scroll_locked());
    }

    #[test]
    fn test_resize_to_desktop_closes_overlay() {
        let mut s = SidebarState::initial(true, None);
        s.toggle();
        assert!(s.shown);
        s.resize(false);
        assert!(!s.shown);
        assert!(!s.overlay_visible());
    }

    #[test]
    fn test_dismiss_ignored_on_desktop() {
        let mut s = SidebarState::initial(false, Some("true"));
        s.dismiss();
        assert!(s.collapsed);
    }
}
