//! Menu Placement
//!
//! Where a positioned menu (task context menu, status picker) opens relative
//! to the button that triggered it, and how it flips when it would run off
//! the viewport.

/// Viewport-relative box, as from `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn from_dom(r: &web_sys::DomRect) -> Self {
        Self { left: r.left(), top: r.top(), right: r.right(), bottom: r.bottom() }
    }
}

/// Which menu edge lines up with the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Menu's right edge at the anchor's right edge (context menu)
    Right,
    /// Menu's left edge at the anchor's left edge (status picker)
    Left,
}

/// Gap between anchor and menu
pub const MENU_GAP: f64 = 5.0;
/// Nominal context menu width used for the first placement
pub const CONTEXT_MENU_WIDTH: f64 = 180.0;

/// Document-relative position (CSS `left`/`top` of an absolutely
/// positioned menu)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuPosition {
    pub x: f64,
    pub y: f64,
}

impl MenuPosition {
    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px; display: block;", self.x, self.y)
    }
}

/// First placement: below the anchor
pub fn initial_position(anchor: Rect, align: Align, scroll: (f64, f64)) -> MenuPosition {
    let x = match align {
        Align::Right => anchor.right + scroll.0 - CONTEXT_MENU_WIDTH,
        Align::Left => anchor.left + scroll.0,
    };
    MenuPosition { x, y: anchor.bottom + scroll.1 + MENU_GAP }
}

/// Second pass once the menu is laid out: open leftward when the right edge
/// overflows, upward when the bottom edge overflows.
pub fn adjust_position(
    current: MenuPosition,
    anchor: Rect,
    menu: Rect,
    viewport: (f64, f64),
    scroll: (f64, f64),
) -> MenuPosition {
    let mut pos = current;
    if menu.right > viewport.0 {
        pos.x = anchor.left + scroll.0 - CONTEXT_MENU_WIDTH;
    }
    if menu.bottom > viewport.1 {
        pos.y = anchor.top + scroll.1 - menu.height() - MENU_GAP;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect { left: 300.0, top: 100.0, right: 320.0, bottom: 120.0 }
    }

    #[test]
    fn test_initial_right_aligned_below_anchor() {
        let pos = initial_position(anchor(), Align::Right, (0.0, 50.0));
        assert_eq!(pos, MenuPosition { x: 140.0, y: 175.0 });
    }

    #[test]
    fn test_initial_left_aligned() {
        let pos = initial_position(anchor(), Align::Left, (10.0, 0.0));
        assert_eq!(pos, MenuPosition { x: 310.0, y: 125.0 });
    }

    #[test]
    fn test_fits_is_unchanged() {
        let start = initial_position(anchor(), Align::Right, (0.0, 0.0));
        let menu = Rect { left: 140.0, top: 125.0, right: 320.0, bottom: 245.0 };
        assert_eq!(adjust_position(start, anchor(), menu, (1024.0, 768.0), (0.0, 0.0)), start);
    }

    #[test]
    fn test_flips_left_and_up_on_overflow() {
        let start = initial_position(anchor(), Align::Left, (0.0, 0.0));
        let menu = Rect { left: 300.0, top: 125.0, right: 480.0, bottom: 245.0 };
        let pos = adjust_position(start, anchor(), menu, (400.0, 200.0), (0.0, 0.0));
        assert_eq!(pos.x, 120.0);
        assert_eq!(pos.y, 100.0 - 120.0 - 5.0);
    }
}
