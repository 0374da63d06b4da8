//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos: cards are dragged between
//! drop zones (board columns). The zone a card currently belongs to travels
//! with the drag session so a drop back onto the same zone is a no-op.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Card being dragged and the zone it started in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSource<Z> {
    pub id: u32,
    pub zone: Z,
}

/// Result of dropping a card onto a different zone
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneMove<Z> {
    pub id: u32,
    pub from: Z,
    pub to: Z,
}

/// Drag session state.
///
/// Idle when `source` is `None`. `over` is the zone currently showing the
/// drag-over marker; it only ever holds a value while a card is dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState<Z> {
    pub source: Option<DragSource<Z>>,
    pub over: Option<Z>,
}

impl<Z> Default for DragState<Z> {
    fn default() -> Self {
        Self { source: None, over: None }
    }
}

impl<Z: Copy + PartialEq> DragState<Z> {
    /// idle -> dragging. A new dragstart replaces any stale session.
    pub fn start(&mut self, id: u32, zone: Z) {
        self.source = Some(DragSource { id, zone });
        self.over = None;
    }

    pub fn enter(&mut self, zone: Z) {
        if self.source.is_some() {
            self.over = Some(zone);
        }
    }

    /// `left_subtree` is false for child-to-child moves inside the zone.
    pub fn leave(&mut self, zone: Z, left_subtree: bool) {
        if left_subtree && self.over == Some(zone) {
            self.over = None;
        }
    }

    /// Drop onto `zone`. Returns a move only when the zone differs from the
    /// one the card started in. The session stays open until `end`.
    pub fn drop_on(&mut self, zone: Z) -> Option<ZoneMove<Z>> {
        self.over = None;
        let source = self.source?;
        if source.zone == zone {
            return None;
        }
        Some(ZoneMove { id: source.id, from: source.zone, to: zone })
    }

    /// dragging -> idle, whatever happened before.
    pub fn end(&mut self) {
        self.source = None;
        self.over = None;
    }

    pub fn is_dragging(&self, id: u32) -> bool {
        matches!(self.source, Some(s) if s.id == id)
    }

    pub fn is_over(&self, zone: Z) -> bool {
        self.over == Some(zone)
    }
}

/// DnD state signal
#[derive(Clone, Copy)]
pub struct DndSignals<Z: Send + Sync + 'static> {
    pub state: RwSignal<DragState<Z>>,
}

pub fn create_dnd_signals<Z>() -> DndSignals<Z>
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    DndSignals { state: RwSignal::new(DragState::default()) }
}

impl<Z> DndSignals<Z>
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self, id: u32) -> bool {
        self.state.with(|s| s.is_dragging(id))
    }

    pub fn is_over(&self, zone: Z) -> bool {
        self.state.with(|s| s.is_over(zone))
    }
}

/// End drag operation
pub fn end_drag<Z>(dnd: &DndSignals<Z>)
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    dnd.state.update(|s| s.end());
}

/// dragstart handler for a card
pub fn make_on_dragstart<Z>(dnd: DndSignals<Z>, id: u32, zone: Z) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            let _ = dt.set_data("text/plain", &id.to_string());
        }
        dnd.state.update(|s| s.start(id, zone));
    }
}

/// dragend handler for a card
pub fn make_on_dragend<Z>(dnd: DndSignals<Z>) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// dragover handler for a zone; required for the browser to allow a drop
pub fn make_on_dragover() -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    }
}

/// dragenter handler for a zone
pub fn make_on_dragenter<Z>(dnd: DndSignals<Z>, zone: Z) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::DragEvent| {
        dnd.state.update(|s| s.enter(zone));
    }
}

/// dragleave handler for a zone
pub fn make_on_dragleave<Z>(dnd: DndSignals<Z>, zone: Z) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::DragEvent| {
        let left = !related_target_inside(&ev);
        dnd.state.update(|s| s.leave(zone, left));
    }
}

/// drop handler for a zone; `on_move` runs only for a real zone change
pub fn make_on_drop<Z, F>(dnd: DndSignals<Z>, zone: Z, on_move: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(ZoneMove<Z>) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let outcome = dnd.state.try_update(|s| s.drop_on(zone)).flatten();
        if let Some(mv) = outcome {
            on_move(mv);
        }
    }
}

/// True when the pointer moved to a node still inside the event's zone.
fn related_target_inside(ev: &web_sys::DragEvent) -> bool {
    let container = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let related = ev
        .related_target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (container, related) {
        (Some(container), Some(related)) => container.contains(Some(&related)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Col {
        A,
        B,
    }

    #[test]
    fn test_drop_on_same_zone_is_noop() {
        let mut s = DragState::default();
        s.start(7, Col::A);
        assert_eq!(s.drop_on(Col::A), None);
    }

    #[test]
    fn test_drop_on_other_zone_moves_once() {
        let mut s = DragState::default();
        s.start(7, Col::A);
        s.enter(Col::B);
        assert!(s.is_over(Col::B));
        assert_eq!(s.drop_on(Col::B), Some(ZoneMove { id: 7, from: Col::A, to: Col::B }));
        assert!(!s.is_over(Col::B));
    }

    #[test]
    fn test_end_clears_all_markers() {
        let mut s = DragState::default();
        s.start(3, Col::A);
        s.enter(Col::B);
        s.end();
        assert!(!s.is_dragging(3));
        assert!(!s.is_over(Col::B));
        assert_eq!(s, DragState::default());
    }

    #[test]
    fn test_end_without_drop_clears() {
        let mut s = DragState::default();
        s.start(3, Col::A);
        s.enter(Col::A);
        s.end();
        assert_eq!(s.source, None);
        assert_eq!(s.over, None);
    }

    #[test]
    fn test_leave_into_child_keeps_marker() {
        let mut s = DragState::default();
        s.start(1, Col::A);
        s.enter(Col::B);
        s.leave(Col::B, false);
        assert!(s.is_over(Col::B));
        s.leave(Col::B, true);
        assert!(!s.is_over(Col::B));
    }

    #[test]
    fn test_enter_while_idle_ignored() {
        let mut s: DragState<Col> = DragState::default();
        s.enter(Col::A);
        assert_eq!(s.over, None);
        assert_eq!(s.drop_on(Col::A), None);
    }
}
