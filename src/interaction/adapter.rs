//! Interaction adapter
//!
//! Routes raw input events through whichever protocol the device uses and emits at
//! most one placement request per event.

use super::drag::{DragTracker, DropTarget};
use super::tap::Selection;
use super::{InputMode, PlacementRequest};
use crate::core::{Category, WordEntry};

/// Input events from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Drag protocol: a word was picked up
    DragStart(String),
    /// Drag protocol: the dragged word was released
    Drop(DropTarget),
    /// Tap protocol: a pending word was tapped
    TapWord(WordEntry),
    /// Tap protocol: a basket was tapped
    TapBasket(Category),
    /// Tap protocol: confirm button
    Confirm,
    /// Tap protocol: cancel button
    Cancel,
}

/// Translates input events into placement requests
///
/// The mode is fixed at construction; events belonging to the other protocol are ignored.
#[derive(Debug, Clone)]
pub struct InteractionAdapter {
    mode: InputMode,
    drag: DragTracker,
    selection: Selection,
}

impl InteractionAdapter {
    #[must_use]
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            drag: DragTracker::default(),
            selection: Selection::default(),
        }
    }

    /// Feed one event; returns a request when the event completes a placement
    pub fn handle(&mut self, event: InputEvent) -> Option<PlacementRequest> {
        match (self.mode, event) {
            (InputMode::Drag, InputEvent::DragStart(word)) => {
                self.drag.drag_start(word);
                None
            }
            (InputMode::Drag, InputEvent::Drop(target)) => self.drag.drop_on(target),
            (InputMode::Tap, InputEvent::TapWord(word)) => {
                self.selection.select_word(word);
                None
            }
            (InputMode::Tap, InputEvent::TapBasket(category)) => {
                self.selection.select_category(category);
                None
            }
            (InputMode::Tap, InputEvent::Confirm) => self.selection.confirm(),
            (InputMode::Tap, InputEvent::Cancel) => {
                self.selection.cancel();
                None
            }
            (mode, event) => {
                tracing::debug!(?mode, ?event, "event ignored for input mode");
                None
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Word currently being dragged
    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.drag.dragging()
    }

    /// Forget any half-finished drag or selection
    pub fn reset(&mut self) {
        self.drag.clear();
        self.selection.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(word: &str, category: Category) -> PlacementRequest {
        PlacementRequest {
            word: word.to_string(),
            category,
        }
    }

    #[test]
    fn drag_mode_pairs_start_and_drop() {
        let mut adapter = InteractionAdapter::new(InputMode::Drag);
        assert_eq!(adapter.handle(InputEvent::DragStart("park".into())), None);
        assert_eq!(adapter.dragging(), Some("park"));

        let result = adapter.handle(InputEvent::Drop(DropTarget::Basket(Category::Where)));
        assert_eq!(result, Some(request("park", Category::Where)));
    }

    #[test]
    fn tap_mode_confirms_selection() {
        let mut adapter = InteractionAdapter::new(InputMode::Tap);
        adapter.handle(InputEvent::TapWord(WordEntry::new("park", Category::Where)));
        adapter.handle(InputEvent::TapBasket(Category::Where));

        let result = adapter.handle(InputEvent::Confirm);

        assert_eq!(result, Some(request("park", Category::Where)));
        assert!(adapter.selection().is_empty());
    }

    #[test]
    fn both_protocols_yield_same_request() {
        let mut drag = InteractionAdapter::new(InputMode::Drag);
        drag.handle(InputEvent::DragStart("apple".into()));
        let dragged = drag.handle(InputEvent::Drop(DropTarget::Basket(Category::What)));

        let mut tap = InteractionAdapter::new(InputMode::Tap);
        tap.handle(InputEvent::TapWord(WordEntry::new("apple", Category::What)));
        tap.handle(InputEvent::TapBasket(Category::What));
        let tapped = tap.handle(InputEvent::Confirm);

        assert!(dragged.is_some());
        assert_eq!(dragged, tapped);
    }

    #[test]
    fn drag_events_ignored_in_tap_mode() {
        let mut adapter = InteractionAdapter::new(InputMode::Tap);
        adapter.handle(InputEvent::DragStart("park".into()));
        assert_eq!(
            adapter.handle(InputEvent::Drop(DropTarget::Basket(Category::Where))),
            None
        );
        assert_eq!(adapter.dragging(), None);
    }

    #[test]
    fn tap_events_ignored_in_drag_mode() {
        let mut adapter = InteractionAdapter::new(InputMode::Drag);
        adapter.handle(InputEvent::TapWord(WordEntry::new("park", Category::Where)));
        adapter.handle(InputEvent::TapBasket(Category::Where));
        assert_eq!(adapter.handle(InputEvent::Confirm), None);
        assert!(adapter.selection().is_empty());
    }

    #[test]
    fn cancel_issues_nothing() {
        let mut adapter = InteractionAdapter::new(InputMode::Tap);
        adapter.handle(InputEvent::TapWord(WordEntry::new("park", Category::Where)));
        adapter.handle(InputEvent::TapBasket(Category::Where));
        assert_eq!(adapter.handle(InputEvent::Cancel), None);
        assert_eq!(adapter.handle(InputEvent::Confirm), None);
    }

    #[test]
    fn reset_clears_both_protocols() {
        let mut adapter = InteractionAdapter::new(InputMode::Drag);
        adapter.handle(InputEvent::DragStart("park".into()));
        adapter.reset();
        assert_eq!(adapter.dragging(), None);
    }
}
