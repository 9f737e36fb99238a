//! Continuous drag protocol
//!
//! A drag-start names the word being dragged; the following drop names where it landed.

use super::PlacementRequest;
use crate::core::Category;

/// Surface a dragged word was released over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Basket(Category),
    /// Anything that is not a basket; the drop is swallowed
    Elsewhere,
}

/// Pairs drag-start and drop events into placement requests
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragTracker {
    dragging: Option<String>,
}

impl DragTracker {
    /// Begin dragging a word, replacing any drag that never dropped
    pub fn drag_start(&mut self, word: impl Into<String>) {
        self.dragging = Some(word.into());
    }

    /// Finish the current drag
    ///
    /// Yields one request for a basket drop. A drop elsewhere, or a drop with no drag
    /// in progress, yields nothing. The drag ends either way.
    pub fn drop_on(&mut self, target: DropTarget) -> Option<PlacementRequest> {
        let word = self.dragging.take()?;
        match target {
            DropTarget::Basket(category) => Some(PlacementRequest { word, category }),
            DropTarget::Elsewhere => None,
        }
    }

    /// Word currently being dragged
    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn clear(&mut self) {
        self.dragging = None;
    }
}
