//! Input protocols
//!
//! Two ways to sort a word, one effect: a pointer drag (press on a word, release over a
//! basket) or a tap sequence (word, basket, confirm). Both end in the same
//! [`PlacementRequest`].

mod adapter;
mod drag;
mod tap;

pub use adapter::{InputEvent, InteractionAdapter};
pub use drag::{DragTracker, DropTarget};
pub use tap::Selection;

use crate::core::Category;

/// Which input protocol is active, chosen once at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Continuous pointer drag
    Drag,
    /// Tap word, tap basket, confirm
    Tap,
}

impl InputMode {
    /// Pick the protocol from the device's drag capability
    #[must_use]
    pub const fn from_capability(supports_drag: bool) -> Self {
        if supports_drag { Self::Drag } else { Self::Tap }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::Tap => "tap",
        }
    }
}

/// A word and the basket it should go into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRequest {
    pub word: String,
    pub category: Category,
}
