#![forbid(unsafe_code)]

//! Input event model.
//!
//! These are widget-level abstractions over host input. The embedding maps
//! its native events (DOM events, synthetic test events) into these variants
//! before handing them to the page controller. Pointer positions are in
//! viewport coordinates.

use crate::geometry::ScrollMetrics;

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    /// The pointer moved to a new position (also covers hover enter/leave,
    /// which the controller derives from successive positions).
    Moved,
    /// A click or tap was released at this position.
    Clicked,
}

/// A pointer event at a viewport position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Movement or click.
    pub kind: PointerKind,
    /// Viewport x coordinate in pixels.
    pub x: f32,
    /// Viewport y coordinate in pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Create a pointer event.
    pub const fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// A movement event.
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Moved, x, y)
    }

    /// A click/tap event.
    pub const fn clicked(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Clicked, x, y)
    }
}

/// A discrete page input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page finished loading. Clears the preload latch.
    Loaded,
    /// Pointer movement or click.
    Pointer(PointerEvent),
    /// The scroll position changed. Carries a fresh metrics snapshot.
    Scroll(ScrollMetrics),
    /// A same-page anchor link was activated. Carries the raw fragment
    /// (including the leading `#`).
    AnchorActivated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_constructors_set_kind() {
        assert_eq!(PointerEvent::moved(1.0, 2.0).kind, PointerKind::Moved);
        assert_eq!(PointerEvent::clicked(1.0, 2.0).kind, PointerKind::Clicked);
    }

    #[test]
    fn anchor_event_keeps_raw_fragment() {
        let e = Event::AnchorActivated("#menu".to_owned());
        match e {
            Event::AnchorActivated(href) => assert_eq!(href, "#menu"),
            _ => unreachable!(),
        }
    }
}
