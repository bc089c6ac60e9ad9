#![forbid(unsafe_code)]

//! Card-stack showcase widget.
//!
//! A fixed ordered set of cards inside a container, with two mutually
//! exclusive interaction modes chosen once at construction from the
//! viewport width:
//!
//! - **Desktop** ([`DesktopShowcase`]): hovering the first card fans the
//!   stack out with a cascading stagger; clicking a card pops it; clicking
//!   outside collapses everything.
//! - **Mobile** ([`MobileShowcase`]): a tap-driven slideshow showing one
//!   card at a time with sequential fade transitions.
//!
//! # Invariants
//!
//! - The mode never changes after construction, even if the viewport is
//!   later resized.
//! - Card ordering is fixed for the session; only per-card state changes.
//! - Desktop: at most one card is active at any time.
//! - Mobile: exactly one card is visible at any time.

mod desktop;
mod mobile;

pub use desktop::DesktopShowcase;
pub use mobile::{FadePhase, MobileShowcase};

use std::time::Duration;

use bitflags::bitflags;
use vitrine_core::geometry::Viewport;

bitflags! {
    /// Per-card state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CardFlags: u8 {
        /// The card is shown (mobile: the current slide; desktop: always).
        const VISIBLE = 1 << 0;
        /// The card is popped/enlarged (desktop only, at most one).
        const ACTIVE = 1 << 1;
        /// A fade transition is running on this card (mobile only).
        const TRANSITIONING = 1 << 2;
    }
}

/// One card in the stack.
///
/// The position index is assigned at construction and never changes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Card {
    pub(crate) flags: CardFlags,
    /// Transition-delay offset for the cascading spread (desktop only).
    pub(crate) delay: Duration,
}

impl Card {
    pub(crate) const fn hidden() -> Self {
        Self {
            flags: CardFlags::empty(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) const fn visible() -> Self {
        Self {
            flags: CardFlags::VISIBLE,
            delay: Duration::ZERO,
        }
    }
}

/// Snapshot of one card's visual state, for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    /// 0.0 (hidden) to 1.0 (fully shown).
    pub opacity: f32,
    /// Whether the card sits above the rest of the stack.
    pub elevated: bool,
    /// Whether the card is popped (desktop active state).
    pub active: bool,
    /// Transition-delay offset for cascading spread/collapse.
    pub transition_delay: Duration,
    /// Whether a fade transition class should be applied.
    pub transitioning: bool,
}

/// Fixed tuning constants for the showcase.
#[derive(Debug, Clone, Copy)]
pub struct ShowcaseConfig {
    /// Viewport widths at or below this select mobile mode.
    /// Default: 768 px.
    pub breakpoint: f32,
    /// Per-index transition-delay step for the cascading spread.
    /// Default: 60 ms.
    pub stagger: Duration,
    /// How long a single card transition takes once its delay has elapsed.
    /// Bounds when collapse delay offsets are zeroed. Default: 400 ms.
    pub collapse_duration: Duration,
    /// Duration of each slideshow fade phase (out, then in).
    /// Default: 500 ms.
    pub fade_duration: Duration,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            stagger: Duration::from_millis(60),
            collapse_duration: Duration::from_millis(400),
            fade_duration: Duration::from_millis(500),
        }
    }
}

/// Interaction mode, decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseMode {
    /// Hover/click spread-and-pop.
    Desktop,
    /// Tap-driven slideshow.
    Mobile,
}

impl ShowcaseMode {
    /// Select the mode for a viewport width against the breakpoint.
    pub fn select(viewport_width: f32, breakpoint: f32) -> Self {
        if viewport_width > breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}

/// The showcase widget: one of the two mode controllers.
///
/// Selection happens once in [`Showcase::new`] and is immutable for the
/// life of the page.
#[derive(Debug, Clone)]
pub enum Showcase {
    /// Desktop spread-and-pop controller.
    Desktop(DesktopShowcase),
    /// Mobile slideshow controller.
    Mobile(MobileShowcase),
}

impl Showcase {
    /// Construct the showcase for `card_count` cards.
    ///
    /// Returns `None` for an empty card list; the caller skips all widget
    /// behavior in that case (structural absence is not an error).
    pub fn new(card_count: usize, viewport: Viewport, config: ShowcaseConfig) -> Option<Self> {
        if card_count == 0 {
            return None;
        }
        let mode = ShowcaseMode::select(viewport.width, config.breakpoint);
        #[cfg(feature = "tracing")]
        tracing::debug!(?mode, card_count, "showcase initialized");
        Some(match mode {
            ShowcaseMode::Desktop => Self::Desktop(DesktopShowcase::new(card_count, config)),
            ShowcaseMode::Mobile => Self::Mobile(MobileShowcase::new(card_count, config)),
        })
    }

    /// The mode chosen at construction.
    pub fn mode(&self) -> ShowcaseMode {
        match self {
            Self::Desktop(_) => ShowcaseMode::Desktop,
            Self::Mobile(_) => ShowcaseMode::Mobile,
        }
    }

    /// Number of cards (fixed for the session).
    pub fn card_count(&self) -> usize {
        match self {
            Self::Desktop(s) => s.card_count(),
            Self::Mobile(s) => s.card_count(),
        }
    }

    /// Visual snapshot for the card at `index`.
    pub fn card_visual(&self, index: usize) -> Option<CardVisual> {
        match self {
            Self::Desktop(s) => s.card_visual(index),
            Self::Mobile(s) => s.card_visual(index),
        }
    }

    /// The pointer moved over the card at `index` (desktop hover input).
    pub fn pointer_over_card(&mut self, index: usize) {
        if let Self::Desktop(s) = self {
            s.hover_card(index);
        }
    }

    /// The pointer left the widget bounding box.
    pub fn pointer_left(&mut self) {
        if let Self::Desktop(s) = self {
            s.pointer_left();
        }
    }

    /// A card was clicked. Desktop toggles the pop state; mobile treats any
    /// tap on the widget as a slideshow advance.
    pub fn card_clicked(&mut self, index: usize) {
        match self {
            Self::Desktop(s) => s.click(index),
            Self::Mobile(s) => s.advance(),
        }
    }

    /// The widget was tapped outside any card (mobile advances; desktop
    /// treats clicks on container padding as inert).
    pub fn container_clicked(&mut self) {
        if let Self::Mobile(s) = self {
            s.advance();
        }
    }

    /// A click landed outside the widget bounding box.
    pub fn outside_click(&mut self) {
        if let Self::Desktop(s) = self {
            s.outside_click();
        }
    }

    /// Advance in-flight transitions by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        match self {
            Self::Desktop(s) => s.tick(dt),
            Self::Mobile(s) => s.tick(dt),
        }
    }

    /// Whether any transition is currently running.
    pub fn is_animating(&self) -> bool {
        match self {
            Self::Desktop(s) => s.is_collapsing(),
            Self::Mobile(s) => !s.is_idle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f32) -> Viewport {
        Viewport::new(width, 800.0)
    }

    #[test]
    fn empty_card_list_yields_no_widget() {
        assert!(Showcase::new(0, viewport(1024.0), ShowcaseConfig::default()).is_none());
    }

    #[test]
    fn wide_viewport_selects_desktop() {
        let s = Showcase::new(4, viewport(1024.0), ShowcaseConfig::default()).unwrap();
        assert_eq!(s.mode(), ShowcaseMode::Desktop);
    }

    #[test]
    fn narrow_viewport_selects_mobile() {
        let s = Showcase::new(4, viewport(375.0), ShowcaseConfig::default()).unwrap();
        assert_eq!(s.mode(), ShowcaseMode::Mobile);
    }

    #[test]
    fn breakpoint_width_is_mobile() {
        assert_eq!(ShowcaseMode::select(768.0, 768.0), ShowcaseMode::Mobile);
        assert_eq!(ShowcaseMode::select(769.0, 768.0), ShowcaseMode::Desktop);
    }

    #[test]
    fn card_count_is_fixed() {
        let s = Showcase::new(5, viewport(1024.0), ShowcaseConfig::default()).unwrap();
        assert_eq!(s.card_count(), 5);
        assert!(s.card_visual(4).is_some());
        assert!(s.card_visual(5).is_none());
    }
}
