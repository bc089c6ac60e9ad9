#![forbid(unsafe_code)]

//! Scroll-state chrome: the sticky navbar and the floating contact button.
//!
//! Two independent threshold watchers. The navbar gains a "scrolled"
//! designation past a fixed scroll depth; the floating button hides when
//! the viewport nears the bottom of the document. Both are driven by
//! throttled scroll snapshots and hold no state beyond the current flag.

use vitrine_core::geometry::ScrollMetrics;

/// Fixed tuning constants for the chrome watchers.
#[derive(Debug, Clone, Copy)]
pub struct ChromeConfig {
    /// Scroll depth past which the navbar is marked scrolled.
    /// Default: 100 px.
    pub navbar_threshold: f32,
    /// Distance from the document bottom within which the floating button
    /// hides. Default: 200 px.
    pub footer_proximity: f32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 100.0,
            footer_proximity: 200.0,
        }
    }
}

/// Navbar scroll-state watcher.
#[derive(Debug, Clone, Copy)]
pub struct Navbar {
    scrolled: bool,
    threshold: f32,
}

impl Navbar {
    /// Create the watcher in the unscrolled state.
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            scrolled: false,
            threshold: config.navbar_threshold,
        }
    }

    /// Whether the navbar currently carries the scrolled designation.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Update from a scroll snapshot. Returns `true` if the state changed.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        let scrolled = metrics.scroll_top > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Visual state of the floating button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonVisual {
    /// 0.0 (hidden) or 1.0 (shown).
    pub scale: f32,
    /// 0.0 (hidden) or 1.0 (shown).
    pub opacity: f32,
}

/// Floating contact button visibility watcher.
#[derive(Debug, Clone, Copy)]
pub struct FloatingButton {
    hidden: bool,
    proximity: f32,
}

impl FloatingButton {
    /// Create the watcher in the shown state.
    pub fn new(config: ChromeConfig) -> Self {
        Self {
            hidden: false,
            proximity: config.footer_proximity,
        }
    }

    /// Whether the button is currently hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Update from a scroll snapshot. Returns `true` if the state changed.
    pub fn on_scroll(&mut self, metrics: &ScrollMetrics) -> bool {
        let hidden = metrics.distance_to_bottom() < self.proximity;
        let changed = hidden != self.hidden;
        self.hidden = hidden;
        changed
    }

    /// Scale/opacity pair for the host to apply.
    pub fn visual(&self) -> ButtonVisual {
        if self.hidden {
            ButtonVisual {
                scale: 0.0,
                opacity: 0.0,
            }
        } else {
            ButtonVisual {
                scale: 1.0,
                opacity: 1.0,
            }
        }
    }
}
