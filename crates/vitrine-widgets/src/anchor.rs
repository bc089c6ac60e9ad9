#![forbid(unsafe_code)]

//! Smooth same-page anchor scrolling.
//!
//! Activating an anchor link either passes through to default navigation
//! (bare `#` / `#!` placeholders), suppresses the jump with nothing to do
//! (unknown fragment), or suppresses it and animates the viewport so the
//! target's top edge aligns with the viewport's top edge.

use std::time::Duration;

use vitrine_core::animation::{Animation, Tween};

/// Fixed tuning constants for anchor scrolling.
#[derive(Debug, Clone, Copy)]
pub struct AnchorConfig {
    /// Duration of the scroll animation. Default: 450 ms.
    pub duration: Duration,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(450),
        }
    }
}

/// A named scroll target: fragment (without `#`) and its document-space top.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorTarget {
    /// Fragment identifier, e.g. `"menu"` for `href="#menu"`.
    pub fragment: String,
    /// Top edge of the target element in document coordinates.
    pub document_top: f32,
}

impl AnchorTarget {
    /// Create a target.
    pub fn new(fragment: impl Into<String>, document_top: f32) -> Self {
        Self {
            fragment: fragment.into(),
            document_top,
        }
    }
}

/// Result of activating an anchor link.
#[derive(Debug, Clone)]
pub enum AnchorOutcome {
    /// Bare placeholder (`#` or `#!`): let default navigation proceed.
    Default,
    /// Default navigation suppressed, but the fragment matches no target.
    Suppressed,
    /// Default navigation suppressed; animate the viewport.
    Animate(ScrollAnimation),
}

/// An in-flight smooth scroll toward a target offset.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    tween: Tween,
}

impl ScrollAnimation {
    fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            tween: Tween::new(from, to, duration),
        }
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    /// Current scroll offset in pixels.
    pub fn position(&self) -> f32 {
        self.tween.position()
    }

    /// Final scroll offset.
    pub fn target(&self) -> f32 {
        self.tween.target()
    }

    /// Whether the animation has reached the target.
    pub fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }
}

/// The page's same-page anchor links.
#[derive(Debug, Clone, Default)]
pub struct AnchorIndex {
    targets: Vec<AnchorTarget>,
    config: AnchorConfig,
}

impl AnchorIndex {
    /// Create the index from the page's scroll targets.
    pub fn new(targets: Vec<AnchorTarget>, config: AnchorConfig) -> Self {
        Self { targets, config }
    }

    /// Activate an anchor with the given raw `href` fragment.
    ///
    /// `current_scroll` is where the viewport sits now; the animation runs
    /// from there to the target's top.
    pub fn activate(&self, href: &str, current_scroll: f32) -> AnchorOutcome {
        if href == "#" || href == "#!" {
            return AnchorOutcome::Default;
        }
        let fragment = href.strip_prefix('#').unwrap_or(href);
        match self.targets.iter().find(|t| t.fragment == fragment) {
            Some(target) => AnchorOutcome::Animate(ScrollAnimation::new(
                current_scroll,
                target.document_top,
                self.config.duration,
            )),
            None => AnchorOutcome::Suppressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> AnchorIndex {
        AnchorIndex::new(
            vec![
                AnchorTarget::new("menu", 1200.0),
                AnchorTarget::new("contact", 2400.0),
            ],
            AnchorConfig::default(),
        )
    }

    #[test]
    fn bare_hash_passes_through() {
        assert!(matches!(index().activate("#", 0.0), AnchorOutcome::Default));
        assert!(matches!(index().activate("#!", 0.0), AnchorOutcome::Default));
    }

    #[test]
    fn unknown_fragment_is_suppressed_without_animation() {
        assert!(matches!(
            index().activate("#nowhere", 0.0),
            AnchorOutcome::Suppressed
        ));
    }

    #[test]
    fn known_fragment_animates_to_target_top() {
        let AnchorOutcome::Animate(anim) = index().activate("#menu", 100.0) else {
            panic!("expected an animation");
        };
        assert_eq!(anim.position(), 100.0);
        assert_eq!(anim.target(), 1200.0);
    }

    #[test]
    fn animation_lands_exactly_on_target() {
        let AnchorOutcome::Animate(mut anim) = index().activate("#contact", 500.0) else {
            panic!("expected an animation");
        };
        anim.tick(Duration::from_millis(450));
        assert!(anim.is_complete());
        assert_eq!(anim.position(), 2400.0);
    }

    #[test]
    fn animation_can_scroll_upward() {
        let AnchorOutcome::Animate(mut anim) = index().activate("#menu", 2400.0) else {
            panic!("expected an animation");
        };
        anim.tick(Duration::from_millis(225));
        assert!(anim.position() < 2400.0);
        anim.tick(Duration::from_millis(225));
        assert_eq!(anim.position(), 1200.0);
    }

    #[test]
    fn empty_index_suppresses_everything_but_placeholders() {
        let idx = AnchorIndex::new(Vec::new(), AnchorConfig::default());
        assert!(matches!(idx.activate("#menu", 0.0), AnchorOutcome::Suppressed));
        assert!(matches!(idx.activate("#", 0.0), AnchorOutcome::Default));
    }
}
