#![forbid(unsafe_code)]

//! The page controller.
//!
//! [`Page`] is built once when the document's structural content is ready
//! and lives until the page unloads. It owns the showcase widget, the
//! reveal set, the chrome watchers, and the anchor index, plus one
//! leading-edge throttle per scroll subscription. Input arrives as
//! [`Event`]s with an explicit `now`; animation time advances through
//! [`Page::tick`] with an explicit `dt`. Output is a list of [`Effect`]s
//! for the host to apply.
//!
//! Structural absence (no showcase container, no navbar, no floating
//! button, no revealables) is handled by silently skipping the behavior in
//! question. It is not an error.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use vitrine_core::event::{Event, PointerEvent, PointerKind};
use vitrine_core::geometry::{Rect, ScrollMetrics, Viewport};
use vitrine_core::throttle::Throttle;
use vitrine_widgets::anchor::{AnchorConfig, AnchorIndex, AnchorOutcome, AnchorTarget, ScrollAnimation};
use vitrine_widgets::chrome::{ButtonVisual, ChromeConfig, FloatingButton, Navbar};
use vitrine_widgets::reveal::{RevealConfig, RevealSet};
use vitrine_widgets::showcase::{Showcase, ShowcaseConfig};

/// Structural position of the showcase widget within the document.
///
/// All rectangles are in document coordinates; the controller converts
/// pointer positions using the current scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ShowcaseLayout {
    /// Bounding box of the container.
    pub container: Rect,
    /// Bounding boxes of the cards, in stack order.
    pub cards: Vec<Rect>,
}

/// The structural contract the host page provides: a container with
/// ordered cards, optionally a navbar, a floating action element,
/// revealable elements, and same-page anchor targets.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// Showcase container and card geometry, if the page has one.
    pub showcase: Option<ShowcaseLayout>,
    /// Whether the page has a navbar.
    pub navbar: bool,
    /// Whether the page has a floating contact button.
    pub floating_button: bool,
    /// Document-space top edges of revealable elements.
    pub reveal_tops: Vec<f32>,
    /// Same-page anchor targets.
    pub anchors: Vec<AnchorTarget>,
    /// Total document height in pixels.
    pub document_height: f32,
}

/// Fixed tuning constants for the whole page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageConfig {
    /// Showcase constants (breakpoint, stagger, fade duration).
    pub showcase: ShowcaseConfig,
    /// Reveal threshold offset.
    pub reveal: RevealConfig,
    /// Navbar / floating button thresholds.
    pub chrome: ChromeConfig,
    /// Smooth-scroll duration.
    pub anchor: AnchorConfig,
}

/// An output the host applies to the real page.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the viewport scroll position (smooth-scroll animation frame).
    ScrollTo(f32),
    /// Perform default navigation for this anchor href (bare placeholder).
    DefaultNavigation(String),
}

#[derive(Debug, Clone)]
struct ShowcaseInstance {
    layout: ShowcaseLayout,
    widget: Showcase,
    /// Whether the pointer was inside the container at the last move.
    pointer_inside: bool,
}

/// The page controller. See the module docs.
#[derive(Debug, Clone)]
pub struct Page {
    scroll: ScrollMetrics,
    preload: bool,
    showcase: Option<ShowcaseInstance>,
    reveal: RevealSet,
    navbar: Option<Navbar>,
    button: Option<FloatingButton>,
    anchors: AnchorIndex,
    scroll_anim: Option<ScrollAnimation>,
    reveal_throttle: Throttle,
    navbar_throttle: Throttle,
    button_throttle: Throttle,
}

impl Page {
    /// Construct the controller and run the initial reveal check.
    ///
    /// The showcase mode is decided here, once, from `viewport.width`; it
    /// is never re-evaluated, even if the viewport is later resized.
    pub fn new(layout: PageLayout, viewport: Viewport, config: PageConfig) -> Self {
        let showcase = layout.showcase.and_then(|sc| {
            if sc.container.is_empty() {
                return None;
            }
            Showcase::new(sc.cards.len(), viewport, config.showcase).map(|widget| {
                ShowcaseInstance {
                    layout: sc,
                    widget,
                    pointer_inside: false,
                }
            })
        });

        let mut reveal = RevealSet::new(layout.reveal_tops, config.reveal);
        let scroll = ScrollMetrics::new(0.0, viewport.height, layout.document_height);
        // Ready-time check: content already in view reveals immediately.
        let revealed = reveal.check(&scroll);

        info!(
            has_showcase = showcase.is_some(),
            has_navbar = layout.navbar,
            has_button = layout.floating_button,
            revealable = reveal.len(),
            revealed_at_ready = revealed,
            "page controller ready"
        );

        Self {
            scroll,
            preload: true,
            showcase,
            reveal,
            navbar: layout.navbar.then(|| Navbar::new(config.chrome)),
            button: layout
                .floating_button
                .then(|| FloatingButton::new(config.chrome)),
            anchors: AnchorIndex::new(layout.anchors, config.anchor),
            scroll_anim: None,
            reveal_throttle: Throttle::default(),
            navbar_throttle: Throttle::default(),
            button_throttle: Throttle::default(),
        }
    }

    /// Whether entrance animations are still suppressed (cleared by the
    /// first [`Event::Loaded`], permanently).
    pub fn is_preloading(&self) -> bool {
        self.preload
    }

    /// The showcase widget, if the page has one.
    pub fn showcase(&self) -> Option<&Showcase> {
        self.showcase.as_ref().map(|s| &s.widget)
    }

    /// The reveal set.
    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    /// Whether the navbar carries the scrolled designation.
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar.is_some_and(|n| n.is_scrolled())
    }

    /// The floating button's visual state, if the page has one.
    pub fn button_visual(&self) -> Option<ButtonVisual> {
        self.button.map(|b| b.visual())
    }

    /// Whether a smooth scroll is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.scroll_anim.is_some()
    }

    /// Dispatch one input event.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Vec<Effect> {
        match event {
            Event::Loaded => {
                self.preload = false;
                Vec::new()
            }
            Event::Pointer(pointer) => {
                self.handle_pointer(pointer);
                Vec::new()
            }
            Event::Scroll(metrics) => {
                self.handle_scroll(metrics, now);
                Vec::new()
            }
            Event::AnchorActivated(href) => self.handle_anchor(&href),
        }
    }

    /// Advance animations by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Vec<Effect> {
        if let Some(sc) = &mut self.showcase {
            sc.widget.tick(dt);
        }
        let mut effects = Vec::new();
        if let Some(anim) = &mut self.scroll_anim {
            anim.tick(dt);
            let position = anim.position();
            self.scroll.scroll_top = position;
            effects.push(Effect::ScrollTo(position));
            if anim.is_complete() {
                self.scroll_anim = None;
            }
        }
        effects
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) {
        let scroll_top = self.scroll.scroll_top;
        let Some(sc) = &mut self.showcase else {
            return;
        };
        // Pointer positions arrive in viewport coordinates; layout rects
        // are document-space.
        let x = pointer.x;
        let y = pointer.y + scroll_top;
        let inside = sc.layout.container.contains(x, y);

        match pointer.kind {
            PointerKind::Moved => {
                if sc.pointer_inside && !inside {
                    sc.widget.pointer_left();
                }
                if inside
                    && let Some(card) = sc.layout.cards.iter().position(|c| c.contains(x, y))
                {
                    sc.widget.pointer_over_card(card);
                }
                sc.pointer_inside = inside;
            }
            PointerKind::Clicked => {
                if inside {
                    // A card click consumes the event before the
                    // document-level outside-click handling.
                    match sc.layout.cards.iter().position(|c| c.contains(x, y)) {
                        Some(card) => sc.widget.card_clicked(card),
                        None => sc.widget.container_clicked(),
                    }
                } else {
                    sc.widget.outside_click();
                }
            }
        }
    }

    fn handle_scroll(&mut self, metrics: ScrollMetrics, now: Instant) {
        self.scroll = metrics;
        if self.reveal_throttle.try_fire(now) {
            let newly = self.reveal.check(&metrics);
            if newly > 0 {
                debug!(newly, "revealed elements");
            }
        }
        if let Some(navbar) = &mut self.navbar
            && self.navbar_throttle.try_fire(now)
            && navbar.on_scroll(&metrics)
        {
            debug!(scrolled = navbar.is_scrolled(), "navbar state changed");
        }
        if let Some(button) = &mut self.button
            && self.button_throttle.try_fire(now)
            && button.on_scroll(&metrics)
        {
            debug!(hidden = button.is_hidden(), "floating button state changed");
        }
    }

    fn handle_anchor(&mut self, href: &str) -> Vec<Effect> {
        match self.anchors.activate(href, self.scroll.scroll_top) {
            AnchorOutcome::Default => vec![Effect::DefaultNavigation(href.to_owned())],
            AnchorOutcome::Suppressed => Vec::new(),
            AnchorOutcome::Animate(anim) => {
                debug!(href, target = anim.target(), "smooth scroll started");
                self.scroll_anim = Some(anim);
                Vec::new()
            }
        }
    }
}
