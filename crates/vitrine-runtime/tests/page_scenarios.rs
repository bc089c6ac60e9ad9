//! End-to-end scenarios for the page controller, driven through the public
//! event surface the way a host would drive it.

use std::time::{Duration, Instant};

use vitrine_core::event::{Event, PointerEvent};
use vitrine_core::geometry::{Rect, ScrollMetrics, Viewport};
use vitrine_runtime::{Effect, Page, PageConfig, PageLayout, ShowcaseLayout};
use vitrine_widgets::anchor::AnchorTarget;
use vitrine_widgets::showcase::{Showcase, ShowcaseMode};

const FADE: Duration = Duration::from_millis(500);

/// Four 100px-wide cards side by side inside a container at document
/// (100, 100), 400x300.
fn four_card_layout() -> PageLayout {
    PageLayout {
        showcase: Some(ShowcaseLayout {
            container: Rect::new(100.0, 100.0, 400.0, 300.0),
            cards: (0..4)
                .map(|i| Rect::new(100.0 + 100.0 * i as f32, 100.0, 100.0, 300.0))
                .collect(),
        }),
        navbar: true,
        floating_button: true,
        reveal_tops: vec![650.0, 1500.0],
        anchors: vec![AnchorTarget::new("contact", 2000.0)],
        document_height: 3000.0,
    }
}

fn card_active(page: &Page, index: usize) -> bool {
    page.showcase()
        .and_then(|s| s.card_visual(index))
        .map(|v| v.active)
        .unwrap_or(false)
}

fn desktop_spread(page: &Page) -> bool {
    match page.showcase() {
        Some(Showcase::Desktop(s)) => s.is_spread(),
        _ => false,
    }
}

fn visible_cards(page: &Page) -> Vec<usize> {
    let showcase = page.showcase().unwrap();
    (0..showcase.card_count())
        .filter(|&i| showcase.card_visual(i).unwrap().opacity > 0.0)
        .collect()
}

#[test]
fn desktop_spread_pop_and_reset() {
    // Viewport width 1024 => desktop mode.
    let mut page = Page::new(
        four_card_layout(),
        Viewport::new(1024.0, 800.0),
        PageConfig::default(),
    );
    let t0 = Instant::now();
    assert_eq!(page.showcase().unwrap().mode(), ShowcaseMode::Desktop);

    // Hover card 0 (document 150,200 == viewport 150,200 while unscrolled).
    page.handle_event(Event::Pointer(PointerEvent::moved(150.0, 200.0)), t0);
    assert!(desktop_spread(&page));

    // Click card 2.
    page.handle_event(Event::Pointer(PointerEvent::clicked(350.0, 200.0)), t0);
    assert!(card_active(&page, 2));

    // Click card 2 again: no card active, spread unchanged.
    page.handle_event(Event::Pointer(PointerEvent::clicked(350.0, 200.0)), t0);
    assert!(!card_active(&page, 2));
    assert!((0..4).all(|i| !card_active(&page, i)));
    assert!(desktop_spread(&page));

    // Click outside the container: spread cleared, no card active.
    page.handle_event(Event::Pointer(PointerEvent::clicked(900.0, 700.0)), t0);
    assert!(!desktop_spread(&page));
    assert!((0..4).all(|i| !card_active(&page, i)));
}

#[test]
fn mobile_tap_slideshow() {
    // Viewport width 375 => mobile mode.
    let mut page = Page::new(
        four_card_layout(),
        Viewport::new(375.0, 667.0),
        PageConfig::default(),
    );
    let t0 = Instant::now();
    assert_eq!(page.showcase().unwrap().mode(), ShowcaseMode::Mobile);

    // Init: only card 0 visible.
    assert_eq!(visible_cards(&page), vec![0]);

    // Tap once: after the 500ms fade-out, card 0 is hidden and card 1 is
    // elevated and fading in.
    page.handle_event(Event::Pointer(PointerEvent::clicked(200.0, 200.0)), t0);
    page.tick(FADE);
    let showcase = page.showcase().unwrap();
    assert_eq!(showcase.card_visual(0).unwrap().opacity, 0.0);
    let incoming = showcase.card_visual(1).unwrap();
    assert!(incoming.elevated);
    assert!(incoming.transitioning);

    // Let the fade-in settle, tap again: index becomes 2.
    page.tick(FADE);
    page.handle_event(Event::Pointer(PointerEvent::clicked(200.0, 200.0)), t0);
    page.tick(FADE);
    page.tick(FADE);
    assert_eq!(visible_cards(&page), vec![2]);
}

#[test]
fn mode_is_immutable_after_init() {
    // Mode is chosen from the width at construction; later scroll/pointer
    // traffic never re-evaluates it.
    let mut page = Page::new(
        four_card_layout(),
        Viewport::new(375.0, 667.0),
        PageConfig::default(),
    );
    let t0 = Instant::now();
    page.handle_event(
        Event::Scroll(ScrollMetrics::new(0.0, 1200.0, 3000.0)),
        t0,
    );
    assert_eq!(page.showcase().unwrap().mode(), ShowcaseMode::Mobile);
}

#[test]
fn reveal_threshold_scenario() {
    // Element top at viewportHeight - 150 reveals; at viewportHeight - 50
    // it does not.
    let mut layout = four_card_layout();
    layout.reveal_tops = vec![800.0 - 150.0, 800.0 - 50.0];
    let page = Page::new(layout, Viewport::new(1024.0, 800.0), PageConfig::default());
    assert!(page.reveal().is_revealed(0));
    assert!(!page.reveal().is_revealed(1));
}

#[test]
fn floating_button_hides_near_footer_and_returns() {
    let mut page = Page::new(
        four_card_layout(),
        Viewport::new(1024.0, 800.0),
        PageConfig::default(),
    );
    let t0 = Instant::now();

    // 3000 - 2100 - 800 = 100px from the bottom: hide.
    page.handle_event(Event::Scroll(ScrollMetrics::new(2100.0, 800.0, 3000.0)), t0);
    assert_eq!(page.button_visual().unwrap().opacity, 0.0);

    // Back up the page (outside the throttle window): show.
    page.handle_event(
        Event::Scroll(ScrollMetrics::new(300.0, 800.0, 3000.0)),
        t0 + Duration::from_millis(150),
    );
    assert_eq!(page.button_visual().unwrap().opacity, 1.0);
}

#[test]
fn smooth_scroll_aligns_target_top_with_viewport_top() {
    let mut page = Page::new(
        four_card_layout(),
        Viewport::new(1024.0, 800.0),
        PageConfig::default(),
    );
    let t0 = Instant::now();

    let effects = page.handle_event(Event::AnchorActivated("#contact".to_owned()), t0);
    assert!(effects.is_empty(), "default jump must be suppressed");

    let mut final_position = None;
    for _ in 0..60 {
        for effect in page.tick(Duration::from_millis(16)) {
            if let Effect::ScrollTo(y) = effect {
                final_position = Some(y);
            }
        }
    }
    assert_eq!(final_position, Some(2000.0));
    assert!(!page.is_scrolling());
}

#[test]
fn bare_anchor_performs_default_navigation() {
    let mut page = Page::new(
        four_card_layout(),
        Viewport::new(1024.0, 800.0),
        PageConfig::default(),
    );
    let effects = page.handle_event(Event::AnchorActivated("#".to_owned()), Instant::now());
    assert_eq!(effects, vec![Effect::DefaultNavigation("#".to_owned())]);
    assert!(page.tick(Duration::from_millis(16)).is_empty());
}
