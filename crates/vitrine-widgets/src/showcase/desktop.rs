#![forbid(unsafe_code)]

//! Desktop spread-and-pop controller.
//!
//! Hovering the first card fans the stack out; each card's transition is
//! staggered by `index × stagger` for a cascading effect. Collapsing (on
//! pointer leave or outside click) reverses the stagger so the stack folds
//! back in from the far end, then zeroes every delay once the last
//! transition has had time to finish.

use std::time::Duration;

use super::{Card, CardFlags, CardVisual, ShowcaseConfig};

/// State machine for the desktop showcase mode.
#[derive(Debug, Clone)]
pub struct DesktopShowcase {
    cards: Vec<Card>,
    spread: bool,
    /// Time left until collapse delay offsets are zeroed.
    collapse_remaining: Option<Duration>,
    config: ShowcaseConfig,
}

impl DesktopShowcase {
    /// Create the controller. Callers guarantee `card_count > 0`.
    pub(crate) fn new(card_count: usize, config: ShowcaseConfig) -> Self {
        Self {
            cards: vec![Card::visible(); card_count],
            spread: false,
            collapse_remaining: None,
            config,
        }
    }

    /// Number of cards.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stack is fanned out.
    pub fn is_spread(&self) -> bool {
        self.spread
    }

    /// The popped card, if any.
    pub fn active_card(&self) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.flags.contains(CardFlags::ACTIVE))
    }

    /// Whether a collapse delay reset is pending.
    pub fn is_collapsing(&self) -> bool {
        self.collapse_remaining.is_some()
    }

    /// Hover input. Only the first card triggers the spread.
    pub fn hover_card(&mut self, index: usize) {
        if index != 0 || self.spread {
            return;
        }
        self.spread = true;
        self.collapse_remaining = None;
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.delay = self.config.stagger * i as u32;
        }
    }

    /// The pointer left the widget bounding box: fold the stack back in.
    pub fn pointer_left(&mut self) {
        self.collapse();
    }

    /// A click outside the widget: collapse the spread and clear any popped
    /// card. Inert when the stack is already folded with nothing popped.
    pub fn outside_click(&mut self) {
        self.collapse();
    }

    /// Toggle the pop state of the card at `index`.
    ///
    /// Activating a card deactivates every other card first, so at most one
    /// is active; clicking the already-active card leaves none active. The
    /// spread flag is untouched.
    pub fn click(&mut self, index: usize) {
        let Some(was_active) = self
            .cards
            .get(index)
            .map(|c| c.flags.contains(CardFlags::ACTIVE))
        else {
            return;
        };
        for card in &mut self.cards {
            card.flags.remove(CardFlags::ACTIVE);
        }
        if !was_active {
            self.cards[index].flags.insert(CardFlags::ACTIVE);
        }
    }

    /// Advance the collapse timer; zero all delays once it elapses.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = self.collapse_remaining {
            match remaining.checked_sub(dt) {
                Some(left) if !left.is_zero() => self.collapse_remaining = Some(left),
                _ => {
                    for card in &mut self.cards {
                        card.delay = Duration::ZERO;
                    }
                    self.collapse_remaining = None;
                }
            }
        }
    }

    /// Visual snapshot for the card at `index`.
    pub fn card_visual(&self, index: usize) -> Option<CardVisual> {
        let card = self.cards.get(index)?;
        let active = card.flags.contains(CardFlags::ACTIVE);
        Some(CardVisual {
            opacity: 1.0,
            elevated: active,
            active,
            transition_delay: card.delay,
            transitioning: false,
        })
    }

    fn collapse(&mut self) {
        // Already folded with nothing popped: arming the delay reset here
        // would leave an idle stack reporting stale stagger offsets.
        if !self.spread && self.active_card().is_none() {
            return;
        }
        self.spread = false;
        let n = self.cards.len();
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.flags.remove(CardFlags::ACTIVE);
            // Reverse stagger: the topmost card folds back first.
            card.delay = self.config.stagger * (n - 1 - i) as u32;
        }
        // Delays are zeroed after the slowest transition has finished.
        let slowest = self.config.stagger * (n - 1) as u32;
        self.collapse_remaining = Some(slowest + self.config.collapse_duration);
    }
}
