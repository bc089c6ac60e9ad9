#![forbid(unsafe_code)]

//! Mobile tap-slideshow controller.
//!
//! Exactly one card is visible at a time. A tap fades the current card out,
//! hides it, then fades the next card (index + 1 modulo count) in. The two
//! phases run as a [`Sequence`] of fades, so leftover tick time at the
//! fade-out/in seam is forwarded and the pair always totals
//! `2 × fade_duration`.
//!
//! A tap while a transition is in flight is dropped: the machine accepts an
//! advance only in [`FadePhase::Idle`].

use std::time::Duration;

use vitrine_core::animation::{Animation, Fade, Sequence, ease_in, ease_out, sequence};

use super::{Card, CardFlags, CardVisual, ShowcaseConfig};

/// Transition phase of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// No transition running; taps are accepted.
    Idle,
    /// The current card is fading out.
    FadingOut,
    /// The next card is fading in.
    FadingIn,
}

#[derive(Debug, Clone)]
enum Transition {
    Idle,
    Running {
        anim: Sequence<Fade, Fade>,
        /// Whether the card swap at the fade-out/in seam has happened.
        swapped: bool,
    },
}

/// State machine for the mobile showcase mode.
#[derive(Debug, Clone)]
pub struct MobileShowcase {
    cards: Vec<Card>,
    /// Slideshow index, wraps modulo card count.
    current: usize,
    transition: Transition,
    config: ShowcaseConfig,
}

impl MobileShowcase {
    /// Create the controller with card 0 visible. Callers guarantee
    /// `card_count > 0`.
    pub(crate) fn new(card_count: usize, config: ShowcaseConfig) -> Self {
        let mut cards = vec![Card::hidden(); card_count];
        cards[0] = Card::visible();
        Self {
            cards,
            current: 0,
            transition: Transition::Idle,
            config,
        }
    }

    /// Number of cards.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The card currently shown (the fading-out card until it is hidden).
    pub fn visible_index(&self) -> usize {
        self.current
    }

    /// Current transition phase.
    pub fn phase(&self) -> FadePhase {
        match &self.transition {
            Transition::Idle => FadePhase::Idle,
            Transition::Running { anim, .. } => {
                if anim.in_second() {
                    FadePhase::FadingIn
                } else {
                    FadePhase::FadingOut
                }
            }
        }
    }

    /// Whether the machine accepts a tap.
    pub fn is_idle(&self) -> bool {
        matches!(self.transition, Transition::Idle)
    }

    /// Tap input: start advancing to the next card.
    ///
    /// Dropped unless the machine is idle.
    pub fn advance(&mut self) {
        if !self.is_idle() {
            return;
        }
        if self.cards.len() == 1 {
            // Nothing to advance to; stay put rather than fade a card
            // out and back in on itself.
            return;
        }
        self.cards[self.current].flags.insert(CardFlags::TRANSITIONING);
        let duration = self.config.fade_duration;
        self.transition = Transition::Running {
            anim: sequence(
                Fade::new(duration).easing(ease_in),
                Fade::new(duration).easing(ease_out),
            ),
            swapped: false,
        };
    }

    /// Advance any in-flight transition by `dt`.
    ///
    /// The sequence hands leftover tick time across the seam itself; this
    /// only has to swap the cards once the fade-out half is past.
    pub fn tick(&mut self, dt: Duration) {
        let (needs_swap, done) = match &mut self.transition {
            Transition::Idle => return,
            Transition::Running { anim, swapped } => {
                anim.tick(dt);
                let needs_swap = anim.in_second() && !*swapped;
                if needs_swap {
                    *swapped = true;
                }
                (needs_swap, anim.is_complete())
            }
        };
        if needs_swap {
            self.swap_cards();
        }
        if done {
            self.cards[self.current].flags.remove(CardFlags::TRANSITIONING);
            self.transition = Transition::Idle;
        }
    }

    /// Visual snapshot for the card at `index`.
    pub fn card_visual(&self, index: usize) -> Option<CardVisual> {
        let card = self.cards.get(index)?;
        let visible = card.flags.contains(CardFlags::VISIBLE);
        let opacity = if !visible {
            0.0
        } else if index == self.current {
            match &self.transition {
                Transition::Idle => 1.0,
                Transition::Running { anim, .. } => {
                    if anim.in_second() {
                        anim.value()
                    } else {
                        1.0 - anim.value()
                    }
                }
            }
        } else {
            1.0
        };
        Some(CardVisual {
            opacity,
            elevated: visible,
            active: false,
            transition_delay: Duration::ZERO,
            transitioning: card.flags.contains(CardFlags::TRANSITIONING),
        })
    }

    /// Hide the faded-out card, move the index and elevate the next card.
    fn swap_cards(&mut self) {
        self.cards[self.current]
            .flags
            .remove(CardFlags::VISIBLE | CardFlags::TRANSITIONING);
        self.current = (self.current + 1) % self.cards.len();
        self.cards[self.current]
            .flags
            .insert(CardFlags::VISIBLE | CardFlags::TRANSITIONING);
    }
}
