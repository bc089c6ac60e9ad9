#![forbid(unsafe_code)]

//! One-way scroll reveal.
//!
//! Elements tagged as revealable become active once their top edge rises
//! above `viewport height − offset`. Activation is monotonic: once revealed
//! an element never reverts, and re-checking a revealed element is a no-op.
//! The page controller runs a check at ready and on every throttled scroll.

use vitrine_core::geometry::ScrollMetrics;

/// Fixed tuning constants for scroll reveal.
#[derive(Debug, Clone, Copy)]
pub struct RevealConfig {
    /// Pixels from the bottom of the viewport before an element reveals.
    /// Default: 100 px.
    pub offset: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { offset: 100.0 }
    }
}

#[derive(Debug, Clone, Copy)]
struct RevealEntry {
    /// Top edge in document coordinates.
    document_top: f32,
    revealed: bool,
}

/// The set of revealable elements on the page.
#[derive(Debug, Clone)]
pub struct RevealSet {
    entries: Vec<RevealEntry>,
    config: RevealConfig,
}

impl RevealSet {
    /// Create the set from document-space top offsets, in page order.
    pub fn new(document_tops: impl IntoIterator<Item = f32>, config: RevealConfig) -> Self {
        Self {
            entries: document_tops
                .into_iter()
                .map(|document_top| RevealEntry {
                    document_top,
                    revealed: false,
                })
                .collect(),
            config,
        }
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no elements are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the element at `index` has been revealed.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.revealed)
    }

    /// How many elements have been revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.revealed).count()
    }

    /// Test every element against the current scroll position.
    ///
    /// Returns the number of newly revealed elements. Already-revealed
    /// elements are left untouched.
    pub fn check(&mut self, metrics: &ScrollMetrics) -> usize {
        let threshold = metrics.viewport_height - self.config.offset;
        let mut newly = 0;
        for entry in &mut self.entries {
            if entry.revealed {
                continue;
            }
            if metrics.to_viewport_y(entry.document_top) < threshold {
                entry.revealed = true;
                newly += 1;
            }
        }
        newly
    }
}
