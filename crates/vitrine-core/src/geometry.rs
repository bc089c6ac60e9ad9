#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.
//!
//! The page lives in two coordinate systems: *viewport* coordinates (origin
//! at the top-left of the visible area) and *document* coordinates (origin
//! at the top of the page). [`ScrollMetrics`] converts between them.

/// A rectangle in pixel coordinates (origin at top-left, y grows downward).
///
/// Used for widget bounding boxes and pointer hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width.max(0.0)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height.max(0.0)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// The visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Scroll position of the viewport within the document.
///
/// Snapshot of the three quantities every threshold watcher needs: how far
/// the page has scrolled, how tall the visible area is, and how tall the
/// whole document is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the document, in pixels.
    pub scroll_top: f32,
    /// Height of the visible area, in pixels.
    pub viewport_height: f32,
    /// Total height of the document, in pixels.
    pub document_height: f32,
}

impl ScrollMetrics {
    /// Create new scroll metrics.
    #[inline]
    pub const fn new(scroll_top: f32, viewport_height: f32, document_height: f32) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Metrics for an unscrolled viewport over a document of the same height.
    #[inline]
    pub const fn at_top(viewport_height: f32) -> Self {
        Self::new(0.0, viewport_height, viewport_height)
    }

    /// Distance from the bottom of the visible area to the bottom of the
    /// document. Zero when scrolled all the way down; never negative.
    #[inline]
    pub fn distance_to_bottom(&self) -> f32 {
        (self.document_height - self.scroll_top - self.viewport_height).max(0.0)
    }

    /// Convert a document-space y offset into viewport space.
    #[inline]
    pub fn to_viewport_y(&self, document_y: f32) -> f32 {
        document_y - self.scroll_top
    }
}
