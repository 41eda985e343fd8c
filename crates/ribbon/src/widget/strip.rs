//! Horizontal item strip layout.
//!
//! This module provides [`ItemStrip`], the ordered collection of item views
//! that the [`Carousel`](super::widgets::Carousel) arranges left-to-right.
//! The strip owns placement: each appended item is assigned a frame in
//! content coordinates, with a fixed padding between consecutive frames.
//! Items are opaque to the strip beyond their natural size; rendering is
//! the host's concern.
//!
//! The collection is append/clear-only. A data source change rebuilds the
//! whole strip rather than diffing it.

use std::any::Any;
use std::sync::Arc;

use ribbon_core::{Point, Rect, Size};

/// Default spacing between consecutive items, in logical units.
pub const DEFAULT_PADDING: f32 = 10.0;

/// A renderable child element displayed in the strip.
///
/// Implementations are provided by the host application. The strip only
/// needs the item's natural size for placement; everything else about the
/// item (its pixels, its identity) belongs to the host, which can recover
/// the concrete type through [`as_any`](Self::as_any).
pub trait ItemView: Send + Sync {
    /// The size the item wants to be displayed at.
    fn natural_size(&self) -> Size;

    /// Get the item as `Any` for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// An ordered sequence of items with horizontal placement.
///
/// Frames are assigned in content coordinates: the first item starts at
/// x = 0, each subsequent item starts `padding` after the previous item's
/// right edge, and every item sits at y = 0 with its natural height.
/// Display order is insertion order; item identity is the position index.
pub struct ItemStrip {
    /// Items in display order (left to right).
    items: Vec<Arc<dyn ItemView>>,

    /// Frame assigned to each item, parallel to `items`.
    frames: Vec<Rect>,

    /// Spacing between consecutive frames.
    padding: f32,
}

impl Default for ItemStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStrip {
    /// Create an empty strip with the default padding.
    pub fn new() -> Self {
        Self::with_padding(DEFAULT_PADDING)
    }

    /// Create an empty strip with the given padding.
    pub fn with_padding(padding: f32) -> Self {
        Self {
            items: Vec::new(),
            frames: Vec::new(),
            padding,
        }
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the strip holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items, dropping the strip's references to them.
    ///
    /// The host may hold its own clones of the item `Arc`s; those are
    /// unaffected.
    pub fn clear(&mut self) {
        self.items.clear();
        self.frames.clear();
    }

    /// Append `item` as the new last element, with the given display width.
    ///
    /// The item's frame starts `padding` after the previous item's right
    /// edge (at x = 0 for the first item) and uses the item's natural
    /// height. The caller supplies `width`, normally the item's natural
    /// width; it must not be negative.
    pub fn append(&mut self, item: Arc<dyn ItemView>, width: f32) {
        debug_assert!(width >= 0.0, "item width must be non-negative");

        let x = match self.frames.last() {
            Some(last) => last.right() + self.padding,
            None => 0.0,
        };
        let height = item.natural_size().height;

        self.frames.push(Rect::new(x, 0.0, width, height));
        self.items.push(item);
    }

    /// Get the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. An out-of-range index is a logic error
    /// in the caller, not a recoverable condition.
    pub fn item_at(&self, index: usize) -> &Arc<dyn ItemView> {
        &self.items[index]
    }

    /// Get the frame assigned to the item at `index`, in content
    /// coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn frame_of(&self, index: usize) -> Rect {
        self.frames[index]
    }

    /// Get the geometric center of the item's frame, in content
    /// coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn center_of(&self, index: usize) -> Point {
        self.frames[index].center()
    }

    /// Find the first item whose frame contains `point`.
    ///
    /// The scan is a stable left-to-right pass; the lowest matching index
    /// wins. Returns `None` if the point falls in padding or outside the
    /// content entirely.
    pub fn index_at(&self, point: Point) -> Option<usize> {
        self.frames.iter().position(|frame| frame.contains(point))
    }

    /// Find the first item whose frame overlaps `rect`.
    ///
    /// Used by the carousel's centering probe. Returns `None` when the
    /// rect only covers padding or empty space.
    pub fn first_intersecting(&self, rect: Rect) -> Option<usize> {
        self.frames.iter().position(|frame| frame.intersects(&rect))
    }

    /// Total size of the laid-out content.
    ///
    /// Width is the sum of item widths plus `(len - 1) * padding`; height
    /// is the tallest item's height. Empty strips report zero.
    pub fn content_size(&self) -> Size {
        let width = self.frames.last().map_or(0.0, Rect::right);
        let height = self
            .frames
            .iter()
            .map(Rect::height)
            .fold(0.0_f32, f32::max);
        Size::new(width, height)
    }

    /// Get the spacing between consecutive items.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Set the spacing between consecutive items.
    ///
    /// Changing the padding re-lays-out every frame's x position; widths
    /// and heights are untouched.
    pub fn set_padding(&mut self, padding: f32) {
        if (self.padding - padding).abs() <= f32::EPSILON {
            return;
        }
        self.padding = padding;

        let mut x = 0.0;
        for frame in &mut self.frames {
            frame.origin.x = x;
            x = frame.right() + padding;
        }

        tracing::trace!(
            target: "ribbon::strip",
            padding,
            items = self.items.len(),
            "strip re-laid out"
        );
    }
}

// Ensure ItemStrip is Send + Sync
static_assertions::assert_impl_all!(ItemStrip: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedItem(Size);

    impl ItemView for FixedItem {
        fn natural_size(&self) -> Size {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn item(width: f32, height: f32) -> Arc<dyn ItemView> {
        Arc::new(FixedItem(Size::new(width, height)))
    }

    /// Strip with items of widths 10, 20, 30 and padding 10.
    fn sample_strip() -> ItemStrip {
        let mut strip = ItemStrip::new();
        for width in [10.0, 20.0, 30.0] {
            strip.append(item(width, 20.0), width);
        }
        strip
    }

    #[test]
    fn test_append_assigns_padded_frames() {
        let strip = sample_strip();

        assert_eq!(strip.len(), 3);
        assert_eq!(strip.frame_of(0), Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(strip.frame_of(1), Rect::new(20.0, 0.0, 20.0, 20.0));
        assert_eq!(strip.frame_of(2), Rect::new(50.0, 0.0, 30.0, 20.0));
    }

    #[test]
    fn test_content_size_invariant() {
        let strip = sample_strip();

        // Sum of widths plus (count - 1) * padding.
        let expected = 10.0 + 20.0 + 30.0 + 2.0 * DEFAULT_PADDING;
        assert_eq!(strip.content_size(), Size::new(expected, 20.0));
        assert_eq!(ItemStrip::new().content_size(), Size::ZERO);
    }

    #[test]
    fn test_center_of_is_frame_midpoint() {
        let strip = sample_strip();
        assert_eq!(strip.center_of(1), Point::new(30.0, 10.0));
    }

    #[test]
    fn test_index_at_first_match() {
        let strip = sample_strip();

        assert_eq!(strip.index_at(Point::new(5.0, 5.0)), Some(0));
        assert_eq!(strip.index_at(Point::new(20.0, 0.0)), Some(1));
        // Point in the padding gap between items 0 and 1.
        assert_eq!(strip.index_at(Point::new(15.0, 5.0)), None);
        // Beyond the last item.
        assert_eq!(strip.index_at(Point::new(100.0, 5.0)), None);
    }

    #[test]
    fn test_first_intersecting() {
        let strip = sample_strip();

        let probe = Rect::new(25.0, 0.0, 10.0, 20.0);
        assert_eq!(strip.first_intersecting(probe), Some(1));

        // Entirely inside the padding gap.
        let gap = Rect::new(11.0, 0.0, 8.0, 20.0);
        assert_eq!(strip.first_intersecting(gap), None);
    }

    #[test]
    fn test_clear_discards_items() {
        let mut strip = sample_strip();
        strip.clear();

        assert!(strip.is_empty());
        assert_eq!(strip.content_size(), Size::ZERO);
        assert_eq!(strip.index_at(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_set_padding_relays_out_frames() {
        let mut strip = sample_strip();
        strip.set_padding(0.0);

        assert_eq!(strip.frame_of(0).origin.x, 0.0);
        assert_eq!(strip.frame_of(1).origin.x, 10.0);
        assert_eq!(strip.frame_of(2).origin.x, 30.0);
        assert_eq!(strip.content_size().width, 60.0);
    }

    #[test]
    fn test_item_identity_preserved() {
        let mut strip = ItemStrip::new();
        let first = item(10.0, 20.0);
        strip.append(first.clone(), 10.0);

        assert!(Arc::ptr_eq(strip.item_at(0), &first));
    }

    #[test]
    fn test_zero_width_item() {
        let mut strip = ItemStrip::new();
        strip.append(item(0.0, 20.0), 0.0);
        strip.append(item(10.0, 20.0), 10.0);

        assert_eq!(strip.frame_of(0), Rect::new(0.0, 0.0, 0.0, 20.0));
        assert_eq!(strip.frame_of(1).origin.x, DEFAULT_PADDING);
        // A zero-width frame contains no point.
        assert_eq!(strip.index_at(Point::new(0.0, 5.0)), None);
    }

    #[test]
    #[should_panic]
    fn test_item_at_out_of_range_panics() {
        let strip = sample_strip();
        let _ = strip.item_at(3);
    }

    #[test]
    #[should_panic]
    fn test_frame_of_out_of_range_panics() {
        let strip = sample_strip();
        let _ = strip.frame_of(usize::MAX);
    }
}
