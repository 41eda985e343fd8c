//! Carousel widget implementation.
//!
//! This module provides [`Carousel`], a horizontal scroller that presents a
//! strip of items supplied by a [`CarouselDataSource`], supports
//! click-to-select, and snaps the strip onto the item nearest the viewport
//! center when a drag/zoom gesture ends.
//!
//! The carousel does not scroll itself: it computes the target offset and
//! emits it on [`scroll_requested`](Carousel::scroll_requested); the host
//! applies (and may clamp) the offset, feeding the applied value back via
//! [`set_scroll_x`](Carousel::set_scroll_x).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ribbon::widget::widgets::{Carousel, CarouselDataSource};
//! use ribbon::widget::{ItemView, Widget};
//! use ribbon::{Point, Rect, Size};
//!
//! struct Tile(Size);
//!
//! impl ItemView for Tile {
//!     fn natural_size(&self) -> Size { self.0 }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//!
//! struct Tiles;
//!
//! impl CarouselDataSource for Tiles {
//!     fn len(&self) -> usize { 3 }
//!     fn view_at(&self, index: usize) -> Arc<dyn ItemView> {
//!         Arc::new(Tile(Size::new(10.0 * (index + 1) as f32, 20.0)))
//!     }
//! }
//!
//! let source: Arc<dyn CarouselDataSource> = Arc::new(Tiles);
//! let mut carousel = Carousel::new().with_data_source(Arc::downgrade(&source));
//! carousel.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
//!
//! carousel.item_selected.connect(|&index| println!("selected {index}"));
//!
//! carousel.reload();
//! carousel.handle_click(Point::new(25.0, 5.0)); // prints "selected 1"
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use ribbon_core::{ConnectionGuard, Point, Rect, Signal};

use crate::widget::events::{GestureState, MouseButton, WidgetEvent};
use crate::widget::geometry::SizeHint;
use crate::widget::strip::{ItemStrip, ItemView};
use crate::widget::traits::Widget;
use crate::widget::WidgetBase;

/// Default item edge length, used as the carousel's minimum size hint.
pub const DEFAULT_ITEM_DIMENSION: f32 = 100.0;

/// Supplier of the carousel's items.
///
/// The data source is consulted only during [`Carousel::reload`]: once for
/// the count, then exactly once per index, in order. Every returned item
/// must have a defined natural size.
///
/// The carousel holds the source behind a [`Weak`] reference and does not
/// manage its lifetime; a dropped source simply makes `reload()` a no-op.
pub trait CarouselDataSource: Send + Sync {
    /// Number of items to present.
    fn len(&self) -> usize;

    /// The item that should appear at `index`.
    fn view_at(&self, index: usize) -> Arc<dyn ItemView>;
}

/// A horizontal item scroller with click-to-select and snap-to-center.
///
/// # Signals
///
/// - `item_selected(usize)`: Emitted when an item is chosen, by click or by
///   post-gesture centering. Connecting to this signal is the delegate
///   role; with no connections the notification is silently dropped.
/// - `scroll_requested(Point)`: Emitted with the exact, unclamped offset
///   that would center the target item. Best-effort: the host owns the
///   viewport and may clamp before applying.
/// - `scrolled(f32)`: Emitted when the applied scroll offset changes.
///
/// # Coordinate Systems
///
/// The widget's own geometry is the viewport. Click points arrive in
/// widget-local (viewport) coordinates and are translated by the current
/// scroll offset into content coordinates before hit-testing against the
/// strip.
pub struct Carousel {
    /// Widget base.
    base: WidgetBase,

    /// The laid-out item strip, in content coordinates.
    strip: ItemStrip,

    /// Item supplier. Non-owning; unset or dead makes `reload` a no-op.
    data_source: Option<Weak<dyn CarouselDataSource>>,

    /// Horizontal scroll offset last applied by the host.
    scroll_x: f32,

    /// Currently selected item index, if any.
    selected: Option<usize>,

    /// Signal for selection changes (click or centering).
    pub item_selected: Signal<usize>,

    /// Signal carrying requested viewport offsets.
    pub scroll_requested: Signal<Point>,

    /// Signal for applied scroll offset changes.
    pub scrolled: Signal<f32>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    /// Create a new carousel with no data source and default padding.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            strip: ItemStrip::new(),
            data_source: None,
            scroll_x: 0.0,
            selected: None,
            item_selected: Signal::new(),
            scroll_requested: Signal::new(),
            scrolled: Signal::new(),
        }
    }

    /// Set the inter-item padding using builder pattern.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.strip.set_padding(padding);
        self
    }

    /// Set the data source using builder pattern.
    pub fn with_data_source(mut self, source: Weak<dyn CarouselDataSource>) -> Self {
        self.set_data_source(Some(source));
        self
    }

    // =========================================================================
    // Data Source
    // =========================================================================

    /// Set or clear the data source.
    ///
    /// The carousel keeps only a weak reference. Call [`reload`](Self::reload)
    /// afterwards to rebuild the strip from the new source.
    pub fn set_data_source(&mut self, source: Option<Weak<dyn CarouselDataSource>>) {
        self.data_source = source;
    }

    /// Discard all current items and rebuild the strip from the data source.
    ///
    /// Items are fetched synchronously, one per index, in order; strip
    /// order equals data source order. Any previous selection is cleared.
    ///
    /// With no data source set, or with a dropped one, this does nothing:
    /// the current items stay and no signal is emitted.
    pub fn reload(&mut self) {
        let Some(source) = self.data_source.as_ref().and_then(Weak::upgrade) else {
            tracing::debug!(target: "ribbon::carousel", "reload without data source, keeping current items");
            return;
        };

        self.strip.clear();
        let count = source.len();
        for index in 0..count {
            let view = source.view_at(index);
            let width = view.natural_size().width;
            self.strip.append(view, width);
        }
        self.selected = None;

        tracing::debug!(target: "ribbon::carousel", items = count, "carousel reloaded");
    }

    // =========================================================================
    // Item Access
    // =========================================================================

    /// Number of items currently presented.
    pub fn len(&self) -> usize {
        self.strip.len()
    }

    /// Check if the carousel presents no items.
    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    /// Get the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn view_at(&self, index: usize) -> &Arc<dyn ItemView> {
        self.strip.item_at(index)
    }

    /// Get the underlying item strip.
    pub fn strip(&self) -> &ItemStrip {
        &self.strip
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The currently selected item index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Programmatically select the item at `index`.
    ///
    /// Follows the click path: records the selection, emits
    /// [`item_selected`](Self::item_selected), then requests centering.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.strip.len(),
            "selection index {index} out of range for {} items",
            self.strip.len()
        );
        self.selected = Some(index);
        self.item_selected.emit(index);
        self.scroll_to_center(index);
    }

    /// Handle a click at `point` in widget-local coordinates.
    ///
    /// The point is translated by the current scroll offset and hit-tested
    /// against the strip; the first (lowest-index) item whose frame
    /// contains it becomes the selection. A click that lands on padding or
    /// empty space is a silent no-op.
    pub fn handle_click(&mut self, point: Point) {
        if !self.base.contains_point(point) {
            return;
        }

        let content_point = Point::new(point.x + self.scroll_x, point.y);
        let Some(index) = self.strip.index_at(content_point) else {
            return;
        };

        self.selected = Some(index);
        tracing::debug!(target: "ribbon::carousel", index, "item selected by click");
        self.item_selected.emit(index);
        self.scroll_to_center(index);
    }

    // =========================================================================
    // Centering
    // =========================================================================

    /// Request the scroll offset that centers the item at `index`.
    ///
    /// Emits [`scroll_requested`](Self::scroll_requested) with exactly
    /// `center_of(index).x - viewport_width / 2`. The value is not clamped
    /// here; the host owns the valid scroll range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn scroll_to_center(&self, index: usize) {
        let target_x = self.strip.center_of(index).x - self.base.width() / 2.0;
        tracing::trace!(target: "ribbon::carousel", index, target_x, "requesting centering scroll");
        self.scroll_requested.emit(Point::new(target_x, 0.0));
    }

    /// Snap onto the item under the viewport center.
    ///
    /// Called when the host reports the end of a drag/zoom gesture. Probes
    /// a `padding`-wide rectangle just left of the viewport's horizontal
    /// midpoint (in content coordinates); if an item intersects it, that
    /// item is centered and reported as the new selection. If the probe
    /// lands entirely in padding or empty space, nothing happens.
    pub fn handle_gesture_ended(&mut self) {
        let padding = self.strip.padding();
        let mid_x = self.scroll_x + self.base.width() / 2.0;
        let probe = Rect::new(
            mid_x - padding,
            0.0,
            padding,
            self.strip.content_size().height,
        );

        let Some(index) = self.strip.first_intersecting(probe) else {
            return;
        };

        tracing::debug!(target: "ribbon::carousel", index, "centering on item after gesture end");
        self.scroll_to_center(index);
        self.selected = Some(index);
        self.item_selected.emit(index);
    }

    /// Subscribe the carousel's centering behavior to a host-owned
    /// gesture-end signal.
    ///
    /// Dropping the returned guard unsubscribes; that is the teardown path.
    /// The connection holds the carousel weakly, so a carousel dropped
    /// while the guard is alive turns the notification into a no-op.
    pub fn bind_gesture_ended(
        carousel: &Arc<Mutex<Carousel>>,
        gesture_ended: &Signal<()>,
    ) -> ConnectionGuard<()> {
        let weak = Arc::downgrade(carousel);
        gesture_ended.connect_scoped(move |&()| {
            let Some(carousel) = weak.upgrade() else {
                return;
            };
            carousel.lock().handle_gesture_ended();
        })
    }

    // =========================================================================
    // Scroll Offset
    // =========================================================================

    /// The horizontal scroll offset last applied by the host.
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// Record the scroll offset the host applied.
    ///
    /// The value is clamped to `[0, max_scroll_x]`; [`scrolled`](Self::scrolled)
    /// is emitted only when the offset actually changes.
    pub fn set_scroll_x(&mut self, x: f32) {
        let clamped = x.clamp(0.0, self.max_scroll_x());
        if (self.scroll_x - clamped).abs() > f32::EPSILON {
            self.scroll_x = clamped;
            self.scrolled.emit(clamped);
        }
    }

    /// The maximum valid scroll offset for the current content and
    /// viewport.
    pub fn max_scroll_x(&self) -> f32 {
        (self.strip.content_size().width - self.base.width()).max(0.0)
    }

    // =========================================================================
    // Padding
    // =========================================================================

    /// Get the spacing between consecutive items.
    pub fn padding(&self) -> f32 {
        self.strip.padding()
    }

    /// Set the spacing between consecutive items.
    ///
    /// Re-lays-out the strip and re-clamps the scroll offset against the
    /// new content width.
    pub fn set_padding(&mut self, padding: f32) {
        self.strip.set_padding(padding);
        self.set_scroll_x(self.scroll_x);
    }
}

impl Widget for Carousel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let content = self.strip.content_size();
        let padding = self.strip.padding();
        SizeHint::from_dimensions(
            content.width + 2.0 * padding,
            content.height + 2.0 * padding,
        )
        .with_minimum_dimensions(DEFAULT_ITEM_DIMENSION, DEFAULT_ITEM_DIMENSION)
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        // Viewport change may shrink the valid scroll range.
        self.set_scroll_x(self.scroll_x);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => {
                if self.is_enabled() && e.button == MouseButton::Left {
                    let pos = e.local_pos;
                    self.handle_click(pos);
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::PanGesture(e) => {
                if self.is_enabled() && e.state == GestureState::Ended {
                    self.handle_gesture_ended();
                    event.accept();
                    return true;
                }
            }
            WidgetEvent::Resize(_) => {
                self.set_scroll_x(self.scroll_x);
            }
            _ => {}
        }
        false
    }
}

// Ensure Carousel is Send + Sync
static_assertions::assert_impl_all!(Carousel: Send, Sync);
