//! Ribbon - a horizontal carousel/scroller widget toolkit.
//!
//! Ribbon provides a small widget system built around one centerpiece: the
//! [`Carousel`](widget::widgets::Carousel), a horizontal strip of items with
//! click-to-select and snap-to-center behavior. The host application owns
//! rendering and gesture recognition; Ribbon owns layout, hit-testing,
//! selection, and centering arithmetic, and reports back through signals.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ribbon::widget::widgets::{Carousel, CarouselDataSource};
//! use ribbon::widget::{ItemView, Widget};
//! use ribbon::{Rect, Size};
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
//! carousel.set_geometry(Rect::new(0.0, 0.0, 200.0, 40.0));
//! carousel.reload();
//! assert_eq!(carousel.len(), 3);
//! ```

pub use ribbon_core::*;

pub mod widget;
