//! Standard widgets for Ribbon.
//!
//! This module provides the toolkit's widgets:
//!
//! - [`Carousel`]: Horizontal item scroller with click-to-select and
//!   snap-to-center

mod carousel;

pub use carousel::{Carousel, CarouselDataSource, DEFAULT_ITEM_DIMENSION};
