//! Core systems for Ribbon.
//!
//! This crate provides the foundational components of the Ribbon widget
//! toolkit:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Geometry**: Points, sizes, frame rectangles, colors
//! - **Logging**: `tracing` target names for filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use ribbon_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
mod types;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Color, Point, Rect, Size};
