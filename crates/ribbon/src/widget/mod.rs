//! Widget system for Ribbon.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - [`ItemStrip`]: Horizontal placement of item views
//! - Widget events for input handling
//!
//! # Overview
//!
//! Each widget implements the [`Widget`] trait and contains a
//! [`WidgetBase`] that handles common functionality. The host application
//! owns the window, rendering, and gesture recognition; it drives widgets
//! by assigning geometry, dispatching [`WidgetEvent`]s, and connecting to
//! the signals widgets expose as public fields.
//!
//! # Creating a Widget
//!
//! To create a custom widget:
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` for layout
//! 4. Override `event()` for input handling
//!
//! # Coordinate Systems
//!
//! Widgets use multiple coordinate systems:
//!
//! - **Local coordinates**: Origin at widget's top-left corner
//! - **Parent coordinates**: Relative to parent widget's top-left
//! - **Content coordinates**: Within a scrolling widget's content, offset
//!   by the scroll position
//!
//! Use the coordinate mapping methods to convert between systems.

mod base;
mod events;
mod geometry;
mod strip;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, GestureState, KeyboardModifiers, MouseButton, MousePressEvent, MouseReleaseEvent,
    PanGestureEvent, ResizeEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use strip::{ItemStrip, ItemView, DEFAULT_PADDING};
pub use traits::{AsWidget, Widget};
