//! Widget-specific event types.
//!
//! This module defines the events the host delivers to widgets: mouse
//! press/release, pan gestures reported by the host's gesture recognizer,
//! and resize notifications. Events are dispatched through the
//! [`WidgetEvent`] enum to [`Widget::event`](super::Widget::event).

use ribbon_core::{Point, Size};

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Resize event, sent when a widget's size changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The old size of the widget.
    pub old_size: Size,
    /// The new size of the widget.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(
        button: MouseButton,
        local_pos: Point,
        window_pos: Point,
        modifiers: KeyboardModifiers,
    ) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
            modifiers,
        }
    }
}

/// Lifecycle state of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// The gesture was recognized and has begun.
    Started,
    /// The gesture changed (pointer moved, scale changed).
    Updated,
    /// The gesture finished normally.
    Ended,
    /// The gesture was interrupted (touch cancelled, focus lost).
    Cancelled,
}

/// Pan (drag/scroll) gesture event reported by the host's recognizer.
#[derive(Debug, Clone, Copy)]
pub struct PanGestureEvent {
    /// Base event data.
    pub base: EventBase,
    /// Current pointer position in widget-local coordinates.
    pub position: Point,
    /// Total translation since the gesture started.
    pub translation: Point,
    /// Translation since the previous event of this gesture.
    pub delta: Point,
    /// Lifecycle state of the gesture.
    pub state: GestureState,
}

impl PanGestureEvent {
    /// Create a new pan gesture event.
    pub fn new(position: Point, translation: Point, delta: Point, state: GestureState) -> Self {
        Self {
            base: EventBase::new(),
            position,
            translation,
            delta,
            state,
        }
    }

    /// Create an end-of-gesture event at the given position.
    pub fn ended(position: Point, translation: Point) -> Self {
        Self::new(position, translation, Point::ZERO, GestureState::Ended)
    }
}

/// Widget event enum that wraps all event types.
///
/// This allows passing events through a unified interface while preserving
/// type information for event handlers.
#[derive(Debug)]
pub enum WidgetEvent {
    /// Resize event.
    Resize(ResizeEvent),
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Pan gesture event.
    PanGesture(PanGestureEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::Resize(e) => e.base.is_accepted(),
            Self::MousePress(e) => e.base.is_accepted(),
            Self::MouseRelease(e) => e.base.is_accepted(),
            Self::PanGesture(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::Resize(e) => e.base.accept(),
            Self::MousePress(e) => e.base.accept(),
            Self::MouseRelease(e) => e.base.accept(),
            Self::PanGesture(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::Resize(e) => e.base.ignore(),
            Self::MousePress(e) => e.base.ignore(),
            Self::MouseRelease(e) => e.base.ignore(),
            Self::PanGesture(e) => e.base.ignore(),
        }
    }

    /// Check if this event should propagate to parent widgets.
    ///
    /// Resize events are specific to a widget and do not propagate; input
    /// events propagate if not accepted.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::Resize(_) => false,
            Self::MousePress(_) | Self::MouseRelease(_) | Self::PanGesture(_) => {
                !self.is_accepted()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accept_ignore() {
        let mut event = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(5.0, 5.0),
            Point::new(105.0, 55.0),
            KeyboardModifiers::NONE,
        ));

        assert!(!event.is_accepted());
        assert!(event.should_propagate());

        event.accept();
        assert!(event.is_accepted());
        assert!(!event.should_propagate());

        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_resize_never_propagates() {
        let event = WidgetEvent::Resize(ResizeEvent::new(
            Size::new(100.0, 100.0),
            Size::new(200.0, 100.0),
        ));
        assert!(!event.should_propagate());
    }

    #[test]
    fn test_pan_gesture_ended_constructor() {
        let event = PanGestureEvent::ended(Point::new(40.0, 10.0), Point::new(-30.0, 0.0));
        assert_eq!(event.state, GestureState::Ended);
        assert_eq!(event.delta, Point::ZERO);
    }
}
