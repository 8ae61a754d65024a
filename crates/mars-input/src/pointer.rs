//! Pointer and wheel events plus a frame-coherent collector.
//!
//! [`PointerState`] turns winit mouse events into [`InputEvent`]s queued for
//! the next frame, and keeps a small amount of query state (position, held
//! buttons, cursor-in-window).

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels of a high-resolution scroll that count as one wheel notch.
const PIXELS_PER_NOTCH: f64 = 40.0;

/// Logical pointer button, independent of the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button / primary touch.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Middle,
    /// Back/forward/extra buttons.
    Other,
}

impl PointerButton {
    fn index(self) -> usize {
        match self {
            PointerButton::Primary => 0,
            PointerButton::Secondary => 1,
            PointerButton::Middle => 2,
            PointerButton::Other => 3,
        }
    }
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back | MouseButton::Forward | MouseButton::Other(_) => {
                PointerButton::Other
            }
        }
    }
}

/// A pointer event in viewport pixel coordinates (origin top-left, +Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Cursor position in logical pixels.
    pub position: Vec2,
    /// Button that changed (down/up) or the button held while moving.
    pub button: PointerButton,
}

impl PointerEvent {
    /// Primary-button event at `(x, y)`.
    pub fn primary(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// Secondary-button event at `(x, y)`.
    pub fn secondary(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: PointerButton::Secondary,
        }
    }
}

/// A wheel event measured in notches. Positive values scroll away from the
/// user, which zooms in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Signed notch count; fractional for touchpads.
    pub notches: f32,
}

impl From<MouseScrollDelta> for WheelEvent {
    fn from(delta: MouseScrollDelta) -> Self {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_NOTCH) as f32,
        };
        Self { notches }
    }
}

/// Host input as seen by the camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button went down.
    PointerDown(PointerEvent),
    /// The cursor moved.
    PointerMove(PointerEvent),
    /// A button was released.
    PointerUp(PointerEvent),
    /// The cursor left the viewport.
    PointerLeave,
    /// The wheel turned.
    Wheel(WheelEvent),
}

/// Frame-coherent pointer state.
///
/// 1. Forward winit events via the `on_*` methods during event collection.
/// 2. Call [`drain_events`](Self::drain_events) once per frame and dispatch.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Vec2,
    held: [bool; 4],
    cursor_in_window: bool,
    pending: Vec<InputEvent>,
}

impl PointerState {
    /// Creates an empty state with the cursor outside the window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `CursorMoved` event.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x as f32, y as f32);
        self.cursor_in_window = true;
        let button = self.held_button().unwrap_or(PointerButton::Primary);
        self.pending.push(InputEvent::PointerMove(PointerEvent {
            position: self.position,
            button,
        }));
    }

    /// Process a `MouseInput` event.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        let button = PointerButton::from(button);
        let event = PointerEvent {
            position: self.position,
            button,
        };
        match state {
            ElementState::Pressed => {
                self.held[button.index()] = true;
                self.pending.push(InputEvent::PointerDown(event));
            }
            ElementState::Released => {
                self.held[button.index()] = false;
                self.pending.push(InputEvent::PointerUp(event));
            }
        }
    }

    /// Process a `MouseWheel` event.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        self.pending.push(InputEvent::Wheel(WheelEvent::from(delta)));
    }

    /// Process a `CursorEntered` event.
    pub fn on_cursor_entered(&mut self) {
        self.cursor_in_window = true;
    }

    /// Process a `CursorLeft` event. Held buttons are dropped since their
    /// release will not be reported.
    pub fn on_cursor_left(&mut self) {
        self.cursor_in_window = false;
        self.held = [false; 4];
        self.pending.push(InputEvent::PointerLeave);
    }

    /// Take all events collected since the last call, in arrival order.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        if !self.pending.is_empty() {
            tracing::trace!(count = self.pending.len(), "draining pointer events");
        }
        std::mem::take(&mut self.pending)
    }

    /// Current cursor position in logical pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether a button is currently held.
    #[must_use]
    pub fn is_pressed(&self, button: PointerButton) -> bool {
        self.held[button.index()]
    }

    /// Whether the cursor is inside the viewport.
    #[must_use]
    pub fn cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }

    fn held_button(&self) -> Option<PointerButton> {
        [
            PointerButton::Primary,
            PointerButton::Secondary,
            PointerButton::Middle,
            PointerButton::Other,
        ]
        .into_iter()
        .find(|b| self.held[b.index()])
    }
}
