//! Distinguishes clicks from drags.

use glam::Vec2;

use crate::pointer::{PointerButton, PointerEvent};

/// Tracks a primary-button press and reports a click on release when the
/// pointer travelled less than `threshold` pixels in total.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    threshold: f32,
    press: Option<Vec2>,
    last: Vec2,
    travel: f32,
}

impl ClickTracker {
    /// New tracker with the given travel threshold in pixels.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            press: None,
            last: Vec2::ZERO,
            travel: 0.0,
        }
    }

    /// Record a button press.
    pub fn on_down(&mut self, event: &PointerEvent) {
        if event.button == PointerButton::Primary {
            self.press = Some(event.position);
            self.last = event.position;
            self.travel = 0.0;
        }
    }

    /// Accumulate travel while pressed.
    pub fn on_move(&mut self, event: &PointerEvent) {
        if self.press.is_some() {
            self.travel += event.position.distance(self.last);
            self.last = event.position;
        }
    }

    /// Finish the press. Returns the click position if it qualifies.
    pub fn on_up(&mut self, event: &PointerEvent) -> Option<Vec2> {
        if event.button != PointerButton::Primary {
            return None;
        }
        let press = self.press.take()?;
        self.travel += event.position.distance(self.last);
        (self.travel <= self.threshold).then_some(press)
    }

    /// Abandon the press (pointer left the viewport).
    pub fn cancel(&mut self) {
        self.press = None;
    }
}
