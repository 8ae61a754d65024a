//! Pointer input for the orbit camera: host-agnostic event types, winit
//! conversions, a frame-coherent event collector and click detection.

mod click;
mod pointer;

pub use click::ClickTracker;
pub use pointer::{InputEvent, PointerButton, PointerEvent, PointerState, WheelEvent};
