pub mod controls;
pub mod pointer;

pub use controls::wire_controls;
pub use pointer::{track_window_pointer, wire_pointer_handlers, PointerState};
