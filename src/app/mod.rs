//! TUI application module
//!
//! The terminal widget surface: key mapping, focus and text entry state,
//! screen rendering, and the loop that drives the navigator.

pub mod app;
pub mod input;
pub mod screens;
pub mod surface;
pub mod tui;

pub use app::{apply_input, App, LoopControl};
pub use input::{key_to_action, InputAction};
pub use surface::{Surface, SurfaceEvent};
pub use tui::Tui;
