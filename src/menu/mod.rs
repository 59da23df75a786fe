//! Menu navigation module
//!
//! Screens, the transition table, the selection model and the navigator
//! that ties them together. Nothing here knows about the terminal.

pub mod navigator;
pub mod screen;
pub mod selection;
pub mod transition;

pub use navigator::{Navigator, Outcome, EMPTY_OPPONENT_MESSAGE};
pub use screen::{Activation, Control, ControlId, ControlKind, PanelLayout, Screen};
pub use selection::{EngineChoice, GameMode, GameSelection, GameSetup, SelectionDraft, Side};
pub use transition::{Effect, Transition, Trigger, TRANSITIONS};
