//! Widget surface state
//!
//! Reconciles the navigator's declared controls with what is on screen:
//! which button has focus and what has been typed into the text entry.
//! Focus and text are reset whenever the screen changes.

use super::input::InputAction;
use crate::menu::{Activation, Control, ControlId, ControlKind, PanelLayout, Screen};

/// What the surface wants the app to do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    None,
    Activate(Activation),
    Quit,
}

/// Focus and text entry state for the current screen
#[derive(Debug, Default)]
pub struct Surface {
    screen: Option<Screen>,
    controls: Vec<Control>,
    focus: usize,
    entry: String,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the surface in line with the navigator's screen and controls
    pub fn reconcile(&mut self, screen: Screen, controls: Vec<Control>) {
        if self.screen != Some(screen) {
            self.focus = 0;
            self.entry = controls
                .iter()
                .find_map(|c| match &c.kind {
                    ControlKind::TextEntry { initial } => Some(initial.clone()),
                    ControlKind::Button => None,
                })
                .unwrap_or_default();
            self.screen = Some(screen);
        }
        self.controls = controls;
        let buttons = self.button_count();
        if buttons > 0 && self.focus >= buttons {
            self.focus = buttons - 1;
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        self.screen
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Buttons in focus order
    pub fn buttons(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(|c| c.is_button())
    }

    /// The text entry control, if the screen has one
    pub fn text_entry(&self) -> Option<&Control> {
        self.controls.iter().find(|c| !c.is_button())
    }

    pub fn has_text_entry(&self) -> bool {
        self.text_entry().is_some()
    }

    /// Text typed so far
    pub fn entry_text(&self) -> &str {
        &self.entry
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&Control> {
        self.buttons().nth(self.focus)
    }

    fn button_count(&self) -> usize {
        self.buttons().count()
    }

    fn layout(&self) -> PanelLayout {
        self.screen.map(|s| s.layout()).unwrap_or(PanelLayout::Stacked)
    }

    fn step(&mut self, delta: isize) {
        let count = self.button_count() as isize;
        if count == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(count) as usize;
    }

    /// Handle one input action
    pub fn handle(&mut self, action: InputAction) -> SurfaceEvent {
        let vertical = match self.layout() {
            PanelLayout::Grid { columns } => columns as isize,
            _ => 1,
        };

        match action {
            InputAction::Up => self.step(-vertical),
            InputAction::Down => self.step(vertical),
            InputAction::Left | InputAction::Previous => self.step(-1),
            InputAction::Right | InputAction::Next => self.step(1),
            InputAction::Select => {
                if let Some(control) = self.focused() {
                    return SurfaceEvent::Activate(Activation::with_text(
                        control.id,
                        self.entry.clone(),
                    ));
                }
            }
            InputAction::Back => {
                if self.screen == Some(Screen::Splash) {
                    return SurfaceEvent::Quit;
                }
                if self.buttons().any(|c| c.id == ControlId::Cancel) {
                    return SurfaceEvent::Activate(Activation::with_text(
                        ControlId::Cancel,
                        self.entry.clone(),
                    ));
                }
            }
            InputAction::Quit => return SurfaceEvent::Quit,
            InputAction::Char(c) => {
                if self.has_text_entry() && !c.is_control() {
                    self.entry.push(c);
                }
            }
            InputAction::Delete => {
                self.entry.pop();
            }
            InputAction::None => {}
        }
        SurfaceEvent::None
    }
}
