//! Main application controller
//!
//! Runs the terminal loop: reconcile the surface with the navigator, draw,
//! read one key, feed the resulting activation to the navigator.

use crate::{
    app::{
        input::{key_to_action, InputAction},
        screens::{self, MenuView},
        surface::{Surface, SurfaceEvent},
        tui::Tui,
    },
    config::{CredentialStore, MenuConfig},
    menu::{GameSelection, Navigator, Outcome},
    MenuError, Result,
};
use tracing::{debug, info};

/// What the loop should do after one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
    Began(GameSelection),
}

/// Apply one input action to the surface and, if it activates a control,
/// to the navigator. The surface is reconciled afterwards.
pub fn apply_input(
    navigator: &mut Navigator,
    surface: &mut Surface,
    action: InputAction,
) -> Result<LoopControl> {
    let control = match surface.handle(action) {
        SurfaceEvent::None => LoopControl::Continue,
        SurfaceEvent::Quit => LoopControl::Quit,
        SurfaceEvent::Activate(activation) => match navigator.activate(activation)? {
            Outcome::Began(selection) => LoopControl::Began(selection),
            Outcome::Moved { .. } | Outcome::Rejected(_) | Outcome::Ignored => {
                LoopControl::Continue
            }
        },
    };
    surface.reconcile(navigator.screen(), navigator.controls());
    Ok(control)
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Menu state machine
    navigator: Navigator,
    /// Focus and text entry state
    surface: Surface,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &MenuConfig, store: Box<dyn CredentialStore>) -> Result<Self> {
        let navigator = Navigator::new(store)?;
        let mut surface = Surface::new();
        surface.reconcile(navigator.screen(), navigator.controls());

        Ok(Self {
            tui: Tui::new(config.tick_rate()).map_err(|e| MenuError::Tui(e.to_string()))?,
            navigator,
            surface,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| MenuError::Tui(format!("Failed to initialize terminal: {}", e)))
    }

    /// Restore the terminal before handing it to someone else
    pub fn restore(&mut self) -> Result<()> {
        self.tui
            .restore()
            .map_err(|e| MenuError::Tui(format!("Failed to restore terminal: {}", e)))
    }

    /// Run the main application loop
    ///
    /// Returns the finalized selection once Begin is pressed, or `None` if
    /// the user quit first.
    pub fn run(&mut self) -> Result<Option<GameSelection>> {
        info!("menu started");
        loop {
            self.draw()?;

            let Some(key) = self.tui.next_key()? else {
                continue;
            };
            let action = key_to_action(key, self.surface.has_text_entry());
            if action == InputAction::None {
                continue;
            }

            match apply_input(&mut self.navigator, &mut self.surface, action)? {
                LoopControl::Continue => {}
                LoopControl::Quit => {
                    info!(screen = ?self.navigator.screen(), "menu closed by user");
                    return Ok(None);
                }
                LoopControl::Began(selection) => {
                    debug!("drawing in-progress screen");
                    self.draw()?;
                    return Ok(Some(selection));
                }
            }
        }
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let view = MenuView {
            screen: self.navigator.screen(),
            surface: &self.surface,
            message: self.navigator.message(),
            selection: self.navigator.selection(),
        };
        self.tui
            .draw(|f| screens::render(f, &view))
            .map_err(|e| MenuError::Tui(format!("Failed to draw: {}", e)))
    }
}
