//! Menu navigator
//!
//! Owns the current screen and the selection draft, and applies one
//! activation at a time by looking it up in the transition table.

use super::screen::{Activation, Control, ControlId, Screen};
use super::selection::{GameSelection, SelectionDraft};
use super::transition::{self, Effect, Trigger};
use crate::config::persistence::CredentialStore;
use crate::{error, Result};
use tracing::{debug, info, warn};

/// Shown when the opponent id is confirmed empty
pub const EMPTY_OPPONENT_MESSAGE: &str = "Please enter a valid opponent ID";

/// Result of feeding one activation to the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Moved to a new screen (or re-entered the same one)
    Moved { from: Screen, to: Screen },
    /// Stayed put; the message is now on screen
    Rejected(String),
    /// Control does not belong to the current screen
    Ignored,
    /// Begin pressed; the selection is final
    Began(GameSelection),
}

/// Menu state machine
pub struct Navigator {
    screen: Screen,
    draft: SelectionDraft,
    message: Option<String>,
    selection: Option<GameSelection>,
    store: Box<dyn CredentialStore>,
}

impl Navigator {
    /// Start on the splash screen with the token loaded from `store`
    pub fn new(store: Box<dyn CredentialStore>) -> Result<Self> {
        let token = store.load()?;
        debug!(token_len = token.len(), "loaded credential token");
        Ok(Self {
            screen: Screen::Splash,
            draft: SelectionDraft::with_token(token),
            message: None,
            selection: None,
            store,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn draft(&self) -> &SelectionDraft {
        &self.draft
    }

    /// Validation or error text for the current screen
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Finalized selection, set once the game has begun
    pub fn selection(&self) -> Option<&GameSelection> {
        self.selection.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.screen == Screen::InProgress
    }

    /// Controls the surface should show right now
    pub fn controls(&self) -> Vec<Control> {
        self.screen.controls(&self.draft)
    }

    /// Apply one activation
    pub fn activate(&mut self, activation: Activation) -> Result<Outcome> {
        let Some(trigger) = Trigger::from_control(activation.control) else {
            return Ok(self.ignore(&activation));
        };
        let Some(row) = transition::lookup(self.screen, trigger) else {
            return Ok(self.ignore(&activation));
        };

        match row.effect {
            Effect::None => {}
            Effect::SetMode(mode) => self.draft.game_mode = Some(mode),
            Effect::SetOpponent => {
                if activation.text.is_empty() {
                    debug!("rejected empty opponent id");
                    return Ok(self.reject(EMPTY_OPPONENT_MESSAGE.to_string()));
                }
                self.draft.opponent_id = activation.text;
            }
            Effect::SetEngine => {
                if let ControlId::Engine(engine) = activation.control {
                    self.draft.engine = Some(engine);
                }
            }
            Effect::SetSide => {
                if let ControlId::Side(side) = activation.control {
                    self.draft.side = Some(side);
                }
            }
            Effect::Reset => {
                debug!(screen = ?self.screen, "selection reset");
                self.draft.reset();
            }
            Effect::SaveCredential => {
                if let Err(err) = self.store.save(&activation.text) {
                    if !error::is_recoverable(&err) {
                        return Err(err);
                    }
                    warn!(error = %err, "failed to persist credential token");
                    return Ok(self.reject(error::user_friendly_message(&err)));
                }
                info!("credential token updated");
                self.draft.credential_token = activation.text;
            }
            Effect::Commit => {
                let selection = self.draft.commit()?;
                info!(%selection, "game starting");
                self.selection = Some(selection.clone());
                self.enter(row.to);
                return Ok(Outcome::Began(selection));
            }
        }

        let from = self.screen;
        self.enter(row.to);
        debug!(?from, to = ?row.to, "menu transition");
        Ok(Outcome::Moved { from, to: row.to })
    }

    fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        self.message = None;
    }

    fn reject(&mut self, message: String) -> Outcome {
        self.message = Some(message.clone());
        Outcome::Rejected(message)
    }

    fn ignore(&self, activation: &Activation) -> Outcome {
        warn!(control = ?activation.control, screen = ?self.screen, "activation ignored");
        Outcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::persistence::MemoryCredentialStore;
    use crate::menu::selection::{EngineChoice, GameMode, Side};
    use crate::MenuError;

    fn navigator(token: &str) -> Navigator {
        Navigator::new(Box::new(MemoryCredentialStore::new(token))).unwrap()
    }

    fn press(nav: &mut Navigator, control: ControlId) -> Outcome {
        nav.activate(Activation::pressed(control)).unwrap()
    }

    #[test]
    fn test_starts_on_splash() {
        let nav = navigator("tok");
        assert_eq!(nav.screen(), Screen::Splash);
        assert!(nav.draft().is_blank());
        assert_eq!(nav.draft().credential_token, "tok");
    }

    #[test]
    fn test_local_goes_straight_to_ready() {
        let mut nav = navigator("");
        press(&mut nav, ControlId::Start);
        press(&mut nav, ControlId::Local);
        assert_eq!(nav.screen(), Screen::ReadyToBegin);
        assert_eq!(nav.draft().game_mode, Some(GameMode::Local));

        let outcome = press(&mut nav, ControlId::Begin);
        assert!(matches!(outcome, Outcome::Began(ref s) if s.game_mode() == GameMode::Local));
        assert!(nav.is_finished());
    }

    #[test]
    fn test_empty_opponent_rejected() {
        let mut nav = navigator("");
        press(&mut nav, ControlId::Start);
        press(&mut nav, ControlId::PlayerVsPlayer);
        let before = nav.draft().clone();

        let outcome = nav
            .activate(Activation::with_text(ControlId::Confirm, ""))
            .unwrap();
        assert_eq!(outcome, Outcome::Rejected(EMPTY_OPPONENT_MESSAGE.to_string()));
        assert_eq!(nav.screen(), Screen::OnlineIdEntry);
        assert_eq!(nav.draft(), &before);
        assert_eq!(nav.message(), Some(EMPTY_OPPONENT_MESSAGE));

        nav.activate(Activation::with_text(ControlId::Confirm, "x"))
            .unwrap();
        assert_eq!(nav.screen(), Screen::OnlineSideSelect);
        assert_eq!(nav.message(), None);
    }

    #[test]
    fn test_ignores_foreign_controls() {
        let mut nav = navigator("");
        assert_eq!(press(&mut nav, ControlId::Begin), Outcome::Ignored);
        assert_eq!(press(&mut nav, ControlId::TokenField), Outcome::Ignored);
        assert_eq!(nav.screen(), Screen::Splash);
    }

    #[test]
    fn test_in_progress_ignores_everything() {
        let mut nav = navigator("");
        press(&mut nav, ControlId::Start);
        press(&mut nav, ControlId::PlayerVsEngine);
        press(&mut nav, ControlId::Engine(EngineChoice::Maia));
        press(&mut nav, ControlId::Side(Side::Random));
        press(&mut nav, ControlId::Begin);

        assert_eq!(press(&mut nav, ControlId::Cancel), Outcome::Ignored);
        assert_eq!(press(&mut nav, ControlId::Begin), Outcome::Ignored);
        assert_eq!(nav.selection().unwrap().engine_choice(), Some(EngineChoice::Maia));
    }

    #[test]
    fn test_failed_save_keeps_old_token() {
        let store = MemoryCredentialStore::new("old");
        store.fail_saves(true);
        let mut nav = Navigator::new(Box::new(store)).unwrap();
        press(&mut nav, ControlId::Start);
        press(&mut nav, ControlId::Settings);

        let outcome = nav
            .activate(Activation::with_text(ControlId::Confirm, "new"))
            .unwrap();
        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert_eq!(nav.screen(), Screen::SettingsEntry);
        assert_eq!(nav.draft().credential_token, "old");
    }

    #[test]
    fn test_load_failure_propagates() {
        let store = MemoryCredentialStore::new("");
        store.fail_loads(true);
        assert!(matches!(
            Navigator::new(Box::new(store)),
            Err(MenuError::Credential { .. })
        ));
    }
}
