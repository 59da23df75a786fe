//! Selection data model
//!
//! The mutable draft filled in while the user walks the menus, and the
//! finalized selection handed to the master program once "Begin" is pressed.

use crate::{MenuError, Result};
use serde::Serialize;
use std::fmt;

/// How the game will be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Player vs player over Lichess
    Online,
    /// Player vs a local engine
    VsEngine,
    /// Two players on the board, no opponent process
    Local,
}

impl GameMode {
    /// Name the master program expects on its first input line
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Online => "lichess",
            Self::VsEngine => "engine",
            Self::Local => "local",
        }
    }
}

/// The two engines offered on the engine screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineChoice {
    Viridithas,
    Maia,
}

impl EngineChoice {
    pub fn all() -> [Self; 2] {
        [Self::Viridithas, Self::Maia]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Viridithas => "Viridithas",
            Self::Maia => "Maia",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Viridithas => "v",
            Self::Maia => "m",
        }
    }
}

/// Side the user plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
    /// Left to the master program to decide
    Random,
}

impl Side {
    pub fn all() -> [Self; 3] {
        [Self::White, Self::Black, Self::Random]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Random => "Random",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Random => "random",
        }
    }
}

/// Selection being assembled by the navigator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDraft {
    pub game_mode: Option<GameMode>,
    pub engine: Option<EngineChoice>,
    pub side: Option<Side>,
    pub opponent_id: String,
    pub credential_token: String,
}

impl SelectionDraft {
    /// Create an empty draft carrying an already loaded token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credential_token: token.into(),
            ..Self::default()
        }
    }

    /// Clear every game field; the token survives
    pub fn reset(&mut self) {
        *self = Self::with_token(std::mem::take(&mut self.credential_token));
    }

    /// Whether no game field has been touched
    pub fn is_blank(&self) -> bool {
        self.game_mode.is_none()
            && self.engine.is_none()
            && self.side.is_none()
            && self.opponent_id.is_empty()
    }

    /// Freeze the draft into a selection, checking the begin invariant
    pub fn commit(&self) -> Result<GameSelection> {
        let setup = match self.game_mode {
            None => return Err(MenuError::IncompleteSelection("no game mode chosen")),
            Some(GameMode::Online) => {
                if self.opponent_id.is_empty() {
                    return Err(MenuError::IncompleteSelection("online game without opponent"));
                }
                let side = self
                    .side
                    .ok_or(MenuError::IncompleteSelection("online game without a side"))?;
                GameSetup::Online {
                    opponent_id: self.opponent_id.clone(),
                    side,
                }
            }
            Some(GameMode::VsEngine) => {
                let engine = self
                    .engine
                    .ok_or(MenuError::IncompleteSelection("engine game without an engine"))?;
                let side = self
                    .side
                    .ok_or(MenuError::IncompleteSelection("engine game without a side"))?;
                GameSetup::VsEngine { engine, side }
            }
            Some(GameMode::Local) => GameSetup::Local,
        };

        Ok(GameSelection {
            setup,
            credential_token: self.credential_token.clone(),
        })
    }
}

/// Mode-specific part of a finalized selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSetup {
    Online { opponent_id: String, side: Side },
    VsEngine { engine: EngineChoice, side: Side },
    Local,
}

/// Finalized selection handed to the game runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSelection {
    setup: GameSetup,
    credential_token: String,
}

impl GameSelection {
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    pub fn game_mode(&self) -> GameMode {
        match self.setup {
            GameSetup::Online { .. } => GameMode::Online,
            GameSetup::VsEngine { .. } => GameMode::VsEngine,
            GameSetup::Local => GameMode::Local,
        }
    }

    pub fn engine_choice(&self) -> Option<EngineChoice> {
        match self.setup {
            GameSetup::VsEngine { engine, .. } => Some(engine),
            _ => None,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self.setup {
            GameSetup::Online { side, .. } | GameSetup::VsEngine { side, .. } => Some(side),
            GameSetup::Local => None,
        }
    }

    /// Opponent id, empty outside online games
    pub fn opponent_id(&self) -> &str {
        match &self.setup {
            GameSetup::Online { opponent_id, .. } => opponent_id.as_str(),
            _ => "",
        }
    }

    pub fn credential_token(&self) -> &str {
        &self.credential_token
    }

    /// The five lines the master program reads: mode, engine, side, opponent, token
    pub fn wire_lines(&self) -> [String; 5] {
        [
            self.game_mode().wire_name().to_string(),
            self.engine_choice()
                .map(|e| e.wire_name())
                .unwrap_or_default()
                .to_string(),
            self.side().map(|s| s.wire_name()).unwrap_or_default().to_string(),
            self.opponent_id().to_string(),
            self.credential_token.clone(),
        ]
    }

    /// Flat view used for the JSON hand-off
    pub fn flat(&self) -> FlatSelection<'_> {
        FlatSelection {
            game_mode: self.game_mode(),
            engine_choice: self.engine_choice(),
            side: self.side(),
            opponent_id: self.opponent_id(),
            credential_token: &self.credential_token,
        }
    }
}

impl fmt::Display for GameSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.setup {
            GameSetup::Online { opponent_id, side } => {
                write!(f, "online vs {} as {}", opponent_id, side.wire_name())
            }
            GameSetup::VsEngine { engine, side } => {
                write!(f, "{} engine as {}", engine.label(), side.wire_name())
            }
            GameSetup::Local => write!(f, "local game"),
        }
    }
}

/// Serializable flat record, unset fields as null or empty
#[derive(Debug, Serialize)]
pub struct FlatSelection<'a> {
    pub game_mode: GameMode,
    pub engine_choice: Option<EngineChoice>,
    pub side: Option<Side>,
    pub opponent_id: &'a str,
    pub credential_token: &'a str,
}
