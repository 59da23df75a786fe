//! Screen identities and the controls each one declares
//!
//! The navigator never touches widgets; it hands the surface a list of
//! [`Control`] descriptors for the current screen and gets back the identity
//! of whichever one was activated.

use super::selection::{EngineChoice, SelectionDraft, Side};

/// Menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Logo and a single Start button
    #[default]
    Splash,
    /// Game mode and settings grid
    MainMenu,
    /// Opponent id text entry
    OnlineIdEntry,
    /// Side choice for an online game
    OnlineSideSelect,
    /// Engine choice
    EngineSelect,
    /// Side choice for an engine game
    EngineSideSelect,
    /// Begin or cancel
    ReadyToBegin,
    /// Handed off to the master program
    InProgress,
    /// Token entry
    SettingsEntry,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "Chess",
            Self::MainMenu => "Choose a game",
            Self::OnlineIdEntry => "Player vs Player",
            Self::OnlineSideSelect | Self::EngineSideSelect => "Choose your side",
            Self::EngineSelect => "Player vs Engine",
            Self::ReadyToBegin => "Ready",
            Self::InProgress => "Game in Progress",
            Self::SettingsEntry => "Settings",
        }
    }

    /// How the surface should arrange the buttons
    pub fn layout(&self) -> PanelLayout {
        match self {
            Self::MainMenu => PanelLayout::Grid { columns: 2 },
            Self::OnlineSideSelect | Self::EngineSideSelect => PanelLayout::Columns,
            Self::EngineSelect => PanelLayout::ColumnsWithFooter,
            _ => PanelLayout::Stacked,
        }
    }

    /// Controls visible on this screen, in focus order
    pub fn controls(&self, draft: &SelectionDraft) -> Vec<Control> {
        match self {
            Self::Splash => vec![Control::button(ControlId::Start, "Start")],
            Self::MainMenu => vec![
                Control::button(ControlId::PlayerVsPlayer, "Player vs Player"),
                Control::button(ControlId::PlayerVsEngine, "Player vs Engine"),
                Control::button(ControlId::Local, "Local game"),
                Control::button(ControlId::Settings, "Settings"),
            ],
            Self::OnlineIdEntry => vec![
                Control::entry(ControlId::OpponentIdField, "Opponent ID", ""),
                Control::button(ControlId::Confirm, "Confirm"),
                Control::button(ControlId::Cancel, "Return"),
            ],
            Self::OnlineSideSelect | Self::EngineSideSelect => Side::all()
                .into_iter()
                .map(|side| Control::button(ControlId::Side(side), side.label()))
                .collect(),
            Self::EngineSelect => {
                let mut controls: Vec<Control> = EngineChoice::all()
                    .into_iter()
                    .map(|engine| Control::button(ControlId::Engine(engine), engine.label()))
                    .collect();
                controls.push(Control::button(ControlId::Cancel, "Return"));
                controls
            }
            Self::ReadyToBegin => vec![
                Control::button(ControlId::Begin, "Begin"),
                Control::button(ControlId::Cancel, "Cancel"),
            ],
            Self::InProgress => Vec::new(),
            Self::SettingsEntry => vec![
                Control::entry(
                    ControlId::TokenField,
                    "Lichess token",
                    draft.credential_token.as_str(),
                ),
                Control::button(ControlId::Confirm, "Confirm"),
            ],
        }
    }
}

/// Identity tag of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Start,
    PlayerVsPlayer,
    PlayerVsEngine,
    Local,
    Settings,
    Confirm,
    Cancel,
    Engine(EngineChoice),
    Side(Side),
    Begin,
    OpponentIdField,
    TokenField,
}

/// What kind of widget the surface should build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    /// Single-line text entry, seeded with `initial`
    TextEntry { initial: String },
}

/// Declarative description of one control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    pub label: &'static str,
    pub kind: ControlKind,
}

impl Control {
    pub fn button(id: ControlId, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::Button,
        }
    }

    pub fn entry(id: ControlId, label: &'static str, initial: &str) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::TextEntry {
                initial: initial.to_string(),
            },
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self.kind, ControlKind::Button)
    }
}

/// Button arrangement hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    /// One button per row
    Stacked,
    /// Buttons side by side
    Columns,
    /// All buttons but the last side by side, the last one full width below
    ColumnsWithFooter,
    Grid { columns: u16 },
}

/// A control activation reported by the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub control: ControlId,
    /// Current contents of the screen's text entry, empty if it has none
    pub text: String,
}

impl Activation {
    pub fn pressed(control: ControlId) -> Self {
        Self {
            control,
            text: String::new(),
        }
    }

    pub fn with_text(control: ControlId, text: impl Into<String>) -> Self {
        Self {
            control,
            text: text.into(),
        }
    }
}
