//! Transition table
//!
//! Every menu move is one row of [`TRANSITIONS`]: the screen it applies to,
//! the trigger, the effect on the selection, and the screen it lands on.

use super::screen::{ControlId, Screen};
use super::selection::GameMode;

/// What the user did, with the chosen value stripped off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Mode(GameMode),
    Settings,
    Confirm,
    Cancel,
    /// Any engine button; the engine itself comes from the control
    Engine,
    /// Any side button
    Side,
    Begin,
}

impl Trigger {
    /// Trigger fired by activating a control, `None` for text entries
    pub fn from_control(control: ControlId) -> Option<Self> {
        match control {
            ControlId::Start => Some(Self::Start),
            ControlId::PlayerVsPlayer => Some(Self::Mode(GameMode::Online)),
            ControlId::PlayerVsEngine => Some(Self::Mode(GameMode::VsEngine)),
            ControlId::Local => Some(Self::Mode(GameMode::Local)),
            ControlId::Settings => Some(Self::Settings),
            ControlId::Confirm => Some(Self::Confirm),
            ControlId::Cancel => Some(Self::Cancel),
            ControlId::Engine(_) => Some(Self::Engine),
            ControlId::Side(_) => Some(Self::Side),
            ControlId::Begin => Some(Self::Begin),
            ControlId::OpponentIdField | ControlId::TokenField => None,
        }
    }
}

/// Side effect applied to the selection when a row fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SetMode(GameMode),
    /// Store the entered opponent id; rejected when empty
    SetOpponent,
    SetEngine,
    SetSide,
    Reset,
    /// Replace the token with the entered text and persist it
    SaveCredential,
    /// Freeze the draft and hand it to the game runner
    Commit,
}

/// One row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub trigger: Trigger,
    pub effect: Effect,
    pub to: Screen,
}

const fn row(from: Screen, trigger: Trigger, effect: Effect, to: Screen) -> Transition {
    Transition {
        from,
        trigger,
        effect,
        to,
    }
}

pub const TRANSITIONS: &[Transition] = &[
    row(Screen::Splash, Trigger::Start, Effect::None, Screen::MainMenu),
    row(
        Screen::MainMenu,
        Trigger::Mode(GameMode::Online),
        Effect::SetMode(GameMode::Online),
        Screen::OnlineIdEntry,
    ),
    row(
        Screen::MainMenu,
        Trigger::Mode(GameMode::VsEngine),
        Effect::SetMode(GameMode::VsEngine),
        Screen::EngineSelect,
    ),
    row(
        Screen::MainMenu,
        Trigger::Mode(GameMode::Local),
        Effect::SetMode(GameMode::Local),
        Screen::ReadyToBegin,
    ),
    row(Screen::MainMenu, Trigger::Settings, Effect::None, Screen::SettingsEntry),
    row(
        Screen::OnlineIdEntry,
        Trigger::Confirm,
        Effect::SetOpponent,
        Screen::OnlineSideSelect,
    ),
    row(Screen::OnlineIdEntry, Trigger::Cancel, Effect::Reset, Screen::MainMenu),
    row(
        Screen::OnlineSideSelect,
        Trigger::Side,
        Effect::SetSide,
        Screen::ReadyToBegin,
    ),
    row(
        Screen::EngineSelect,
        Trigger::Engine,
        Effect::SetEngine,
        Screen::EngineSideSelect,
    ),
    row(Screen::EngineSelect, Trigger::Cancel, Effect::Reset, Screen::MainMenu),
    row(
        Screen::EngineSideSelect,
        Trigger::Side,
        Effect::SetSide,
        Screen::ReadyToBegin,
    ),
    row(Screen::ReadyToBegin, Trigger::Begin, Effect::Commit, Screen::InProgress),
    row(Screen::ReadyToBegin, Trigger::Cancel, Effect::Reset, Screen::Splash),
    row(
        Screen::SettingsEntry,
        Trigger::Confirm,
        Effect::SaveCredential,
        Screen::MainMenu,
    ),
];

/// Find the row for `trigger` on `from`
pub fn lookup(from: Screen, trigger: Trigger) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == from && t.trigger == trigger)
}
