//! End-to-end menu walks through the navigator

use chess_menu::config::MemoryCredentialStore;
use chess_menu::menu::{
    Activation, ControlId, EngineChoice, GameMode, Navigator, Outcome, Screen, Side,
    EMPTY_OPPONENT_MESSAGE,
};

fn navigator(token: &str) -> Navigator {
    Navigator::new(Box::new(MemoryCredentialStore::new(token))).expect("navigator")
}

fn press(nav: &mut Navigator, control: ControlId) -> Outcome {
    nav.activate(Activation::pressed(control)).expect("activate")
}

fn confirm(nav: &mut Navigator, text: &str) -> Outcome {
    nav.activate(Activation::with_text(ControlId::Confirm, text))
        .expect("activate")
}

#[test]
fn test_engine_game_scenario() {
    let mut nav = navigator("TOKEN");
    press(&mut nav, ControlId::Start);
    press(&mut nav, ControlId::PlayerVsEngine);
    press(&mut nav, ControlId::Engine(EngineChoice::Viridithas));
    press(&mut nav, ControlId::Side(Side::White));
    let outcome = press(&mut nav, ControlId::Begin);

    let Outcome::Began(selection) = outcome else {
        panic!("expected Began, got {outcome:?}");
    };
    assert_eq!(nav.screen(), Screen::InProgress);
    assert_eq!(selection.game_mode(), GameMode::VsEngine);
    assert_eq!(selection.engine_choice(), Some(EngineChoice::Viridithas));
    assert_eq!(selection.side(), Some(Side::White));
    assert_eq!(selection.opponent_id(), "");
    assert_eq!(selection.credential_token(), "TOKEN");
}

#[test]
fn test_online_game_scenario() {
    let mut nav = navigator("");
    press(&mut nav, ControlId::Start);
    press(&mut nav, ControlId::PlayerVsPlayer);
    confirm(&mut nav, "abc123");
    press(&mut nav, ControlId::Side(Side::Black));
    let outcome = press(&mut nav, ControlId::Begin);

    let Outcome::Began(selection) = outcome else {
        panic!("expected Began, got {outcome:?}");
    };
    assert_eq!(nav.screen(), Screen::InProgress);
    assert_eq!(selection.game_mode(), GameMode::Online);
    assert_eq!(selection.engine_choice(), None);
    assert_eq!(selection.side(), Some(Side::Black));
    assert_eq!(selection.opponent_id(), "abc123");
}

#[test]
fn test_online_path_ready_has_opponent_and_side() {
    for side in Side::all() {
        for id in ["a", "abc123", "some-player_99"] {
            let mut nav = navigator("");
            press(&mut nav, ControlId::Start);
            press(&mut nav, ControlId::PlayerVsPlayer);
            confirm(&mut nav, "");
            confirm(&mut nav, id);
            press(&mut nav, ControlId::Side(side));

            assert_eq!(nav.screen(), Screen::ReadyToBegin);
            assert!(!nav.draft().opponent_id.is_empty());
            assert_eq!(nav.draft().side, Some(side));
        }
    }
}

#[test]
fn test_empty_opponent_does_not_mutate() {
    let mut nav = navigator("tok");
    press(&mut nav, ControlId::Start);
    press(&mut nav, ControlId::PlayerVsPlayer);
    let before = nav.draft().clone();

    let outcome = confirm(&mut nav, "");
    assert_eq!(outcome, Outcome::Rejected(EMPTY_OPPONENT_MESSAGE.to_string()));
    assert_eq!(nav.screen(), Screen::OnlineIdEntry);
    assert_eq!(nav.draft(), &before);
}

#[test]
fn test_cancel_from_setup_screens_resets() {
    // (path to the screen, expected landing screen after cancel)
    let walks: Vec<(Vec<Activation>, Screen)> = vec![
        (
            vec![
                Activation::pressed(ControlId::Start),
                Activation::pressed(ControlId::PlayerVsPlayer),
            ],
            Screen::MainMenu,
        ),
        (
            vec![
                Activation::pressed(ControlId::Start),
                Activation::pressed(ControlId::PlayerVsEngine),
            ],
            Screen::MainMenu,
        ),
        (
            vec![
                Activation::pressed(ControlId::Start),
                Activation::pressed(ControlId::PlayerVsPlayer),
                Activation::with_text(ControlId::Confirm, "abc123"),
                Activation::pressed(ControlId::Side(Side::Random)),
            ],
            Screen::Splash,
        ),
        (
            vec![
                Activation::pressed(ControlId::Start),
                Activation::pressed(ControlId::PlayerVsEngine),
                Activation::pressed(ControlId::Engine(EngineChoice::Maia)),
                Activation::pressed(ControlId::Side(Side::Black)),
            ],
            Screen::Splash,
        ),
        (
            vec![
                Activation::pressed(ControlId::Start),
                Activation::pressed(ControlId::Local),
            ],
            Screen::Splash,
        ),
    ];

    for (walk, landing) in walks {
        let mut nav = navigator("keep-me");
        for activation in walk {
            nav.activate(activation).expect("activate");
        }
        assert!(!nav.draft().is_blank());

        press(&mut nav, ControlId::Cancel);
        assert_eq!(nav.screen(), landing);
        assert!(nav.draft().is_blank());
        assert_eq!(nav.draft().game_mode, None);
        assert_eq!(nav.draft().engine, None);
        assert_eq!(nav.draft().side, None);
        assert_eq!(nav.draft().opponent_id, "");
        assert_eq!(nav.draft().credential_token, "keep-me");
    }
}

#[test]
fn test_restart_after_cancel_from_ready() {
    let mut nav = navigator("");
    press(&mut nav, ControlId::Start);
    press(&mut nav, ControlId::PlayerVsEngine);
    press(&mut nav, ControlId::Engine(EngineChoice::Maia));
    press(&mut nav, ControlId::Side(Side::White));
    press(&mut nav, ControlId::Cancel);
    assert_eq!(nav.screen(), Screen::Splash);

    press(&mut nav, ControlId::Start);
    press(&mut nav, ControlId::Local);
    let Outcome::Began(selection) = press(&mut nav, ControlId::Begin) else {
        panic!("expected Began");
    };
    assert_eq!(selection.game_mode(), GameMode::Local);
    assert_eq!(selection.engine_choice(), None);
    assert_eq!(selection.side(), None);
}
