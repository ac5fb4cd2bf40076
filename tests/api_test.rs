//! Тесты внешнего API: команды, запросы, ошибки.

use holdem_sim::{
    api::{
        commands::{handle_command, Command},
        dto::CommandResponse,
        errors::ApiError,
        queries::{handle_query, Query, QueryResponse},
    },
    domain::{chips::Chips, hand::Phase, player::PlayerStatus, table::Difficulty},
    engine::{PlayerAction, PlayerActionKind, PokerSession},
    infra::{DeterministicRng, GameConfig, PacingConfig, SeatConfig},
};

/// Утилита: сессия на 3 места, человек на месте 0 (он же дилер и первый ход).
fn make_session() -> PokerSession<DeterministicRng> {
    let config = GameConfig {
        seats: vec![
            SeatConfig::human("You"),
            SeatConfig::bot("Alex"),
            SeatConfig::bot("Beth"),
        ],
        pacing: PacingConfig::instant(),
        ..GameConfig::default()
    };
    PokerSession::new(config, DeterministicRng::from_u64(17))
}

fn game_view(resp: CommandResponse) -> holdem_sim::api::GameViewDto {
    match resp {
        CommandResponse::GameState(view) => view,
        other => panic!("expected game state, got {other:?}"),
    }
}

#[test]
fn initialize_game_returns_hero_view() {
    let mut session = make_session();
    let view = game_view(handle_command(&mut session, Command::InitializeGame, Some(0)).unwrap());

    assert_eq!(view.phase, Phase::PreFlop);
    assert_eq!(view.hand_number, 1);
    assert_eq!(view.pot, Chips(30));
    assert_eq!(view.current_player_index, Some(0));
    assert!(view.players[0].is_dealer);
    assert!(view.players[0].hole_cards.is_some());
    assert!(view.players[1].hole_cards.is_none());

    let legal = view.hero_actions.expect("hero is to act");
    assert!(!legal.can_check);
    assert_eq!(legal.call_amount, Chips(20));
    assert_eq!(legal.min_raise_to, Chips(40));
    assert_eq!(legal.max_raise_to, Chips(1000));
}

#[test]
fn player_action_command_applies_and_rejects() {
    let mut session = make_session();
    handle_command(&mut session, Command::InitializeGame, Some(0)).unwrap();

    // Не его ход.
    let err = handle_command(
        &mut session,
        Command::PlayerAction(PlayerAction {
            player_id: 2,
            kind: PlayerActionKind::Fold,
        }),
        Some(0),
    )
    .unwrap_err();
    assert_eq!(err, ApiError::NotYourTurn(2));

    // Чек при ставке – ошибка движка, состояние прежнее.
    let err = handle_command(
        &mut session,
        Command::PlayerAction(PlayerAction {
            player_id: 0,
            kind: PlayerActionKind::Check,
        }),
        Some(0),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::EngineError(_)));
    assert_eq!(session.state().current_player_index, Some(0));

    let view = game_view(
        handle_command(
            &mut session,
            Command::PlayerAction(PlayerAction {
                player_id: 0,
                kind: PlayerActionKind::Fold,
            }),
            Some(0),
        )
        .unwrap(),
    );
    assert_eq!(view.players[0].status, PlayerStatus::Folded);
    assert_eq!(view.message, "You FOLD");
    assert!(view.hero_actions.is_none());
}

#[test]
fn commands_parse_from_json() {
    let cmd = Command::from_json(r#"{"PlayerAction":{"player_id":0,"kind":{"Raise":120}}}"#).unwrap();
    assert_eq!(
        cmd,
        Command::PlayerAction(PlayerAction {
            player_id: 0,
            kind: PlayerActionKind::Raise(Some(Chips(120))),
        })
    );
    assert_eq!(Command::from_json(r#""Proceed""#).unwrap(), Command::Proceed);
    assert!(matches!(
        Command::from_json("{ nope"),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn set_difficulty_and_sit_out() {
    let mut session = make_session();

    let resp = handle_command(&mut session, Command::SetDifficulty(Difficulty::Hard), None).unwrap();
    assert_eq!(resp, CommandResponse::Ok);
    assert_eq!(session.state().difficulty, Difficulty::Hard);
    assert_eq!(session.config().difficulty, Difficulty::Hard);

    handle_command(&mut session, Command::SitOut { player_id: 2 }, None).unwrap();
    let view = game_view(handle_command(&mut session, Command::StartNewHand, None).unwrap());
    assert_eq!(view.players[2].status, PlayerStatus::SittingOut);
    assert_eq!(view.pot, Chips(30));

    // Во время раздачи пересаживаться нельзя.
    let err = handle_command(&mut session, Command::SitIn { player_id: 2 }, None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));

    let err = handle_command(&mut session, Command::StartNewHand, None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));
}

#[test]
fn queries_return_view_and_history() {
    let mut session = make_session();
    handle_command(&mut session, Command::InitializeGame, None).unwrap();

    match handle_query(session.state(), Query::GetGame { hero: None }) {
        QueryResponse::Game(view) => {
            assert!(view.players.iter().all(|p| p.hole_cards.is_none()));
            assert!(view.hero_actions.is_none());
        }
        other => panic!("unexpected response: {other:?}"),
    }

    match handle_query(session.state(), Query::GetHandHistory) {
        QueryResponse::HandHistory(history) => {
            assert!(!history.events.is_empty());
            assert_eq!(history.events[0].index, 0);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn bots_play_until_human_turn() {
    let mut session = make_session();
    session.initialize_game().unwrap();

    handle_command(
        &mut session,
        Command::PlayerAction(PlayerAction {
            player_id: 0,
            kind: PlayerActionKind::Call,
        }),
        Some(0),
    )
    .unwrap();

    let mut steps = 0;
    while session.state().phase.is_live() && !session.is_human_turn() {
        steps += 1;
        assert!(steps < 100);
        if session.state().awaiting_runout() {
            session.proceed();
            continue;
        }
        let result = session.play_bot_turn().expect("bot must be to act");
        assert!(result.is_ok());
    }

    assert_eq!(session.state().total_chips(), Chips(3000));
}
