//! Интеграционные тесты префлопа и перехода улиц в покерном движке.
//!
//! Проверяем:
//! - старт раздачи (2 карты каждому, SB/BB, первый ход);
//! - движение кнопки (пропуск выбывших), хедз-ап блайнды;
//! - переход PreFlop -> Flop -> Turn -> River -> Showdown;
//! - рост board: 0 -> 3 -> 4 -> 5;
//! - корректность очереди ходов через state.betting.to_act.

use holdem_sim::domain::{
    card::Card,
    chips::Chips,
    deck::Deck,
    hand::Phase,
    player::{ActionLabel, PlayerStatus},
    PlayerId,
};
use holdem_sim::engine::{
    apply_action, start_new_hand, start_new_hand_with_deck, EngineError, PlayerActionKind,
};
use holdem_sim::infra::{DeterministicRng, GameConfig, PacingConfig, SeatConfig};
use holdem_sim::GameState;

fn make_config(num_players: usize) -> GameConfig {
    GameConfig {
        seats: (0..num_players)
            .map(|i| {
                if i == 0 {
                    SeatConfig::human("You")
                } else {
                    SeatConfig::bot(&format!("Bot{i}"))
                }
            })
            .collect(),
        pacing: PacingConfig::instant(),
        ..GameConfig::default()
    }
}

fn act(state: &GameState, player: PlayerId, kind: PlayerActionKind) -> GameState {
    apply_action(state, player, kind).expect("action must be legal")
}

fn current(state: &GameState) -> PlayerId {
    state.current_player().expect("someone must be to act").id
}

//
// TEST 1 - шесть мест, блайнды 10/20
//
#[test]
fn six_seat_hand_posts_blinds_and_sets_first_actor() {
    let config = GameConfig::default();
    let mut rng = DeterministicRng::from_u64(7);
    let state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();

    assert_eq!(state.phase, Phase::PreFlop);
    assert_eq!(state.hand_number, 1);
    assert_eq!(state.dealer_index, 0);
    assert_eq!(state.pot, Chips(30));
    assert_eq!(state.current_bet(), Chips(20));
    assert_eq!(state.min_raise(), Chips(20));
    assert_eq!(state.message, "Pre-Flop Betting");

    assert_eq!(state.players[1].current_bet, Chips(10));
    assert_eq!(state.players[1].chips, Chips(990));
    assert_eq!(state.players[1].last_action, Some(ActionLabel::SmallBlind));
    assert_eq!(state.players[2].current_bet, Chips(20));
    assert_eq!(state.players[2].chips, Chips(980));
    assert_eq!(state.players[2].last_action, Some(ActionLabel::BigBlind));

    // Первым ходит место после BB, BB – последним.
    assert_eq!(state.current_player_index, Some(3));
    assert_eq!(state.betting.to_act, vec![3, 4, 5, 0, 1, 2]);

    for p in &state.players {
        assert_eq!(p.hole_cards.len(), 2);
        assert_eq!(p.status, PlayerStatus::Active);
    }
    assert_eq!(state.deck.len(), 52 - 12);
    assert_eq!(state.total_chips(), Chips(6000));
}

//
// TEST 2 - кнопка двигается и пропускает выбывших
//
#[test]
fn dealer_button_skips_busted_seats() {
    let config = make_config(4);
    let mut rng = DeterministicRng::from_u64(1);
    let mut state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();
    assert_eq!(state.dealer_index, 0);

    // Все сбрасывают до BB.
    state = act(&state, 3, PlayerActionKind::Fold);
    state = act(&state, 0, PlayerActionKind::Fold);
    state = act(&state, 1, PlayerActionKind::Fold);
    assert_eq!(state.phase, Phase::Showdown);
    assert_eq!(state.players[2].chips, Chips(1010));

    // Место 1 выбыло – кнопка перескакивает на место 2.
    state.players[1].chips = Chips::ZERO;
    let next = start_new_hand(&state, &mut rng).unwrap();

    assert_eq!(next.players[1].status, PlayerStatus::Busted);
    assert!(next.players[1].hole_cards.is_empty());
    assert_eq!(next.dealer_index, 2);
    assert_eq!(next.small_blind_seat, Some(3));
    assert_eq!(next.big_blind_seat, Some(0));
    assert_eq!(next.current_player_index, Some(2));
}

//
// TEST 3 - хедз-ап: дилер ставит SB и ходит первым на префлопе
//
#[test]
fn heads_up_dealer_posts_small_blind() {
    let config = make_config(2);
    let mut rng = DeterministicRng::from_u64(3);
    let mut state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();

    assert_eq!(state.small_blind_seat, Some(0));
    assert_eq!(state.big_blind_seat, Some(1));
    assert_eq!(state.players[0].current_bet, Chips(10));
    assert_eq!(current(&state), 0);

    state = act(&state, 0, PlayerActionKind::Call);
    // Опция BB.
    assert_eq!(state.phase, Phase::PreFlop);
    assert_eq!(current(&state), 1);

    state = act(&state, 1, PlayerActionKind::Check);
    assert_eq!(state.phase, Phase::Flop);
    // После флопа первым ходит BB (место после кнопки).
    assert_eq!(current(&state), 1);
}

//
// TEST 4 - рейз BB на опции переоткрывает торговлю
//
#[test]
fn big_blind_option_raise_reopens_action() {
    let config = make_config(3);
    let mut rng = DeterministicRng::from_u64(11);
    let mut state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();

    state = act(&state, 0, PlayerActionKind::Call);
    state = act(&state, 1, PlayerActionKind::Call);
    assert_eq!(current(&state), 2);

    state = act(&state, 2, PlayerActionKind::Raise(None));
    assert_eq!(state.phase, Phase::PreFlop);
    assert_eq!(state.current_bet(), Chips(40));
    assert_eq!(state.betting.to_act, vec![0, 1]);
    assert_eq!(current(&state), 0);
}

//
// TEST 5 - полная раздача чек-коллом до шоудауна
//
#[test]
fn check_call_hand_walks_all_streets() {
    let config = make_config(3);
    let mut rng = DeterministicRng::from_u64(42);
    let mut state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();

    state = act(&state, 0, PlayerActionKind::Call);
    state = act(&state, 1, PlayerActionKind::Call);
    state = act(&state, 2, PlayerActionKind::Check);

    let expected = [(Phase::Flop, 3usize), (Phase::Turn, 4), (Phase::River, 5)];
    for (phase, board) in expected {
        assert_eq!(state.phase, phase);
        assert_eq!(state.community_cards.len(), board);
        assert_eq!(state.current_bet(), Chips::ZERO);
        assert!(state.players.iter().all(|p| p.current_bet.is_zero()));
        // Постфлоп: первым ходит место после кнопки.
        assert_eq!(state.betting.to_act, vec![1, 2, 0]);

        for seat in [1, 2, 0] {
            assert_eq!(current(&state), seat);
            state = act(&state, seat, PlayerActionKind::Check);
        }
    }

    assert_eq!(state.phase, Phase::Showdown);
    assert_eq!(state.pot, Chips::ZERO);
    assert!(!state.winners.is_empty());
    assert_eq!(state.total_chips(), Chips(3000));
    assert_eq!(
        state.winners.iter().map(|w| w.amount).sum::<Chips>(),
        Chips(60)
    );
}

#[test]
fn six_seat_call_down_pays_best_hand() {
    let config = make_config(6);
    // Раздача по кругу с места 1 (после кнопки 0), затем борд.
    // Место 3 получает AA, остальным борд помогает максимум до меньшей пары.
    let deck: Vec<Card> = "2c 3d Ac 4h 5s 7c 8d 9h Ad Jc Qd Kh 2h 6d Ts 3c Ks"
        .split_whitespace()
        .map(|c| c.parse().unwrap())
        .collect();
    let mut state =
        start_new_hand_with_deck(&GameState::new(&config), Deck::stacked(&deck)).unwrap();
    assert_eq!(state.players[3].hole_cards[0].to_string(), "Ac");

    for seat in [3, 4, 5, 0, 1] {
        assert_eq!(current(&state), seat);
        state = act(&state, seat, PlayerActionKind::Call);
    }
    state = act(&state, 2, PlayerActionKind::Check);
    assert_eq!(state.phase, Phase::Flop);
    assert_eq!(state.pot, Chips(120));

    while state.phase.is_live() {
        let id = current(&state);
        state = act(&state, id, PlayerActionKind::Check);
    }

    assert_eq!(state.phase, Phase::Showdown);
    assert_eq!(state.winners.len(), 1);
    assert_eq!(state.winners[0].player_id, 3);
    assert_eq!(state.winners[0].amount, Chips(120));
    assert_eq!(state.winners[0].hand_name, "Pair");
    assert_eq!(state.message, "Bot3 Wins!");
    assert_eq!(state.players[3].chips, Chips(1100));
    assert_eq!(state.total_chips(), Chips(6000));
}

//
// TEST 6 - меньше двух игроков с фишками: конец сессии
//
#[test]
fn session_over_when_one_player_has_chips() {
    let config = make_config(2);
    let mut state = GameState::new(&config);
    state.players[1].chips = Chips::ZERO;

    let mut rng = DeterministicRng::from_u64(5);
    let next = start_new_hand(&state, &mut rng).unwrap();

    assert_eq!(next.phase, Phase::Waiting);
    assert!(next.is_session_over());
    assert_eq!(next.message, "Game Over! You Won!");
    assert_eq!(
        apply_action(&next, 0, PlayerActionKind::Check).unwrap_err(),
        EngineError::SessionOver
    );
}

#[test]
fn session_over_message_when_bot_survives() {
    let config = make_config(2);
    let mut state = GameState::new(&config);
    state.players[0].chips = Chips::ZERO;

    let mut rng = DeterministicRng::from_u64(5);
    let next = start_new_hand(&state, &mut rng).unwrap();
    assert_eq!(next.message, "Game Over! You Lost.");
}

//
// TEST 7 - нельзя начать раздачу поверх идущей
//
#[test]
fn cannot_start_hand_while_one_is_live() {
    let config = make_config(3);
    let mut rng = DeterministicRng::from_u64(9);
    let state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();
    assert_eq!(
        start_new_hand(&state, &mut rng).unwrap_err(),
        EngineError::HandAlreadyInProgress
    );
}
