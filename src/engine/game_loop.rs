use log::{debug, info};

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandRank, Phase, Winner, OPPONENTS_FOLDED};
use crate::domain::player::{ActionLabel, PlayerStatus};
use crate::domain::table::PotMode;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::{PlayerActionKind, ResolvedAction};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{blind_seats, is_dealt_in, next_dealer, seats_after};
use crate::engine::pot::award_pot;
use crate::engine::side_pots::{compute_side_pots, contested_pots, SidePot};
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;
use crate::eval::evaluate_best_hand;
use crate::state::GameState;

pub const PRE_FLOP_MESSAGE: &str = "Pre-Flop Betting";
pub const SPLIT_POT_MESSAGE: &str = "Split Pot!";
pub const GAME_WON_MESSAGE: &str = "Game Over! You Won!";
pub const GAME_LOST_MESSAGE: &str = "Game Over! You Lost.";

/// Старт новой раздачи с перемешанной колодой.
pub fn start_new_hand<R: RandomSource>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, EngineError> {
    start_new_hand_with_deck(state, Deck::shuffled(rng))
}

/// Старт новой раздачи с заданной колодой:
/// - сбрасывает места (без фишек → Busted);
/// - двигает кнопку;
/// - раздаёт карманные карты;
/// - постит блайнды и настраивает очередь префлопа.
///
/// Меньше двух игроков с фишками – сессия окончена (`Phase::Waiting`), это не ошибка.
pub fn start_new_hand_with_deck(state: &GameState, deck: Deck) -> Result<GameState, EngineError> {
    if state.phase.is_live() {
        return Err(EngineError::HandAlreadyInProgress);
    }

    let mut next = state.clone();
    next.community_cards.clear();
    next.winners.clear();
    next.pot = Chips::ZERO;
    next.current_player_index = None;
    next.small_blind_seat = None;
    next.big_blind_seat = None;
    next.history = HandHistory::new();
    for p in next.players.iter_mut() {
        p.reset_for_hand();
    }

    let with_chips = next.players.iter().filter(|p| !p.chips.is_zero()).count();
    if with_chips < 2 {
        finish_session(&mut next);
        return Ok(next);
    }

    let dealt_in = next.players.iter().filter(|p| is_dealt_in(p)).count();
    if dealt_in < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let previous = (state.hand_number > 0).then_some(state.dealer_index);
    let dealer = next_dealer(&next.players, previous).ok_or(EngineError::NotEnoughPlayers)?;
    let (sb, bb) = blind_seats(&next.players, dealer).ok_or(EngineError::NotEnoughPlayers)?;

    next.hand_number += 1;
    next.dealer_index = dealer;
    next.deck = deck;
    next.phase = Phase::PreFlop;
    next.history.push(HandEventKind::HandStarted {
        hand_id: next.hand_number,
        dealer,
    });

    deal_hole_cards(&mut next, dealer)?;

    let stakes = next.stakes.clone();
    let sb_paid = post_blind(&mut next, sb, stakes.small_blind, ActionLabel::SmallBlind);
    let bb_paid = post_blind(&mut next, bb, stakes.big_blind, ActionLabel::BigBlind);
    next.small_blind_seat = Some(sb);
    next.big_blind_seat = Some(bb);
    next.history.push(HandEventKind::BlindsPosted {
        small_blind: (sb, sb_paid),
        big_blind: (bb, bb_paid),
    });

    // Очередь: от места после BB по кругу, BB – последним (опция BB).
    let to_act = seats_after(&next.players, bb, |p| p.can_act());
    next.betting = BettingState::new(stakes.big_blind, stakes.big_blind, to_act);
    next.betting.last_aggressor = Some(bb);
    next.message = PRE_FLOP_MESSAGE.to_string();

    info!(
        "hand #{} started: dealer={} sb={} bb={} players={}",
        next.hand_number, dealer, sb, bb, dealt_in
    );

    settle(&mut next);
    Ok(next)
}

/// Раздача карманных карт – по 2 карты, по кругу от места после дилера.
fn deal_hole_cards(state: &mut GameState, dealer: SeatIndex) -> Result<(), EngineError> {
    let order = seats_after(&state.players, dealer, |p| p.can_act());
    for _ in 0..2 {
        for &seat in &order {
            let card = state
                .deck
                .draw_one()
                .ok_or(EngineError::Internal("deck exhausted while dealing hole cards"))?;
            state.players[seat].hole_cards.push(card);
        }
    }
    for &seat in &order {
        let cards = state.players[seat].hole_cards.clone();
        state.history.push(HandEventKind::HoleCardsDealt { seat, cards });
    }
    Ok(())
}

fn post_blind(state: &mut GameState, seat: SeatIndex, blind: Chips, label: ActionLabel) -> Chips {
    let player = &mut state.players[seat];
    let paid = player.commit(blind);
    player.last_action = Some(label);
    state.pot += paid;
    debug!("seat {} posts {} {}", seat, label, paid);
    paid
}

/// Применить действие игрока, чей сейчас ход.
///
/// Любая ошибка – состояние не меняется. Действие не того игрока,
/// вне раздачи или во время ранаута отвергается.
pub fn apply_action(
    state: &GameState,
    player_id: PlayerId,
    action: PlayerActionKind,
) -> Result<GameState, EngineError> {
    if !state.phase.is_live() {
        return Err(if state.is_session_over() {
            EngineError::SessionOver
        } else {
            EngineError::NoActiveHand
        });
    }

    let seat = state
        .player_index(player_id)
        .ok_or(EngineError::UnknownPlayer(player_id))?;

    if state.current_player_index != Some(seat) {
        return Err(EngineError::NotPlayersTurn(player_id));
    }

    validate_action(&state.players[seat], seat, &action, &state.betting)?;

    let mut next = state.clone();
    let resolved = match action {
        PlayerActionKind::Fold => {
            next.players[seat].status = PlayerStatus::Folded;
            next.betting.mark_acted(seat);
            ResolvedAction::Fold
        }

        PlayerActionKind::Check => {
            next.betting.mark_acted(seat);
            ResolvedAction::Check
        }

        PlayerActionKind::Call => {
            let to_call = next.players[seat].to_call(next.betting.current_bet);
            let paid = next.players[seat].commit(to_call);
            next.pot += paid;
            next.betting.mark_acted(seat);
            if next.players[seat].status == PlayerStatus::AllIn {
                ResolvedAction::AllIn {
                    to: next.players[seat].current_bet,
                    paid,
                }
            } else {
                ResolvedAction::Call { paid }
            }
        }

        PlayerActionKind::Raise(target) => {
            let target = target.unwrap_or(next.betting.current_bet + next.betting.min_raise);
            let player = &next.players[seat];
            if target >= player.chips + player.current_bet {
                apply_all_in(&mut next, seat)
            } else {
                apply_raise(&mut next, seat, target)
            }
        }

        PlayerActionKind::AllIn => apply_all_in(&mut next, seat),
    };

    let label = resolved.label();
    let player = &mut next.players[seat];
    player.last_action = Some(label);
    next.message = format!("{} {}", player.name, label);
    let new_stack = player.chips;

    debug!(
        "seat {} ({}) {:?}: stack={} pot={}",
        seat, player_id, resolved, new_stack, next.pot
    );

    next.history.push(HandEventKind::PlayerActed {
        player_id,
        seat,
        action: resolved,
        new_stack,
        pot_after: next.pot,
    });

    settle(&mut next);
    Ok(next)
}

/// Полный рейз до `target` (стека хватает, размер проверен валидацией).
fn apply_raise(state: &mut GameState, seat: SeatIndex, target: Chips) -> ResolvedAction {
    let previous_bet = state.betting.current_bet;
    let diff = target - state.players[seat].current_bet;
    let paid = state.players[seat].commit(diff);
    state.pot += paid;

    let new_bet = state.players[seat].current_bet;
    let to_act = seats_after(&state.players, seat, |p| p.can_act())
        .into_iter()
        .filter(|s| *s != seat)
        .collect();
    state
        .betting
        .on_full_raise(seat, new_bet, new_bet - previous_bet, to_act);

    ResolvedAction::Raise { to: new_bet, paid }
}

/// Олл-ин. Если он поднимает ставку хотя бы на `min_raise` – это полный рейз,
/// иначе ставка растёт, но раунд для уже походивших не переоткрывается.
fn apply_all_in(state: &mut GameState, seat: SeatIndex) -> ResolvedAction {
    let previous_bet = state.betting.current_bet;
    let stack = state.players[seat].chips;
    let paid = state.players[seat].commit(stack);
    state.pot += paid;
    let new_bet = state.players[seat].current_bet;

    if new_bet > previous_bet {
        let raise_size = new_bet - previous_bet;
        if raise_size >= state.betting.min_raise {
            let to_act = seats_after(&state.players, seat, |p| p.can_act());
            state.betting.on_full_raise(seat, new_bet, raise_size, to_act);
        } else {
            let owing = seats_after(&state.players, seat, |p| {
                p.can_act() && p.current_bet < new_bet
            });
            state.betting.on_short_all_in(seat, new_bet, owing);
        }
    } else {
        state.betting.mark_acted(seat);
    }

    ResolvedAction::AllIn { to: new_bet, paid }
}

/// Кто ходит дальше:
/// 1. остался один претендент – он забирает банк;
/// 2. торговать некому (≤1 может ставить и всё уравнено) – ранаут;
/// 3. очередь пуста – следующая улица;
/// 4. иначе – первый в очереди.
fn settle(state: &mut GameState) {
    let live: Vec<SeatIndex> = (0..state.players.len())
        .filter(|&i| state.players[i].is_live())
        .collect();

    if live.len() == 1 {
        award_uncontested(state, live[0]);
        return;
    }

    let players = &state.players;
    state.betting.to_act.retain(|&s| players[s].can_act());

    let table_bet = state.betting.current_bet;
    let actors: Vec<SeatIndex> = live
        .iter()
        .copied()
        .filter(|&i| state.players[i].can_act())
        .collect();
    let all_matched = actors
        .iter()
        .all(|&i| state.players[i].current_bet >= table_bet);

    if actors.len() <= 1 && all_matched {
        debug!("no more betting possible, running out the board");
        state.betting.to_act.clear();
        state.current_player_index = None;
        advance_street(state);
    } else if state.betting.is_round_complete() {
        advance_street(state);
    } else {
        state.current_player_index = state.betting.to_act.first().copied();
    }
}

/// Тик: если раздача идёт, а ходить некому – открыть следующую улицу.
/// В остальных случаях (в т.ч. на шоудауне) возвращает копию без изменений.
pub fn proceed(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.awaiting_runout() {
        advance_street(&mut next);
    }
    next
}

/// Крутить `proceed`, пока кто-то не должен ходить или раздача не закончится.
pub fn proceed_until_decision(state: &GameState) -> GameState {
    let mut next = state.clone();
    while next.awaiting_runout() {
        advance_street(&mut next);
    }
    next
}

/// Следующая улица: сброс ставок, карты на борд, новая очередь.
/// После ривера – шоудаун.
fn advance_street(state: &mut GameState) {
    for p in state.players.iter_mut() {
        p.current_bet = Chips::ZERO;
        p.last_action = None;
    }

    let phase = match state.phase.next_street() {
        Some(Phase::Showdown) => {
            finish_with_showdown(state);
            return;
        }
        Some(phase) => phase,
        None => return,
    };
    let count = if phase == Phase::Flop { 3 } else { 1 };

    let cards = state.deck.draw_n(count);
    state.community_cards.extend_from_slice(&cards);
    state.phase = phase;
    state.message = format!("The {phase}");
    state.history.push(HandEventKind::StreetChanged { phase });
    state.history.push(HandEventKind::BoardDealt { phase, cards });

    let to_act = seats_after(&state.players, state.dealer_index, |p| p.can_act());
    let big_blind = state.stakes.big_blind;
    if to_act.len() >= 2 {
        state.current_player_index = to_act.first().copied();
        state.betting = BettingState::new(Chips::ZERO, big_blind, to_act);
    } else {
        state.current_player_index = None;
        state.betting = BettingState::new(Chips::ZERO, big_blind, Vec::new());
    }

    debug!(
        "street {}: board={:?} to_act={:?}",
        phase, state.community_cards, state.betting.to_act
    );
}

/// Все, кроме одного, сбросили – банк без вскрытия.
fn award_uncontested(state: &mut GameState, seat: SeatIndex) {
    let amount = state.pot;
    let player = &mut state.players[seat];
    player.chips += amount;

    state.winners = vec![Winner {
        player_id: player.id,
        amount,
        hand_name: OPPONENTS_FOLDED.to_string(),
    }];
    state.history.push(HandEventKind::PotAwarded {
        seat,
        player_id: player.id,
        amount,
    });
    info!("hand #{}: {} wins {} uncontested", state.hand_number, player.name, amount);

    state.message = OPPONENTS_FOLDED.to_string();
    close_hand(state);
}

/// Шоудаун: оценить руки живых игроков и выплатить банк (или сайд-поты).
fn finish_with_showdown(state: &mut GameState) {
    let live: Vec<SeatIndex> = (0..state.players.len())
        .filter(|&i| state.players[i].is_live())
        .collect();

    let mut ranks: Vec<(SeatIndex, HandRank, String)> = Vec::with_capacity(live.len());
    for &seat in &live {
        let player = &state.players[seat];
        let result = evaluate_best_hand(&player.hole_cards, &state.community_cards);
        let hand_name = result.rank_name().to_string();
        state.history.push(HandEventKind::ShowdownReveal {
            seat,
            player_id: player.id,
            hole_cards: player.hole_cards.clone(),
            rank: result.score,
            hand_name: hand_name.clone(),
        });
        ranks.push((seat, result.score, hand_name));
    }

    let pots = match state.pot_mode {
        PotMode::SinglePot => vec![SidePot {
            amount: state.pot,
            eligible_seats: live.clone(),
        }],
        PotMode::SidePots => {
            let contributions: Vec<(SeatIndex, Chips)> = state
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| (i, p.total_hand_bet))
                .collect();
            contested_pots(compute_side_pots(&contributions), |s| live.contains(&s))
        }
    };

    let mut winners: Vec<Winner> = Vec::new();
    for pot in pots {
        let contenders: Vec<(SeatIndex, HandRank)> = ranks
            .iter()
            .filter(|(seat, _, _)| pot.eligible_seats.contains(seat))
            .map(|(seat, rank, _)| (*seat, *rank))
            .collect();

        for (seat, amount) in award_pot(pot.amount, &contenders) {
            let player = &mut state.players[seat];
            player.chips += amount;
            state.history.push(HandEventKind::PotAwarded {
                seat,
                player_id: player.id,
                amount,
            });

            match winners.iter_mut().find(|w| w.player_id == player.id) {
                Some(w) => w.amount += amount,
                None => {
                    let hand_name = ranks
                        .iter()
                        .find(|(s, _, _)| *s == seat)
                        .map(|(_, _, name)| name.clone())
                        .unwrap_or_default();
                    winners.push(Winner {
                        player_id: player.id,
                        amount,
                        hand_name,
                    });
                }
            }
        }
    }

    state.message = match winners.as_slice() {
        [single] => {
            let name = state
                .player(single.player_id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            format!("{name} Wins!")
        }
        _ => SPLIT_POT_MESSAGE.to_string(),
    };

    info!(
        "hand #{} showdown: {}",
        state.hand_number,
        winners
            .iter()
            .map(|w| format!("player {} +{} ({})", w.player_id, w.amount, w.hand_name))
            .collect::<Vec<_>>()
            .join(", ")
    );

    state.winners = winners;
    close_hand(state);
}

/// Общая часть конца раздачи: банк обнулён, без фишек – Busted.
fn close_hand(state: &mut GameState) {
    state.pot = Chips::ZERO;
    state.phase = Phase::Showdown;
    state.current_player_index = None;
    state.betting.to_act.clear();

    for p in state.players.iter_mut() {
        if p.chips.is_zero() && p.status != PlayerStatus::SittingOut {
            p.status = PlayerStatus::Busted;
        }
    }

    state.history.push(HandEventKind::HandFinished {
        hand_id: state.hand_number,
    });
}

/// Фишки остались меньше чем у двух игроков.
fn finish_session(state: &mut GameState) {
    state.phase = Phase::Waiting;
    state.current_player_index = None;
    state.betting = BettingState::default();

    let winner = state.players.iter().find(|p| !p.chips.is_zero());
    state.message = match winner {
        Some(p) if p.is_bot => GAME_LOST_MESSAGE.to_string(),
        Some(_) => GAME_WON_MESSAGE.to_string(),
        None => GAME_LOST_MESSAGE.to_string(),
    };
    state.history.push(HandEventKind::SessionOver {
        winner: winner.map(|p| p.id),
    });
    info!("session over: {}", state.message);
}
