use serde::{Deserialize, Serialize};

use crate::domain::hand::Phase;
use crate::domain::PlayerId;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::legal_actions;
use crate::state::GameState;

use super::dto::{GameViewDto, PlayerViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние стола глазами игрока (`None` – наблюдатель).
    GetGame { hero: Option<PlayerId> },

    /// История текущей/последней раздачи.
    GetHandHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Game(GameViewDto),
    HandHistory(HandHistory),
}

pub fn handle_query(state: &GameState, query: Query) -> QueryResponse {
    match query {
        Query::GetGame { hero } => QueryResponse::Game(build_game_view(state, hero)),
        Query::GetHandHistory => QueryResponse::HandHistory(state.history.clone()),
    }
}

/// Сформировать DTO стола для игрока `hero`.
///
/// Чужие карманные карты скрыты до шоудауна; сброшенные карты не открываются никогда.
/// На шоудауне открыты все вскрывшиеся места, включая проигравших олл-ин.
pub fn build_game_view(state: &GameState, hero: Option<PlayerId>) -> GameViewDto {
    let revealed: Vec<PlayerId> = if state.phase == Phase::Showdown {
        state
            .history
            .events
            .iter()
            .filter_map(|e| match &e.kind {
                HandEventKind::ShowdownReveal { player_id, .. } => Some(*player_id),
                _ => None,
            })
            .collect()
    } else {
        Vec::new()
    };

    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            let visible = Some(p.id) == hero || revealed.contains(&p.id);
            PlayerViewDto {
                player_id: p.id,
                name: p.name.clone(),
                seat_index: seat,
                is_bot: p.is_bot,
                chips: p.chips,
                current_bet: p.current_bet,
                status: p.status,
                last_action: p.last_action,
                is_dealer: seat == state.dealer_index && state.hand_number > 0,
                hole_cards: (visible && !p.hole_cards.is_empty()).then(|| p.hole_cards.clone()),
            }
        })
        .collect();

    let hero_actions = hero
        .and_then(|id| state.player_index(id))
        .filter(|seat| state.current_player_index == Some(*seat))
        .map(|seat| legal_actions(&state.players[seat], seat, &state.betting));

    GameViewDto {
        hand_number: state.hand_number,
        phase: state.phase,
        pot: state.pot,
        current_bet: state.betting.current_bet,
        min_raise: state.betting.min_raise,
        small_blind: state.stakes.small_blind,
        big_blind: state.stakes.big_blind,
        difficulty: state.difficulty,
        dealer_index: state.dealer_index,
        current_player_index: state.current_player_index,
        community_cards: state.community_cards.clone(),
        players,
        winners: state.winners.clone(),
        message: state.message.clone(),
        hero_actions,
        session_over: state.is_session_over(),
    }
}
