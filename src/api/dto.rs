use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{Phase, Winner};
use crate::domain::player::{ActionLabel, PlayerStatus};
use crate::domain::table::Difficulty;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::LegalActions;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub name: String,
    pub seat_index: SeatIndex,
    pub is_bot: bool,
    pub chips: Chips,
    pub current_bet: Chips,
    pub status: PlayerStatus,
    pub last_action: Option<ActionLabel>,
    pub is_dealer: bool,
    /// Карманные карты – только для "героя" или на шоудауне.
    pub hole_cards: Option<Vec<Card>>,
}

/// DTO стола с точки зрения одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameViewDto {
    pub hand_number: u64,
    pub phase: Phase,
    pub pot: Chips,
    pub current_bet: Chips,
    pub min_raise: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub difficulty: Difficulty,
    pub dealer_index: SeatIndex,
    pub current_player_index: Option<SeatIndex>,
    pub community_cards: Vec<Card>,
    pub players: Vec<PlayerViewDto>,
    pub winners: Vec<Winner>,
    pub message: String,
    /// Что может сделать герой, если сейчас его ход.
    pub hero_actions: Option<LegalActions>,
    pub session_over: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Вернуть обновлённое состояние стола.
    GameState(GameViewDto),
}
