use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{Phase, Winner};
use crate::domain::player::Player;
use crate::domain::table::{Difficulty, PotMode, TableStakes};
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::betting::BettingState;
use crate::engine::hand_history::HandHistory;
use crate::infra::config::GameConfig;

pub const WELCOME_MESSAGE: &str = "Welcome to Texas Hold'em";

/// Полное состояние стола: игроки, колода, борд, банк, торговля.
///
/// Снимок неизменяем с точки зрения движка: каждый переход
/// возвращает новый `GameState`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    /// Места в фиксированном порядке посадки.
    pub players: Vec<Player>,
    pub deck: Deck,
    /// 0, 3, 4 или 5 карт.
    pub community_cards: Vec<Card>,
    /// Общий банк. После выплаты обнуляется.
    pub pot: Chips,
    pub betting: BettingState,
    pub dealer_index: SeatIndex,
    /// Чей ход. `None` – ждём тика (ранаут) или раздача не идёт.
    pub current_player_index: Option<SeatIndex>,
    pub phase: Phase,
    pub winners: Vec<Winner>,
    pub message: String,
    pub difficulty: Difficulty,
    pub stakes: TableStakes,
    pub pot_mode: PotMode,
    /// Номер раздачи; 0 – ещё не было ни одной.
    pub hand_number: HandId,
    pub small_blind_seat: Option<SeatIndex>,
    pub big_blind_seat: Option<SeatIndex>,
    pub history: HandHistory,
}

impl GameState {
    /// Свежий стол из конфига: у всех стартовый стек, раздача не начата.
    pub fn new(config: &GameConfig) -> Self {
        let players = config
            .seats
            .iter()
            .enumerate()
            .map(|(i, seat)| Player::new(i as PlayerId, seat.name.clone(), seat.is_bot, config.starting_chips))
            .collect();

        Self {
            players,
            deck: Deck::default(),
            community_cards: Vec::new(),
            pot: Chips::ZERO,
            betting: BettingState::default(),
            dealer_index: 0,
            current_player_index: None,
            phase: Phase::Waiting,
            winners: Vec::new(),
            message: WELCOME_MESSAGE.to_string(),
            difficulty: config.difficulty,
            stakes: config.stakes.clone(),
            pot_mode: config.pot_mode,
            hand_number: 0,
            small_blind_seat: None,
            big_blind_seat: None,
            history: HandHistory::new(),
        }
    }

    pub fn current_bet(&self) -> Chips {
        self.betting.current_bet
    }

    pub fn min_raise(&self) -> Chips {
        self.betting.min_raise
    }

    pub fn player_index(&self, id: PlayerId) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Место человека (если он есть за столом).
    pub fn human_index(&self) -> Option<SeatIndex> {
        self.players.iter().position(|p| !p.is_bot)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_index.and_then(|i| self.players.get(i))
    }

    /// Фишки в стеках + банк. Сохраняется всеми переходами.
    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(|p| p.chips).sum::<Chips>() + self.pot
    }

    pub fn is_hand_live(&self) -> bool {
        self.phase.is_live()
    }

    /// Фишки остались меньше чем у двух игроков.
    pub fn is_session_over(&self) -> bool {
        self.phase == Phase::Waiting && self.players.iter().filter(|p| !p.chips.is_zero()).count() < 2
    }

    /// Торговля стоит, но раздача идёт – нужен `proceed`.
    pub fn awaiting_runout(&self) -> bool {
        self.phase.is_live() && self.current_player_index.is_none()
    }
}
