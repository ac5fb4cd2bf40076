use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока в контексте раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче.
    Active,
    /// Игрок сфолдил и больше не участвует в банке.
    Folded,
    /// Игрок в олл-ине – не может больше делать ставки.
    AllIn,
    /// Игрок сидит за столом, но не участвует в раздачах.
    SittingOut,
    /// Игрок без фишек. До конца сессии в раздачах не участвует.
    Busted,
}

/// Метка последнего действия (для UI).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionLabel {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionLabel::SmallBlind => "SB",
            ActionLabel::BigBlind => "BB",
            ActionLabel::Fold => "FOLD",
            ActionLabel::Check => "CHECK",
            ActionLabel::Call => "CALL",
            ActionLabel::Raise => "RAISE",
            ActionLabel::AllIn => "ALL IN",
        };
        f.write_str(s)
    }
}

/// Место за столом. Порядок мест фиксирован на всю сессию.
///
/// Инварианты:
/// - `current_bet <= total_hand_bet`;
/// - `chips + total_hand_bet` = стек на начало раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_bot: bool,
    pub chips: Chips,
    /// Карманные карты (0 или 2).
    pub hole_cards: Vec<Card>,
    pub status: PlayerStatus,
    /// Ставка в текущем раунде торговли (обнуляется на каждой улице).
    pub current_bet: Chips,
    /// Всё, что игрок внёс за раздачу.
    pub total_hand_bet: Chips,
    pub last_action: Option<ActionLabel>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, is_bot: bool, chips: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            is_bot,
            chips,
            hole_cards: Vec::new(),
            status: PlayerStatus::Active,
            current_bet: Chips::ZERO,
            total_hand_bet: Chips::ZERO,
            last_action: None,
        }
    }

    /// Ещё претендует на банк (в том числе олл-ин).
    pub fn is_live(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может ли ещё делать ставки.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Сколько нужно доплатить до `table_bet`.
    pub fn to_call(&self, table_bet: Chips) -> Chips {
        table_bet.saturating_sub(self.current_bet)
    }

    /// Перенести фишки из стека в ставку (не больше, чем есть).
    /// Возвращает реально перенесённую сумму. Пустой стек → `AllIn`.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        self.total_hand_bet += paid;
        if self.chips.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        paid
    }

    /// Сброс перед новой раздачей.
    pub fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = Chips::ZERO;
        self.total_hand_bet = Chips::ZERO;
        self.last_action = None;
        if self.status != PlayerStatus::SittingOut {
            self.status = if self.chips.is_zero() {
                PlayerStatus::Busted
            } else {
                PlayerStatus::Active
            };
        }
    }
}
