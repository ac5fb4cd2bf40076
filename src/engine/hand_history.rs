use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, Phase};
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::actions::ResolvedAction;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_id: HandId, dealer: SeatIndex },

    /// Блайнды (фактически внесённые суммы).
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты общие карты на борде.
    BoardDealt { phase: Phase, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        action: ResolvedAction,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу.
    StreetChanged { phase: Phase },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank: HandRank,
        hand_name: String,
    },

    /// Выплата банка(ов).
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished { hand_id: HandId },

    /// Фишки остались меньше чем у двух игроков.
    SessionOver { winner: Option<PlayerId> },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn last(&self) -> Option<&HandEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
