use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Фаза раздачи.
///
/// `Waiting` – до первой раздачи и терминальное состояние сессии
/// (меньше двух игроков с фишками).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// Идёт ли торговля/раздача карт.
    pub fn is_live(&self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }

    /// Следующая улица. Для `River` это `Showdown`.
    pub fn next_street(&self) -> Option<Phase> {
        match self {
            Phase::PreFlop => Some(Phase::Flop),
            Phase::Flop => Some(Phase::Turn),
            Phase::Turn => Some(Phase::River),
            Phase::River => Some(Phase::Showdown),
            Phase::Waiting | Phase::Showdown => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Waiting => "Waiting",
            Phase::PreFlop => "Pre-Flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// Сила руки: число с полным порядком на всех 5-карточных руках.
/// Категория занимает полосу `категория * 1_000_000`, внутри – кикеры.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Выигрыш одного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Winner {
    pub player_id: PlayerId,
    pub amount: Chips,
    /// "Opponents Folded" или название комбинации.
    pub hand_name: String,
}

pub const OPPONENTS_FOLDED: &str = "Opponents Folded";
