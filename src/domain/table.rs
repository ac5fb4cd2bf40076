use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Индекс места за столом (порядок мест фиксирован на всю сессию).
pub type SeatIndex = usize;

/// Блайнды стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

impl Default for TableStakes {
    fn default() -> Self {
        Self::new(Chips(10), Chips(20))
    }
}

/// Как делится банк на шоудауне.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PotMode {
    /// Один общий банк: лучшая рука забирает всё, ничьи делят поровну,
    /// остаток от деления – первому по порядку мест.
    #[default]
    SinglePot,
    /// Сайд-поты по вкладам: олл-ин претендует только на фишки до своего уровня.
    SidePots,
}

/// Уровень сложности ботов.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}
