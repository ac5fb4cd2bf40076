use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{ActionLabel, Chips, PlayerId};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Рейз до указанной ИТОГОВОЙ ставки в раунде (не прибавка).
    /// `None` – минимальный рейз: `current_bet + min_raise`.
    Raise(Option<Chips>),
    /// Поставить весь стек.
    AllIn,
}

impl fmt::Display for PlayerActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerActionKind::Fold => f.write_str("fold"),
            PlayerActionKind::Check => f.write_str("check"),
            PlayerActionKind::Call => f.write_str("call"),
            PlayerActionKind::Raise(Some(to)) => write!(f, "raise to {}", to.0),
            PlayerActionKind::Raise(None) => f.write_str("min-raise"),
            PlayerActionKind::AllIn => f.write_str("all-in"),
        }
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub player_id: PlayerId,
    pub kind: PlayerActionKind,
}

/// Что на самом деле произошло после применения действия
/// (с учётом понижения до олл-ина). Это событие видит презентация.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResolvedAction {
    Fold,
    Check,
    Call { paid: Chips },
    Raise { to: Chips, paid: Chips },
    AllIn { to: Chips, paid: Chips },
}

impl ResolvedAction {
    pub fn label(&self) -> ActionLabel {
        match self {
            ResolvedAction::Fold => ActionLabel::Fold,
            ResolvedAction::Check => ActionLabel::Check,
            ResolvedAction::Call { .. } => ActionLabel::Call,
            ResolvedAction::Raise { .. } => ActionLabel::Raise,
            ResolvedAction::AllIn { .. } => ActionLabel::AllIn,
        }
    }

    /// Сколько фишек ушло в банк этим действием.
    pub fn paid(&self) -> Chips {
        match self {
            ResolvedAction::Fold | ResolvedAction::Check => Chips::ZERO,
            ResolvedAction::Call { paid }
            | ResolvedAction::Raise { paid, .. }
            | ResolvedAction::AllIn { paid, .. } => *paid,
        }
    }
}
