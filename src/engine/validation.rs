use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок выполнить это действие при текущем состоянии ставок.
///
/// Нехватка фишек НЕ ошибка: call/raise больше стека превращаются в олл-ин.
pub fn validate_action(
    player: &Player,
    seat: SeatIndex,
    action: &PlayerActionKind,
    betting: &BettingState,
) -> Result<(), EngineError> {
    if player.status != PlayerStatus::Active {
        return Err(EngineError::IllegalAction);
    }

    let to_call = player.to_call(betting.current_bet);
    let max_total = player.chips + player.current_bet;

    match action {
        PlayerActionKind::Fold => Ok(()),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        PlayerActionKind::Call => {
            if to_call.is_zero() {
                Err(EngineError::CannotCall)
            } else {
                Ok(())
            }
        }

        PlayerActionKind::Raise(target) => {
            let target = target.unwrap_or(betting.current_bet + betting.min_raise);
            let exceeds_bet = max_total > betting.current_bet;
            if !betting.can_raise(seat) && exceeds_bet {
                return Err(EngineError::RaiseNotReopened);
            }
            if target >= max_total {
                // Олл-ин, каким бы он ни был по размеру.
                return Ok(());
            }
            if target < betting.current_bet + betting.min_raise {
                return Err(EngineError::RaiseTooSmall);
            }
            Ok(())
        }

        PlayerActionKind::AllIn => {
            if player.chips.is_zero() {
                return Err(EngineError::IllegalAction);
            }
            if !betting.can_raise(seat) && max_total > betting.current_bet {
                return Err(EngineError::RaiseNotReopened);
            }
            Ok(())
        }
    }
}

/// Что сейчас доступно игроку (для UI/CLI и ботов).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActions {
    pub can_check: bool,
    /// Сколько добавить для call (0 – call недоступен).
    pub call_amount: Chips,
    pub can_raise: bool,
    /// Минимальная итоговая ставка рейза.
    pub min_raise_to: Chips,
    /// Максимальная итоговая ставка (весь стек).
    pub max_raise_to: Chips,
}

pub fn legal_actions(player: &Player, seat: SeatIndex, betting: &BettingState) -> LegalActions {
    let to_call = player.to_call(betting.current_bet);
    let max_total = player.chips + player.current_bet;
    let active = player.status == PlayerStatus::Active;

    LegalActions {
        can_check: active && to_call.is_zero(),
        call_amount: if active { to_call.min(player.chips) } else { Chips::ZERO },
        can_raise: active && betting.can_raise(seat) && max_total > betting.current_bet,
        min_raise_to: (betting.current_bet + betting.min_raise).min(max_total),
        max_raise_to: max_total,
    }
}
