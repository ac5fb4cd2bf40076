use serde::{Deserialize, Serialize};

use crate::domain::table::Difficulty;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerAction;
use crate::engine::{PokerSession, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня: всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Новая игра: стеки заново, первая раздача.
    InitializeGame,

    /// Следующая раздача.
    StartNewHand,

    /// Действие игрока.
    PlayerAction(PlayerAction),

    /// Тик ранаута (когда торговать некому).
    Proceed,

    SetDifficulty(Difficulty),

    SitOut { player_id: PlayerId },

    SitIn { player_id: PlayerId },
}

impl Command {
    /// Разобрать команду из JSON.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Выполнить команду и вернуть состояние стола глазами `hero`.
pub fn handle_command<R: RandomSource>(
    session: &mut PokerSession<R>,
    command: Command,
    hero: Option<PlayerId>,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::InitializeGame => {
            session.initialize_game()?;
        }
        Command::StartNewHand => {
            session.start_new_hand()?;
        }
        Command::PlayerAction(action) => {
            session.submit_action(action.player_id, action.kind)?;
        }
        Command::Proceed => {
            session.proceed();
        }
        Command::SetDifficulty(difficulty) => {
            session.set_difficulty(difficulty);
            return Ok(CommandResponse::Ok);
        }
        Command::SitOut { player_id } => {
            session.sit_out(player_id)?;
        }
        Command::SitIn { player_id } => {
            session.sit_in(player_id)?;
        }
    }

    Ok(CommandResponse::GameState(build_game_view(
        session.state(),
        hero,
    )))
}
