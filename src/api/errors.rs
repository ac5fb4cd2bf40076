use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Игрок не найден за столом.
    UnknownPlayer(PlayerId),

    /// Сейчас не ход этого игрока (устаревшее действие).
    NotYourTurn(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка (ставки, действия).
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownPlayer(id) => ApiError::UnknownPlayer(id),
            EngineError::NotPlayersTurn(id) => ApiError::NotYourTurn(id),
            EngineError::NoActiveHand
            | EngineError::HandAlreadyInProgress
            | EngineError::SessionOver => ApiError::InvalidCommand(err.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
