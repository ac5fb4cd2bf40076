use crate::domain::PlayerId;

use thiserror::Error;

/// Ошибки движка покера.
///
/// Любая ошибка означает, что состояние не изменилось.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Игрок {0} не найден за столом")]
    UnknownPlayer(PlayerId),

    #[error("Недостаточно активных игроков для раздачи")]
    NotEnoughPlayers,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Размер рейза слишком мал")]
    RaiseTooSmall,

    #[error("Рейз закрыт: после вашего хода был только неполный олл-ин")]
    RaiseNotReopened,

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Сессия окончена")]
    SessionOver,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
