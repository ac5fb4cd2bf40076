//! Симулятор Texas Hold'em: человек против ботов.
//!
//! Слои:
//! - `domain` – карты, колода, фишки, игроки, параметры стола;
//! - `eval` – оценка силы руки;
//! - `engine` – ставки, улицы, шоудаун, сессия;
//! - `bot` – решения ботов по уровням сложности;
//! - `advice` – советы тренера через внешнюю модель;
//! - `api` – команды/запросы/DTO для фронта;
//! - `infra` – RNG и конфигурация.

pub mod advice;
pub mod api;
pub mod bot;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

pub use engine::{PokerSession, RandomSource};
pub use state::GameState;
