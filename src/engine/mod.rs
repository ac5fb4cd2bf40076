//! Покерный движок: ставки, переход улиц, шоудаун и выплаты.
//!
//! Все переходы – чистые функции `(&GameState, ..) -> Result<GameState, _>`:
//!   - `start_new_hand` – запустить новую раздачу;
//!   - `apply_action` – применить действие игрока, чей сейчас ход;
//!   - `proceed` – тик: докрутить борд, если торговать некому (олл-ин ранаут).
//!
//! Ошибка = старое состояние не меняется (устаревшее/чужое действие – no-op).

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod session;
pub mod side_pots;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind, ResolvedAction};
pub use betting::BettingState;
pub use errors::EngineError;
pub use game_loop::{
    apply_action, proceed, proceed_until_decision, start_new_hand, start_new_hand_with_deck,
};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use session::PokerSession;
pub use side_pots::SidePot;
pub use validation::{legal_actions, LegalActions};

/// Источник случайности для колоды и ботов.
/// Реализации – в infra (обёртки над `rand`), в тестах – сидированные.
pub trait RandomSource {
    /// Равномерное целое из `[0, upper]` включительно.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Равномерное число из `[0, 1)`.
    fn gen_unit(&mut self) -> f64;

    /// Fisher–Yates: от последнего индекса вниз до 1,
    /// обмен с равномерно выбранным индексом из `[0, i]`.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }
}
