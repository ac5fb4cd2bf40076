//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(cards) -> HandResult` – лучшая 5-карточная рука из 2–7 карт;
//!   `evaluate_best_hand(hole, board) -> HandResult`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate, evaluate_best_hand};
pub use hand_rank::{describe_hand, HandCategory, HandResult, CATEGORY_BAND};
