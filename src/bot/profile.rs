use serde::{Deserialize, Serialize};

use crate::domain::table::Difficulty;

/// Параметры стиля игры бота. Все значения в `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BotProfile {
    /// Шанс рейза со слабой рукой.
    pub bluff: f64,
    /// Насколько часто сбрасывает средние руки.
    pub tightness: f64,
    /// Насколько часто рейзит сильные руки.
    pub aggression: f64,
    /// Насколько часто коллирует маргинальные руки.
    pub stickiness: f64,
}

impl BotProfile {
    /// Easy – loose passive, Medium – сбалансированный, Hard – tight aggressive.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => BotProfile {
                bluff: 0.05,
                tightness: 0.2,
                aggression: 0.1,
                stickiness: 0.8,
            },
            Difficulty::Medium => BotProfile {
                bluff: 0.15,
                tightness: 0.5,
                aggression: 0.5,
                stickiness: 0.5,
            },
            Difficulty::Hard => BotProfile {
                bluff: 0.30,
                tightness: 0.8,
                aggression: 0.8,
                stickiness: 0.3,
            },
        }
    }
}
