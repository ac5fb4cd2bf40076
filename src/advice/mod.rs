//! Советы тренера через внешнюю модель (Gemini).
//!
//! Любая ошибка (нет ключа, сеть, пустой ответ) превращается в
//! фиксированную фразу `FALLBACK_ADVICE` – наружу ошибка не уходит.

pub mod gemini;
pub mod prompt;

use log::{debug, warn};

use crate::domain::PlayerId;
use crate::infra::config::AdviceConfig;
use crate::state::GameState;

pub use gemini::{AdviceError, GeminiClient};
pub use prompt::{build_prompt, AdviceRequest};

pub const FALLBACK_ADVICE: &str = "I can't analyze the table right now. Trust your gut!";

/// Сервис советов. Без ключа API работает, но всегда отвечает запасной фразой.
#[derive(Debug, Clone)]
pub struct AdviceService {
    client: Option<GeminiClient>,
}

impl AdviceService {
    pub fn new(config: &AdviceConfig) -> Self {
        let client = match GeminiClient::new(config) {
            Ok(client) => Some(client),
            Err(reason) => {
                warn!("advice disabled: {reason}");
                None
            }
        };
        Self { client }
    }

    pub fn from_env() -> Self {
        Self::new(&AdviceConfig::from_env())
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Совет для игрока `player_id`. Никогда не возвращает ошибку.
    pub async fn strategic_advice(&self, state: &GameState, player_id: PlayerId) -> String {
        match self.try_advice(state, player_id).await {
            Ok(text) => text,
            Err(err) => {
                warn!("advice request failed: {err}");
                FALLBACK_ADVICE.to_string()
            }
        }
    }

    async fn try_advice(&self, state: &GameState, player_id: PlayerId) -> Result<String, AdviceError> {
        let client = self.client.as_ref().ok_or(AdviceError::MissingApiKey)?;
        let player = state
            .player(player_id)
            .ok_or(AdviceError::UnknownPlayer(player_id))?;
        let request = AdviceRequest::from_state(state, player);
        debug!(
            "advice for {}: cost_to_call={} pot_odds={:?}",
            player.name, request.cost_to_call, request.pot_odds
        );
        let prompt = build_prompt(&request);
        client.generate(&prompt).await
    }
}
