//! Конфигурация сессии, загружаемая из JSON.
//!
//! Все поля необязательны: отсутствующие берутся из `GameConfig::default()`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::table::{Difficulty, PotMode, TableStakes};

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 10;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Одно место за столом.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    #[serde(default = "default_is_bot")]
    pub is_bot: bool,
}

fn default_is_bot() -> bool {
    true
}

impl SeatConfig {
    pub fn human(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_bot: false,
        }
    }

    pub fn bot(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_bot: true,
        }
    }
}

/// Паузы презентационного слоя. Движок их не использует.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PacingConfig {
    pub showdown_pause_ms: u64,
    pub bot_think_min_ms: u64,
    pub bot_think_max_ms: u64,
    pub runout_tick_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            showdown_pause_ms: 8000,
            bot_think_min_ms: 1000,
            bot_think_max_ms: 2000,
            runout_tick_ms: 500,
        }
    }
}

impl PacingConfig {
    /// Без пауз (стресс-тест, тесты).
    pub fn instant() -> Self {
        Self {
            showdown_pause_ms: 0,
            bot_think_min_ms: 0,
            bot_think_max_ms: 0,
            runout_tick_ms: 0,
        }
    }

    pub fn showdown_pause(&self) -> Duration {
        Duration::from_millis(self.showdown_pause_ms)
    }

    pub fn runout_tick(&self) -> Duration {
        Duration::from_millis(self.runout_tick_ms)
    }

    /// Пауза "бот думает": `unit` из `[0, 1)` линейно между min и max.
    pub fn bot_think(&self, unit: f64) -> Duration {
        let span = self.bot_think_max_ms.saturating_sub(self.bot_think_min_ms) as f64;
        Duration::from_millis(self.bot_think_min_ms + (span * unit.clamp(0.0, 1.0)) as u64)
    }
}

/// Параметры игровой сессии.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Места в порядке посадки; не больше одного человека.
    pub seats: Vec<SeatConfig>,
    pub starting_chips: Chips,
    pub stakes: TableStakes,
    pub difficulty: Difficulty,
    pub pot_mode: PotMode,
    pub pacing: PacingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                SeatConfig::human("You"),
                SeatConfig::bot("Alex"),
                SeatConfig::bot("Beth"),
                SeatConfig::bot("Carl"),
                SeatConfig::bot("Dana"),
                SeatConfig::bot("Earl"),
            ],
            starting_chips: Chips(1000),
            stakes: TableStakes::default(),
            difficulty: Difficulty::Medium,
            pot_mode: PotMode::SinglePot,
            pacing: PacingConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&n) {
            return Err(ConfigError::Invalid(format!(
                "seat count must be in {MIN_SEATS}..={MAX_SEATS}, got {n}"
            )));
        }
        if self.seats.iter().filter(|s| !s.is_bot).count() > 1 {
            return Err(ConfigError::Invalid("at most one human seat".into()));
        }
        if self.stakes.small_blind.is_zero() || self.stakes.big_blind < self.stakes.small_blind {
            return Err(ConfigError::Invalid(format!(
                "blinds must satisfy 0 < small ({}) <= big ({})",
                self.stakes.small_blind.0, self.stakes.big_blind.0
            )));
        }
        if self.starting_chips.is_zero() {
            return Err(ConfigError::Invalid("starting chips must be positive".into()));
        }
        if self.pacing.bot_think_max_ms < self.pacing.bot_think_min_ms {
            return Err(ConfigError::Invalid("bot think max < min".into()));
        }
        Ok(())
    }
}

/// Настройки внешнего сервиса советов.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
        }
    }
}

impl AdviceConfig {
    /// `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_ENDPOINT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: std::env::var("GEMINI_ENDPOINT").unwrap_or(defaults.endpoint),
        }
    }
}
