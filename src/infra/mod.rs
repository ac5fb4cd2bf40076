//! Инфраструктурный слой вокруг покерного движка:
//! - RNG-реализации для движка и ботов;
//! - конфигурация сессии и сервиса советов.

pub mod config;
pub mod rng;

pub use config::{AdviceConfig, ConfigError, GameConfig, PacingConfig, SeatConfig};
pub use rng::{DeterministicRng, ScriptedRng, SystemRng};
