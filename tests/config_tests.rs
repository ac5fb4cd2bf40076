//! Конфигурация: значения по умолчанию, JSON, валидация.

use std::time::Duration;

use holdem_sim::domain::{chips::Chips, table::Difficulty, table::PotMode};
use holdem_sim::infra::{AdviceConfig, ConfigError, GameConfig, PacingConfig};

#[test]
fn default_config_is_six_seats_with_one_human() {
    let config = GameConfig::default();
    assert_eq!(config.seats.len(), 6);
    assert_eq!(config.seats.iter().filter(|s| !s.is_bot).count(), 1);
    assert_eq!(config.seats[0].name, "You");
    assert_eq!(config.starting_chips, Chips(1000));
    assert_eq!(config.stakes.small_blind, Chips(10));
    assert_eq!(config.stakes.big_blind, Chips(20));
    assert_eq!(config.difficulty, Difficulty::Medium);
    assert_eq!(config.pot_mode, PotMode::SinglePot);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let json = r#"{
        "seats": [
            { "name": "Me", "is_bot": false },
            { "name": "Rob" },
            { "name": "Sue" }
        ],
        "difficulty": "Hard",
        "pot_mode": "SidePots",
        "pacing": { "showdown_pause_ms": 100 }
    }"#;

    let config = GameConfig::from_json_str(json).unwrap();
    assert_eq!(config.seats.len(), 3);
    assert!(!config.seats[0].is_bot);
    assert!(config.seats[1].is_bot);
    assert_eq!(config.difficulty, Difficulty::Hard);
    assert_eq!(config.pot_mode, PotMode::SidePots);
    assert_eq!(config.starting_chips, Chips(1000));
    assert_eq!(config.pacing.showdown_pause(), Duration::from_millis(100));
    assert_eq!(config.pacing.runout_tick(), Duration::from_millis(500));
}

#[test]
fn invalid_configs_are_rejected() {
    let one_seat = r#"{ "seats": [ { "name": "Solo" } ] }"#;
    assert!(matches!(
        GameConfig::from_json_str(one_seat),
        Err(ConfigError::Invalid(_))
    ));

    let two_humans = r#"{ "seats": [
        { "name": "A", "is_bot": false },
        { "name": "B", "is_bot": false }
    ] }"#;
    assert!(matches!(
        GameConfig::from_json_str(two_humans),
        Err(ConfigError::Invalid(_))
    ));

    let inverted_blinds = r#"{ "stakes": { "small_blind": 50, "big_blind": 20 } }"#;
    assert!(matches!(
        GameConfig::from_json_str(inverted_blinds),
        Err(ConfigError::Invalid(_))
    ));

    let broken = r#"{ "seats": "#;
    assert!(matches!(
        GameConfig::from_json_str(broken),
        Err(ConfigError::Parse(_))
    ));

    assert!(matches!(
        GameConfig::from_file("/definitely/not/here.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn bot_think_interpolates_between_bounds() {
    let pacing = PacingConfig::default();
    assert_eq!(pacing.bot_think(0.0), Duration::from_millis(1000));
    assert_eq!(pacing.bot_think(0.5), Duration::from_millis(1500));
    assert_eq!(PacingConfig::instant().bot_think(0.9), Duration::ZERO);
}

#[test]
fn advice_config_defaults() {
    let config = AdviceConfig::default();
    assert!(config.api_key.is_none());
    assert_eq!(config.model, "gemini-2.5-flash");
    assert!(config.endpoint.starts_with("https://"));
}
