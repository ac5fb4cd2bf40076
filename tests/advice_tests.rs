//! Советы тренера: промпт и запасной ответ (сеть не нужна).

use holdem_sim::advice::{build_prompt, AdviceRequest, AdviceService, FALLBACK_ADVICE};
use holdem_sim::domain::{card::Card, chips::Chips};
use holdem_sim::engine::start_new_hand;
use holdem_sim::infra::{AdviceConfig, DeterministicRng, GameConfig, PacingConfig};
use holdem_sim::GameState;

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn live_hand() -> GameState {
    let config = GameConfig {
        pacing: PacingConfig::instant(),
        ..GameConfig::default()
    };
    let mut rng = DeterministicRng::from_u64(3);
    let mut state = start_new_hand(&GameState::new(&config), &mut rng).unwrap();
    state.players[0].hole_cards = cards("Ah Kh");
    state
}

#[test]
fn request_is_built_from_hero_seat() {
    let mut state = live_hand();
    state.players[4].status = holdem_sim::domain::player::PlayerStatus::Folded;

    let req = AdviceRequest::from_state(&state, &state.players[0]);
    assert_eq!(req.phase, "Pre-Flop");
    assert_eq!(req.hole_cards, vec!["Ace of Hearts", "King of Hearts"]);
    assert!(req.community_cards.is_empty());
    assert_eq!(req.chips, 1000);
    assert_eq!(req.pot, 30);
    assert_eq!(req.active_opponents, 4);
    assert_eq!(req.cost_to_call, 20);
    assert_eq!(req.pot_odds, Some(0.4));
    assert_eq!(req.hand_rank, "High Card");

    let prompt = build_prompt(&req);
    assert!(prompt.contains("Current Phase: Pre-Flop"));
    assert!(prompt.contains("My Hole Cards: Ace of Hearts, King of Hearts"));
    assert!(prompt.contains("Community Cards: None"));
    assert!(prompt.contains("Cost to Call: 20"));
    assert!(!prompt.contains("Pot Odds"));
    assert!(prompt.contains("based on pot odds and hand strength"));
    assert!(prompt.contains("Keep it under 50 words."));
}

#[test]
fn pot_odds_absent_without_bet() {
    let mut state = live_hand();
    state.betting.current_bet = Chips::ZERO;
    for p in state.players.iter_mut() {
        p.current_bet = Chips::ZERO;
    }
    let req = AdviceRequest::from_state(&state, &state.players[0]);
    assert_eq!(req.pot_odds, None);
    assert!(build_prompt(&req).contains("Cost to Call: 0"));
}

#[tokio::test]
async fn missing_key_yields_fallback() {
    let service = AdviceService::new(&AdviceConfig::default());
    assert!(!service.is_enabled());

    let state = live_hand();
    assert_eq!(service.strategic_advice(&state, 0).await, FALLBACK_ADVICE);
}

#[tokio::test]
async fn unreachable_endpoint_yields_fallback() {
    let service = AdviceService::new(&AdviceConfig {
        api_key: Some("test-key".into()),
        endpoint: "http://127.0.0.1:9".into(),
        ..AdviceConfig::default()
    });
    assert!(service.is_enabled());

    let state = live_hand();
    assert_eq!(service.strategic_advice(&state, 0).await, FALLBACK_ADVICE);
    assert_eq!(service.strategic_advice(&state, 42).await, FALLBACK_ADVICE);
}
