use crate::domain::card::Card;
use crate::domain::player::Player;
use crate::eval::evaluate_best_hand;
use crate::state::GameState;

/// Данные, которые уходят тренеру. Собираются из снимка стола.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    pub phase: String,
    pub hole_cards: Vec<String>,
    pub community_cards: Vec<String>,
    pub chips: u64,
    pub pot: u64,
    pub active_opponents: usize,
    pub cost_to_call: u64,
    /// `None`, если ставки на улице нет.
    pub pot_odds: Option<f64>,
    pub hand_rank: String,
}

impl AdviceRequest {
    pub fn from_state(state: &GameState, player: &Player) -> Self {
        let hand = evaluate_best_hand(&player.hole_cards, &state.community_cards);
        let cost_to_call = player.to_call(state.betting.current_bet);
        let pot_odds = (!state.betting.current_bet.is_zero()).then(|| {
            let denom = state.pot.as_f64() + cost_to_call.as_f64();
            if denom > 0.0 {
                cost_to_call.as_f64() / denom
            } else {
                0.0
            }
        });

        AdviceRequest {
            phase: state.phase.to_string(),
            hole_cards: player.hole_cards.iter().map(Card::long_name).collect(),
            community_cards: state.community_cards.iter().map(Card::long_name).collect(),
            chips: player.chips.0,
            pot: state.pot.0,
            active_opponents: state
                .players
                .iter()
                .filter(|p| p.id != player.id && p.is_live())
                .count(),
            cost_to_call: cost_to_call.0,
            pot_odds,
            hand_rank: hand.rank_name().to_string(),
        }
    }
}

/// Текст запроса к модели.
pub fn build_prompt(req: &AdviceRequest) -> String {
    let community = if req.community_cards.is_empty() {
        "None".to_string()
    } else {
        req.community_cards.join(", ")
    };
    format!(
        "You are a professional world-class poker coach. \
Analyze this Texas Hold'em situation concisely and give the best move.\n\
\n\
Current Phase: {phase}\n\
My Hole Cards: {hole}\n\
Community Cards: {community}\n\
My Chip Stack: {chips}\n\
Current Pot: {pot}\n\
Active Opponents: {opponents}\n\
Cost to Call: {cost}\n\
My Hand Rank: {rank}\n\
\n\
Advise on whether to Fold, Check, Call, or Raise, and briefly explain why \
based on pot odds and hand strength. Keep it under 50 words.",
        phase = req.phase,
        hole = req.hole_cards.join(", "),
        community = community,
        chips = req.chips,
        pot = req.pot,
        opponents = req.active_opponents,
        cost = req.cost_to_call,
        rank = req.hand_rank,
    )
}
