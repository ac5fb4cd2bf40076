use log::trace;

use crate::domain::card::{Card, Rank};
use crate::domain::chips::Chips;
use crate::domain::hand::Phase;
use crate::domain::player::Player;
use crate::domain::table::Difficulty;
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::RandomSource;
use crate::eval::{evaluate_best_hand, HandCategory};
use crate::state::GameState;

use super::profile::BotProfile;

/// Намерение бота до приведения к легальному действию.
/// Суммы рейза – итоговая ставка, в дробных фишках.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Fold,
    Check,
    Call,
    Raise(f64),
}

/// Решение бота на месте `seat`.
///
/// Результат всегда легален для текущего состояния торговли.
/// Меньше двух карманных карт – fold.
pub fn decide<R: RandomSource>(
    seat: SeatIndex,
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> PlayerActionKind {
    let Some(player) = state.players.get(seat) else {
        return PlayerActionKind::Fold;
    };
    if player.hole_cards.len() < 2 {
        return PlayerActionKind::Fold;
    }

    let profile = BotProfile::for_difficulty(difficulty);
    let roll = rng.gen_unit();

    let intent = if state.phase == Phase::PreFlop {
        preflop_intent(player, &state.betting, difficulty, &profile, roll)
    } else {
        let sizing = rng.gen_unit();
        postflop_intent(player, state, difficulty, &profile, roll, sizing)
    };

    let action = legalize(intent, player, seat, &state.betting);
    trace!(
        "bot {} ({}) roll={:.3} intent={:?} -> {}",
        player.name,
        difficulty,
        roll,
        intent,
        action
    );
    action
}

fn preflop_intent(
    player: &Player,
    betting: &BettingState,
    difficulty: Difficulty,
    profile: &BotProfile,
    roll: f64,
) -> Intent {
    let to_call = player.to_call(betting.current_bet).as_f64();
    let current_bet = betting.current_bet.as_f64();
    let min_raise = betting.min_raise.as_f64();

    let shape = HoleShape::of(&player.hole_cards[0], &player.hole_cards[1]);

    // Premium: QQ+, две старшие одномастные или с тузом/королём.
    if (shape.pair && shape.top >= Rank::Queen)
        || (shape.high_cards == 2 && (shape.suited || shape.top >= Rank::King))
    {
        if roll < profile.aggression + 0.2 {
            let multiplier = if difficulty == Difficulty::Hard { 4.0 } else { 2.0 };
            return Intent::Raise(current_bet + min_raise * multiplier);
        }
        return Intent::Call;
    }

    // Good: пары, две старшие, одномастные коннекторы со старшей.
    if shape.pair || shape.high_cards == 2 || (shape.suited && shape.connected && shape.high_cards > 0)
    {
        if to_call <= min_raise * 3.0 || roll < profile.stickiness {
            if roll < profile.aggression * 0.4 && to_call == 0.0 {
                return Intent::Raise(min_raise * 2.0);
            }
            return Intent::Call;
        }
    }

    // Speculative: одномастные коннекторы, мелкие пары.
    if (shape.suited && shape.connected) || (shape.pair && shape.top < Rank::Seven) {
        if to_call <= min_raise || (difficulty == Difficulty::Easy && to_call <= min_raise * 2.0) {
            return Intent::Call;
        }
    }

    // Trash.
    if to_call == 0.0 {
        return Intent::Check;
    }
    if difficulty == Difficulty::Easy && roll < 0.2 && to_call <= min_raise {
        return Intent::Call;
    }
    Intent::Fold
}

fn postflop_intent(
    player: &Player,
    state: &GameState,
    difficulty: Difficulty,
    profile: &BotProfile,
    roll: f64,
    sizing: f64,
) -> Intent {
    let to_call = player.to_call(state.betting.current_bet).as_f64();
    let min_raise = state.betting.min_raise.as_f64();
    let pot = state.pot.as_f64();
    let pot_odds = if pot + to_call > 0.0 {
        to_call / (pot + to_call)
    } else {
        1.0
    };

    let hand = evaluate_best_hand(&player.hole_cards, &state.community_cards);

    // Monster: две пары и выше.
    if hand.category >= HandCategory::TwoPair {
        if roll < 0.2 && difficulty == Difficulty::Hard {
            return Intent::Check; // ловушка
        }
        if roll < profile.aggression + 0.3 {
            return Intent::Raise(min_raise.max(pot * (0.5 + sizing * 0.5)));
        }
        return Intent::Call;
    }

    if hand.category == HandCategory::Pair {
        let strong = hand
            .best_cards
            .first()
            .is_some_and(|c| c.rank >= Rank::Ten);

        if strong {
            if to_call > pot * 0.7 && difficulty == Difficulty::Hard {
                return Intent::Fold;
            }
            if roll < profile.aggression && to_call < pot * 0.5 {
                return Intent::Raise(min_raise + pot * 0.3);
            }
            return Intent::Call;
        }

        if to_call == 0.0 {
            return Intent::Check;
        }
        if to_call < pot * 0.2 || roll < profile.stickiness {
            return Intent::Call;
        }
        return Intent::Fold;
    }

    // Дро не считаем – имитируем случайностью (полублеф).
    let drawing = roll < 0.3;
    if drawing && difficulty == Difficulty::Hard {
        if roll < profile.aggression && to_call < pot * 0.33 {
            return Intent::Raise(min_raise + pot * 0.4);
        }
        if pot_odds < 0.3 {
            return Intent::Call;
        }
    }

    // Air.
    if to_call == 0.0 {
        if roll < profile.bluff {
            return Intent::Raise(min_raise + pot * 0.5);
        }
        return Intent::Check;
    }
    if difficulty != Difficulty::Easy && roll < profile.bluff * 0.5 {
        return Intent::Raise(pot);
    }
    Intent::Fold
}

/// Привести намерение к легальному действию:
/// - check при долге → call, call без долга → check, fold без долга → check;
/// - рейз не меньше минимального, рейз на весь стек и больше → олл-ин;
/// - рейз, когда он закрыт, → call.
pub fn legalize(
    intent: Intent,
    player: &Player,
    seat: SeatIndex,
    betting: &BettingState,
) -> PlayerActionKind {
    let to_call = player.to_call(betting.current_bet);
    let passive = if to_call.is_zero() {
        PlayerActionKind::Check
    } else {
        PlayerActionKind::Call
    };

    match intent {
        Intent::Fold if to_call.is_zero() => PlayerActionKind::Check,
        Intent::Fold => PlayerActionKind::Fold,
        Intent::Check | Intent::Call => passive,
        Intent::Raise(target) => {
            let max_total = player.chips + player.current_bet;
            if !betting.can_raise(seat) || max_total <= betting.current_bet {
                return passive;
            }
            let min_total = betting.current_bet + betting.min_raise;
            let target = Chips::floor_from(target).max(min_total);
            if target >= max_total {
                PlayerActionKind::AllIn
            } else {
                PlayerActionKind::Raise(Some(target))
            }
        }
    }
}

/// Форма стартовой руки.
struct HoleShape {
    pair: bool,
    suited: bool,
    connected: bool,
    /// Карт от десятки и выше.
    high_cards: usize,
    top: Rank,
}

impl HoleShape {
    fn of(a: &Card, b: &Card) -> Self {
        let (hi, lo) = if a.rank >= b.rank { (a, b) } else { (b, a) };
        HoleShape {
            pair: hi.rank == lo.rank,
            suited: hi.suit == lo.suit,
            connected: hi.rank.value() - lo.rank.value() == 1,
            high_cards: [hi, lo].iter().filter(|c| c.rank >= Rank::Ten).count(),
            top: hi.rank,
        }
    }
}
