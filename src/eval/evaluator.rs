use crate::domain::card::{Card, Rank, Suit};

use super::hand_rank::{HandCategory, HandResult};
use super::lookup_tables::{mask_of, straight_high, straight_ranks};
use crate::domain::hand::HandRank;

/// Лучшая рука из карманных карт и борда.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandResult {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Оценить произвольный набор карт (обычно 2–7).
///
/// Чистая функция. Для 5+ карт `best_cards` содержит ровно 5 карт из входа.
/// Меньше 5 карт (префлоп-совет) – лучшая частичная рука из того, что есть.
/// Пустой вход – `HandResult::empty()`.
pub fn evaluate(cards: &[Card]) -> HandResult {
    if cards.is_empty() {
        return HandResult::empty();
    }

    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    let flush_cards = suited_run(&sorted);

    // Straight flush / royal: стрит ищем среди ВСЕХ карт флешевой масти.
    if let Some(suited) = &flush_cards {
        if let Some(run) = find_straight(suited) {
            let category = if run[0].rank == Rank::Ace && run[1].rank == Rank::King {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return build(category, &[run[0].rank], run);
        }
    }

    let groups = RankGroups::from_sorted(&sorted);

    // Four of a kind.
    if let Some(quad) = groups.quads.first() {
        let mut best = quad.clone();
        best.extend(kickers(&sorted, &[quad[0].rank], 1));
        let ranks = significant(&[quad[0].rank], &best[4..]);
        return build(HandCategory::FourOfAKind, &ranks, best);
    }

    // Full house: лучший сет + (второй сет как пара, иначе лучшая пара).
    if let Some(trip) = groups.trips.first() {
        let pair: Option<&[Card]> = groups
            .trips
            .get(1)
            .map(|t| &t[..2])
            .or_else(|| groups.pairs.first().map(|p| p.as_slice()));
        if let Some(pair) = pair {
            let mut best = trip.clone();
            best.extend_from_slice(pair);
            return build(HandCategory::FullHouse, &[trip[0].rank, pair[0].rank], best);
        }
    }

    // Flush.
    if let Some(suited) = flush_cards {
        let best: Vec<Card> = suited.into_iter().take(5).collect();
        let ranks: Vec<Rank> = best.iter().map(|c| c.rank).collect();
        return build(HandCategory::Flush, &ranks, best);
    }

    // Straight.
    if let Some(run) = find_straight(&sorted) {
        return build(HandCategory::Straight, &[run[0].rank], run);
    }

    // Three of a kind.
    if let Some(trip) = groups.trips.first() {
        let kick = kickers(&sorted, &[trip[0].rank], 2);
        let ranks = significant(&[trip[0].rank], &kick);
        let mut best = trip.clone();
        best.extend(kick);
        return build(HandCategory::ThreeOfAKind, &ranks, best);
    }

    // Two pair.
    if groups.pairs.len() >= 2 {
        let (high, low) = (&groups.pairs[0], &groups.pairs[1]);
        let kick = kickers(&sorted, &[high[0].rank, low[0].rank], 1);
        let ranks = significant(&[high[0].rank, low[0].rank], &kick);
        let mut best = high.clone();
        best.extend_from_slice(low);
        best.extend(kick);
        return build(HandCategory::TwoPair, &ranks, best);
    }

    // Pair.
    if let Some(pair) = groups.pairs.first() {
        let kick = kickers(&sorted, &[pair[0].rank], 3);
        let ranks = significant(&[pair[0].rank], &kick);
        let mut best = pair.clone();
        best.extend(kick);
        return build(HandCategory::Pair, &ranks, best);
    }

    // High card.
    let best: Vec<Card> = sorted.into_iter().take(5).collect();
    let ranks: Vec<Rank> = best.iter().map(|c| c.rank).collect();
    build(HandCategory::HighCard, &ranks, best)
}

fn build(category: HandCategory, ranks: &[Rank], best_cards: Vec<Card>) -> HandResult {
    HandResult {
        category,
        score: HandRank::from_category_and_ranks(category, ranks),
        best_cards,
    }
}

/// Карты масти, которой 5 и больше, по убыванию ранга.
fn suited_run(sorted: &[Card]) -> Option<Vec<Card>> {
    Suit::ALL.iter().find_map(|&suit| {
        let suited: Vec<Card> = sorted.iter().filter(|c| c.suit == suit).copied().collect();
        (suited.len() >= 5).then_some(suited)
    })
}

/// Лучший стрит: 5 конкретных карт от старшей к младшей.
fn find_straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let high = straight_high(mask_of(sorted))?;
    straight_ranks(high)
        .iter()
        .map(|r| sorted.iter().find(|c| c.rank == *r).copied())
        .collect()
}

/// Старшие `n` карт, чьих рангов нет в `used`.
fn kickers(sorted: &[Card], used: &[Rank], n: usize) -> Vec<Card> {
    sorted
        .iter()
        .filter(|c| !used.contains(&c.rank))
        .take(n)
        .copied()
        .collect()
}

fn significant(head: &[Rank], tail: &[Card]) -> Vec<Rank> {
    head.iter()
        .copied()
        .chain(tail.iter().map(|c| c.rank))
        .collect()
}

/// Группы одинаковых рангов, каждая группа по убыванию ранга.
struct RankGroups {
    quads: Vec<Vec<Card>>,
    trips: Vec<Vec<Card>>,
    pairs: Vec<Vec<Card>>,
}

impl RankGroups {
    fn from_sorted(sorted: &[Card]) -> Self {
        let mut groups = RankGroups {
            quads: Vec::new(),
            trips: Vec::new(),
            pairs: Vec::new(),
        };
        for chunk in sorted.chunk_by(|a, b| a.rank == b.rank) {
            match chunk.len() {
                4 => groups.quads.push(chunk.to_vec()),
                3 => groups.trips.push(chunk.to_vec()),
                2 => groups.pairs.push(chunk.to_vec()),
                _ => {}
            }
        }
        groups
    }
}
