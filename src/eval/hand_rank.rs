use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

/// Ширина полосы одной категории в шкале `HandRank`.
pub const CATEGORY_BAND: u32 = 1_000_000;

/// Основание позиционного кодирования кикеров (ранги 2..14 < 15).
const KICKER_BASE: u32 = 15;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl HandRank {
    /// Собрать счёт из категории и значимых рангов (от старшего к младшему).
    ///
    /// Схема: `категория * 1_000_000 + Σ r_i * 15^(4-i)`, i = 0..5.
    /// Максимум внутри полосы 14 * (15^4 + .. + 1) = 759_374, так что
    /// категории никогда не пересекаются.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let kickers = ranks
            .iter()
            .take(5)
            .enumerate()
            .map(|(i, r)| r.value() as u32 * KICKER_BASE.pow(4 - i as u32))
            .sum::<u32>();
        HandRank(category as u32 * CATEGORY_BAND + kickers)
    }

    /// Категория из полосы счёта.
    pub fn category(&self) -> HandCategory {
        let idx = (self.0 / CATEGORY_BAND) as usize;
        HandCategory::ALL
            .get(idx)
            .copied()
            .unwrap_or(HandCategory::RoyalFlush)
    }
}

/// Результат оценки руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub category: HandCategory,
    pub score: HandRank,
    /// Лучшие 5 карт (меньше, если на входе было меньше 5 карт).
    pub best_cards: Vec<Card>,
}

impl HandResult {
    /// Пустой вход: старшая карта с нулевым счётом.
    pub fn empty() -> Self {
        Self {
            category: HandCategory::HighCard,
            score: HandRank(0),
            best_cards: Vec::new(),
        }
    }

    pub fn rank_name(&self) -> &'static str {
        self.category.name()
    }

    pub fn beats(&self, other: &HandResult) -> bool {
        self.score > other.score
    }
}

/// Человеческое описание руки по счёту.
pub fn describe_hand(rank: HandRank) -> &'static str {
    rank.category().name()
}
