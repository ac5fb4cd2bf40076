use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода карт. Принадлежит текущей раздаче, карты берутся с конца.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Новая перемешанная колода (Fisher–Yates через `RandomSource`).
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Колода с заранее заданным порядком: первые карты из `top` выйдут первыми.
    /// Нужна для сценариев и реплея.
    pub fn stacked(top: &[Card]) -> Self {
        let mut rest: Vec<Card> = Self::standard_52()
            .cards
            .into_iter()
            .filter(|c| !top.contains(c))
            .collect();
        rest.extend(top.iter().rev().copied());
        Deck { cards: rest }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut taken = self.cards.split_off(self.cards.len() - take);
        taken.reverse();
        taken
    }
}
