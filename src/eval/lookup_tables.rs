use crate::domain::card::{Card, Rank};

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

const fn bit(rank_value: u8) -> RankMask {
    1 << (rank_value - 2)
}

/// Маски всех стритов, индекс = старшая карта - 5 (0 = колесо A2345, 9 = бродвей).
pub const STRAIGHT_MASKS: [RankMask; 10] = build_straight_masks();

const fn build_straight_masks() -> [RankMask; 10] {
    let mut masks = [0; 10];
    // Колесо: туз играет снизу.
    masks[0] = bit(14) | bit(2) | bit(3) | bit(4) | bit(5);
    let mut high = 6u8;
    while high <= 14 {
        let mut m = 0;
        let mut r = high - 4;
        while r <= high {
            m |= bit(r);
            r += 1;
        }
        masks[(high - 5) as usize] = m;
        high += 1;
    }
    masks
}

pub fn rank_to_bit(rank: Rank) -> RankMask {
    bit(rank.value())
}

pub fn mask_of(cards: &[Card]) -> RankMask {
    cards.iter().fold(0, |m, c| m | rank_to_bit(c.rank))
}

/// Старшая карта лучшего стрита в маске.
///
/// Обычные стриты проверяются от бродвея вниз, колесо – последним,
/// поэтому оно выигрывает только если других стритов нет.
pub fn straight_high(mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .enumerate()
        .rev()
        .find(|(_, sm)| mask & **sm == **sm)
        .and_then(|(i, _)| Rank::from_value(i as u8 + 5))
}

/// Ранги стрита от старшего к младшему. Для колеса: 5,4,3,2,A.
pub fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let h = high.value();
    let mut out = [high; 5];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = Rank::from_value(h - i as u8).unwrap_or(high);
    }
    out
}
