use crate::domain::chips::Chips;
use crate::domain::hand::HandRank;
use crate::domain::SeatIndex;

/// Поделить сумму на `n` долей поровну (целочисленно).
/// Остаток целиком уходит первой доле.
pub fn split_evenly(amount: Chips, n: usize) -> Vec<Chips> {
    if n == 0 {
        return Vec::new();
    }
    let share = amount.0 / n as u64;
    let remainder = amount.0 % n as u64;
    let mut shares = vec![Chips(share); n];
    shares[0] = Chips(share + remainder);
    shares
}

/// Разыграть один банк между претендентами.
///
/// `contenders` – `(seat, сила руки)` в порядке мест. Выигрывает максимальная сила,
/// ничья – делёж, остаток первому из ничейных по порядку мест.
pub fn award_pot(amount: Chips, contenders: &[(SeatIndex, HandRank)]) -> Vec<(SeatIndex, Chips)> {
    let Some(best) = contenders.iter().map(|(_, rank)| *rank).max() else {
        return Vec::new();
    };

    let tied: Vec<SeatIndex> = contenders
        .iter()
        .filter(|(_, rank)| *rank == best)
        .map(|(seat, _)| *seat)
        .collect();

    tied.iter()
        .copied()
        .zip(split_evenly(amount, tied.len()))
        .collect()
}
