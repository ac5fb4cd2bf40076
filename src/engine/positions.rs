use crate::domain::player::{Player, PlayerStatus};
use crate::domain::SeatIndex;

/// Участвует ли место в раздаче (есть фишки и не отсел).
pub fn is_dealt_in(player: &Player) -> bool {
    !matches!(player.status, PlayerStatus::Busted | PlayerStatus::SittingOut)
}

/// Следующее место по кругу после `start` (или начиная с него), подходящее под `pred`.
pub fn next_seat_where(
    players: &[Player],
    start: SeatIndex,
    include_start: bool,
    pred: impl Fn(&Player) -> bool,
) -> Option<SeatIndex> {
    let max = players.len();
    if max == 0 {
        return None;
    }

    let mut idx = start % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if pred(&players[idx]) {
            return Some(idx);
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Все подходящие места по кругу, начиная со следующего после `after`.
/// Само `after` (если подходит) оказывается последним.
pub fn seats_after(
    players: &[Player],
    after: SeatIndex,
    pred: impl Fn(&Player) -> bool,
) -> Vec<SeatIndex> {
    let max = players.len();
    let mut seats = Vec::new();
    if max == 0 {
        return seats;
    }

    let mut idx = (after + 1) % max;
    for _ in 0..max {
        if pred(&players[idx]) {
            seats.push(idx);
        }
        idx = (idx + 1) % max;
    }

    seats
}

/// Позиция дилера для следующей раздачи:
/// - первая раздача – первое участвующее место начиная с 0;
/// - дальше – следующее участвующее после прошлой кнопки (выбывшие пропускаются).
pub fn next_dealer(players: &[Player], previous: Option<SeatIndex>) -> Option<SeatIndex> {
    match previous {
        Some(button) => next_seat_where(players, button, false, is_dealt_in),
        None => next_seat_where(players, 0, true, is_dealt_in),
    }
}

/// Места блайндов `(SB, BB)` от кнопки.
/// Хедз-ап: малый блайнд ставит сам дилер.
pub fn blind_seats(players: &[Player], dealer: SeatIndex) -> Option<(SeatIndex, SeatIndex)> {
    let dealt_in = players.iter().filter(|p| is_dealt_in(p)).count();
    let sb = if dealt_in == 2 {
        dealer
    } else {
        next_seat_where(players, dealer, false, is_dealt_in)?
    };
    let bb = next_seat_where(players, sb, false, is_dealt_in)?;
    Some((sb, bb))
}
