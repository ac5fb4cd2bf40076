use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, SeatIndex};

/// Сайд-пот: часть банка, в которую участвуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Места, внёсшие хотя бы этот уровень (в порядке мест).
    pub eligible_seats: Vec<SeatIndex>,
}

/// Посчитать сайд-поты из сумм, которые внесли игроки.
///
/// Вход: `(seat, сколько суммарно фишек внёс игрок за раздачу)`.
/// Выход: список side pots "от младших" к "старшим".
pub fn compute_side_pots(contributions: &[(SeatIndex, Chips)]) -> Vec<SidePot> {
    let mut levels: Vec<Chips> = contributions
        .iter()
        .map(|(_, c)| *c)
        .filter(|c| !c.is_zero())
        .collect();
    levels.sort();
    levels.dedup();

    let mut pots = Vec::new();
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let level_diff = level - prev_level;

        // Все игроки, у кого вклад >= level, участвуют в этом уровне.
        let mut eligible: Vec<SeatIndex> = contributions
            .iter()
            .filter(|(_, contrib)| *contrib >= level)
            .map(|(seat, _)| *seat)
            .collect();
        eligible.sort_unstable();

        pots.push(SidePot {
            amount: Chips(level_diff.0 * eligible.len() as u64),
            eligible_seats: eligible,
        });

        prev_level = level;
    }

    pots
}

/// Оставить в каждом поте только живых претендентов.
///
/// Уровень, на который не претендует ни один живой игрок (его внесли только
/// сфолдившие), сливается с ближайшим младшим разыгрываемым потом.
pub fn contested_pots(pots: Vec<SidePot>, is_live: impl Fn(SeatIndex) -> bool) -> Vec<SidePot> {
    let mut contested: Vec<SidePot> = Vec::new();
    let mut carry = Chips::ZERO;

    for pot in pots {
        let live: Vec<SeatIndex> = pot
            .eligible_seats
            .into_iter()
            .filter(|s| is_live(*s))
            .collect();

        if live.is_empty() {
            match contested.last_mut() {
                Some(last) => last.amount += pot.amount,
                None => carry += pot.amount,
            }
        } else {
            contested.push(SidePot {
                amount: pot.amount + carry,
                eligible_seats: live,
            });
            carry = Chips::ZERO;
        }
    }

    contested
}
