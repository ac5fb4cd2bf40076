use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Состояние раунда ставок (на конкретной улице).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая целевая ставка, до которой должны дотянуться игроки.
    pub current_bet: Chips,
    /// Минимальный размер повышающей части рейза.
    pub min_raise: Chips,
    /// Seat последнего полного рейза (или BB на префлопе).
    pub last_aggressor: Option<SeatIndex>,
    /// Очередь: кто ещё должен сделать действие на этой улице, по кругу.
    pub to_act: Vec<SeatIndex>,
    /// Кто уже походил после последнего полного рейза.
    /// Короткий олл-ин не переоткрывает им право рейза – только call/fold.
    pub acted_since_full_raise: Vec<SeatIndex>,
}

impl BettingState {
    pub fn new(current_bet: Chips, min_raise: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            current_bet,
            min_raise,
            last_aggressor: None,
            to_act,
            acted_since_full_raise: Vec::new(),
        }
    }

    /// Seat походил: убрать из очереди.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
        if !self.acted_since_full_raise.contains(&seat) {
            self.acted_since_full_raise.push(seat);
        }
    }

    /// Полный рейз: новая ставка, новый min_raise, раунд переоткрыт для всех.
    pub fn on_full_raise(
        &mut self,
        seat: SeatIndex,
        new_bet: Chips,
        raise_size: Chips,
        new_to_act: Vec<SeatIndex>,
    ) {
        self.current_bet = new_bet;
        if !raise_size.is_zero() {
            self.min_raise = raise_size;
        }
        self.last_aggressor = Some(seat);
        self.to_act = new_to_act;
        self.acted_since_full_raise = vec![seat];
    }

    /// Короткий олл-ин поверх ставки: ставка растёт, min_raise – нет,
    /// право рейза уже походившим не возвращается.
    pub fn on_short_all_in(&mut self, seat: SeatIndex, new_bet: Chips, owing: Vec<SeatIndex>) {
        self.current_bet = new_bet;
        self.to_act = owing;
        if !self.acted_since_full_raise.contains(&seat) {
            self.acted_since_full_raise.push(seat);
        }
    }

    /// Может ли seat рейзить (не закрыт коротким олл-ином).
    pub fn can_raise(&self, seat: SeatIndex) -> bool {
        !self.acted_since_full_raise.contains(&seat)
    }

    /// Раунд ставок завершён: очередь пуста.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
