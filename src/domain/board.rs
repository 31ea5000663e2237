use core::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::domain::competitor::Competitor;
use crate::domain::{Lane, Position};

/// Клетка одного участника: позиция на трассе и дорожка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub position: Position,
    pub lane: Lane,
}

/// Состояние трассы на время одного забега.
///
/// Меняется только через `move_by` и `move_lane`, поэтому
/// позиция всегда >= 0, а дорожка всегда в [0, count - 1].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<C: Competitor> {
    slots: Vec<Slot>,
    _marker: PhantomData<C>,
}

impl<C: Competitor> Board<C> {
    /// Стартовая расстановка: все на нуле, дорожка = порядковый номер.
    pub fn new() -> Self {
        let slots = C::ALL
            .iter()
            .map(|c| Slot {
                position: 0,
                lane: c.ordinal(),
            })
            .collect();

        Self {
            slots,
            _marker: PhantomData,
        }
    }

    /// Вернуть трассу в стартовое состояние.
    pub fn reset(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            slot.position = 0;
            slot.lane = idx;
        }
    }

    /// Сдвинуть участника на `delta` клеток. Ниже нуля не уходим,
    /// сверху не ограничиваем. Возвращает новую позицию.
    pub fn move_by(&mut self, c: C, delta: Position) -> Position {
        let slot = &mut self.slots[c.ordinal()];
        slot.position = slot.position.saturating_add(delta).max(0);
        slot.position
    }

    /// Сменить дорожку на `delta`, с зажимом в [0, count - 1].
    pub fn move_lane(&mut self, c: C, delta: i64) -> Lane {
        let max_lane = self.slots.len().saturating_sub(1) as i64;
        let slot = &mut self.slots[c.ordinal()];
        let lane = (slot.lane as i64).saturating_add(delta).clamp(0, max_lane);
        slot.lane = lane as Lane;
        slot.lane
    }

    pub fn position(&self, c: C) -> Position {
        self.slots[c.ordinal()].position
    }

    pub fn lane(&self, c: C) -> Lane {
        self.slots[c.ordinal()].lane
    }

    pub fn slot(&self, c: C) -> Slot {
        self.slots[c.ordinal()]
    }

    /// Отстающий участник: минимальная позиция, при равенстве
    /// побеждает первый в объявленном порядке.
    ///
    /// `None` только для пустого набора участников.
    pub fn trailing(&self) -> Option<C> {
        let mut best: Option<(C, Position)> = None;
        for &c in C::ALL {
            let pos = self.position(c);
            match best {
                Some((_, min)) if pos >= min => {}
                _ => best = Some((c, pos)),
            }
        }
        best.map(|(c, _)| c)
    }

    /// Хоть кто-то дошёл до финишной черты?
    pub fn any_reached(&self, winning_line: Position) -> bool {
        self.slots.iter().any(|s| s.position >= winning_line)
    }

    /// Итоговая расстановка: позиция по убыванию, при равенстве
    /// выше тот, у кого больше номер дорожки.
    pub fn ranking(&self) -> Vec<C> {
        let mut places: Vec<C> = C::ALL.to_vec();
        places.sort_by(|a, b| {
            let (sa, sb) = (self.slot(*a), self.slot(*b));
            sb.position
                .cmp(&sa.position)
                .then_with(|| sb.lane.cmp(&sa.lane))
        });
        places
    }

    /// Снимок трассы в объявленном порядке участников.
    pub fn snapshot(&self) -> Vec<(C, Slot)> {
        C::ALL.iter().map(|&c| (c, self.slot(c))).collect()
    }
}

impl<C: Competitor> Default for Board<C> {
    fn default() -> Self {
        Self::new()
    }
}
