use crate::domain::board::Slot;
use crate::domain::competitor::Competitor;

/// Итог одного забега: расстановка с 1-го по последнее место.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceResult<C: Competitor> {
    pub ranking: Vec<C>,
    /// Сколько полных кругов сыграно.
    pub turns: u64,
    /// Трасса на момент финиша (в объявленном порядке участников).
    pub final_board: Vec<(C, Slot)>,
}

impl<C: Competitor> RaceResult<C> {
    pub fn winner(&self) -> Option<C> {
        self.ranking.first().copied()
    }

    /// Участник на месте `place` (с нуля).
    pub fn at_place(&self, place: usize) -> Option<C> {
        self.ranking.get(place).copied()
    }

    /// Место участника (с нуля).
    pub fn place_of(&self, c: C) -> Option<usize> {
        self.ranking.iter().position(|&x| x == c)
    }
}
