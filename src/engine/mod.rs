//! Движок забегов: общий цикл кругов и статистика по множеству забегов.
//!
//! Высокоуровневый объект: `RaceEngine`
//! Основные операции:
//!   - `start_race` – поставить участников на старт
//!   - `play_turn` – сыграть один полный круг
//!   - `run_race` – крутить круги до финиша
//!   - `simulate` – прогнать N забегов и посчитать победы/выплаты

pub mod errors;
pub mod race;
pub mod stats;

pub use errors::EngineError;
pub use race::{play_turn, run_race, start_race, RaceEngine, RaceStatus};
pub use stats::{simulate, RaceStats, StatsAccumulator};

use crate::domain::{Board, Competitor};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand` и скриптовый RNG для тестов).
pub trait RandomSource {
    /// Равномерное целое в [1, faces]. `faces >= 1` – забота вызывающего.
    fn roll(&mut self, faces: u32) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, faces: u32) -> i64 {
        (**self).roll(faces)
    }
}

/// Правила одного варианта игры.
///
/// `handle` вызывается для каждого участника по очереди, `post_turn`
/// один раз в конце круга. Всё изменяемое состояние варианта живёт
/// в `RaceState`: движок создаёт его заново перед каждым забегом.
pub trait RuleSet {
    type Competitor: Competitor;
    type RaceState: Default;

    /// Название варианта для вывода.
    fn name(&self) -> &'static str;

    fn handle<R: RandomSource>(
        &self,
        state: &mut Self::RaceState,
        who: Self::Competitor,
        board: &mut Board<Self::Competitor>,
        rng: &mut R,
    ) -> Result<(), EngineError>;

    fn post_turn(
        &self,
        _state: &mut Self::RaceState,
        _board: &mut Board<Self::Competitor>,
    ) -> Result<(), EngineError> {
        Ok(())
    }
}
