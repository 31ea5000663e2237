use serde::{Deserialize, Serialize};

use crate::domain::{Board, Competitor, Position};
use crate::engine::{EngineError, RandomSource, RuleSet};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FormulaPlayer {
    Yellow,
    Red,
    Black,
    Dan,
}

impl Competitor for FormulaPlayer {
    const ALL: &'static [Self] = &[Self::Yellow, Self::Red, Self::Black, Self::Dan];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Black => "Black",
            Self::Dan => "Dan",
        }
    }
}

pub const MIN_GEAR: Position = 1;
pub const MAX_GEAR: Position = 10;

/// Скорость Yellow по броску d4.
const YELLOW_SPEEDS: [Position; 4] = [-1, 3, 6, 10];

/// Состояние машин на один забег.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormulaState {
    /// Последняя выбранная скорость Yellow.
    pub yellow_speed: Position,
    /// Текущая передача Red, всегда в [MIN_GEAR, MAX_GEAR].
    pub red_gear: Position,
}

impl Default for FormulaState {
    fn default() -> Self {
        Self {
            yellow_speed: 0,
            red_gear: 4,
        }
    }
}

/// "Formula D": у Yellow и Red есть скорость/передача,
/// а Black на удачном броске едет со скоростью соперников.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormulaD;

impl RuleSet for FormulaD {
    type Competitor = FormulaPlayer;
    type RaceState = FormulaState;

    fn name(&self) -> &'static str {
        "FormulaD"
    }

    fn handle<R: RandomSource>(
        &self,
        state: &mut FormulaState,
        who: FormulaPlayer,
        board: &mut Board<FormulaPlayer>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        match who {
            FormulaPlayer::Yellow => {
                let idx = (rng.roll(4) - 1) as usize;
                state.yellow_speed = *YELLOW_SPEEDS
                    .get(idx)
                    .ok_or(EngineError::Internal("бросок d4 вне диапазона"))?;
                board.move_by(who, state.yellow_speed);
            }
            FormulaPlayer::Red => {
                match rng.roll(8) {
                    1 => state.red_gear = (state.red_gear - 1).max(MIN_GEAR),
                    7 => state.red_gear = (state.red_gear + 1).min(MAX_GEAR),
                    8 => state.red_gear = (state.red_gear + 2).min(MAX_GEAR),
                    _ => {}
                }
                board.move_by(who, state.red_gear);
            }
            FormulaPlayer::Black => match rng.roll(6) {
                4 => {
                    board.move_by(who, state.yellow_speed * 2);
                }
                5 => {
                    board.move_by(who, state.red_gear * 2);
                }
                6 => {
                    board.move_by(who, 8);
                }
                _ => {}
            },
            FormulaPlayer::Dan => {
                board.move_by(who, 4);
            }
        }
        Ok(())
    }
}
