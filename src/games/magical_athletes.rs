use serde::{Deserialize, Serialize};

use crate::domain::{Board, Competitor};
use crate::engine::{EngineError, RandomSource, RuleSet};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AthletePlayer {
    Conjurer,
    Priest,
    Martial,
    Dan,
}

impl Competitor for AthletePlayer {
    const ALL: &'static [Self] = &[Self::Conjurer, Self::Priest, Self::Martial, Self::Dan];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Conjurer => "Conjurer",
            Self::Priest => "Priest",
            Self::Martial => "Martial",
            Self::Dan => "Dan",
        }
    }
}

/// "Magical Athletes": участники влияют друг на друга.
///
/// - Conjurer перебрасывает низкие значения;
/// - Priest подталкивает отстающего на 2 и идёт сам на d6 + 1;
/// - Martial шагает по одной клетке, шаг на чужую клетку не засчитывается.
#[derive(Clone, Copy, Debug, Default)]
pub struct MagicalAthletes;

impl MagicalAthletes {
    fn conjurer_roll<R: RandomSource>(rng: &mut R) -> i64 {
        let mut roll = rng.roll(6);
        if roll <= 3 {
            roll = rng.roll(6);
        }
        while roll == 1 {
            roll = rng.roll(6);
        }
        roll
    }

    fn martial_walk<R: RandomSource>(board: &mut Board<AthletePlayer>, rng: &mut R) {
        use AthletePlayer::*;

        let mut budget = rng.roll(6);
        while budget > 0 {
            let next = board.move_by(Martial, 1);
            let occupied = [Conjurer, Priest, Dan]
                .iter()
                .any(|&other| board.position(other) == next);
            if !occupied {
                budget -= 1;
            }
        }
    }
}

impl RuleSet for MagicalAthletes {
    type Competitor = AthletePlayer;
    type RaceState = ();

    fn name(&self) -> &'static str {
        "MagicalAthletes"
    }

    fn handle<R: RandomSource>(
        &self,
        _state: &mut (),
        who: AthletePlayer,
        board: &mut Board<AthletePlayer>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        match who {
            AthletePlayer::Conjurer => {
                let roll = Self::conjurer_roll(rng);
                board.move_by(who, roll);
            }
            AthletePlayer::Priest => {
                let last = board
                    .trailing()
                    .ok_or(EngineError::Internal("не найден отстающий участник"))?;
                board.move_by(last, 2);
                board.move_by(who, rng.roll(6) + 1);
            }
            AthletePlayer::Martial => Self::martial_walk(board, rng),
            AthletePlayer::Dan => {
                board.move_by(who, 4);
            }
        }
        Ok(())
    }
}
