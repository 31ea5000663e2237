use serde::{Deserialize, Serialize};

use crate::domain::{Board, Competitor};
use crate::engine::{EngineError, RandomSource, RuleSet};

/// Участники "Зайца и черепахи".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HarePlayer {
    Hare,
    Tortoise,
    Porcupine,
    Dan,
}

impl Competitor for HarePlayer {
    const ALL: &'static [Self] = &[Self::Hare, Self::Tortoise, Self::Porcupine, Self::Dan];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Hare => "Hare",
            Self::Tortoise => "Tortoise",
            Self::Porcupine => "Porcupine",
            Self::Dan => "Dan",
        }
    }
}

/// Заяц прыгает на 10 с шансом 1/2, черепаха ползёт на чётное число,
/// дикобраз на выпавшей восьмёрке откидывает назад всех, кроме себя.
#[derive(Clone, Copy, Debug, Default)]
pub struct HareAndTortoise;

impl RuleSet for HareAndTortoise {
    type Competitor = HarePlayer;
    type RaceState = ();

    fn name(&self) -> &'static str {
        "HareAndTortoise"
    }

    fn handle<R: RandomSource>(
        &self,
        _state: &mut (),
        who: HarePlayer,
        board: &mut Board<HarePlayer>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        match who {
            HarePlayer::Hare => {
                if rng.roll(2) == 1 {
                    board.move_by(who, 10);
                }
            }
            HarePlayer::Tortoise => {
                board.move_by(who, rng.roll(4) * 2);
            }
            HarePlayer::Porcupine => {
                let roll = rng.roll(8);
                board.move_by(who, roll);
                if roll == 8 {
                    board.move_by(HarePlayer::Hare, -3);
                    board.move_by(HarePlayer::Tortoise, -2);
                    board.move_by(HarePlayer::Dan, -2);
                }
            }
            HarePlayer::Dan => {
                board.move_by(who, 4);
            }
        }
        Ok(())
    }
}
