use serde::{Deserialize, Serialize};

use crate::domain::{Board, Competitor};
use crate::engine::{EngineError, RandomSource, RuleSet};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoboPlayer {
    Hammerbot,
    Twonky,
    Squashbot,
    Dan,
}

impl Competitor for RoboPlayer {
    const ALL: &'static [Self] = &[Self::Hammerbot, Self::Twonky, Self::Squashbot, Self::Dan];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Hammerbot => "Hammerbot",
            Self::Twonky => "Twonky",
            Self::Squashbot => "Squashbot",
            Self::Dan => "Dan",
        }
    }
}

/// "RoboRally": единственный вариант, где важны дорожки.
///
/// Twonky после хода меняет дорожку и (если включено) стреляет лазером
/// по всем на своей новой дорожке. В конце круга любой, кто стоит
/// с Twonky на одной дорожке и клетке, откатывается на 1.
#[derive(Clone, Copy, Debug)]
pub struct RoboRally {
    /// Лазер Twonky во время его хода.
    pub laser: bool,
}

impl RoboRally {
    pub fn with_laser(laser: bool) -> Self {
        Self { laser }
    }

    /// Всех на дорожке Twonky – на 2 назад, и ещё на 1,
    /// если после отката оказались ровно на его клетке.
    fn fire_laser(board: &mut Board<RoboPlayer>) {
        let shooter = RoboPlayer::Twonky;
        let lane = board.lane(shooter);
        for &target in RoboPlayer::ALL {
            if target == shooter || board.lane(target) != lane {
                continue;
            }
            let landed = board.move_by(target, -2);
            if landed == board.position(shooter) {
                board.move_by(target, -1);
            }
        }
    }
}

impl Default for RoboRally {
    fn default() -> Self {
        Self::with_laser(true)
    }
}

impl RuleSet for RoboRally {
    type Competitor = RoboPlayer;
    type RaceState = ();

    fn name(&self) -> &'static str {
        "RoboRally"
    }

    fn handle<R: RandomSource>(
        &self,
        _state: &mut (),
        who: RoboPlayer,
        board: &mut Board<RoboPlayer>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        match who {
            RoboPlayer::Hammerbot => match rng.roll(4) {
                1 => {
                    board.move_by(who, 1);
                }
                4 => {
                    board.move_by(who, 13);
                }
                _ => {}
            },
            RoboPlayer::Twonky => {
                let roll = rng.roll(6);
                board.move_by(who, roll);
                board.move_lane(who, if roll % 2 == 0 { -1 } else { 1 });
                if self.laser {
                    Self::fire_laser(board);
                }
            }
            RoboPlayer::Squashbot => {
                let roll = rng.roll(8);
                if roll < 8 {
                    board.move_by(who, roll);
                } else {
                    board.move_by(who, 3);
                    board.move_by(RoboPlayer::Dan, -8);
                }
            }
            RoboPlayer::Dan => {
                board.move_by(who, 4);
            }
        }
        Ok(())
    }

    fn post_turn(&self, _state: &mut (), board: &mut Board<RoboPlayer>) -> Result<(), EngineError> {
        let twonky = board.slot(RoboPlayer::Twonky);
        for &other in RoboPlayer::ALL {
            if other != RoboPlayer::Twonky && board.slot(other) == twonky {
                board.move_by(other, -1);
            }
        }
        Ok(())
    }
}
