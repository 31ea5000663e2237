use core::marker::PhantomData;

use crate::domain::{BonusRule, Competitor, RaceConfig, RaceResult};
use crate::engine::errors::EngineError;
use crate::engine::race::start_race;
use crate::engine::{RandomSource, RuleSet};

/// Выплаты завязаны на места 1, 3 и 4, поэтому участников нужно ровно столько.
pub const PAYOUT_PLACES: usize = 4;
/// Индекс 4-го места в расстановке и 4-го объявленного участника.
const FOURTH: usize = 3;
const BONUS_MULTIPLIER: f64 = 5.0;

/// Накопитель статистики во время прогона.
///
/// Победы и выплаты хранятся в объявленном порядке участников.
#[derive(Clone, Debug)]
pub struct StatsAccumulator<C: Competitor> {
    bet: f64,
    bonus: f64,
    bonus_rule: BonusRule,
    runs: u64,
    wins: Vec<u64>,
    payouts: Vec<f64>,
    _marker: PhantomData<C>,
}

impl<C: Competitor> StatsAccumulator<C> {
    pub fn new(config: &RaceConfig) -> Result<Self, EngineError> {
        if C::count() < PAYOUT_PLACES {
            return Err(EngineError::NotEnoughCompetitors {
                required: PAYOUT_PLACES,
                actual: C::count(),
            });
        }

        Ok(Self {
            bet: config.bet as f64,
            bonus: config.bonus as f64,
            bonus_rule: config.bonus_rule,
            runs: 0,
            wins: vec![0; C::count()],
            payouts: vec![0.0; C::count()],
            _marker: PhantomData,
        })
    }

    /// Учесть один завершённый забег.
    pub fn record(&mut self, result: &RaceResult<C>) -> Result<(), EngineError> {
        let place = |idx: usize| {
            result
                .at_place(idx)
                .ok_or(EngineError::Internal("в расстановке меньше 4 участников"))
        };
        let first = place(0)?;
        let third = place(2)?;
        let fourth = place(FOURTH)?;

        self.runs += 1;
        self.wins[first.ordinal()] += 1;

        self.payouts[first.ordinal()] += 2.0 * self.bet;
        self.payouts[third.ordinal()] -= self.bet;
        self.payouts[fourth.ordinal()] -= self.bet;

        // Бонус получает каждый, кто финишировал выше отметки.
        let mark = match self.bonus_rule {
            BonusRule::AheadOfLastPlace => FOURTH,
            BonusRule::AheadOfBenchmark => result
                .place_of(C::ALL[FOURTH])
                .ok_or(EngineError::Internal("эталонный участник не найден в расстановке"))?,
        };
        for &c in result.ranking.iter().take(mark) {
            self.payouts[c.ordinal()] += BONUS_MULTIPLIER * self.bonus;
        }

        Ok(())
    }

    /// Нормировать выплаты на число забегов.
    pub fn finish(self) -> RaceStats<C> {
        let runs = self.runs;
        let payouts = if runs == 0 {
            self.payouts
        } else {
            self.payouts.into_iter().map(|p| p / runs as f64).collect()
        };

        RaceStats {
            runs,
            wins: self.wins,
            expected_payouts: payouts,
            _marker: PhantomData,
        }
    }
}

/// Итоговая статистика варианта (только чтение).
#[derive(Clone, Debug, PartialEq)]
pub struct RaceStats<C: Competitor> {
    runs: u64,
    wins: Vec<u64>,
    expected_payouts: Vec<f64>,
    _marker: PhantomData<C>,
}

impl<C: Competitor> RaceStats<C> {
    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn wins_of(&self, c: C) -> u64 {
        self.wins[c.ordinal()]
    }

    /// Ожидаемая выплата за один забег.
    pub fn expected_payout_of(&self, c: C) -> f64 {
        self.expected_payouts[c.ordinal()]
    }

    pub fn wins(&self) -> impl Iterator<Item = (C, u64)> + '_ {
        C::ALL.iter().map(move |&c| (c, self.wins_of(c)))
    }

    pub fn expected_payouts(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        C::ALL.iter().map(move |&c| (c, self.expected_payout_of(c)))
    }

    pub fn total_wins(&self) -> u64 {
        self.wins.iter().sum()
    }

    /// Оценка вероятности победы участника.
    pub fn win_rate(&self, c: C) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.wins_of(c) as f64 / self.runs as f64
        }
    }
}

/// Прогнать `config.runs` независимых забегов одним RNG.
pub fn simulate<G: RuleSet, R: RandomSource>(
    rules: &G,
    config: &RaceConfig,
    rng: &mut R,
) -> Result<RaceStats<G::Competitor>, EngineError> {
    if config.runs == 0 {
        return Err(EngineError::InvalidConfig("число забегов должно быть больше нуля"));
    }
    if config.winning_line <= 0 {
        return Err(EngineError::InvalidConfig("финишная черта должна быть больше нуля"));
    }

    let mut acc = StatsAccumulator::new(config)?;
    let mut engine = start_race(rules, config);

    for _ in 0..config.runs {
        engine.reset();
        let result = engine.run_to_finish(rng)?;
        acc.record(&result)?;
    }

    Ok(acc.finish())
}
