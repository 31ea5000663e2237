//! Четыре варианта забега и общий реестр для бинарника.

pub mod formula_d;
pub mod hare_tortoise;
pub mod magical_athletes;
pub mod robo_rally;

pub use formula_d::{FormulaD, FormulaPlayer, FormulaState};
pub use hare_tortoise::{HareAndTortoise, HarePlayer};
pub use magical_athletes::{AthletePlayer, MagicalAthletes};
pub use robo_rally::{RoboPlayer, RoboRally};

use serde::{Deserialize, Serialize};

use crate::api::dto::VariantReport;
use crate::domain::RaceConfig;
use crate::engine::{simulate, EngineError, RandomSource, RuleSet};

/// Переключатели правил, которые можно менять из CLI.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantOptions {
    /// Лазер Twonky в RoboRally.
    pub robo_laser: bool,
}

impl Default for VariantOptions {
    fn default() -> Self {
        Self { robo_laser: true }
    }
}

/// Выбор варианта в рантайме.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameVariant {
    HareAndTortoise,
    MagicalAthletes,
    FormulaD,
    RoboRally,
}

impl GameVariant {
    pub const ALL: [GameVariant; 4] = [
        GameVariant::HareAndTortoise,
        GameVariant::MagicalAthletes,
        GameVariant::FormulaD,
        GameVariant::RoboRally,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameVariant::HareAndTortoise => HareAndTortoise.name(),
            GameVariant::MagicalAthletes => MagicalAthletes.name(),
            GameVariant::FormulaD => FormulaD.name(),
            GameVariant::RoboRally => RoboRally::default().name(),
        }
    }

    /// Тег для деривации seed'а варианта.
    pub fn key(self) -> &'static str {
        match self {
            GameVariant::HareAndTortoise => "hare_tortoise",
            GameVariant::MagicalAthletes => "magical_athletes",
            GameVariant::FormulaD => "formula_d",
            GameVariant::RoboRally => "robo_rally",
        }
    }

    /// Во сколько раз бонус варианта больше базовой единицы.
    pub fn bonus_factor(self) -> i64 {
        match self {
            GameVariant::HareAndTortoise => 1,
            GameVariant::MagicalAthletes => 2,
            GameVariant::FormulaD => 3,
            GameVariant::RoboRally => 4,
        }
    }

    /// Конфиг варианта из базового: бонус масштабируется.
    pub fn config(self, base: &RaceConfig) -> RaceConfig {
        base.scaled_bonus(self.bonus_factor())
    }

    /// Прогнать вариант и собрать отчёт.
    pub fn run<R: RandomSource>(
        self,
        base: &RaceConfig,
        options: VariantOptions,
        rng: &mut R,
    ) -> Result<VariantReport, EngineError> {
        let config = self.config(base);
        match self {
            GameVariant::HareAndTortoise => report(&HareAndTortoise, &config, rng),
            GameVariant::MagicalAthletes => report(&MagicalAthletes, &config, rng),
            GameVariant::FormulaD => report(&FormulaD, &config, rng),
            GameVariant::RoboRally => {
                report(&RoboRally::with_laser(options.robo_laser), &config, rng)
            }
        }
    }
}

fn report<G: RuleSet, R: RandomSource>(
    rules: &G,
    config: &RaceConfig,
    rng: &mut R,
) -> Result<VariantReport, EngineError> {
    let stats = simulate(rules, config, rng)?;
    Ok(VariantReport::from_stats(rules.name(), config, &stats))
}
