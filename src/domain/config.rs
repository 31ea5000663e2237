use serde::{Deserialize, Serialize};

use crate::domain::Position;

pub const DEFAULT_RUNS: u64 = 10_000;
pub const DEFAULT_WINNING_LINE: Position = 50;
pub const DEFAULT_BONUS: i64 = 5;
pub const DEFAULT_BET: i64 = 1;

/// Кто получает бонус `5 × bonus` по итогам забега.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BonusRule {
    /// Все, кто финишировал строго выше 4-го места.
    #[default]
    AheadOfLastPlace,
    /// Все, кто обогнал 4-го объявленного участника (эталонного бегуна "+4").
    AheadOfBenchmark,
}

/// Параметры прогона одного варианта.
///
/// Значение неизменяемое: производные конфиги (другой бонус)
/// создаются через `with_bonus` / `scaled_bonus`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceConfig {
    /// Сколько забегов сыграть.
    pub runs: u64,
    /// Размер ставки.
    pub bet: i64,
    /// Забег заканчивается, как только кто-то дошёл до этой позиции.
    pub winning_line: Position,
    /// Единица бонуса.
    pub bonus: i64,
    pub bonus_rule: BonusRule,
}

impl RaceConfig {
    pub fn new(runs: u64, winning_line: Position, bonus: i64, bet: i64) -> Self {
        Self {
            runs,
            bet,
            winning_line,
            bonus,
            bonus_rule: BonusRule::default(),
        }
    }

    pub fn with_bonus(self, bonus: i64) -> Self {
        Self { bonus, ..self }
    }

    /// Бонус, умноженный на коэффициент варианта.
    pub fn scaled_bonus(self, factor: i64) -> Self {
        self.with_bonus(self.bonus.saturating_mul(factor))
    }

    pub fn with_bonus_rule(self, bonus_rule: BonusRule) -> Self {
        Self { bonus_rule, ..self }
    }

    /// Потолок по числу кругов для одного забега.
    /// Правила всех вариантов двигают участников вперёд, так что
    /// до него забег не доходит; превышение = логическая ошибка.
    pub fn turn_limit(&self) -> u64 {
        (self.winning_line.max(0) as u64)
            .saturating_mul(64)
            .saturating_add(1024)
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RUNS, DEFAULT_WINNING_LINE, DEFAULT_BONUS, DEFAULT_BET)
    }
}
