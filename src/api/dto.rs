use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::{BonusRule, Competitor, RaceConfig};
use crate::engine::RaceStats;

/// Победы одного участника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompetitorWinsDto {
    pub name: String,
    pub wins: u64,
    pub win_rate: f64,
}

/// Ожидаемая выплата участника за один забег.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompetitorPayoutDto {
    pub name: String,
    pub expected: f64,
}

/// Отчёт по одному варианту. Порядок участников – объявленный.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VariantReport {
    pub name: String,
    pub runs: u64,
    pub winning_line: i64,
    pub bet: i64,
    /// Бонус уже с учётом коэффициента варианта.
    pub bonus: i64,
    pub bonus_rule: BonusRule,
    pub wins: Vec<CompetitorWinsDto>,
    pub payouts: Vec<CompetitorPayoutDto>,
}

impl VariantReport {
    pub fn from_stats<C: Competitor>(name: &str, config: &RaceConfig, stats: &RaceStats<C>) -> Self {
        Self {
            name: name.to_string(),
            runs: stats.runs(),
            winning_line: config.winning_line,
            bet: config.bet,
            bonus: config.bonus,
            bonus_rule: config.bonus_rule,
            wins: stats
                .wins()
                .map(|(c, wins)| CompetitorWinsDto {
                    name: c.name().to_string(),
                    wins,
                    win_rate: stats.win_rate(c),
                })
                .collect(),
            payouts: stats
                .expected_payouts()
                .map(|(c, expected)| CompetitorPayoutDto {
                    name: c.name().to_string(),
                    expected,
                })
                .collect(),
        }
    }

    /// `{Hare=2711, Tortoise=3012, ...}`
    pub fn wins_line(&self) -> String {
        let items: Vec<String> = self
            .wins
            .iter()
            .map(|w| format!("{}={}", w.name, w.wins))
            .collect();
        format!("{{{}}}", items.join(", "))
    }

    /// `{Hare=1.2345, Tortoise=-0.5000, ...}`
    pub fn payouts_line(&self) -> String {
        let items: Vec<String> = self
            .payouts
            .iter()
            .map(|p| format!("{}={:.4}", p.name, p.expected))
            .collect();
        format!("{{{}}}", items.join(", "))
    }

    /// Три строки: имя, победы, выплаты.
    pub fn render(&self) -> String {
        format!("{}:\n{}\n{}", self.name, self.wins_line(), self.payouts_line())
    }
}

/// Текстовый вывод всех вариантов, между вариантами пустая строка.
pub fn render_reports(reports: &[VariantReport]) -> String {
    let mut out = String::new();
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        // Запись в String не падает.
        let _ = writeln!(out, "{}", report.render());
    }
    out
}
