// src/bin/race_odds.rs

use clap::{Parser, ValueEnum};

use race_engine::api::{config_from_positional, render_reports, ApiError, VariantReport};
use race_engine::domain::{BonusRule, RaceConfig};
use race_engine::games::{GameVariant, VariantOptions};
use race_engine::infra::{RngSeed, SystemRng};

#[derive(Parser, Debug)]
#[command(
    name = "race_odds",
    version,
    about = "Monte Carlo odds for four board-game races"
)]
struct Cli {
    /// runs, winning line, base bonus unit, bet (all optional, in this order)
    #[arg(value_name = "NUM", allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Fixed seed: every variant gets its own reproducible stream
    #[arg(long)]
    seed: Option<u64>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// RoboRally without Twonky's in-turn laser push
    #[arg(long = "no-laser")]
    no_laser: bool,

    /// Who earns the bonus
    #[arg(long = "bonus-rule", value_enum, default_value_t = BonusRuleArg::LastPlace)]
    bonus_rule: BonusRuleArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BonusRuleArg {
    /// Everyone placed above 4th
    LastPlace,
    /// Everyone placed above the fixed "+4" runner
    Benchmark,
}

impl From<BonusRuleArg> for BonusRule {
    fn from(arg: BonusRuleArg) -> Self {
        match arg {
            BonusRuleArg::LastPlace => BonusRule::AheadOfLastPlace,
            BonusRuleArg::Benchmark => BonusRule::AheadOfBenchmark,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let base = match config_from_positional(&cli.numbers) {
        Ok(config) => config.with_bonus_rule(cli.bonus_rule.into()),
        Err(e) => {
            eprintln!("[CLI] ОШИБКА в аргументах: {e}");
            eprintln!("[CLI] usage: race_odds [runs] [winning_line] [bonus] [bet]");
            std::process::exit(2);
        }
    };

    let options = VariantOptions {
        robo_laser: !cli.no_laser,
    };

    let reports = match run_all(&base, options, cli.seed) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("[RACE] ОШИБКА симуляции: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("[CLI] не удалось сериализовать отчёт: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_reports(&reports));
    }
}

/// Прогон всех вариантов по очереди.
/// С seed'ом каждый вариант получает свой поток, без него – системный RNG.
fn run_all(
    base: &RaceConfig,
    options: VariantOptions,
    seed: Option<u64>,
) -> Result<Vec<VariantReport>, ApiError> {
    let mut reports = Vec::with_capacity(GameVariant::ALL.len());

    for variant in GameVariant::ALL {
        let report = match seed {
            Some(seed) => {
                let mut rng = RngSeed::from_u64(seed).derive(variant.key()).to_rng();
                variant.run(base, options, &mut rng)?
            }
            None => variant.run(base, options, &mut SystemRng)?,
        };
        reports.push(report);
    }

    Ok(reports)
}
