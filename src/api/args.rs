//! Разбор позиционных аргументов CLI в `RaceConfig`.
//!
//! Порядок: runs, winning_line, bonus, bet. Недостающие хвостовые
//! аргументы берутся из значений по умолчанию.

use crate::api::errors::ApiError;
use crate::domain::RaceConfig;

pub const MAX_POSITIONAL: usize = 4;

const FIELDS: [&str; MAX_POSITIONAL] = ["runs", "winning_line", "bonus", "bet"];

/// Собрать базовый конфиг из позиционных аргументов.
pub fn config_from_positional<S: AsRef<str>>(args: &[S]) -> Result<RaceConfig, ApiError> {
    if args.len() > MAX_POSITIONAL {
        return Err(ApiError::TooManyArguments {
            got: args.len(),
            max: MAX_POSITIONAL,
        });
    }

    let mut config = RaceConfig::default();

    for (idx, raw) in args.iter().enumerate() {
        let field = FIELDS[idx];
        let value = parse_number(idx + 1, field, raw.as_ref())?;
        match idx {
            0 => {
                config.runs = u64::try_from(value).map_err(|_| ApiError::InvalidValue {
                    field,
                    reason: "не может быть отрицательным",
                })?
            }
            1 => config.winning_line = value,
            2 => config.bonus = value,
            _ => config.bet = value,
        }
    }

    validate(&config)?;
    Ok(config)
}

fn parse_number(position: usize, field: &'static str, raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::NotANumber {
        position,
        field,
        value: raw.to_string(),
    })
}

/// Проверки до старта симуляции.
pub fn validate(config: &RaceConfig) -> Result<(), ApiError> {
    if config.runs == 0 {
        return Err(ApiError::InvalidValue {
            field: "runs",
            reason: "нужно сыграть хотя бы один забег",
        });
    }
    if config.winning_line <= 0 {
        return Err(ApiError::InvalidValue {
            field: "winning_line",
            reason: "финишная черта должна быть больше нуля",
        });
    }
    Ok(())
}
