use thiserror::Error;

/// Ошибки движка забегов.
///
/// В самой симуляции восстанавливаемых ошибок нет: всё, что здесь,
/// либо некорректный конфиг, либо нарушенный инвариант.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(&'static str),

    #[error("Для подсчёта выплат нужно минимум {required} участника, а в варианте {actual}")]
    NotEnoughCompetitors { required: usize, actual: usize },

    #[error("Забег уже завершён")]
    RaceAlreadyFinished,

    #[error("Забег не завершился за {0} кругов")]
    TurnLimitExceeded(u64),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
