use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что видит пользователь CLI).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Передано больше позиционных аргументов, чем умеем разобрать.
    #[error("Слишком много аргументов: {got}, допускается не больше {max}")]
    TooManyArguments { got: usize, max: usize },

    /// Аргумент не парсится как число.
    #[error("Аргумент #{position} ({field}) должен быть целым числом, получено {value:?}")]
    NotANumber {
        position: usize,
        field: &'static str,
        value: String,
    },

    /// Число распарсилось, но смысла в нём нет.
    #[error("Недопустимое значение {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },

    /// Ошибка движка (нарушенный инвариант симуляции).
    #[error("Ошибка движка: {0}")]
    Engine(#[from] EngineError),
}
