//! Внешний API симулятора.
//!
//! Здесь описываются:
//! - разбор аргументов командной строки (args.rs);
//! - DTO отчётов (dto.rs) - текстовый и JSON вывод;
//! - ошибки (errors.rs) - то, что видит пользователь.

pub mod args;
pub mod dto;
pub mod errors;

pub use args::*;
pub use dto::*;
pub use errors::*;
