//! Доменная модель забегов: участники, трасса, конфиг прогона, итог забега.

pub mod board;
pub mod competitor;
pub mod config;
pub mod result;

/// Позиция на трассе (клетки от старта).
pub type Position = i64;
/// Номер дорожки.
pub type Lane = usize;

pub use board::*;
pub use competitor::*;
pub use config::*;
pub use result::*;
