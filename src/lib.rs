//! Монте-Карло симулятор настольных забегов.
//!
//! Четыре варианта правил (по 4 участника в каждом) прогоняются много раз,
//! по итогам считаются победы и ожидаемые выплаты по ставкам.
//!
//! Слои:
//! - `domain` – участники, трасса, конфиг, итог забега;
//! - `engine` – цикл кругов и агрегатор статистики;
//! - `games` – правила конкретных вариантов;
//! - `infra` – реализации RNG;
//! - `api` – разбор аргументов и отчёты.

pub mod api;
pub mod domain;
pub mod engine;
pub mod games;
pub mod infra;
