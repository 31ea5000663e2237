//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - доменные seed'ы для воспроизводимых прогонов.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
