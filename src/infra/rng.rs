use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread-local, сидится от ОС).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn roll(&mut self, faces: u32) -> i64 {
        i64::from(rand::thread_rng().gen_range(1..=faces))
    }
}

/// Детерминированный RNG для тестов и повторяемых прогонов.
/// Один и тот же seed даёт одну и ту же последовательность бросков.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_bytes(bytes: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(bytes),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn roll(&mut self, faces: u32) -> i64 {
        i64::from(self.inner.gen_range(1..=faces))
    }
}

/// Скриптовый RNG: по кругу отдаёт заранее заданные значения.
///
/// Каждое значение зажимается в [1, faces], поэтому
/// `ScriptedRng::constant(1)` – всегда минимум, `always_max()` – всегда максимум.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Пустой список превращается в "всегда 1".
    pub fn new(values: Vec<i64>) -> Self {
        let values = if values.is_empty() { vec![1] } else { values };
        Self { values, cursor: 0 }
    }

    pub fn constant(value: i64) -> Self {
        Self::new(vec![value])
    }

    pub fn always_max() -> Self {
        Self::constant(i64::MAX)
    }

    /// Сколько бросков уже сделано.
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self, faces: u32) -> i64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(1, i64::from(faces.max(1)))
    }
}
