//! RngSeed - доменный seed для RNG забегов.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || tag)
//!   - создавать DeterministicRng из seed
//!
//! Один базовый seed из командной строки даёт каждому варианту
//! собственный, но воспроизводимый поток бросков.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (удобно для CLI и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение: seed для конкретного варианта.
    ///
    /// Пример:
    ///     let seed = base.derive("formula_d");
    pub fn derive(&self, tag: &str) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"RACE_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update((tag.len() as u64).to_le_bytes());
        hasher.update(tag.as_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
