use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG на основе `thread_rng` для живой игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..=upper)
    }

    fn gen_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Заранее заданная последовательность чисел `[0, 1)` (сценарии для ботов).
/// По окончании последовательность повторяется с начала.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    units: Vec<f64>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(units: Vec<f64>) -> Self {
        Self { units, pos: 0 }
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let v = self.units[self.pos % self.units.len()];
        self.pos += 1;
        v.clamp(0.0, 0.999_999)
    }
}

impl RandomSource for ScriptedRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        ((self.next_unit() * (upper + 1) as f64) as usize).min(upper)
    }

    fn gen_unit(&mut self) -> f64 {
        self.next_unit()
    }
}
