//! Per-battle random streams

use std::collections::VecDeque;

/// A stream of uniform draws in `[0, 1)`
///
/// Each battle owns its stream. Any [`rand::Rng`] qualifies, so a seeded
/// `StdRng` gives a reproducible battle.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    fn pick(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Replays a fixed sequence of draws, then a constant fallback
///
/// Used to force specific branches (critical hits, paralysis skips, status
/// rolls) in tests and scripted demos.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    queue: VecDeque<f64>,
    fallback: f64,
    drawn: usize,
}

impl ScriptedRolls {
    /// Fallback used once the script runs out: no crit, no status, top of the damage range
    pub const DEFAULT_FALLBACK: f64 = 0.99;

    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: rolls.into_iter().collect(),
            fallback: Self::DEFAULT_FALLBACK,
            drawn: 0,
        }
    }

    /// A stream that always yields `value`
    pub fn constant(value: f64) -> Self {
        Self::new([]).with_fallback(value)
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Total draws taken so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        self.drawn += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
