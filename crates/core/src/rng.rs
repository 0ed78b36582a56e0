//! RNG module - seedable random source for ball generation
//!
//! The engine only needs two uniform draws: an index into `[0, n)` (which free
//! cell receives a ball) and a color. [`RandomSource`] captures exactly that, so
//! tests and callers can inject their own generator.
//!
//! [`SimpleRng`] is the default: a small LCG that makes games reproducible from
//! a 32-bit seed.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Color;

/// Uniform random draws used by the game.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn next_index(&mut self, n: usize) -> usize;

    /// Uniform pick from the color enumeration.
    fn next_color(&mut self) -> Color {
        Color::ALL[self.next_index(Color::ALL.len())]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the system clock.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seed = (nanos as u32) ^ ((nanos >> 32) as u32) ^ std::process::id();
        Self::new(seed)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (a seed that continues this sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "next_index called with an empty range");
        self.next_range(n as u32) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
