//! Entropy source for word picks and horizontal spawn placement.
//!
//! A small seedable LCG keeps the gameplay deterministic under test; at
//! startup it is seeded from browser entropy (feature `rng`) or from
//! `performance.now()`.

/// Simple LCG using the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// A zero seed would stick the generator on a degenerate cycle.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the best entropy the host offers.
    pub fn from_host() -> Self {
        #[cfg(feature = "rng")]
        {
            let mut buf = [0u8; 4];
            if getrandom::getrandom(&mut buf).is_ok() {
                return Self::new(u32::from_le_bytes(buf));
            }
        }
        Self::new(crate::performance_now() as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`; `max == 0` yields 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}
