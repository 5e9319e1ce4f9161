use rand::{RngCore, SeedableRng, rand_core::impls};

// https://en.wikipedia.org/wiki/Middle-square_method

/// Seeds are ten decimal digits: the domain is [0, 10^10).
pub const SEED_MOD: u64 = 10_000_000_000;

const HALF_MOD: u64 = 100_000;

/// One step of Hammer's mid-square method: square the seed and keep the
/// middle ten digits, without ever forming the 20-digit square.
pub const fn next_seed(x: u64) -> u64 {
    let a = x / HALF_MOD;
    let b = x % HALF_MOD;

    // x^2 = a^2*10^10 + 2ab*10^5 + b^2, so the window at digits 5..15 is
    // the sum of three terms that each stay below 2*10^15.
    let t1 = (a * a * HALF_MOD) % SEED_MOD;
    let t2 = (2 * a * b) % SEED_MOD;
    let t3 = (b * b) / HALF_MOD;
    (t1 + t2 + t3) % SEED_MOD
}

#[derive(Debug, Clone)]
pub struct MidSquare(u64);

impl MidSquare {
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub const fn next(&mut self) -> u64 {
        self.0 = next_seed(self.0);
        self.0
    }

    /// Next seed scaled into [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next() as f64 / SEED_MOD as f64
    }
}

impl Default for MidSquare {
    fn default() -> Self {
        Self::new(1_111_111_111)
    }
}

// Outputs cover [0, 10^10), not the full u64 range, so this is a historical
// generator for reproducing classic simulations, not a uniform bit source.
impl RngCore for MidSquare {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MidSquare {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed) % SEED_MOD)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state % SEED_MOD)
    }
}
