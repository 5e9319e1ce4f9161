mod midsquare;

pub use self::midsquare::{next_seed, MidSquare, SEED_MOD};
