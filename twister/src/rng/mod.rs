//! Deterministic random number generation
//!
//! Uses the MT19937 Mersenne Twister, bit-exact with the reference
//! `mt19937ar.c` generator seeded through `init_genrand`.
//! CRITICAL: Not suitable for cryptographic use.

mod mt19937;
mod seed;

pub use mt19937::{MersenneTwister, M, N};
pub use seed::{FixedSeed, SeedSource, SystemClock};
