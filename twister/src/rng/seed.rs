//! Seed sources
//!
//! Keeps the impure, clock-derived default seed apart from the deterministic
//! generator so that seed → sequence stays testable on its own.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Anything that can hand out a 32-bit seed
pub trait SeedSource {
    /// Produce the seed value
    fn seed_value(&self) -> u32;
}

impl SeedSource for u32 {
    fn seed_value(&self) -> u32 {
        *self
    }
}

/// Explicit, reproducible seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn seed_value(&self) -> u32 {
        self.0
    }
}

/// Wall-clock seed: milliseconds since the Unix epoch, low 32 bits
///
/// Not reproducible. A clock set before the epoch seeds with 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn seed_value(&self) -> u32 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        truncate_millis(millis)
    }
}

/// Keep the low 32 bits of a millisecond count (wraps every ~49.7 days)
fn truncate_millis(millis: u128) -> u32 {
    (millis & u128::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_passthrough() {
        assert_eq!(FixedSeed(81).seed_value(), 81);
        assert_eq!(543u32.seed_value(), 543);
    }

    #[test]
    fn test_truncate_millis_keeps_low_bits() {
        assert_eq!(truncate_millis(0), 0);
        assert_eq!(truncate_millis(u128::from(u32::MAX)), u32::MAX);
        assert_eq!(truncate_millis(0x1_0000_0005), 5);
        assert_eq!(truncate_millis(0xABCD_1234_5678), 0x1234_5678);
    }

    #[test]
    fn test_system_clock_matches_truncated_now() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let seed = SystemClock.seed_value();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();

        // Wrapping distance covers the (rare) 32-bit rollover between reads
        let elapsed = truncate_millis(after).wrapping_sub(truncate_millis(before));
        let offset = seed.wrapping_sub(truncate_millis(before));
        assert!(
            offset <= elapsed,
            "Clock seed {} not within [{}, {}]",
            seed,
            before,
            after
        );
    }
}
