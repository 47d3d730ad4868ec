//! MT19937 Mersenne Twister
//!
//! 32-bit Mersenne Twister (Matsumoto & Nishimura, 1998) with the standard
//! parameterization. Output matches `genrand_int32` / `genrand_real1` from the
//! reference C implementation word for word.
//!
//! # Algorithm
//!
//! - **Seeding** fills the 624-word state from a single `u32` using Knuth's
//!   multiplicative recurrence.
//! - **Twisting** regenerates the whole state in place once every 624 draws.
//! - **Tempering** mixes each word on the way out; the state itself is
//!   never tempered.
//!
//! # Determinism
//!
//! Same seed → same sequence of words. The no-argument constructors read the
//! system clock and are therefore not reproducible.

use std::fmt;

use tracing::{debug, trace};

use super::seed::{SeedSource, SystemClock};

/// Degree of recurrence: number of words in the state vector
pub const N: usize = 624;

/// Middle word offset used by the twist
pub const M: usize = 397;

/// Constant vector a (twist feedback polynomial)
const MATRIX_A: u32 = 0x9908_B0DF;

/// Most significant w-r bits
const UPPER_MASK: u32 = 0x8000_0000;

/// Least significant r bits
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// See Knuth TAOCP Vol. 2, 3rd Ed., p. 106
const SEED_MULTIPLIER: u32 = 1_812_433_253;

// Tempering bit masks
const TEMPER_B: u32 = 0x9D2C_5680;
const TEMPER_C: u32 = 0xEFC6_0000;

/// Feedback term selected by the low bit of the combined word
const MAG01: [u32; 2] = [0, MATRIX_A];

/// 2^32 - 1, divisor for the closed unit interval
const U32_MAX_F64: f64 = 4_294_967_295.0;

/// 2^32, divisor for bounded draws
const U32_RANGE_F64: f64 = 4_294_967_296.0;

/// Deterministic random number generator using MT19937
///
/// # Example
/// ```
/// use twister_core::MersenneTwister;
///
/// let mut rng = MersenneTwister::new(5489);
/// assert_eq!(rng.next_u32(), 3499211612);
///
/// let unit = rng.next_f64();
/// assert!((0.0..=1.0).contains(&unit));
///
/// let die = rng.next_bounded_u32(6); // [0, 6)
/// assert!(die < 6);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct MersenneTwister {
    /// State vector
    state: [u32; N],
    /// Next word to read; `>= N` means a twist is due
    index: usize,
}

impl MersenneTwister {
    /// Create a generator seeded with `seed`
    ///
    /// # Example
    /// ```
    /// use twister_core::MersenneTwister;
    ///
    /// let mut a = MersenneTwister::new(42);
    /// let mut b = MersenneTwister::new(42);
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; N],
            index: N + 1,
        };
        rng.seed(seed);
        rng
    }

    /// Create a generator seeded from the system clock
    ///
    /// Two generators built within the same millisecond share a sequence.
    pub fn from_clock() -> Self {
        Self::from_source(&SystemClock)
    }

    /// Create a generator seeded from any [`SeedSource`]
    ///
    /// # Example
    /// ```
    /// use twister_core::{FixedSeed, MersenneTwister};
    ///
    /// let rng = MersenneTwister::from_source(&FixedSeed(7));
    /// assert_eq!(rng, MersenneTwister::new(7));
    /// ```
    pub fn from_source<S: SeedSource + ?Sized>(source: &S) -> Self {
        Self::new(source.seed_value())
    }

    /// Reinitialize the state vector from `seed`
    ///
    /// Any previous state is discarded. The next draw performs a twist.
    ///
    /// # Example
    /// ```
    /// use twister_core::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(1);
    /// let first = rng.next_u32();
    /// rng.next_u32();
    ///
    /// rng.seed(1);
    /// assert_eq!(rng.next_u32(), first);
    /// ```
    pub fn seed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;

        debug!(seed, "seeded mt19937 state");
    }

    /// Generate next random u32 value
    ///
    /// Twists the state first when all 624 words have been consumed.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let raw = self.state[self.index];
        self.index += 1;

        temper(raw)
    }

    /// Generate random f64 in the closed range [0.0, 1.0]
    ///
    /// Divides one draw by `u32::MAX` (2^32 - 1), matching `genrand_real1`.
    /// Exactly 1.0 is returned only when the underlying draw is `u32::MAX`.
    ///
    /// # Example
    /// ```
    /// use twister_core::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability <= 1.0);
    /// ```
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / U32_MAX_F64)
    }

    /// Generate random value in range [0, max_value)
    ///
    /// Scales one draw by `max_value / 2^32` and truncates. This is not
    /// rejection sampling, so large bounds carry a slight bias; the scaling is
    /// kept as is for output compatibility. `max_value == 0` yields 0 and
    /// still consumes a draw.
    ///
    /// # Example
    /// ```
    /// use twister_core::MersenneTwister;
    ///
    /// let mut rng = MersenneTwister::new(9780);
    /// assert_eq!(rng.next_bounded_u32(5321), 609);
    /// ```
    #[inline]
    pub fn next_bounded_u32(&mut self, max_value: u32) -> u32 {
        let scale = f64::from(max_value) / U32_RANGE_F64;
        (f64::from(self.next_u32()) * scale) as u32
    }

    /// Position of the next word to be read from the state vector
    ///
    /// Equals [`N`] right after seeding; the following draw twists and
    /// leaves the cursor at 1.
    pub fn cursor(&self) -> usize {
        self.index
    }

    /// Raw (untempered) state vector
    pub(crate) fn state(&self) -> &[u32; N] {
        &self.state
    }

    /// Rebuild a generator from a validated state vector and cursor
    pub(crate) fn from_parts(state: [u32; N], index: usize) -> Self {
        Self { state, index }
    }

    /// Regenerate all N words in place
    ///
    /// For the last word the neighbour is `state[0]` and the offset word is
    /// `state[M - 1]`, both already regenerated in this pass.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            self.state[i] = self.state[(i + M) % N] ^ (y >> 1) ^ MAG01[(y & 1) as usize];
        }
        self.index = 0;

        trace!("twisted mt19937 state vector");
    }
}

impl Default for MersenneTwister {
    /// Clock-seeded generator, see [`MersenneTwister::from_clock`]
    fn default() -> Self {
        Self::from_clock()
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Output tempering, applied to a copy of the state word
#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & TEMPER_B;
    y ^= (y << 15) & TEMPER_C;
    y ^= y >> 18;
    y
}
