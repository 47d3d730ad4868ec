//! Reference oracle
//!
//! Straight transcription of `init_genrand`, `genrand_int32` and
//! `genrand_real1` from Matsumoto & Nishimura's `mt19937ar.c` (2002/1/26),
//! with the C globals `mt[]` / `mti` moved into a struct. It keeps the C
//! loop structure (three-part twist, `mti == N + 1` means "never seeded") so
//! it does not share code paths with the crate under test.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908b0df;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

pub struct ReferenceMt {
    mt: [u32; N],
    mti: usize,
}

impl ReferenceMt {
    /// Unseeded, like the C globals at program start
    pub fn new() -> Self {
        Self {
            mt: [0; N],
            mti: N + 1,
        }
    }

    pub fn init_genrand(&mut self, s: u32) {
        self.mt[0] = s;
        self.mti = 1;
        while self.mti < N {
            let prev = self.mt[self.mti - 1];
            self.mt[self.mti] = 1812433253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(self.mti as u32);
            self.mti += 1;
        }
    }

    pub fn genrand_int32(&mut self) -> u32 {
        let mag01: [u32; 2] = [0x0, MATRIX_A];
        let mut y: u32;

        if self.mti >= N {
            // generate N words at one time
            if self.mti == N + 1 {
                self.init_genrand(5489);
            }

            let mut kk = 0;
            while kk < N - M {
                y = (self.mt[kk] & UPPER_MASK) | (self.mt[kk + 1] & LOWER_MASK);
                self.mt[kk] = self.mt[kk + M] ^ (y >> 1) ^ mag01[(y & 0x1) as usize];
                kk += 1;
            }
            while kk < N - 1 {
                y = (self.mt[kk] & UPPER_MASK) | (self.mt[kk + 1] & LOWER_MASK);
                self.mt[kk] = self.mt[kk + M - N] ^ (y >> 1) ^ mag01[(y & 0x1) as usize];
                kk += 1;
            }
            y = (self.mt[N - 1] & UPPER_MASK) | (self.mt[0] & LOWER_MASK);
            self.mt[N - 1] = self.mt[M - 1] ^ (y >> 1) ^ mag01[(y & 0x1) as usize];

            self.mti = 0;
        }

        y = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c5680;
        y ^= (y << 15) & 0xefc60000;
        y ^= y >> 18;

        y
    }

    /// [0,1]-real-interval
    pub fn genrand_real1(&mut self) -> f64 {
        self.genrand_int32() as f64 * (1.0 / 4294967295.0)
    }
}
