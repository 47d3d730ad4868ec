//! Shared test support

#![allow(dead_code)]

pub mod reference;

/// Seeds used for the word-for-word u32 comparison
pub const U32_SEEDS: [u32; 10] = [
    0, 81, 543, 9008, 66578, 133429, 4366742, 77653426, 2068543256, u32::MAX,
];

/// Seeds used for the word-for-word f64 comparison
pub const F64_SEEDS: [u32; 10] = [
    0, 35, 980, 3655, 23568, 434462, 1232356, 78745674, 656542199, u32::MAX,
];

/// Draws per seed in the differential tests
pub const SAMPLE_SIZE: usize = 1_000_000;
