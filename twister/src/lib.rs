//! Twister Core - MT19937 in Rust
//!
//! Deterministic Mersenne Twister whose output is bit-for-bit identical to
//! the reference `mt19937ar.c` generator.
//!
//! # Architecture
//!
//! - **rng**: The generator (seeding, twisting, tempering) and seed sources
//! - **config**: Serde config deciding how a generator is seeded
//! - **checkpoint**: Save/restore of the full generator state
//! - **ffi**: Optional Python bindings (`pyo3` feature)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, word for word with the reference
//! 2. Every derived draw (`next_f64`, `next_bounded_u32`) consumes one word
//! 3. Not cryptographically secure; no internal synchronization

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, GeneratorSnapshot};
pub use config::{ConfigError, GeneratorConfig};
pub use rng::{FixedSeed, MersenneTwister, SeedSource, SystemClock, M, N};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn twister_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyMersenneTwister>()?;
    Ok(())
}
