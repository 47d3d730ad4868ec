//! PyO3 wrapper for MersenneTwister

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::checkpoint::GeneratorSnapshot;
use crate::config::GeneratorConfig;
use crate::rng::MersenneTwister as RustMersenneTwister;

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from twister_core import MersenneTwister
///
/// rng = MersenneTwister(5489)
/// assert rng.next_u32() == 3499211612
///
/// saved = rng.snapshot_json()
/// resumed = MersenneTwister.from_snapshot_json(saved)
/// assert rng.next_u32() == resumed.next_u32()
/// ```
#[pyclass(name = "MersenneTwister")]
pub struct PyMersenneTwister {
    inner: RustMersenneTwister,
}

#[pymethods]
impl PyMersenneTwister {
    /// Create a generator; omitting `seed` seeds from the system clock
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u32>) -> Self {
        PyMersenneTwister {
            inner: GeneratorConfig { seed }.build(),
        }
    }

    /// Reinitialize the sequence from `seed`
    fn seed(&mut self, seed: u32) {
        self.inner.seed(seed);
    }

    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    fn next_bounded_u32(&mut self, max_value: u32) -> u32 {
        self.inner.next_bounded_u32(max_value)
    }

    /// Serialize the full generator state to JSON
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner
            .snapshot()
            .to_json()
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    /// Rebuild a generator from `snapshot_json()` output
    ///
    /// Raises ValueError if the JSON is malformed or fails validation.
    #[staticmethod]
    fn from_snapshot_json(json: &str) -> PyResult<Self> {
        let snapshot = GeneratorSnapshot::from_json(json)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        let inner = RustMersenneTwister::restore(&snapshot).map_err(|e| {
            PyErr::new::<PyValueError, _>(format!("Failed to restore generator: {}", e))
        })?;

        Ok(PyMersenneTwister { inner })
    }

    fn __repr__(&self) -> String {
        format!("MersenneTwister(cursor={})", self.inner.cursor())
    }
}
