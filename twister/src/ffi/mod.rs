//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the Rust generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the drawing operations plus checkpointing
//! 2. **Simple types**: Integers, floats and JSON strings at the boundary
//! 3. **Safe errors**: Checkpoint errors become Python `ValueError`s
//! 4. **No references**: Python owns its generator; no shared Rust state

pub mod generator;
