//! Utility helpers for tests.
pub mod vectors;

pub use vectors::{assert_vec_close, v3, SAMPLE_SCALARS, SAMPLE_VECTORS};
