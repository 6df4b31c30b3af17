//! Numeric helper functions.

mod numeric;

pub use numeric::{factorial, ln_factorial};
