//! SciPy functions port.
//!
//! Covers the role of scipy.optimize.linear_sum_assignment.

mod optimize;

pub use optimize::*;
