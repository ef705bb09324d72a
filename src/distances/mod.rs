//! Cost functions for scoring target/track pairs.
//!
//! This module provides:
//! - `CostFunction` trait implemented by every pairwise scorer (including
//!   plain closures and fn pointers through a blanket impl)
//! - Built-in point costs (euclidean, squared euclidean, manhattan,
//!   chebyshev)
//! - `BuiltinCost` - dimension-checked static dispatch over the built-ins
//! - Lookup by scipy-style metric name

mod traits;
mod functions;

pub use traits::CostFunction;
pub use functions::*;

use nalgebra::DVector;

use crate::{Error, Result};

/// Built-in cost functions over `DVector<f64>` points.
///
/// Unlike the free functions, the trait impl checks dimensions and reports a
/// mismatch as a cost-function error instead of scoring garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCost {
    /// L2 distance, the engine default.
    Euclidean,
    /// Squared L2 distance.
    SquaredEuclidean,
    /// L1 distance.
    Manhattan,
    /// L-infinity distance.
    Chebyshev,
}

impl CostFunction<DVector<f64>, DVector<f64>> for BuiltinCost {
    fn cost(&self, target: &DVector<f64>, track: &DVector<f64>) -> Result<f64> {
        if target.len() != track.len() {
            return Err(Error::CostFunction(format!(
                "Dimension mismatch: target has {} components, track has {}",
                target.len(),
                track.len()
            )));
        }
        Ok(match self {
            BuiltinCost::Euclidean => euclidean(target, track),
            BuiltinCost::SquaredEuclidean => squared_euclidean(target, track),
            BuiltinCost::Manhattan => manhattan(target, track),
            BuiltinCost::Chebyshev => chebyshev(target, track),
        })
    }
}

/// Get a built-in cost function by name.
///
/// Supported names:
/// - "euclidean" - L2 distance (the default cost)
/// - "sqeuclidean" - squared L2 distance
/// - "manhattan", "cityblock" - L1 distance
/// - "chebyshev" - L-infinity distance
///
/// Panics on unknown names; see `try_cost_function_by_name` for the
/// fallible variant.
pub fn cost_function_by_name(name: &str) -> BuiltinCost {
    match name {
        "euclidean" => BuiltinCost::Euclidean,
        "sqeuclidean" => BuiltinCost::SquaredEuclidean,
        "manhattan" | "cityblock" => BuiltinCost::Manhattan,
        "chebyshev" => BuiltinCost::Chebyshev,
        _ => panic!("Unknown cost function: {}", name),
    }
}

/// Get a built-in cost function by name, returning a Result instead of panicking.
pub fn try_cost_function_by_name(name: &str) -> Result<BuiltinCost> {
    match name {
        "euclidean" => Ok(BuiltinCost::Euclidean),
        "sqeuclidean" => Ok(BuiltinCost::SquaredEuclidean),
        "manhattan" | "cityblock" => Ok(BuiltinCost::Manhattan),
        "chebyshev" => Ok(BuiltinCost::Chebyshev),
        _ => Err(Error::UnknownCostFunction(name.to_string())),
    }
}
