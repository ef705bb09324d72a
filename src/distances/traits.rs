//! Cost function trait definition.

use crate::Result;

/// Trait for pairwise cost functions used by the metric engine.
///
/// A cost function scores one target against one track; lower cost means a
/// better match. Costs must be non-negative and deterministic: repeated
/// calls with the same pair return the same value. `f64::INFINITY` is legal
/// and means "never match this pair". Nothing requires symmetry across the
/// two arguments, although asymmetric costs are discouraged.
///
/// Every infallible closure or fn of the right shape is a cost function
/// through the blanket implementation; fallible ones implement the trait
/// directly and report failures as a cost-function error.
pub trait CostFunction<T, U> {
    /// Cost of matching one target to one track.
    ///
    /// # Arguments
    /// * `target` - Element of the ground-truth set
    /// * `track` - Element of the estimated set
    ///
    /// # Returns
    /// The non-negative matching cost, or an error when the pair cannot
    /// be scored.
    fn cost(&self, target: &T, track: &U) -> Result<f64>;
}

impl<T, U, F> CostFunction<T, U> for F
where
    F: Fn(&T, &U) -> f64,
{
    fn cost(&self, target: &T, track: &U) -> Result<f64> {
        Ok(self(target, track))
    }
}
