//! GOSPA metric engine.
//!
//! Computes the Generalized Optimal Sub-Pattern Assignment metric between a
//! set of ground-truth targets and a set of estimated tracks: an optimal
//! assignment on a cutoff-capped cost matrix, decomposed into localization,
//! missed-target, and false-track components.

use nalgebra::{DMatrix, DVector};

use crate::assignment::{Assignment, AssignmentSolver, JonkerVolgenant};
use crate::distances::{BuiltinCost, CostFunction};
use crate::{Error, Result};

/// Default alpha. The value 2 makes the per-item penalty `c^p / 2`, the
/// choice recommended for tracking evaluation because unmatched items then
/// cost exactly half a maximally-bad match each.
pub const DEFAULT_ALPHA: f64 = 2.0;

/// Configuration for the GOSPA metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GospaConfig {
    /// Cutoff distance. Bounds the penalty of a single pair; must be
    /// positive.
    pub c: f64,

    /// Order of the metric. Must be at least 1; higher orders punish
    /// outlier localization errors harder.
    pub p: f64,

    /// Cardinality penalty factor in `(0, 2]`. Unmatched items cost
    /// `c^p / alpha` each.
    pub alpha: f64,
}

impl GospaConfig {
    /// Create a configuration with the default alpha.
    ///
    /// # Arguments
    /// * `c` - Cutoff distance
    /// * `p` - Metric order
    pub fn new(c: f64, p: f64) -> Self {
        Self {
            c,
            p,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Replace alpha, keeping c and p.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check parameter bounds.
    ///
    /// The comparisons are phrased so that NaN parameters fail the check
    /// rather than slipping through.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 2.0) {
            return Err(Error::InvalidParameter(format!(
                "alpha must be in (0, 2], got {}",
                self.alpha
            )));
        }
        if !(self.c > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "cutoff c must be positive, got {}",
                self.c
            )));
        }
        if !(self.p >= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "order p must be at least 1, got {}",
                self.p
            )));
        }
        Ok(())
    }

    /// Penalty charged per missed target and per false track.
    pub(crate) fn miss_cost(&self) -> f64 {
        self.c.powf(self.p) / self.alpha
    }
}

/// Result of one GOSPA computation.
///
/// The components satisfy
/// `total^p == localization + missed_targets + false_tracks`.
#[derive(Debug, Clone, PartialEq)]
pub struct GospaResult {
    /// The GOSPA metric.
    pub total: f64,

    /// Matched (target, track) pairs below the cutoff.
    pub assignment: Assignment,

    /// Sum of matched pair costs (already raised to the power p).
    pub localization: f64,

    /// Penalty for targets left without a track.
    pub missed_targets: f64,

    /// Penalty for tracks not explained by any target.
    pub false_tracks: f64,
}

/// GOSPA metric engine.
///
/// Validates its parameters, builds the capped cost matrix over two item
/// collections with a pluggable pairwise cost function, runs an exact
/// assignment solve, and decomposes the optimum into the five-part result.
/// The engine holds no mutable state; one instance may serve concurrent
/// callers.
#[derive(Debug, Clone, Copy)]
pub struct Gospa {
    /// Metric configuration.
    pub config: GospaConfig,
}

impl Gospa {
    /// Create an engine with the given configuration.
    ///
    /// Fails with `InvalidParameter` when the configuration is out of
    /// range. The configuration is public, so `compute` re-validates on
    /// every call.
    pub fn new(config: GospaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compute the metric with the bundled Jonker-Volgenant solver.
    ///
    /// # Arguments
    /// * `targets` - Ground-truth items
    /// * `tracks` - Estimated items
    /// * `cost_function` - Pairwise scorer; see `CostFunction`
    ///
    /// # Returns
    /// The five-part GOSPA result, or `InvalidParameter` /
    /// `CostFunction` on failure.
    pub fn compute<T, U, C>(
        &self,
        targets: &[T],
        tracks: &[U],
        cost_function: &C,
    ) -> Result<GospaResult>
    where
        C: CostFunction<T, U>,
    {
        self.compute_with_solver(targets, tracks, cost_function, &JonkerVolgenant)
    }

    /// Compute the metric with a caller-supplied assignment solver.
    ///
    /// Any solver satisfying the `AssignmentSolver` contract produces the
    /// same total; the engine never depends on solver internals such as
    /// tie-break order.
    pub fn compute_with_solver<T, U, C, S>(
        &self,
        targets: &[T],
        tracks: &[U],
        cost_function: &C,
        solver: &S,
    ) -> Result<GospaResult>
    where
        C: CostFunction<T, U>,
        S: AssignmentSolver + ?Sized,
    {
        self.config.validate()?;

        let num_targets = targets.len();
        let num_tracks = tracks.len();
        let order = self.config.p;
        let miss_cost = self.config.miss_cost();

        if num_targets == 0 {
            // Every track is false. Also covers the empty-vs-empty case.
            let false_tracks = miss_cost * num_tracks as f64;
            return Ok(GospaResult {
                total: false_tracks.powf(1.0 / order),
                assignment: Assignment::new(),
                localization: 0.0,
                missed_targets: 0.0,
                false_tracks,
            });
        }
        if num_tracks == 0 {
            // Every target is missed.
            let missed_targets = miss_cost * num_targets as f64;
            return Ok(GospaResult {
                total: missed_targets.powf(1.0 / order),
                assignment: Assignment::new(),
                localization: 0.0,
                missed_targets,
                false_tracks: 0.0,
            });
        }

        // A pair at or beyond this bound costs the same as leaving both
        // items unmatched, so the optimizer never prefers a remote match.
        let cutoff = self.config.alpha * miss_cost;

        let mut cost_matrix = DMatrix::zeros(num_targets, num_tracks);
        for (i, target) in targets.iter().enumerate() {
            for (j, track) in tracks.iter().enumerate() {
                let raw = cost_function.cost(target, track)?;
                if raw.is_nan() {
                    return Err(Error::CostFunction(format!(
                        "cost function returned NaN for target {} and track {}",
                        i, j
                    )));
                }
                if raw < 0.0 {
                    return Err(Error::CostFunction(format!(
                        "cost function returned negative cost {} for target {} and track {}",
                        raw, i, j
                    )));
                }
                cost_matrix[(i, j)] = raw.powf(order).min(cutoff);
            }
        }

        let mut matching = solver.solve(&cost_matrix);
        matching.sort_unstable();

        // Keep only pairs strictly below the cutoff; a pair exactly at the
        // cutoff occupies a solver slot but counts as unmatched.
        let mut localization = 0.0;
        let mut assignment = Assignment::with_capacity(matching.len());
        for (i, j) in matching {
            let entry = cost_matrix[(i, j)];
            if entry < cutoff {
                localization += entry;
                assignment.push(i, j);
            }
        }

        let num_assigned = assignment.len();
        let missed_targets = miss_cost * (num_targets - num_assigned) as f64;
        let false_tracks = miss_cost * (num_tracks - num_assigned) as f64;
        let total = (localization + missed_targets + false_tracks).powf(1.0 / order);

        Ok(GospaResult {
            total,
            assignment,
            localization,
            missed_targets,
            false_tracks,
        })
    }
}

/// Compute the GOSPA metric between two point sets.
///
/// Convenience wrapper running the engine with the default Euclidean cost
/// and the bundled solver.
///
/// # Arguments
/// * `targets` - Ground-truth points
/// * `tracks` - Estimated points; same dimension as the targets
/// * `config` - Metric parameters
pub fn calculate_gospa(
    targets: &[DVector<f64>],
    tracks: &[DVector<f64>],
    config: GospaConfig,
) -> Result<GospaResult> {
    Gospa::new(config)?.compute(targets, tracks, &BuiltinCost::Euclidean)
}
