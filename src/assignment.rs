//! Assignment mapping and the solver interface used by the metric engine.
//!
//! This module provides:
//! - `Assignment` - the partial injective target-to-track mapping returned
//!   with every metric result
//! - `AssignmentSolver` trait for pluggable optimal-assignment backends
//! - `JonkerVolgenant` - the bundled default solver

use nalgebra::DMatrix;

use crate::internal::scipy;

/// A partial injective mapping from target indices to track indices.
///
/// A target index is present exactly when the engine matched it to a track
/// below the cutoff; an index that is absent is unmatched. No target or
/// track index appears more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Matched (target, track) pairs, sorted by target index.
    pairs: Vec<(usize, usize)>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Build an assignment from (target, track) pairs.
    ///
    /// Pairs are stored sorted by target index. Callers must supply an
    /// injective mapping; each target and each track at most once.
    pub fn from_pairs(mut pairs: Vec<(usize, usize)>) -> Self {
        pairs.sort_unstable();
        debug_assert!(
            pairs.windows(2).all(|w| w[0].0 != w[1].0 && w[0].1 != w[1].1),
            "assignment pairs must be injective"
        );
        Self { pairs }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Append a pair. Targets must arrive in increasing order.
    pub(crate) fn push(&mut self, target: usize, track: usize) {
        debug_assert!(
            self.pairs.last().map_or(true, |last| last.0 < target),
            "targets must be pushed in increasing order"
        );
        self.pairs.push((target, track));
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pair is matched.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Track matched to the given target, if any.
    pub fn track_of(&self, target: usize) -> Option<usize> {
        self.pairs
            .binary_search_by_key(&target, |&(t, _)| t)
            .ok()
            .map(|idx| self.pairs[idx].1)
    }

    /// Target matched to the given track, if any.
    pub fn target_of(&self, track: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|&&(_, k)| k == track)
            .map(|&(t, _)| t)
    }

    /// True when the target is matched.
    pub fn contains_target(&self, target: usize) -> bool {
        self.track_of(target).is_some()
    }

    /// True when the track is matched.
    pub fn contains_track(&self, track: usize) -> bool {
        self.target_of(track).is_some()
    }

    /// Matched pairs, sorted by target index.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Iterate over matched (target, track) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    /// Target indices in `0..num_targets` with no matched track.
    pub fn unmatched_targets(&self, num_targets: usize) -> Vec<usize> {
        (0..num_targets)
            .filter(|&t| !self.contains_target(t))
            .collect()
    }

    /// Track indices in `0..num_tracks` with no matched target.
    pub fn unmatched_tracks(&self, num_tracks: usize) -> Vec<usize> {
        (0..num_tracks)
            .filter(|&k| !self.contains_track(k))
            .collect()
    }
}

impl FromIterator<(usize, usize)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (usize, usize);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (usize, usize)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter().copied()
    }
}

/// A backend for the rectangular minimum-cost assignment problem.
///
/// Implementations must return an injective matching of size
/// `min(rows, cols)` (complete on the smaller side) with globally minimal
/// total cost, as `(row, col)` pairs. Ties may be broken arbitrarily but the
/// output must be deterministic for identical input. An empty matrix
/// dimension yields an empty matching. Entries are finite; the engine caps
/// its matrices before solving.
///
/// The metric engine treats every conforming implementation as
/// interchangeable and never depends on solver internals.
pub trait AssignmentSolver {
    /// Solve for the optimal matching on a dense cost matrix.
    fn solve(&self, cost_matrix: &DMatrix<f64>) -> Vec<(usize, usize)>;
}

/// The bundled default solver.
///
/// Jonker-Volgenant shortest augmenting paths, exact and polynomial; the
/// same role scipy.optimize.linear_sum_assignment plays for the Python
/// ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct JonkerVolgenant;

impl AssignmentSolver for JonkerVolgenant {
    fn solve(&self, cost_matrix: &DMatrix<f64>) -> Vec<(usize, usize)> {
        scipy::linear_sum_assignment(cost_matrix)
    }
}
