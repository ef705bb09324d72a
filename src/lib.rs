//! # GOSPA - Generalized Optimal Sub-Pattern Assignment
//!
//! A metric between two finite sets of objects, built for scoring
//! multi-object tracking and estimation output against ground truth. One
//! number combines localization error over optimally matched pairs with
//! penalties for missed targets and false tracks, following Rahmathullah,
//! Garcia-Fernandez and Svensson, "Generalized optimal sub-pattern
//! assignment metric" (2017).
//!
//! ## Features
//!
//! - Exact optimal assignment (Jonker-Volgenant) on the cutoff-capped cost
//!   matrix
//! - Full decomposition: localization / missed targets / false tracks
//! - Pluggable pairwise cost functions (Euclidean default, plain closures,
//!   arbitrary item types)
//! - Swappable assignment solver backend
//!
//! ## Example
//!
//! ```rust
//! use gospa_rs::{calculate_gospa, GospaConfig};
//! use nalgebra::dvector;
//!
//! let targets = vec![dvector![2.0, 2.0], dvector![4.0, 5.0], dvector![7.0, 4.0]];
//! let tracks = vec![dvector![2.0, 2.0], dvector![4.0, 5.0]];
//!
//! let result = calculate_gospa(&targets, &tracks, GospaConfig::new(3.0, 1.0)).unwrap();
//! assert_eq!(result.assignment.len(), 2);
//! assert!((result.total - 1.5).abs() < 1e-12);
//! ```

// Internal modules (ports of scipy)
pub(crate) mod internal;

// Public modules
pub mod assignment;
pub mod distances;
pub mod metric;

// Optional modules
#[cfg(feature = "python")]
pub mod python;

// Re-exports for convenience
pub use assignment::{Assignment, AssignmentSolver, JonkerVolgenant};
pub use distances::{cost_function_by_name, try_cost_function_by_name, BuiltinCost, CostFunction};
pub use metric::{calculate_gospa, Gospa, GospaConfig, GospaResult, DEFAULT_ALPHA};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur in the gospa library
    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Cost function error: {0}")]
        CostFunction(String),

        #[error("Unknown cost function: {0}")]
        UnknownCostFunction(String),
    }

    /// Result type for gospa operations
    pub type Result<T> = std::result::Result<T, Error>;
}
