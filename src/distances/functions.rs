//! Built-in cost functions over numeric vectors.
//!
//! All four operate componentwise over a pair of points and assume equal
//! dimensions; extra components on the longer vector are ignored. The
//! dimension-checked surface is `BuiltinCost`.

use nalgebra::DVector;

/// Euclidean (L2) distance between two points.
///
/// The default cost of the metric engine.
pub fn euclidean(target: &DVector<f64>, track: &DVector<f64>) -> f64 {
    squared_euclidean(target, track).sqrt()
}

/// Squared Euclidean distance between two points.
pub fn squared_euclidean(target: &DVector<f64>, track: &DVector<f64>) -> f64 {
    target
        .iter()
        .zip(track.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum()
}

/// Manhattan (L1) distance between two points.
pub fn manhattan(target: &DVector<f64>, track: &DVector<f64>) -> f64 {
    target
        .iter()
        .zip(track.iter())
        .map(|(a, b)| (a - b).abs())
        .sum()
}

/// Chebyshev (L-infinity) distance between two points.
pub fn chebyshev(target: &DVector<f64>, track: &DVector<f64>) -> f64 {
    target
        .iter()
        .zip(track.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_euclidean_known_values() {
        let a = dvector![0.0, 0.0];
        let b = dvector![3.0, 4.0];
        assert!((euclidean(&a, &b) - 5.0).abs() < 1e-12);
        assert!((euclidean(&a, &a) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_squared_euclidean_known_values() {
        let a = dvector![1.0, 2.0, 3.0];
        let b = dvector![2.0, 4.0, 6.0];
        assert!((squared_euclidean(&a, &b) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_manhattan_known_values() {
        let a = dvector![1.0, -1.0];
        let b = dvector![4.0, 1.0];
        assert!((manhattan(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_chebyshev_known_values() {
        let a = dvector![1.0, -1.0, 0.0];
        let b = dvector![4.0, 1.0, 0.5];
        assert!((chebyshev(&a, &b) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_costs_are_symmetric() {
        let a = dvector![2.0, 2.0];
        let b = dvector![4.0, 5.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
        assert_eq!(manhattan(&a, &b), manhattan(&b, &a));
        assert_eq!(chebyshev(&a, &b), chebyshev(&b, &a));
    }
}
