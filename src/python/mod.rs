//! Python bindings for gospa-rs using PyO3.
//!
//! Exposes `calculate_gospa` with the signature Python tracking codebases
//! expect: two sequences of items, the three parameters, an optional cost
//! callable, and a five-tuple return with the assignment as a dict from
//! target index to track index.

use std::collections::HashMap;

use nalgebra::DVector;
use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::distances::{BuiltinCost, CostFunction};
use crate::{Error, Gospa, GospaConfig};

/// Cost function backed by an arbitrary Python callable.
///
/// The callable receives one target and one track exactly as the caller
/// passed them and must return a float. Anything it raises aborts the
/// computation.
struct PyCostFunction<'py> {
    py: Python<'py>,
    callable: Py<PyAny>,
}

impl CostFunction<Py<PyAny>, Py<PyAny>> for PyCostFunction<'_> {
    fn cost(&self, target: &Py<PyAny>, track: &Py<PyAny>) -> crate::Result<f64> {
        let py = self.py;
        self.callable
            .call1(py, (target.clone_ref(py), track.clone_ref(py)))
            .and_then(|value| value.extract::<f64>(py))
            .map_err(|err| Error::CostFunction(err.to_string()))
    }
}

/// Extract a list of 1-D numpy arrays (or plain float sequences) as points.
fn extract_points(py: Python<'_>, items: &[Py<PyAny>]) -> PyResult<Vec<DVector<f64>>> {
    items
        .iter()
        .map(|item| {
            let bound = item.bind(py);
            if let Ok(array) = bound.extract::<PyReadonlyArray1<'_, f64>>() {
                Ok(DVector::from_column_slice(array.as_slice()?))
            } else {
                Ok(DVector::from_vec(bound.extract::<Vec<f64>>()?))
            }
        })
        .collect()
}

fn to_py_err(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Compute the GOSPA metric between two sets.
///
/// Without a cost callable, items must be 1-D numpy arrays (or float
/// sequences) and are scored with the Euclidean distance. With one, items
/// may be arbitrary Python objects and the callable scores each pair.
///
/// Returns `(gospa, assignment, localization, missed, false)`.
#[pyfunction]
#[pyo3(signature = (targets, tracks, c, p, alpha = 2.0, assignment_cost_function = None))]
fn calculate_gospa(
    py: Python<'_>,
    targets: Vec<Py<PyAny>>,
    tracks: Vec<Py<PyAny>>,
    c: f64,
    p: f64,
    alpha: f64,
    assignment_cost_function: Option<Py<PyAny>>,
) -> PyResult<(f64, HashMap<usize, usize>, f64, f64, f64)> {
    let config = GospaConfig::new(c, p).with_alpha(alpha);

    let result = match assignment_cost_function {
        Some(callable) => {
            let cost = PyCostFunction { py, callable };
            Gospa::new(config).and_then(|engine| engine.compute(&targets, &tracks, &cost))
        }
        None => {
            let targets = extract_points(py, &targets)?;
            let tracks = extract_points(py, &tracks)?;
            Gospa::new(config)
                .and_then(|engine| engine.compute(&targets, &tracks, &BuiltinCost::Euclidean))
        }
    }
    .map_err(to_py_err)?;

    let assignment: HashMap<usize, usize> = result.assignment.iter().collect();
    Ok((
        result.total,
        assignment,
        result.localization,
        result.missed_targets,
        result.false_tracks,
    ))
}

/// Python module for gospa-rs.
///
/// The module is named `_gospa_rs` with underscore prefix for mixed
/// Python/Rust projects.
#[pymodule]
fn _gospa_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_gospa, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
