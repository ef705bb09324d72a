//! Minimum-cost assignment solve.
//!
//! Fills the role of scipy.optimize.linear_sum_assignment for the metric
//! engine: an exact solver for the rectangular linear sum assignment
//! problem, implemented as Jonker-Volgenant shortest augmenting paths with
//! row and column potentials.

use nalgebra::DMatrix;

/// Solve the rectangular linear sum assignment problem.
///
/// Finds an injective matching between rows and columns of size
/// `min(nrows, ncols)` (complete on the smaller side) that minimizes the sum
/// of the matched entries. The result is globally optimal, not heuristic;
/// ties are broken by scan order, so identical inputs always produce
/// identical output.
///
/// All entries must be finite. `NaN` or infinite costs leave the result
/// unspecified; callers cap their matrices before solving.
///
/// # Arguments
/// * `cost_matrix` - Dense cost matrix; entry `(i, j)` is the cost of
///   matching row `i` to column `j`
///
/// # Returns
/// Matched `(row, col)` pairs sorted by row index. Empty when either
/// dimension is zero.
pub fn linear_sum_assignment(cost_matrix: &DMatrix<f64>) -> Vec<(usize, usize)> {
    let num_rows = cost_matrix.nrows();
    let num_cols = cost_matrix.ncols();
    if num_rows == 0 || num_cols == 0 {
        return Vec::new();
    }

    // The augmenting side must be the smaller one; transpose when needed.
    let mut pairs = if num_rows <= num_cols {
        augment_rows(num_rows, num_cols, |i, j| cost_matrix[(i, j)])
    } else {
        let mut swapped = augment_rows(num_cols, num_rows, |i, j| cost_matrix[(j, i)]);
        for pair in &mut swapped {
            *pair = (pair.1, pair.0);
        }
        swapped
    };

    pairs.sort_unstable();
    pairs
}

/// Shortest augmenting path assignment for `n` rows and `m >= n` columns.
///
/// One augmentation per row, keeping dual feasibility through the row
/// potentials `u` and column potentials `v`. Indices are shifted by one so
/// that slot 0 serves as the sentinel for "free" in the matching arrays.
fn augment_rows<F>(n: usize, m: usize, cost: F) -> Vec<(usize, usize)>
where
    F: Fn(usize, usize) -> f64,
{
    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; m + 1];
    // assigned_row[j] = row matched to column j, 0 when free
    let mut assigned_row = vec![0_usize; m + 1];
    // prev_col[j] = previous column on the alternating path into j
    let mut prev_col = vec![0_usize; m + 1];

    for row in 1..=n {
        assigned_row[0] = row;
        let mut j0 = 0_usize;
        let mut min_to_col = vec![f64::INFINITY; m + 1];
        let mut visited = vec![false; m + 1];

        // Grow the alternating tree until it reaches a free column.
        loop {
            visited[j0] = true;
            let i0 = assigned_row[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0_usize;

            for j in 1..=m {
                if visited[j] {
                    continue;
                }
                let reduced = cost(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < min_to_col[j] {
                    min_to_col[j] = reduced;
                    prev_col[j] = j0;
                }
                if min_to_col[j] < delta {
                    delta = min_to_col[j];
                    j1 = j;
                }
            }

            for j in 0..=m {
                if visited[j] {
                    u[assigned_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_to_col[j] -= delta;
                }
            }

            j0 = j1;
            if assigned_row[j0] == 0 {
                break;
            }
        }

        // Flip the matched edges along the path back to the sentinel.
        while j0 != 0 {
            let j1 = prev_col[j0];
            assigned_row[j0] = assigned_row[j1];
            j0 = j1;
        }
    }

    (1..=m)
        .filter(|&j| assigned_row[j] != 0)
        .map(|j| (assigned_row[j] - 1, j - 1))
        .collect()
}
