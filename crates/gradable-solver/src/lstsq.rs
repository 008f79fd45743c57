//! Least-squares solver
//!
//! The anchor is a boundary condition, so it is eliminated before the solve:
//! its column moves to the right-hand side (scaled by the boundary value) and
//! the remaining `(n-1) × (n-1)` system is solved by SVD for the minimum-norm
//! least-squares solution. For a consistent system this equals the plain
//! `argmin ‖A·x − b‖` solution; for an inconsistent one it keeps the anchor
//! exactly at its boundary value instead of letting the residual pull on it.
//!
//! Rank-deficient systems (words with no equations, disconnected components
//! in "all" mode) are fine: singular values below `ε · n · σ_max` are treated
//! as zero, which matches the usual dense `lstsq` default.

use crate::{LinearSystem, SolverError};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Full-precision solution of a [`LinearSystem`]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Intensity per variable, in the system's column order
    pub values: DVector<f64>,

    /// `‖A·x − b‖₂` over the full system, anchor row included
    pub residual_norm: f64,

    /// Numerical rank of the full system
    pub rank: usize,
}

impl Solution {
    /// Value at a column index
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Solve `A·x ≈ b` with `x[anchor]` fixed to `b[anchor]`
///
/// # Errors
///
/// - [`SolverError::NoEquations`] for an empty system
/// - [`SolverError::Computation`] when the SVD fails or yields non-finite values
pub fn solve(system: &LinearSystem) -> Result<Solution, SolverError> {
    if system.is_empty() {
        return Err(SolverError::NoEquations);
    }

    let n = system.len();
    let anchor = system.anchor_index;
    let boundary = system.boundary_value();

    let (free, rank) = if n == 1 {
        (DVector::<f64>::zeros(0), 0)
    } else {
        solve_reduced(system, anchor, boundary)?
    };

    let values = free.insert_row(anchor, boundary);

    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(SolverError::Computation(format!(
            "non-finite intensity for '{}'",
            system.variables[i]
        )));
    }

    let residual_norm = (&system.matrix * &values - &system.rhs).norm();
    debug!("Solved {} variables (rank {}), residual {:.6}", n, rank + 1, residual_norm);

    Ok(Solution {
        values,
        residual_norm,
        rank: rank + 1,
    })
}

/// Least squares over the non-anchor rows and columns
fn solve_reduced(
    system: &LinearSystem,
    anchor: usize,
    boundary: f64,
) -> Result<(DVector<f64>, usize), SolverError> {
    let reduced: DMatrix<f64> = system
        .matrix
        .clone()
        .remove_row(anchor)
        .remove_column(anchor);

    let anchor_column: DVector<f64> = system.matrix.column(anchor).clone_owned().remove_row(anchor);
    let rhs = system.rhs.clone().remove_row(anchor) - anchor_column * boundary;

    let svd = reduced.svd(true, true);
    let dim = svd.singular_values.len().max(1) as f64;
    let eps = f64::EPSILON * dim * svd.singular_values.max();
    let rank = svd.rank(eps);

    let free = svd
        .solve(&rhs, eps)
        .map_err(|e| SolverError::Computation(e.to_string()))?;

    Ok((free, rank))
}
