//! 2-opt edge-exchange improvement.
//!
//! # Algorithm
//!
//! For positions `i < k` strictly inside the route, removing edges
//! `(route[i-1], route[i])` and `(route[k], route[k+1])` and reversing the
//! segment `route[i..=k]` reconnects the tour with edges
//! `(route[i-1], route[k])` and `(route[i], route[k+1])`. The cost change is
//!
//! ```text
//! delta = (cost[a][c] + cost[b][d]) - (cost[a][b] + cost[c][d])
//!   where a = route[i-1], b = route[i], c = route[k], d = route[k+1]
//! ```
//!
//! A move is accepted when `delta < -1e-6`; the margin keeps near-zero
//! floating-point deltas from churning the route forever. Passes repeat
//! until one applies no move. Because `i-1 >= 0` and `k+1 <= n-1` are
//! required, the first and last stops never move, which is what anchors a
//! depot placed at position 0.
//!
//! # Complexity
//!
//! O(n²) per pass; each accepted move strictly decreases total cost, so
//! convergence is guaranteed over the finite set of tours.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::SolveError;
use crate::evaluation::validate_route;

/// Accepted-move margin; deltas above `-EPSILON` are treated as no gain.
const EPSILON: f64 = 1e-6;

/// Move acceptance strategy for a 2-opt pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Apply every improving move as soon as it is found, continuing the
    /// scan over the mutated route. The default.
    #[default]
    FirstImprovement,
    /// Scan the whole pass, then apply only the single best move.
    BestImprovement,
}

/// Options for [`two_opt_improve_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoOptOptions {
    /// Move acceptance strategy.
    pub strategy: Strategy,
    /// Upper bound on full passes; `None` runs to convergence. Callers with
    /// a deadline can bound the work and accept the partially refined route.
    pub max_passes: Option<usize>,
}

/// Refines a route in place with 2-opt until no improving move remains.
///
/// The route must visit every stop of the matrix exactly once. Routes
/// shorter than four stops admit no move and are returned untouched.
///
/// # Errors
///
/// [`SolveError::LengthMismatch`] when the route length differs from the
/// matrix dimension, [`SolveError::NotAPermutation`] when it repeats or
/// skips a stop. The route is not modified on error.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::CostMatrix;
/// use tour_opt::local_search::two_opt_improve;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
///
/// let mut route = vec![0, 1, 3, 2];
/// two_opt_improve(&mut route, &m).unwrap();
/// // Already 2-optimal for this matrix: the only candidate move would
/// // lengthen the tour.
/// assert_eq!(route, vec![0, 1, 3, 2]);
/// ```
pub fn two_opt_improve(route: &mut Vec<usize>, matrix: &CostMatrix) -> Result<(), SolveError> {
    two_opt_improve_with(route, matrix, &TwoOptOptions::default())
}

/// Refines a route in place with 2-opt under the given options.
///
/// See [`two_opt_improve`] for the move set and error conditions.
pub fn two_opt_improve_with(
    route: &mut Vec<usize>,
    matrix: &CostMatrix,
    options: &TwoOptOptions,
) -> Result<(), SolveError> {
    validate_route(route, matrix.size())?;

    if route.len() < 4 {
        return Ok(());
    }

    let mut passes = 0usize;
    loop {
        let improved = match options.strategy {
            Strategy::FirstImprovement => first_improvement_pass(route, matrix),
            Strategy::BestImprovement => best_improvement_pass(route, matrix),
        };
        passes += 1;
        if !improved {
            break;
        }
        if options.max_passes.is_some_and(|limit| passes >= limit) {
            debug!("2-opt stopped at pass budget {passes}");
            return Ok(());
        }
    }
    debug!("2-opt converged after {passes} passes");
    Ok(())
}

/// One first-improvement pass: every improving move is applied immediately
/// and the scan continues over the mutated route. Returns `true` if any
/// move was applied.
fn first_improvement_pass(route: &mut [usize], matrix: &CostMatrix) -> bool {
    let n = route.len();
    let mut improved = false;

    for i in 1..n - 2 {
        for k in i + 1..n - 1 {
            let delta = exchange_delta(route, matrix, i, k);
            if delta < -EPSILON {
                route[i..=k].reverse();
                trace!("2-opt reversal [{i}..={k}], delta {delta:.3}");
                improved = true;
            }
        }
    }

    improved
}

/// One best-improvement pass: scans all moves, applies only the single most
/// negative one. Returns `true` if a move was applied.
fn best_improvement_pass(route: &mut [usize], matrix: &CostMatrix) -> bool {
    let n = route.len();
    let mut best: Option<(usize, usize, f64)> = None;

    for i in 1..n - 2 {
        for k in i + 1..n - 1 {
            let delta = exchange_delta(route, matrix, i, k);
            if delta < -EPSILON && best.map_or(true, |(_, _, d)| delta < d) {
                best = Some((i, k, delta));
            }
        }
    }

    match best {
        Some((i, k, delta)) => {
            route[i..=k].reverse();
            trace!("2-opt best reversal [{i}..={k}], delta {delta:.3}");
            true
        }
        None => false,
    }
}

/// Cost change of reversing `route[i..=k]`.
fn exchange_delta(route: &[usize], matrix: &CostMatrix, i: usize, k: usize) -> f64 {
    let a = route[i - 1];
    let b = route[i];
    let c = route[k];
    let d = route[k + 1];
    (matrix.get(a, c) + matrix.get(b, d)) - (matrix.get(a, b) + matrix.get(c, d))
}
