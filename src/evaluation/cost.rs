//! Cost accumulation and route validation.

use crate::distance::CostMatrix;
use crate::error::SolveError;

/// Total travel cost of a visiting order: the sum of `cost[from][to]` over
/// consecutive pairs.
///
/// Works on any index sequence, including a depot-closed one that revisits
/// index 0 at the end — the closing edge is simply one more consecutive
/// pair. Empty and single-stop orders cost zero.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::CostMatrix;
/// use tour_opt::evaluation::tour_cost;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
///
/// assert_eq!(tour_cost(&[0, 1, 3, 2], &m), 65.0);
/// assert_eq!(tour_cost(&[0, 1, 3, 2, 0], &m), 80.0);
/// ```
pub fn tour_cost(order: &[usize], matrix: &CostMatrix) -> f64 {
    order
        .windows(2)
        .map(|pair| matrix.get(pair[0], pair[1]))
        .sum()
}

/// Checks that `route` is a permutation of `[0, size)`.
///
/// # Errors
///
/// [`SolveError::LengthMismatch`] when the length differs from `size`,
/// [`SolveError::NotAPermutation`] at the first repeated or out-of-range
/// index.
pub fn validate_route(route: &[usize], size: usize) -> Result<(), SolveError> {
    if route.len() != size {
        return Err(SolveError::LengthMismatch {
            route_len: route.len(),
            size,
        });
    }

    let mut seen = vec![false; size];
    for &index in route {
        if index >= size || seen[index] {
            return Err(SolveError::NotAPermutation { index });
        }
        seen[index] = true;
    }
    Ok(())
}
