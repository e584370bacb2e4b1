//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a chosen stop, always travel to the
//! cheapest unvisited stop next.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops. No backtracking; deterministic given the
//! matrix and start index.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal, which a local search pass (see
//! [`crate::local_search`]) narrows considerably.

use crate::distance::CostMatrix;
use crate::error::SolveError;

/// Builds an initial tour with the nearest-neighbor heuristic.
///
/// Starting from `start`, repeatedly appends the unvisited stop with the
/// strictly lowest travel cost from the last placed stop. Candidates are
/// scanned in ascending index order and only a strictly cheaper candidate
/// replaces the incumbent, so cost ties resolve to the lowest index.
///
/// The returned tour is a permutation of `[0, n)` beginning with `start`.
/// Should the scan ever find no unvisited candidate before the tour is
/// complete, construction stops and the partial tour is returned as-is;
/// callers that require a full tour must check the length (the solver does,
/// surfacing [`SolveError::IncompleteTour`]).
///
/// # Errors
///
/// [`SolveError::EmptyMatrix`] when the matrix covers no stops,
/// [`SolveError::StartOutOfRange`] when `start` does not address a row.
///
/// # Examples
///
/// ```
/// use tour_opt::constructive::nearest_neighbor;
/// use tour_opt::distance::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
///
/// let tour = nearest_neighbor(&m, 0).unwrap();
/// assert_eq!(tour, vec![0, 1, 3, 2]);
/// ```
pub fn nearest_neighbor(matrix: &CostMatrix, start: usize) -> Result<Vec<usize>, SolveError> {
    let n = matrix.size();
    if n == 0 {
        return Err(SolveError::EmptyMatrix);
    }
    if start >= n {
        return Err(SolveError::StartOutOfRange { start, size: n });
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    visited[start] = true;
    tour.push(start);

    for _ in 1..n {
        let last = tour[tour.len() - 1];

        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let cost = matrix.get(last, candidate);
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((candidate, cost));
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                tour.push(next);
            }
            // Cannot happen while the visited bookkeeping is consistent;
            // return the partial tour instead of inventing a stop.
            None => break,
        }
    }

    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_matrix() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("square input")
    }

    fn is_permutation(tour: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        tour.len() == n
            && tour.iter().all(|&i| {
                let fresh = i < n && !seen[i];
                if fresh {
                    seen[i] = true;
                }
                fresh
            })
    }

    #[test]
    fn test_nn_reference_tour() {
        let tour = nearest_neighbor(&reference_matrix(), 0).expect("valid input");
        assert_eq!(tour, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_nn_is_permutation_from_any_start() {
        let m = reference_matrix();
        for start in 0..m.size() {
            let tour = nearest_neighbor(&m, start).expect("valid input");
            assert!(is_permutation(&tour, m.size()));
            assert_eq!(tour[0], start);
        }
    }

    #[test]
    fn test_nn_empty_matrix() {
        let m = CostMatrix::new(0);
        assert_eq!(nearest_neighbor(&m, 0).unwrap_err(), SolveError::EmptyMatrix);
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let m = reference_matrix();
        assert_eq!(
            nearest_neighbor(&m, 4).unwrap_err(),
            SolveError::StartOutOfRange { start: 4, size: 4 }
        );
    }

    #[test]
    fn test_nn_single_stop() {
        let m = CostMatrix::new(1);
        assert_eq!(nearest_neighbor(&m, 0).expect("valid input"), vec![0]);
    }

    #[test]
    fn test_nn_two_stops() {
        let m = CostMatrix::from_rows(vec![vec![0.0, 7.0], vec![7.0, 0.0]]).expect("square");
        assert_eq!(nearest_neighbor(&m, 0).expect("valid input"), vec![0, 1]);
        assert_eq!(nearest_neighbor(&m, 1).expect("valid input"), vec![1, 0]);
    }

    #[test]
    fn test_nn_ties_break_to_lowest_index() {
        // From stop 0, stops 1, 2, 3 are all equally far; from each of
        // those, remaining stops tie again. The scan must pick the lowest
        // index every time.
        let m = CostMatrix::from_rows(vec![
            vec![0.0, 5.0, 5.0, 5.0],
            vec![5.0, 0.0, 5.0, 5.0],
            vec![5.0, 5.0, 0.0, 5.0],
            vec![5.0, 5.0, 5.0, 0.0],
        ])
        .expect("square");
        assert_eq!(
            nearest_neighbor(&m, 0).expect("valid input"),
            vec![0, 1, 2, 3]
        );
        assert_eq!(
            nearest_neighbor(&m, 2).expect("valid input"),
            vec![2, 0, 1, 3]
        );
    }

    #[test]
    fn test_nn_asymmetric_costs() {
        // Outbound costs differ from return costs; only the from-row matters.
        let m = CostMatrix::from_rows(vec![
            vec![0.0, 100.0, 1.0],
            vec![1.0, 0.0, 100.0],
            vec![100.0, 1.0, 0.0],
        ])
        .expect("square");
        assert_eq!(
            nearest_neighbor(&m, 0).expect("valid input"),
            vec![0, 2, 1]
        );
    }
}
