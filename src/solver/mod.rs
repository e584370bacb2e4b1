//! End-to-end solve orchestration.
//!
//! Chains the two core operations — nearest-neighbor construction and 2-opt
//! refinement — around the depot glue: anchoring the tour at index 0,
//! rotating the constructed order so the anchor leads it before refinement
//! (2-opt pins the first and last positions, so the anchor must be in place
//! first), and appending the closing depot visit afterwards.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor;
use crate::distance::CostMatrix;
use crate::error::SolveError;
use crate::evaluation::tour_cost;
use crate::local_search::{two_opt_improve_with, TwoOptOptions};
use crate::models::TourPlan;

/// Options for [`solve`].
///
/// # Examples
///
/// ```
/// use tour_opt::solver::SolveOptions;
///
/// let options = SolveOptions::round_trip();
/// assert!(options.depot);
/// assert!(options.return_to_depot);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Construction start index. Ignored when `depot` is set — a depot tour
    /// always starts at index 0.
    pub start: usize,
    /// Treat index 0 as a fixed depot the tour must start at.
    pub depot: bool,
    /// Append a closing return to the depot after refinement. Only
    /// meaningful together with `depot`.
    pub return_to_depot: bool,
    /// Refinement options.
    pub two_opt: TwoOptOptions,
}

impl SolveOptions {
    /// Depot-anchored round trip: start at index 0 and return to it.
    pub fn round_trip() -> Self {
        Self {
            depot: true,
            return_to_depot: true,
            ..Self::default()
        }
    }
}

/// Computes a visiting order for the stops covered by `matrix`.
///
/// Builds an initial order with [`nearest_neighbor`], anchors it to the
/// depot when requested, refines it with 2-opt, and accumulates the total
/// cost of the final (possibly depot-closed) sequence.
///
/// # Errors
///
/// Propagates the `InvalidInput` errors of construction and refinement, and
/// surfaces [`SolveError::IncompleteTour`] should construction return fewer
/// stops than the matrix covers.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::CostMatrix;
/// use tour_opt::models::Stop;
/// use tour_opt::solver::{solve, SolveOptions};
///
/// let stops = vec![
///     Stop::depot("Warehouse", 52.23, 21.01),
///     Stop::new(1, "Client A", 52.40, 16.93),
///     Stop::new(2, "Client B", 51.11, 17.03),
/// ];
/// let matrix = CostMatrix::from_stops(&stops);
///
/// let plan = solve(&matrix, &SolveOptions::round_trip()).unwrap();
/// assert_eq!(plan.order[0], 0);
/// assert_eq!(*plan.order.last().unwrap(), 0);
///
/// let visits = plan.resolve(&stops).unwrap();
/// assert_eq!(visits[0].label(), "Warehouse");
/// ```
pub fn solve(matrix: &CostMatrix, options: &SolveOptions) -> Result<TourPlan, SolveError> {
    let n = matrix.size();
    let start = if options.depot { 0 } else { options.start };

    let mut order = nearest_neighbor(matrix, start)?;
    if order.len() != n {
        return Err(SolveError::IncompleteTour {
            placed: order.len(),
            expected: n,
        });
    }
    debug!(
        "constructed {n}-stop tour, cost {:.1}",
        tour_cost(&order, matrix)
    );

    let close_loop = options.depot && options.return_to_depot;
    if close_loop {
        rotate_to_front(&mut order, 0);
    }

    two_opt_improve_with(&mut order, matrix, &options.two_opt)?;

    if close_loop {
        order.push(0);
    }

    let total_cost = tour_cost(&order, matrix);
    debug!("refined tour cost {total_cost:.1}");

    Ok(TourPlan {
        order,
        total_cost,
        closed: close_loop,
    })
}

/// Rotates `order` in place so that `anchor` leads it, preserving the
/// relative sequence. Inserts the anchor at the front if it is absent —
/// unreachable after a full construction, but the anchor must lead the
/// order either way.
fn rotate_to_front(order: &mut Vec<usize>, anchor: usize) {
    match order.iter().position(|&stop| stop == anchor) {
        Some(0) => {}
        Some(pos) => order.rotate_left(pos),
        None => order.insert(0, anchor),
    }
}
