//! Solve result type.

use serde::{Deserialize, Serialize};

use super::Stop;

/// The result of a solve: a visiting order and its total travel cost.
///
/// `order` holds cost matrix indices. In depot mode with return-to-depot the
/// sequence is closed — it starts and ends at index 0 and is one element
/// longer than the number of stops; otherwise it is a permutation of
/// `[0, n)`.
///
/// # Examples
///
/// ```
/// use tour_opt::models::TourPlan;
///
/// let plan = TourPlan {
///     order: vec![0, 1, 3, 2],
///     total_cost: 65.0,
///     closed: false,
/// };
/// assert_eq!(plan.num_stops(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPlan {
    /// Visiting order as cost matrix indices.
    pub order: Vec<usize>,
    /// Sum of edge costs over consecutive pairs of `order`.
    pub total_cost: f64,
    /// Whether the order ends with a return to the depot.
    pub closed: bool,
}

impl TourPlan {
    /// Number of distinct stops visited (the closing depot revisit, if any,
    /// is not counted twice).
    pub fn num_stops(&self) -> usize {
        if self.closed {
            self.order.len().saturating_sub(1)
        } else {
            self.order.len()
        }
    }

    /// Maps the visiting order back to the stops it refers to.
    ///
    /// Returns `None` if any index in `order` is out of range for `stops` —
    /// the plan was computed against a different matrix.
    pub fn resolve<'a>(&self, stops: &'a [Stop]) -> Option<Vec<&'a Stop>> {
        self.order.iter().map(|&i| stops.get(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stops() -> Vec<Stop> {
        vec![
            Stop::depot("Warehouse", 52.23, 21.01),
            Stop::new(1, "Client A", 52.40, 16.93),
            Stop::new(2, "Client B", 51.11, 17.03),
        ]
    }

    #[test]
    fn test_num_stops_open() {
        let plan = TourPlan {
            order: vec![0, 2, 1],
            total_cost: 1.0,
            closed: false,
        };
        assert_eq!(plan.num_stops(), 3);
    }

    #[test]
    fn test_num_stops_closed() {
        let plan = TourPlan {
            order: vec![0, 2, 1, 0],
            total_cost: 1.0,
            closed: true,
        };
        assert_eq!(plan.num_stops(), 3);
    }

    #[test]
    fn test_resolve() {
        let stops = sample_stops();
        let plan = TourPlan {
            order: vec![0, 2, 1],
            total_cost: 1.0,
            closed: false,
        };
        let resolved = plan.resolve(&stops).expect("indices in range");
        assert_eq!(resolved[0].label(), "Warehouse");
        assert_eq!(resolved[1].label(), "Client B");
        assert_eq!(resolved[2].label(), "Client A");
    }

    #[test]
    fn test_resolve_out_of_range() {
        let stops = sample_stops();
        let plan = TourPlan {
            order: vec![0, 3],
            total_cost: 1.0,
            closed: false,
        };
        assert!(plan.resolve(&stops).is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let plan = TourPlan {
            order: vec![0, 1, 3, 2, 0],
            total_cost: 80.0,
            closed: true,
        };
        let json = serde_json::to_string(&plan).expect("serialize");
        let back: TourPlan = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, plan);
    }
}
