//! Dense travel cost matrix.

use crate::error::SolveError;
use crate::models::Stop;

/// A dense n×n travel cost matrix stored in row-major order.
///
/// `get(i, j)` is the cost of travelling from stop `i` to stop `j`. The
/// matrix is not required to be symmetric; road networks rarely are. Costs
/// are expected to be non-negative with a zero diagonal, but neither is
/// validated — the construction and improvement algorithms ignore the
/// diagonal and make no metric assumptions.
///
/// # Examples
///
/// ```
/// use tour_opt::distance::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 10.0],
///     vec![12.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 1), 10.0);
/// assert!(!m.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a cost matrix from nested rows, as delivered by routing
    /// services that answer matrix queries with a row per origin.
    ///
    /// Fails with [`SolveError::EmptyMatrix`] when `rows` is empty and with
    /// [`SolveError::NotSquare`] when any row's length differs from the row
    /// count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let size = rows.len();
        if size == 0 {
            return Err(SolveError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, costs) in rows.into_iter().enumerate() {
            if costs.len() != size {
                return Err(SolveError::NotSquare {
                    row,
                    len: costs.len(),
                    expected: size,
                });
            }
            data.extend(costs);
        }
        Ok(Self { data, size })
    }

    /// Creates a cost matrix from an explicit flat n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Computes a straight-line (haversine) cost matrix from stop
    /// coordinates, in meters.
    ///
    /// An offline fallback for callers without access to a road routing
    /// service. The result is symmetric with a zero diagonal.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut m = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance_to(&stops[j]);
                m.set(i, j, d);
                m.set(j, i, d);
            }
        }
        m
    }

    /// Returns the travel cost from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel cost from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of stops covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix covers no stops.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
