//! Dense distance matrix.

use crate::models::Stop;

use super::haversine::haversine_miles;

/// A dense n×n matrix of great-circle distances, stored in row-major order.
///
/// Built wholesale from a stop list and symmetric by construction: the upper
/// triangle is computed and mirrored, and diagonal cells are exactly zero
/// without invoking the formula. Whenever the stop set changes the caller
/// rebuilds the whole matrix rather than patching it.
///
/// # Examples
///
/// ```
/// use dispatch_routing::distance::DistanceMatrix;
/// use dispatch_routing::models::Stop;
///
/// let stops = vec![
///     Stop::new(1, 40.7128, -74.0060),  // New York
///     Stop::new(2, 34.0522, -118.2437), // Los Angeles
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Haversine distance matrix for a stop list.
    ///
    /// Distances are in miles, rounded to 2 decimal places. Zero- and
    /// one-stop inputs yield 0×0 and 1×1 matrices. O(n²) time and space.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_miles(&stops[i], &stops[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
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
