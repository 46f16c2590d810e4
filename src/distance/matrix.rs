//! Dense distance matrix.

use crate::error::ValidationError;

/// A dense n×n matrix of integer travel costs stored in row-major order.
///
/// Distances are whole units (metres in the dispatch job). The matrix is
/// read-only once a [`Problem`](crate::models::Problem) owns it, so it can be
/// shared across search threads without locking.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 5, 8],
///     vec![5, 0, 3],
///     vec![8, 3, 0],
/// ]).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a matrix from fully populated rows.
    ///
    /// Fails if the rows are not square or any entry is negative.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, ValidationError> {
        Self::from_partial_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    /// Creates a matrix from rows where some distances may be unknown.
    ///
    /// An unknown entry off the diagonal is a [`ValidationError::MissingDistance`];
    /// an unknown diagonal entry is taken as zero.
    pub fn from_partial_rows(rows: Vec<Vec<Option<i64>>>) -> Result<Self, ValidationError> {
        let size = rows.len();
        let mut dm = Self::new(size);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ValidationError::RaggedMatrix {
                    row: from,
                    expected: size,
                    found: row.len(),
                });
            }
            for (to, entry) in row.into_iter().enumerate() {
                let value = match entry {
                    Some(v) if v < 0 => {
                        return Err(ValidationError::NegativeDistance { from, to, value: v })
                    }
                    Some(v) => v,
                    None if from == to => 0,
                    None => return Err(ValidationError::MissingDistance { from, to }),
                };
                dm.set(from, to, value);
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        assert!(
            from < self.size && to < self.size,
            "distance lookup ({from}, {to}) outside a {0}x{0} matrix",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// Returns the first pair `(i, j)`, `i < j`, whose two directions differ.
    pub fn first_asymmetry(&self) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|i| ((i + 1)..self.size).map(move |j| (i, j)))
            .find(|&(i, j)| self.get(i, j) != self.get(j, i))
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the lowest candidate index. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| (self.get(from, c), c))
    }
}
