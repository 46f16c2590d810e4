//! Capacity dimension.

use std::fmt;

use crate::models::Problem;

/// The first position at which a route's running load exceeds capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityViolation {
    /// Vehicle (fleet position).
    pub vehicle: usize,
    /// 1-based stop position where the bound was first exceeded.
    pub position: usize,
    /// Running load at that position.
    pub load: i64,
    /// The vehicle's capacity.
    pub capacity: i64,
}

impl fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vehicle {} carries {} at stop {}, capacity {}",
            self.vehicle, self.load, self.position, self.capacity
        )
    }
}

/// Cumulative load along a route.
///
/// The cumul starts at zero at the depot, grows by the demand of each stop
/// and must stay within the vehicle's capacity at every position, so a
/// partial route is rejected the moment it overflows.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
/// use u_cvrp::routing::CapacityDimension;
///
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0), Node::new(1, 6), Node::new(2, 5)],
///     vec![Vehicle::new(0, 10)],
///     DistanceMatrix::new(3),
/// ).unwrap();
/// let capacity = CapacityDimension::new(&problem);
/// assert!(capacity.fits(0, 4, 1));
/// assert!(!capacity.fits(0, 6, 2));
/// assert_eq!(capacity.cumuls(&[1]), vec![0, 6]);
/// assert!(capacity.check(0, &[1, 2]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CapacityDimension<'a> {
    problem: &'a Problem,
}

impl<'a> CapacityDimension<'a> {
    /// Creates the dimension over a problem's demands and capacities.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Upper bound of the cumul for a vehicle.
    pub fn capacity(&self, vehicle: usize) -> i64 {
        self.problem.vehicle(vehicle).capacity()
    }

    /// Amount added to the cumul when visiting `node`.
    pub fn transit(&self, node: usize) -> i64 {
        self.problem.demand(node)
    }

    /// Returns `true` if a vehicle carrying `load` can also serve `node`.
    pub fn fits(&self, vehicle: usize, load: i64, node: usize) -> bool {
        load + self.transit(node) <= self.capacity(vehicle)
    }

    /// Sum of transits over a node sequence.
    pub fn load(&self, nodes: &[usize]) -> i64 {
        nodes.iter().map(|&n| self.transit(n)).sum()
    }

    /// Cumul at every position: the depot (0) followed by each stop.
    pub fn cumuls(&self, nodes: &[usize]) -> Vec<i64> {
        std::iter::once(0)
            .chain(nodes.iter().scan(0, |load, &n| {
                *load += self.transit(n);
                Some(*load)
            }))
            .collect()
    }

    /// Walks a route and returns its final load, stopping at the first
    /// position where the cumul exceeds the vehicle's capacity.
    pub fn check(&self, vehicle: usize, nodes: &[usize]) -> Result<i64, CapacityViolation> {
        let capacity = self.capacity(vehicle);
        let mut load = 0;
        for (i, &node) in nodes.iter().enumerate() {
            load += self.transit(node);
            if load > capacity {
                return Err(CapacityViolation {
                    vehicle,
                    position: i + 1,
                    load,
                    capacity,
                });
            }
        }
        Ok(load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Node, Vehicle};

    fn problem() -> Problem {
        Problem::new(
            0,
            vec![
                Node::depot(0),
                Node::new(1, 5),
                Node::new(2, 5),
                Node::new(3, 8),
            ],
            vec![Vehicle::new(0, 10), Vehicle::new(1, 12)],
            DistanceMatrix::new(4),
        )
        .expect("valid")
    }

    #[test]
    fn test_fits_per_vehicle() {
        let p = problem();
        let dim = CapacityDimension::new(&p);
        assert!(dim.fits(0, 5, 2));
        assert!(!dim.fits(0, 5, 3));
        assert!(dim.fits(1, 0, 3));
        assert!(!dim.fits(1, 5, 3));
    }

    #[test]
    fn test_cumuls() {
        let p = problem();
        let dim = CapacityDimension::new(&p);
        assert_eq!(dim.cumuls(&[1, 2]), vec![0, 5, 10]);
        assert_eq!(dim.cumuls(&[]), vec![0]);
        assert_eq!(dim.load(&[1, 3]), 13);
    }

    #[test]
    fn test_check_reports_first_overflow() {
        let p = problem();
        let dim = CapacityDimension::new(&p);
        assert_eq!(dim.check(0, &[1, 2]), Ok(10));
        let violation = dim.check(0, &[3, 1, 2]).expect_err("overflow");
        assert_eq!(
            violation,
            CapacityViolation {
                vehicle: 0,
                position: 2,
                load: 13,
                capacity: 10
            }
        );
        assert_eq!(
            violation.to_string(),
            "vehicle 0 carries 13 at stop 2, capacity 10"
        );
    }
}
