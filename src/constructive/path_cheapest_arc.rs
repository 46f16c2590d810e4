//! Path-cheapest-arc constructive heuristic.
//!
//! # Algorithm
//!
//! Every vehicle grows its route from the depot. At each step the cheapest
//! arc from any vehicle's current tail to any unassigned destination that
//! still fits that vehicle's remaining capacity is appended. Ties go to the
//! lowest node, then the lowest vehicle. Stops when every destination is
//! placed or no capacity-feasible arc remains.
//!
//! # Complexity
//!
//! O(n² × V) per step, O(n³ × V) overall, where V = number of vehicles.

use std::collections::BTreeSet;

use crate::routing::RoutingModel;

/// Routes produced by a constructive heuristic, plus whatever it could not
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// One node sequence per vehicle, depot excluded.
    pub routes: Vec<Vec<usize>>,
    /// Destinations left unassigned, in increasing order.
    pub unassigned: Vec<usize>,
}

impl Construction {
    /// Returns `true` if every destination was placed.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// Builds routes by repeatedly appending the cheapest feasible arc.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
/// use u_cvrp::routing::RoutingModel;
/// use u_cvrp::constructive::path_cheapest_arc;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 1, 2, 3],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0), Node::new(1, 10), Node::new(2, 10), Node::new(3, 10)],
///     vec![Vehicle::new(0, 30)],
///     dm,
/// ).unwrap();
///
/// let construction = path_cheapest_arc(&RoutingModel::new(&problem));
/// assert!(construction.is_complete());
/// assert_eq!(construction.routes, vec![vec![1, 2, 3]]);
/// ```
pub fn path_cheapest_arc(model: &RoutingModel<'_>) -> Construction {
    let problem = model.problem();
    let capacity = model.capacity();
    let depot = model.depot();
    let vehicle_count = problem.vehicle_count();

    let mut routes: Vec<Vec<usize>> = vec![Vec::new(); vehicle_count];
    let mut loads = vec![0_i64; vehicle_count];
    let mut unassigned: BTreeSet<usize> = problem.destinations().collect();

    while !unassigned.is_empty() {
        // (arc cost, node, vehicle) orders ties by node, then vehicle
        let mut best: Option<(i64, usize, usize)> = None;
        for vehicle in 0..vehicle_count {
            let tail = routes[vehicle].last().copied().unwrap_or(depot);
            for &node in &unassigned {
                if !capacity.fits(vehicle, loads[vehicle], node) {
                    continue;
                }
                let candidate = (model.distance(tail, node), node, vehicle);
                if best.is_none_or(|b| candidate < b) {
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some((_, node, vehicle)) => {
                routes[vehicle].push(node);
                loads[vehicle] += capacity.transit(node);
                unassigned.remove(&node);
            }
            None => break,
        }
    }

    Construction {
        routes,
        unassigned: unassigned.into_iter().collect(),
    }
}
