//! Capacity-only packing fallbacks.
//!
//! # Algorithm
//!
//! Both ignore distance entirely and take destinations by decreasing demand
//! (lowest node first on ties). [`first_fit_decreasing`] puts each one in
//! the first vehicle with room left. [`exact_packing`] searches depth-first
//! over vehicle choices and either finds a packing or proves none exists.
//! Each vehicle's stops are then ordered by nearest neighbour from the
//! depot. The result is a feasible but usually costly starting point for
//! the improvement phase, used when the distance-driven heuristics strand a
//! destination on a tight fleet.
//!
//! # Complexity
//!
//! First fit: O(n log n + n × V) for packing, O(n²) for ordering.
//! Exact: exponential in n in the worst case. Vehicles with equal remaining
//! room are tried once per level, and a branch is cut as soon as the room
//! that can still hold a destination falls below the demand left to place.

use std::cmp::Reverse;

use crate::routing::RoutingModel;

/// Packs every destination into the fleet, or returns `None` if first-fit
/// decreasing cannot place one of them.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
/// use u_cvrp::routing::RoutingModel;
/// use u_cvrp::constructive::first_fit_decreasing;
///
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0), Node::new(1, 4), Node::new(2, 6), Node::new(3, 6), Node::new(4, 4)],
///     vec![Vehicle::new(0, 10), Vehicle::new(1, 10)],
///     DistanceMatrix::new(5),
/// ).unwrap();
///
/// let routes = first_fit_decreasing(&RoutingModel::new(&problem)).unwrap();
/// assert_eq!(routes, vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn first_fit_decreasing(model: &RoutingModel<'_>) -> Option<Vec<Vec<usize>>> {
    let problem = model.problem();
    let capacity = model.capacity();
    let vehicle_count = problem.vehicle_count();

    let mut order: Vec<usize> = problem.destinations().collect();
    order.sort_by_key(|&n| (Reverse(capacity.transit(n)), n));

    let mut bins: Vec<Vec<usize>> = vec![Vec::new(); vehicle_count];
    let mut loads = vec![0_i64; vehicle_count];
    for node in order {
        let vehicle = (0..vehicle_count).find(|&v| capacity.fits(v, loads[v], node))?;
        bins[vehicle].push(node);
        loads[vehicle] += capacity.transit(node);
    }

    Some(
        bins.into_iter()
            .map(|bin| nearest_neighbor_order(model, bin))
            .collect(),
    )
}

/// Result of [`exact_packing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packing {
    /// A capacity-feasible assignment, one node sequence per vehicle.
    Packed(Vec<Vec<usize>>),
    /// No assignment of destinations to vehicles respects every capacity.
    Impossible,
    /// The search was stopped before it could decide.
    Interrupted,
}

/// How many placements are tried between two interruption checks.
const CHECK_INTERVAL: u64 = 1024;

/// Decides capacity feasibility exactly by depth-first search.
///
/// `interrupted` is polled on the first placement and every
/// [`CHECK_INTERVAL`] placements after that; once it returns `true` the
/// search gives up with [`Packing::Interrupted`].
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
/// use u_cvrp::routing::RoutingModel;
/// use u_cvrp::constructive::{exact_packing, first_fit_decreasing, Packing};
///
/// // 4 + 3 + 2 twice; first fit puts both 4s together and strands a 2
/// let nodes = std::iter::once(Node::depot(0))
///     .chain([4, 4, 3, 3, 2, 2].into_iter().enumerate().map(|(i, d)| Node::new(i + 1, d)))
///     .collect();
/// let problem = Problem::new(
///     0,
///     nodes,
///     vec![Vehicle::new(0, 9), Vehicle::new(1, 9)],
///     DistanceMatrix::new(7),
/// ).unwrap();
/// let model = RoutingModel::new(&problem);
///
/// assert!(first_fit_decreasing(&model).is_none());
/// assert!(matches!(exact_packing(&model, || false), Packing::Packed(_)));
/// ```
pub fn exact_packing<F>(model: &RoutingModel<'_>, interrupted: F) -> Packing
where
    F: Fn() -> bool,
{
    let problem = model.problem();
    let capacity = model.capacity();
    let vehicle_count = problem.vehicle_count();

    let mut items: Vec<usize> = problem.destinations().collect();
    items.sort_by_key(|&n| (Reverse(capacity.transit(n)), n));
    let mut remaining = vec![0_i64; items.len() + 1];
    for i in (0..items.len()).rev() {
        remaining[i] = remaining[i + 1] + capacity.transit(items[i]);
    }

    let mut search = PackingSearch {
        model,
        items,
        remaining,
        bins: vec![Vec::new(); vehicle_count],
        loads: vec![0; vehicle_count],
        placements: 0,
        interrupted,
    };
    match search.place(0) {
        Ok(true) => Packing::Packed(
            search
                .bins
                .into_iter()
                .map(|bin| nearest_neighbor_order(model, bin))
                .collect(),
        ),
        Ok(false) => Packing::Impossible,
        Err(Interrupted) => Packing::Interrupted,
    }
}

struct Interrupted;

struct PackingSearch<'m, 'a, F> {
    model: &'m RoutingModel<'a>,
    /// Destinations by decreasing demand.
    items: Vec<usize>,
    /// `remaining[i]` is the demand of `items[i..]`.
    remaining: Vec<i64>,
    bins: Vec<Vec<usize>>,
    loads: Vec<i64>,
    placements: u64,
    interrupted: F,
}

impl<F: Fn() -> bool> PackingSearch<'_, '_, F> {
    /// Places `items[item..]`, returning whether it succeeded.
    fn place(&mut self, item: usize) -> Result<bool, Interrupted> {
        let Some(&node) = self.items.get(item) else {
            return Ok(true);
        };
        if self.placements % CHECK_INTERVAL == 0 && (self.interrupted)() {
            return Err(Interrupted);
        }
        self.placements += 1;

        let capacity = *self.model.capacity();
        let demand = capacity.transit(node);
        // items are sorted, so the last one is the smallest still to place
        let smallest = capacity.transit(self.items[self.items.len() - 1]);
        let usable: i64 = (0..self.bins.len())
            .map(|v| capacity.capacity(v) - self.loads[v])
            .filter(|&room| room >= smallest)
            .sum();
        if usable < self.remaining[item] {
            return Ok(false);
        }

        let mut tried: Vec<i64> = Vec::new();
        for vehicle in 0..self.bins.len() {
            let room = capacity.capacity(vehicle) - self.loads[vehicle];
            if demand > room || tried.contains(&room) {
                continue;
            }
            tried.push(room);
            self.bins[vehicle].push(node);
            self.loads[vehicle] += demand;
            if self.place(item + 1)? {
                return Ok(true);
            }
            self.bins[vehicle].pop();
            self.loads[vehicle] -= demand;
        }
        Ok(false)
    }
}

/// Orders a set of stops greedily, always driving to the nearest remaining one.
fn nearest_neighbor_order(model: &RoutingModel<'_>, mut remaining: Vec<usize>) -> Vec<usize> {
    let distances = model.problem().distances();
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = model.depot();
    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&n| n != next);
        ordered.push(next);
        current = next;
    }
    ordered
}
