//! Chained successor assignment.

use super::IndexManager;

/// A solved assignment in successor form.
///
/// `next(i)` is the routing index visited after `i`. Every vehicle's chain
/// runs from its start index to its end index; end indices and destinations
/// left unserved point at themselves.
///
/// # Examples
///
/// ```
/// use u_cvrp::routing::{Assignment, IndexManager};
///
/// let manager = IndexManager::new(4, 2, 0).unwrap();
/// let assignment = Assignment::from_routes(&manager, &[vec![2, 1], vec![]]);
/// assert_eq!(assignment.route_nodes(&manager, 0), vec![2, 1]);
/// assert_eq!(assignment.node_at(&manager, 0, 0), Some(0));
/// assert_eq!(assignment.node_at(&manager, 0, 1), Some(2));
/// assert_eq!(assignment.node_at(&manager, 0, 3), Some(0));
/// assert_eq!(assignment.node_at(&manager, 1, 1), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    next: Vec<usize>,
}

impl Assignment {
    /// Chains per-vehicle node sequences into successor form.
    ///
    /// # Panics
    ///
    /// Panics if a route contains the depot or a node outside the problem.
    pub fn from_routes(manager: &IndexManager, routes: &[Vec<usize>]) -> Self {
        let mut next: Vec<usize> = (0..manager.num_indices()).collect();
        for (vehicle, nodes) in routes.iter().enumerate() {
            let mut prev = manager.start(vehicle);
            for &node in nodes {
                let index = manager
                    .node_to_index(node)
                    .expect("the depot is never an interior stop");
                next[prev] = index;
                prev = index;
            }
            next[prev] = manager.end(vehicle);
        }
        for vehicle in routes.len()..manager.vehicle_count() {
            next[manager.start(vehicle)] = manager.end(vehicle);
        }
        Self { next }
    }

    /// Successor of a routing index.
    pub fn next(&self, index: usize) -> usize {
        self.next[index]
    }

    /// Routing indices of a vehicle's route, start and end included.
    pub fn route_indices(&self, manager: &IndexManager, vehicle: usize) -> Vec<usize> {
        let mut index = manager.start(vehicle);
        let mut indices = vec![index];
        // a well-formed chain reaches its end within num_indices steps
        for _ in 0..manager.num_indices() {
            if manager.is_end(index) {
                break;
            }
            index = self.next[index];
            indices.push(index);
        }
        indices
    }

    /// Destinations visited by a vehicle, in order.
    pub fn route_nodes(&self, manager: &IndexManager, vehicle: usize) -> Vec<usize> {
        let indices = self.route_indices(manager, vehicle);
        indices[1..indices.len() - 1]
            .iter()
            .map(|&i| manager.index_to_node(i))
            .collect()
    }

    /// Node at `position` of a vehicle's traversal.
    ///
    /// Position 0 is the depot before the first stop and position `len + 1`
    /// the depot after the last. Returns `None` past the end.
    pub fn node_at(&self, manager: &IndexManager, vehicle: usize, position: usize) -> Option<usize> {
        self.route_indices(manager, vehicle)
            .get(position)
            .map(|&i| manager.index_to_node(i))
    }
}
