//! Routing index manager.

use std::ops::Range;

use crate::error::ValidationError;

/// Maps routing indices to physical nodes.
///
/// Every destination owns exactly one routing index; the depot owns none of
/// its own but instead appears twice per vehicle, as that vehicle's start and
/// end index. The layout is fixed at construction:
///
/// ```text
/// [0, n-1)            destinations, in increasing node order
/// [n-1, n-1+V)        vehicle starts
/// [n-1+V, n-1+2V)     vehicle ends
/// ```
///
/// # Examples
///
/// ```
/// use u_cvrp::routing::IndexManager;
///
/// let manager = IndexManager::new(4, 2, 0).unwrap();
/// assert_eq!(manager.num_indices(), 3 + 4);
/// assert_eq!(manager.index_to_node(0), 1);
/// assert_eq!(manager.index_to_node(manager.start(1)), 0);
/// assert_eq!(manager.index_to_node(manager.end(0)), 0);
/// assert_eq!(manager.node_to_index(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexManager {
    node_count: usize,
    vehicle_count: usize,
    depot: usize,
    index_to_node: Vec<usize>,
    node_to_index: Vec<Option<usize>>,
}

impl IndexManager {
    /// Creates the index layout for `node_count` nodes served by
    /// `vehicle_count` vehicles from `depot`.
    pub fn new(
        node_count: usize,
        vehicle_count: usize,
        depot: usize,
    ) -> Result<Self, ValidationError> {
        if depot >= node_count {
            return Err(ValidationError::DepotOutOfRange { depot, node_count });
        }

        let mut index_to_node: Vec<usize> = (0..node_count).filter(|&n| n != depot).collect();
        let mut node_to_index = vec![None; node_count];
        for (index, &node) in index_to_node.iter().enumerate() {
            node_to_index[node] = Some(index);
        }
        // starts, then ends
        index_to_node.extend(std::iter::repeat(depot).take(2 * vehicle_count));

        Ok(Self {
            node_count,
            vehicle_count,
            depot,
            index_to_node,
            node_to_index,
        })
    }

    /// Number of nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Size of the routing index space.
    pub fn num_indices(&self) -> usize {
        self.index_to_node.len()
    }

    /// Routing indices owned by destinations.
    pub fn visit_indices(&self) -> Range<usize> {
        0..self.node_count - 1
    }

    /// Physical node behind a routing index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the index space.
    pub fn index_to_node(&self, index: usize) -> usize {
        self.index_to_node[index]
    }

    /// Routing index of a destination; `None` for the depot.
    ///
    /// # Panics
    ///
    /// Panics if `node` is outside the node range.
    pub fn node_to_index(&self, node: usize) -> Option<usize> {
        self.node_to_index[node]
    }

    /// Start index of a vehicle's route.
    pub fn start(&self, vehicle: usize) -> usize {
        debug_assert!(vehicle < self.vehicle_count);
        self.node_count - 1 + vehicle
    }

    /// End index of a vehicle's route.
    pub fn end(&self, vehicle: usize) -> usize {
        debug_assert!(vehicle < self.vehicle_count);
        self.node_count - 1 + self.vehicle_count + vehicle
    }

    /// Returns `true` if `index` is some vehicle's start.
    pub fn is_start(&self, index: usize) -> bool {
        let first = self.node_count - 1;
        (first..first + self.vehicle_count).contains(&index)
    }

    /// Returns `true` if `index` is some vehicle's end.
    pub fn is_end(&self, index: usize) -> bool {
        let first = self.node_count - 1 + self.vehicle_count;
        (first..first + self.vehicle_count).contains(&index)
    }
}
