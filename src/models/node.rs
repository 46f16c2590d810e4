//! Node type: the depot or a delivery destination.

/// A location in a routing problem.
///
/// Node ids equal their position in the problem's node list and index the
/// distance matrix. The depot carries zero demand; destinations carry a
/// non-negative parcel count. The address is only used when rendering
/// itineraries.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Node;
///
/// let depot = Node::depot(0).with_address("1 Warehouse Road");
/// assert_eq!(depot.demand(), 0);
/// assert_eq!(depot.address(), Some("1 Warehouse Road"));
///
/// let stop = Node::new(1, 5);
/// assert_eq!(stop.id(), 1);
/// assert_eq!(stop.demand(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: usize,
    demand: i64,
    address: Option<String>,
}

impl Node {
    /// Creates a node with the given id and demand.
    pub fn new(id: usize, demand: i64) -> Self {
        Self {
            id,
            demand,
            address: None,
        }
    }

    /// Creates a depot node (zero demand).
    pub fn depot(id: usize) -> Self {
        Self::new(id, 0)
    }

    /// Sets the address identifier shown in itineraries.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Node id (position in the node list).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Parcels to deliver here.
    pub fn demand(&self) -> i64 {
        self.demand
    }

    /// Address identifier, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Address identifier, or `node <id>` when none was given.
    pub fn label(&self) -> String {
        match &self.address {
            Some(a) => a.clone(),
            None => format!("node {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let n = Node::new(3, 7);
        assert_eq!(n.id(), 3);
        assert_eq!(n.demand(), 7);
        assert!(n.address().is_none());
    }

    #[test]
    fn test_node_depot() {
        let d = Node::depot(2);
        assert_eq!(d.id(), 2);
        assert_eq!(d.demand(), 0);
    }

    #[test]
    fn test_node_label() {
        assert_eq!(Node::new(4, 1).label(), "node 4");
        assert_eq!(Node::new(4, 1).with_address("Elm St").label(), "Elm St");
    }
}
