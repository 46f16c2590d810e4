//! Error types shared across the crate.
//!
//! Infeasibility is not represented here: a well-formed problem with no
//! feasible assignment is a normal [`SolveOutcome`](crate::search::SolveOutcome).

use thiserror::Error;

/// A malformed problem description, rejected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The fleet is empty.
    #[error("at least one vehicle is required")]
    NoVehicles,

    /// The depot index does not name a node.
    #[error("depot index {depot} is out of range for {node_count} nodes")]
    DepotOutOfRange {
        /// Requested depot index.
        depot: usize,
        /// Number of nodes in the problem.
        node_count: usize,
    },

    /// The matrix dimension differs from the number of nodes.
    #[error("distance matrix has dimension {found}, expected {expected}")]
    MatrixDimension {
        /// Number of nodes.
        expected: usize,
        /// Matrix dimension.
        found: usize,
    },

    /// A matrix row has the wrong length.
    #[error("distance matrix row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        /// Offending row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// No distance is known between two locations.
    #[error("distance from {from} to {to} is unavailable")]
    MissingDistance {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
    },

    /// A distance is negative.
    #[error("distance from {from} to {to} is negative ({value})")]
    NegativeDistance {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
        /// Offending value.
        value: i64,
    },

    /// `matrix[from][to] != matrix[to][from]`.
    #[error("distance matrix is not symmetric between {from} and {to}")]
    AsymmetricDistance {
        /// First node.
        from: usize,
        /// Second node.
        to: usize,
    },

    /// A node has a non-zero distance to itself.
    #[error("distance from node {node} to itself must be zero")]
    NonZeroDiagonal {
        /// Offending node.
        node: usize,
    },

    /// A node's id does not match its position in the node list.
    #[error("node at position {position} carries id {id}")]
    NodeIdMismatch {
        /// Position in the node list.
        position: usize,
        /// Id stored on the node.
        id: usize,
    },

    /// A destination has negative demand.
    #[error("node {node} has negative demand {demand}")]
    NegativeDemand {
        /// Offending node.
        node: usize,
        /// Offending demand.
        demand: i64,
    },

    /// The depot carries demand.
    #[error("depot demand must be zero, found {demand}")]
    DepotDemand {
        /// Offending demand.
        demand: i64,
    },

    /// A vehicle cannot carry anything.
    #[error("vehicle {vehicle} has non-positive capacity {capacity}")]
    NonPositiveCapacity {
        /// Offending vehicle.
        vehicle: usize,
        /// Offending capacity.
        capacity: i64,
    },
}

/// Failure of an external collaborator (distance service, notification
/// delivery). The crate never retries these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The distance service could not answer for a pair of addresses.
    #[error("no distance from {origin:?} to {destination:?}: {reason}")]
    DistanceUnavailable {
        /// Origin address.
        origin: String,
        /// Destination address.
        destination: String,
        /// Provider supplied reason.
        reason: String,
    },

    /// A notification could not be delivered.
    #[error("delivery to {recipient:?} failed: {reason}")]
    DeliveryFailed {
        /// Intended recipient.
        recipient: String,
        /// Sink supplied reason.
        reason: String,
    },
}

/// Errors raised while turning a job file into a [`Problem`](crate::models::Problem).
#[derive(Debug, Error)]
pub enum JobError {
    /// The job file is not valid JSON for a job description.
    #[error("malformed job description: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded job does not describe a valid problem.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::DepotOutOfRange {
            depot: 4,
            node_count: 3,
        };
        assert_eq!(err.to_string(), "depot index 4 is out of range for 3 nodes");
        assert_eq!(
            ValidationError::MissingDistance { from: 1, to: 2 }.to_string(),
            "distance from 1 to 2 is unavailable"
        );
    }

    #[test]
    fn test_job_error_from_validation() {
        let err: JobError = ValidationError::NoVehicles.into();
        assert!(matches!(err, JobError::Validation(ValidationError::NoVehicles)));
        assert_eq!(err.to_string(), "at least one vehicle is required");
    }
}
