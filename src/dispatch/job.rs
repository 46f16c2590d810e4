//! Job description files.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::JobError;
use crate::models::{Node, Problem, Vehicle};

/// A delivery address and its parcel count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Address understood by the distance provider.
    pub address: String,
    /// Parcels to drop (zero for the depot).
    pub demand: i64,
}

/// A vehicle and its driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    /// Driver name used in the greeting.
    pub name: String,
    /// Where the itinerary is sent.
    pub email: String,
    /// Parcels the vehicle can carry.
    pub capacity: i64,
}

/// A dispatch job: destinations (depot included) and the fleet.
///
/// # Examples
///
/// ```
/// use u_cvrp::dispatch::JobDescription;
///
/// let job = JobDescription::from_json(r#"{
///     "destinations": [
///         {"address": "Depot", "demand": 0},
///         {"address": "Rue A", "demand": 3}
///     ],
///     "carrier": [{"name": "Ana", "email": "ana@example.com", "capacity": 5}]
/// }"#).unwrap();
/// assert_eq!(job.depot, 0);
/// assert_eq!(job.addresses(), vec!["Depot", "Rue A"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    /// All locations; entry `depot` is the depot.
    pub destinations: Vec<Destination>,
    /// The fleet, in dispatch order.
    pub carrier: Vec<Carrier>,
    /// Position of the depot in `destinations`.
    #[serde(default)]
    pub depot: usize,
}

impl JobDescription {
    /// Parses a job from JSON text.
    pub fn from_json(text: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Addresses in node order, for building the distance matrix.
    pub fn addresses(&self) -> Vec<&str> {
        self.destinations
            .iter()
            .map(|d| d.address.as_str())
            .collect()
    }

    /// Validates the job against `distances` and builds the problem.
    pub fn into_problem(self, distances: DistanceMatrix) -> Result<Problem, JobError> {
        let nodes = self
            .destinations
            .into_iter()
            .enumerate()
            .map(|(id, d)| Node::new(id, d.demand).with_address(d.address))
            .collect();
        let vehicles = self
            .carrier
            .into_iter()
            .enumerate()
            .map(|(id, c)| {
                Vehicle::new(id, c.capacity)
                    .with_name(c.name)
                    .with_contact(c.email)
            })
            .collect();
        Ok(Problem::new(self.depot, nodes, vehicles, distances)?)
    }
}
