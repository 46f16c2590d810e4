//! External collaborators: the distance service and the notification sink.

use log::warn;

use crate::error::CollaboratorError;

/// Answers travel distances between two addresses.
pub trait DistanceProvider {
    /// Distance from `origin` to `destination`, in whole units.
    fn distance(&self, origin: &str, destination: &str) -> Result<i64, CollaboratorError>;
}

/// Builds a symmetric matrix by asking `provider` once per unordered pair.
///
/// A failed lookup is logged and left as `None`; the diagonal is always
/// zero. [`DistanceMatrix::from_partial_rows`](crate::distance::DistanceMatrix::from_partial_rows)
/// then rejects the gap as a missing distance.
pub fn build_distance_matrix<P>(provider: &P, addresses: &[&str]) -> Vec<Vec<Option<i64>>>
where
    P: DistanceProvider + ?Sized,
{
    let n = addresses.len();
    let mut rows = vec![vec![None; n]; n];
    for i in 0..n {
        rows[i][i] = Some(0);
        for j in (i + 1)..n {
            match provider.distance(addresses[i], addresses[j]) {
                Ok(d) => {
                    rows[i][j] = Some(d);
                    rows[j][i] = Some(d);
                }
                Err(e) => warn!("{e}"),
            }
        }
    }
    rows
}

/// A message for one driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// From address, when the sink is configured with one.
    pub sender: Option<String>,
    /// Contact address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Delivers notifications. Implementations own transport and formatting.
pub trait NotificationSink {
    /// Sends one message.
    fn send(&self, notification: &Notification) -> Result<(), CollaboratorError>;
}
