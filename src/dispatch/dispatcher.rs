//! Hands solved itineraries to the notification sink.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{Notification, NotificationSink};
use crate::extract::{itineraries, Summary};
use crate::models::Problem;
use crate::search::SolveOutcome;

/// Message settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// From address handed to the sink, if it needs one.
    pub sender: Option<String>,
    /// Subject line of every itinerary message.
    pub subject: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            sender: None,
            subject: "Your delivery route".into(),
        }
    }
}

impl DispatchConfig {
    /// Sets the from address.
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
}

/// What happened to each vehicle's itinerary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Vehicles whose message was accepted by the sink.
    pub sent: Vec<usize>,
    /// Vehicles whose delivery failed.
    pub failed: Vec<usize>,
    /// Vehicles without a contact address.
    pub skipped: Vec<usize>,
}

/// Sends one itinerary per vehicle.
pub struct Dispatcher<S> {
    sink: S,
    config: DispatchConfig,
}

impl<S: NotificationSink> Dispatcher<S> {
    /// Creates a dispatcher over `sink`.
    pub fn new(sink: S, config: DispatchConfig) -> Self {
        Self { sink, config }
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Notifies every vehicle of its route. On an infeasible outcome nothing
    /// is sent. Failed deliveries are logged and reported, never retried.
    pub fn dispatch(&self, problem: &Problem, outcome: &SolveOutcome) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(solution) = outcome.solution() else {
            info!("No Solution");
            return report;
        };

        for itinerary in itineraries(problem, solution) {
            let vehicle = itinerary.vehicle_id;
            let body = itinerary.to_string();
            info!("{body}");
            let Some(recipient) = itinerary.recipient else {
                report.skipped.push(vehicle);
                continue;
            };
            let notification = Notification {
                sender: self.config.sender.clone(),
                recipient,
                subject: self.config.subject.clone(),
                body,
            };
            match self.sink.send(&notification) {
                Ok(()) => report.sent.push(vehicle),
                Err(e) => {
                    warn!("vehicle {vehicle}: {e}");
                    report.failed.push(vehicle);
                }
            }
        }
        info!("{}", Summary::new(problem, solution));
        report
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::error::CollaboratorError;
    use crate::models::{Node, Vehicle};
    use crate::search::{SearchConfig, Solver};

    #[derive(Default)]
    struct Outbox {
        sent: RefCell<Vec<Notification>>,
    }

    impl NotificationSink for Outbox {
        fn send(&self, notification: &Notification) -> Result<(), CollaboratorError> {
            if notification.recipient.ends_with("@down.example") {
                return Err(CollaboratorError::DeliveryFailed {
                    recipient: notification.recipient.clone(),
                    reason: "mailbox unavailable".into(),
                });
            }
            self.sent.borrow_mut().push(notification.clone());
            Ok(())
        }
    }

    fn problem(capacities: &[i64], contacts: &[Option<&str>]) -> Problem {
        let dm = DistanceMatrix::from_rows(vec![vec![0, 4, 6], vec![4, 0, 3], vec![6, 3, 0]])
            .expect("valid");
        let vehicles = capacities
            .iter()
            .zip(contacts)
            .enumerate()
            .map(|(i, (&c, contact))| {
                let v = Vehicle::new(i, c).with_name(format!("driver {i}"));
                match contact {
                    Some(addr) => v.with_contact(*addr),
                    None => v,
                }
            })
            .collect();
        Problem::new(
            0,
            vec![
                Node::depot(0).with_address("Depot"),
                Node::new(1, 5).with_address("Rue A"),
                Node::new(2, 7).with_address("Rue B"),
            ],
            vehicles,
            dm,
        )
        .expect("valid problem")
    }

    fn solve(p: &Problem) -> SolveOutcome {
        Solver::new(SearchConfig::default().without_time_limit().with_max_iterations(20)).solve(p)
    }

    #[test]
    fn test_one_message_per_vehicle() {
        let p = problem(&[10, 10], &[Some("a@example.com"), Some("b@example.com")]);
        let dispatcher = Dispatcher::new(Outbox::default(), DispatchConfig::default());
        let report = dispatcher.dispatch(&p, &solve(&p));
        assert_eq!(report.sent, vec![0, 1]);
        let sent = dispatcher.sink().sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].subject, "Your delivery route");
        assert_eq!(sent[0].sender, None);
        assert!(sent[0].body.starts_with("Hello driver 0,"));
        assert!(sent.iter().any(|n| n.body.contains("Parcels to Rue B")));
    }

    #[test]
    fn test_skips_and_failures() {
        let p = problem(&[10, 10], &[None, Some("b@down.example")]);
        let dispatcher = Dispatcher::new(Outbox::default(), DispatchConfig::default());
        let report = dispatcher.dispatch(&p, &solve(&p));
        assert_eq!(report.skipped, vec![0]);
        assert_eq!(report.failed, vec![1]);
        assert!(report.sent.is_empty());
    }

    #[test]
    fn test_infeasible_sends_nothing() {
        let p = problem(&[4, 4], &[Some("a@example.com"), Some("b@example.com")]);
        let outcome = solve(&p);
        assert!(outcome.is_infeasible());
        let dispatcher = Dispatcher::new(
            Outbox::default(),
            DispatchConfig::default()
                .with_sender("dispatch@example.com")
                .with_subject("Route"),
        );
        let report = dispatcher.dispatch(&p, &outcome);
        assert_eq!(report, DispatchReport::default());
        assert!(dispatcher.sink().sent.borrow().is_empty());
    }
}
