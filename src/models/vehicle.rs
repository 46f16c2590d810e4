//! Vehicle type with capacity and notification details.

/// A vehicle that services one route from the depot.
///
/// The display name and contact are only used by the dispatch layer when
/// addressing the vehicle's itinerary.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Vehicle;
///
/// let v = Vehicle::new(0, 200)
///     .with_name("Alice")
///     .with_contact("alice@example.com");
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 200);
/// assert_eq!(v.name(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: usize,
    capacity: i64,
    name: Option<String>,
    contact: Option<String>,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    pub fn new(id: usize, capacity: i64) -> Self {
        Self {
            id,
            capacity,
            name: None,
            contact: None,
        }
    }

    /// Sets the display name used in the itinerary greeting.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the notification address for this vehicle's driver.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Notification address, if any.
    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    /// Display name, or `vehicle <id>` when none was given.
    pub fn label(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => format!("vehicle {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(0, 200);
        assert_eq!(v.id(), 0);
        assert_eq!(v.capacity(), 200);
        assert!(v.name().is_none());
        assert!(v.contact().is_none());
        assert_eq!(v.label(), "vehicle 0");
    }

    #[test]
    fn test_vehicle_builder() {
        let v = Vehicle::new(1, 100)
            .with_name("Bob")
            .with_contact("bob@example.com");
        assert_eq!(v.capacity(), 100);
        assert_eq!(v.name(), Some("Bob"));
        assert_eq!(v.contact(), Some("bob@example.com"));
        assert_eq!(v.label(), "Bob");
    }
}
