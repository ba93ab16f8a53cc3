//! Delivery orders awaiting assignment.

use crate::{GridPoint, RecordId};

/// A package to deliver to a grid destination before a deadline.
///
/// Orders are immutable once built. A lower `deadline` is more urgent.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::Order;
///
/// let order = Order::new("A", Coord { x: 3, y: 4 }, 5.0, 1);
/// assert_eq!(order.weight(), 5.0);
/// assert_eq!(order.destination(), Coord { x: 3, y: 4 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: RecordId,
    destination: GridPoint,
    weight: f64,
    deadline: u64,
}

impl Order {
    /// Construct an order.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        destination: GridPoint,
        weight: f64,
        deadline: u64,
    ) -> Self {
        Self {
            id: id.into(),
            destination,
            weight,
            deadline,
        }
    }

    /// Order identifier.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Delivery destination.
    #[must_use]
    pub const fn destination(&self) -> GridPoint {
        self.destination
    }

    /// Package weight in payload units.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Priority key; lower values are scheduled first.
    #[must_use]
    pub const fn deadline(&self) -> u64 {
        self.deadline
    }
}
