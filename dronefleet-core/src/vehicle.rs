//! Delivery vehicles and their per-run operational state.
//!
//! A [`Vehicle`] pairs a static capability (speed, payload capacity and
//! round-trip range) with the state the scheduler accumulates while binding
//! orders. Only the scheduler mutates that state; reporting and routing read
//! it afterwards.

use thiserror::Error;

use crate::{DEPOT, GridPoint, Order, RecordId, manhattan};

/// Errors returned by [`Vehicle::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    /// Speed was zero, negative or not finite.
    #[error("vehicle {id} speed must be a positive finite number, got {speed}")]
    InvalidSpeed {
        /// Offending vehicle.
        id: RecordId,
        /// Rejected speed.
        speed: f64,
    },
    /// Payload capacity was negative or not finite.
    #[error("vehicle {id} payload capacity must be a non-negative finite number, got {capacity}")]
    InvalidCapacity {
        /// Offending vehicle.
        id: RecordId,
        /// Rejected capacity.
        capacity: f64,
    },
    /// Range was negative or not finite.
    #[error("vehicle {id} range must be a non-negative finite number, got {range}")]
    InvalidRange {
        /// Offending vehicle.
        id: RecordId,
        /// Rejected range.
        range: f64,
    },
}

/// Distances of a single delivery: out to the destination and back to base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// Distance from the vehicle's position to the destination.
    pub outbound: u64,
    /// Distance from the destination back to the depot.
    pub inbound: u64,
}

impl Leg {
    /// Round-trip distance charged against the range budget.
    #[must_use]
    pub const fn round_trip(self) -> u64 {
        self.outbound.saturating_add(self.inbound)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "grid distances are charged against a floating-point range"
)]
const fn distance_units(distance: u64) -> f64 {
    distance as f64
}

const fn is_quantity(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// A capacity- and range-limited delivery vehicle.
///
/// # Examples
/// ```
/// use dronefleet_core::{DEPOT, Vehicle};
///
/// # fn main() -> Result<(), dronefleet_core::VehicleError> {
/// let vehicle = Vehicle::new(1_u64, 10.0, 5.0, 20.0)?;
/// assert!(vehicle.is_available());
/// assert_eq!(vehicle.remaining_capacity(), 5.0);
/// assert_eq!(vehicle.position(), DEPOT);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: RecordId,
    speed: f64,
    capacity: f64,
    max_range: f64,
    available: bool,
    position: GridPoint,
    remaining_capacity: f64,
    remaining_range: f64,
    travel_time: f64,
    orders: Vec<RecordId>,
    total_distance: u64,
}

impl Vehicle {
    /// Validate and construct an available vehicle parked at the depot.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::InvalidSpeed`] when `speed` is not a finite,
    /// strictly positive number, since travel time divides by it.
    /// Returns [`VehicleError::InvalidCapacity`] or
    /// [`VehicleError::InvalidRange`] when either budget is negative or not
    /// finite. Fractional budgets are accepted.
    pub fn new(
        id: impl Into<RecordId>,
        speed: f64,
        capacity: f64,
        max_range: f64,
    ) -> Result<Self, VehicleError> {
        let record_id = id.into();
        if !speed.is_finite() || speed <= 0.0 {
            return Err(VehicleError::InvalidSpeed {
                id: record_id,
                speed,
            });
        }
        if !is_quantity(capacity) {
            return Err(VehicleError::InvalidCapacity {
                id: record_id,
                capacity,
            });
        }
        if !is_quantity(max_range) {
            return Err(VehicleError::InvalidRange {
                id: record_id,
                range: max_range,
            });
        }
        Ok(Self {
            id: record_id,
            speed,
            capacity,
            max_range,
            available: true,
            position: DEPOT,
            remaining_capacity: capacity,
            remaining_range: max_range,
            travel_time: 0.0,
            orders: Vec::new(),
            total_distance: 0,
        })
    }

    /// Set whether the vehicle may take orders in this run.
    #[must_use]
    pub const fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Vehicle identifier.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Travel speed in distance units per time unit.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Static payload capacity.
    #[must_use]
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Static round-trip range.
    #[must_use]
    pub const fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Whether the vehicle may take orders.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Current position; always the depot between deliveries.
    #[must_use]
    pub const fn position(&self) -> GridPoint {
        self.position
    }

    /// Payload capacity not yet committed to bound orders.
    #[must_use]
    pub const fn remaining_capacity(&self) -> f64 {
        self.remaining_capacity
    }

    /// Range budget not yet committed to bound orders.
    #[must_use]
    pub const fn remaining_range(&self) -> f64 {
        self.remaining_range
    }

    /// Accumulated outbound travel time.
    #[must_use]
    pub const fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Bound order ids in assignment order, which is also delivery order.
    #[must_use]
    pub fn orders(&self) -> &[RecordId] {
        &self.orders
    }

    /// Accumulated round-trip distance over all bound orders.
    #[must_use]
    pub const fn total_distance(&self) -> u64 {
        self.total_distance
    }

    /// Distances for delivering `destination` from the current position.
    #[must_use]
    pub const fn leg_to(&self, destination: GridPoint) -> Leg {
        Leg {
            outbound: manhattan(self.position, destination),
            inbound: manhattan(destination, DEPOT),
        }
    }

    /// Return the delivery leg when the vehicle can take `order` right now.
    ///
    /// A vehicle is feasible when it is available, its remaining capacity
    /// covers the order weight and the round trip fits its remaining range.
    #[must_use]
    pub const fn feasible_leg(&self, order: &Order) -> Option<Leg> {
        if !self.available || self.remaining_capacity < order.weight() {
            return None;
        }
        let leg = self.leg_to(order.destination());
        if distance_units(leg.round_trip()) <= self.remaining_range {
            Some(leg)
        } else {
            None
        }
    }

    /// Commit `order` to this vehicle using a leg from [`Self::feasible_leg`].
    ///
    /// The vehicle returns to the depot after every delivery, so each bound
    /// order is charged as an independent round trip.
    #[expect(
        clippy::float_arithmetic,
        reason = "budgets and travel time are floating-point quantities"
    )]
    pub(crate) fn bind(&mut self, order: &Order, leg: Leg) {
        let round_trip = leg.round_trip();
        self.orders.push(order.id().clone());
        self.total_distance = self.total_distance.saturating_add(round_trip);
        self.position = DEPOT;
        self.remaining_capacity = (self.remaining_capacity - order.weight()).max(0.0);
        self.remaining_range = (self.remaining_range - distance_units(round_trip)).max(0.0);
        self.travel_time += distance_units(leg.outbound) / self.speed;
    }
}
