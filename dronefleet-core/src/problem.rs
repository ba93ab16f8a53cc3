//! JSON input schema for a scheduling run.
//!
//! The records mirror the on-disk layout:
//!
//! ```json
//! {
//!   "drones": { "fleet": [
//!     { "id": 1, "speed": 10, "max_payload": 5, "max_distance": 20, "available": true }
//!   ] },
//!   "orders": [
//!     { "id": "A", "delivery_x": 3, "delivery_y": 4, "package_weight": 5, "deadline": 1 }
//!   ]
//! }
//! ```
//!
//! [`DeliveryProblem::into_parts`] validates the records and converts them
//! into the in-memory [`Vehicle`] and [`Order`] collections the scheduler
//! works on.

use std::collections::HashSet;

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Order, RecordId, Vehicle, VehicleError};

/// Errors returned by [`DeliveryProblem::into_parts`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    /// A fleet record described an invalid vehicle.
    #[error(transparent)]
    Vehicle(#[from] VehicleError),
    /// Two fleet records share an identifier.
    #[error("duplicate vehicle id {id}")]
    DuplicateVehicle {
        /// Repeated identifier.
        id: RecordId,
    },
    /// Two order records share an identifier.
    #[error("duplicate order id {id}")]
    DuplicateOrder {
        /// Repeated identifier.
        id: RecordId,
    },
    /// An order weight was negative or not finite.
    #[error("order {id} package weight must be a non-negative finite number, got {weight}")]
    InvalidWeight {
        /// Offending order.
        id: RecordId,
        /// Rejected weight.
        weight: f64,
    },
}

/// A fleet and the orders to distribute across it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryProblem {
    /// Fleet description.
    pub drones: FleetRecord,
    /// Orders awaiting assignment.
    pub orders: Vec<OrderRecord>,
}

/// Wrapper matching the `drones.fleet` nesting of the input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetRecord {
    /// Vehicles in scan order; earlier entries win speed ties.
    pub fleet: Vec<VehicleRecord>,
}

/// A vehicle as described in the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Vehicle identifier.
    pub id: RecordId,
    /// Travel speed.
    pub speed: f64,
    /// Payload capacity; fractional values are allowed.
    pub max_payload: f64,
    /// Round-trip range; fractional values are allowed.
    pub max_distance: f64,
    /// Whether the vehicle may take orders; defaults to `true`.
    #[serde(default = "available_by_default")]
    pub available: bool,
}

const fn available_by_default() -> bool {
    true
}

/// An order as described in the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier.
    pub id: RecordId,
    /// Destination x coordinate.
    pub delivery_x: i64,
    /// Destination y coordinate.
    pub delivery_y: i64,
    /// Package weight; fractional values are allowed.
    pub package_weight: f64,
    /// Priority key; lower is more urgent.
    pub deadline: u64,
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = VehicleError;

    fn try_from(record: VehicleRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            record.id,
            record.speed,
            record.max_payload,
            record.max_distance,
        )?
        .with_availability(record.available))
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = ProblemError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let weight = record.package_weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ProblemError::InvalidWeight {
                id: record.id,
                weight,
            });
        }
        Ok(Self::new(
            record.id,
            Coord {
                x: record.delivery_x,
                y: record.delivery_y,
            },
            weight,
            record.deadline,
        ))
    }
}

impl DeliveryProblem {
    /// Validate the records and build the scheduler's inputs.
    ///
    /// Vehicles keep their input order, which is the speed tie-break order.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::Vehicle`] for an invalid fleet record,
    /// [`ProblemError::InvalidWeight`] for a negative or non-finite package
    /// weight, and [`ProblemError::DuplicateVehicle`] or
    /// [`ProblemError::DuplicateOrder`] when identifiers repeat.
    ///
    /// # Examples
    /// ```
    /// use dronefleet_core::DeliveryProblem;
    ///
    /// let json = r#"{
    ///     "drones": { "fleet": [
    ///         { "id": 1, "speed": 10, "max_payload": 5, "max_distance": 20 }
    ///     ] },
    ///     "orders": [
    ///         { "id": "A", "delivery_x": 3, "delivery_y": 4, "package_weight": 5, "deadline": 1 }
    ///     ]
    /// }"#;
    /// let problem: DeliveryProblem = serde_json::from_str(json).unwrap();
    /// let (vehicles, orders) = problem.into_parts().unwrap();
    /// assert!(vehicles[0].is_available());
    /// assert_eq!(orders.len(), 1);
    /// ```
    pub fn into_parts(self) -> Result<(Vec<Vehicle>, Vec<Order>), ProblemError> {
        let mut vehicle_ids = HashSet::new();
        let mut vehicles = Vec::with_capacity(self.drones.fleet.len());
        for record in self.drones.fleet {
            if !vehicle_ids.insert(record.id.clone()) {
                return Err(ProblemError::DuplicateVehicle { id: record.id });
            }
            vehicles.push(Vehicle::try_from(record)?);
        }

        let mut order_ids = HashSet::new();
        let mut orders = Vec::with_capacity(self.orders.len());
        for record in self.orders {
            if !order_ids.insert(record.id.clone()) {
                return Err(ProblemError::DuplicateOrder { id: record.id });
            }
            orders.push(Order::try_from(record)?);
        }

        Ok((vehicles, orders))
    }
}
