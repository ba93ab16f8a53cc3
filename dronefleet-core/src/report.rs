//! Persistable summary of a completed assignment run.

use crate::{AssignmentOutcome, RecordId, Vehicle};

/// Orders bound to one vehicle, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleAssignment {
    /// Vehicle that delivers the orders.
    pub vehicle_id: RecordId,
    /// Order ids in delivery order.
    pub order_ids: Vec<RecordId>,
    /// Sum of the round-trip distances of those orders.
    pub total_distance: u64,
}

impl From<&Vehicle> for VehicleAssignment {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id().clone(),
            order_ids: vehicle.orders().to_vec(),
            total_distance: vehicle.total_distance(),
        }
    }
}

/// Result structure written after scheduling.
///
/// Only vehicles with at least one order are listed. Dropped orders are
/// serialised only when there are any.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{AssignmentReport, Order, Vehicle, assign};
///
/// # fn main() -> Result<(), dronefleet_core::VehicleError> {
/// let mut fleet = vec![
///     Vehicle::new(1_u64, 10.0, 5.0, 20.0)?,
///     Vehicle::new(2_u64, 5.0, 5.0, 20.0)?,
/// ];
/// let mut orders = vec![Order::new("A", Coord { x: 3, y: 4 }, 5.0, 1)];
/// let outcome = assign(&mut fleet, &mut orders);
///
/// let report = AssignmentReport::from_fleet(&fleet, &outcome);
/// assert_eq!(report.assignments.len(), 1);
/// assert_eq!(report.assignments[0].total_distance, 14);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentReport {
    /// Per-vehicle assignments, in fleet order.
    pub assignments: Vec<VehicleAssignment>,
    /// Orders no vehicle could take.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub unassigned_order_ids: Vec<RecordId>,
}

impl AssignmentReport {
    /// Summarise the fleet state after [`crate::Scheduler::assign`].
    #[must_use]
    pub fn from_fleet(vehicles: &[Vehicle], outcome: &AssignmentOutcome) -> Self {
        Self {
            assignments: vehicles
                .iter()
                .filter(|vehicle| !vehicle.orders().is_empty())
                .map(VehicleAssignment::from)
                .collect(),
            unassigned_order_ids: outcome.unassigned.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign;
    use crate::test_support::{order, vehicle};
    use rstest::rstest;

    #[rstest]
    fn idle_vehicles_are_omitted() {
        let mut fleet = vec![vehicle(1_u64, 5.0, 5.0, 50.0), vehicle(2_u64, 10.0, 5.0, 50.0)];
        let mut orders = vec![order("A", 1, 2, 1.0, 1), order("B", 2, 2, 1.0, 2)];
        let outcome = assign(&mut fleet, &mut orders);

        let report = AssignmentReport::from_fleet(&fleet, &outcome);

        assert_eq!(
            report.assignments,
            vec![VehicleAssignment {
                vehicle_id: RecordId::from(2_u64),
                order_ids: vec![RecordId::from("A"), RecordId::from("B")],
                total_distance: 14,
            }]
        );
        assert!(report.unassigned_order_ids.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_expected_shape() {
        let report = AssignmentReport {
            assignments: vec![VehicleAssignment {
                vehicle_id: RecordId::from(1_u64),
                order_ids: vec![RecordId::from("A")],
                total_distance: 14,
            }],
            unassigned_order_ids: Vec::new(),
        };
        let value = serde_json::to_value(&report).expect("serialise report");
        assert_eq!(
            value,
            serde_json::json!({
                "assignments": [
                    { "vehicle_id": 1, "order_ids": ["A"], "total_distance": 14 }
                ]
            })
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_dropped_orders_when_present() {
        let report = AssignmentReport {
            assignments: Vec::new(),
            unassigned_order_ids: vec![RecordId::from("Z")],
        };
        let value = serde_json::to_value(&report).expect("serialise report");
        assert_eq!(value["unassigned_order_ids"], serde_json::json!(["Z"]));
    }
}
