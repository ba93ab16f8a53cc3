//! Greedy, deadline-prioritised order assignment.
//!
//! Orders are considered earliest deadline first. Each one goes to the
//! fastest vehicle that can take it under the joint capacity, range and
//! availability constraints; equal speeds keep the vehicle listed first.
//! The result is intentionally greedy and makes no optimality claim.

use crate::vehicle::Leg;
use crate::{Order, RecordId, Vehicle};

/// Orders the scheduler could not place.
///
/// Dropping an infeasible order is not an error. The outcome only makes the
/// drop observable; it has no effect on the orders that were placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentOutcome {
    /// Dropped order ids in the order they were evaluated.
    pub unassigned: Vec<RecordId>,
}

impl AssignmentOutcome {
    /// Whether every order found a vehicle.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// Bind orders to vehicles, mutating vehicle state in place.
///
/// Implementations may reorder `orders` while processing them.
pub trait Scheduler {
    /// Assign `orders` to `vehicles`, returning the orders left unplaced.
    fn assign(&self, vehicles: &mut [Vehicle], orders: &mut [Order]) -> AssignmentOutcome;
}

/// Earliest-deadline-first assignment to the fastest feasible vehicle.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{GreedyScheduler, Order, Scheduler, Vehicle};
///
/// # fn main() -> Result<(), dronefleet_core::VehicleError> {
/// let mut vehicles = vec![Vehicle::new(1_u64, 10.0, 5.0, 20.0)?];
/// let mut orders = vec![Order::new("A", Coord { x: 3, y: 4 }, 5.0, 1)];
/// let outcome = GreedyScheduler.assign(&mut vehicles, &mut orders);
///
/// assert!(outcome.is_complete());
/// assert_eq!(vehicles[0].remaining_range(), 6.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyScheduler;

impl Scheduler for GreedyScheduler {
    fn assign(&self, vehicles: &mut [Vehicle], orders: &mut [Order]) -> AssignmentOutcome {
        // Stable: equal deadlines keep their input order.
        orders.sort_by_key(Order::deadline);

        let mut outcome = AssignmentOutcome::default();
        for order in orders.iter() {
            match select_vehicle(vehicles, order) {
                Some((index, leg)) => {
                    if let Some(vehicle) = vehicles.get_mut(index) {
                        log::debug!(
                            "order {} -> vehicle {} (round trip {})",
                            order.id(),
                            vehicle.id(),
                            leg.round_trip()
                        );
                        vehicle.bind(order, leg);
                    }
                }
                None => {
                    log::debug!("order {} has no feasible vehicle; dropped", order.id());
                    outcome.unassigned.push(order.id().clone());
                }
            }
        }
        outcome
    }
}

/// Assign `orders` to `vehicles` with [`GreedyScheduler`].
pub fn assign(vehicles: &mut [Vehicle], orders: &mut [Order]) -> AssignmentOutcome {
    GreedyScheduler.assign(vehicles, orders)
}

/// Pick the fastest feasible vehicle, keeping the earliest on equal speed.
fn select_vehicle(vehicles: &[Vehicle], order: &Order) -> Option<(usize, Leg)> {
    let mut best: Option<(usize, Leg, f64)> = None;
    for (index, vehicle) in vehicles.iter().enumerate() {
        let Some(leg) = vehicle.feasible_leg(order) else {
            continue;
        };
        let faster = best.is_none_or(|(_, _, best_speed)| vehicle.speed() > best_speed);
        if faster {
            best = Some((index, leg, vehicle.speed()));
        }
    }
    best.map(|(index, leg, _)| (index, leg))
}

#[cfg(test)]
mod tests;
