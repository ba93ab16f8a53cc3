//! Grid routes for drawing a vehicle's deliveries.
//!
//! A route chains [`PathFinder`] legs from the depot through each bound
//! destination in delivery order and back to the depot. Each leg starts
//! where the previous one ended, so the polyline reads as one multi-stop
//! tour. The scheduler still charges every order as its own round trip;
//! the polyline is for display only.

use geo::LineString;

use crate::{DEPOT, GridPoint, Order, PathFinder, RecordId, Vehicle};

/// A delivery destination along a route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    /// Delivered order.
    pub order_id: RecordId,
    /// Destination of that order.
    pub location: GridPoint,
}

/// Drawable route for one vehicle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRoute {
    /// Vehicle flying the route.
    pub vehicle_id: RecordId,
    /// Stops in delivery order.
    pub stops: Vec<RouteStop>,
    /// Grid polyline starting and ending at the depot.
    pub path: LineString<i64>,
}

/// Build the route of one vehicle from its bound orders.
///
/// Order ids that do not appear in `orders` are skipped with a warning.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{AStarPathFinder, Order, Vehicle, assign, plan_route};
///
/// # fn main() -> Result<(), dronefleet_core::VehicleError> {
/// let mut fleet = vec![Vehicle::new(1_u64, 10.0, 5.0, 20.0)?];
/// let mut orders = vec![Order::new("A", Coord { x: 2, y: 1 }, 1.0, 1)];
/// assign(&mut fleet, &mut orders);
///
/// let route = plan_route(&fleet[0], &orders, &AStarPathFinder);
/// assert_eq!(route.stops.len(), 1);
/// // Depot, three steps out, three steps back.
/// assert_eq!(route.path.0.len(), 7);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn plan_route<P>(vehicle: &Vehicle, orders: &[Order], finder: &P) -> DeliveryRoute
where
    P: PathFinder + ?Sized,
{
    let mut points = vec![DEPOT];
    let mut stops = Vec::with_capacity(vehicle.orders().len());
    let mut cursor = DEPOT;

    for order_id in vehicle.orders() {
        let Some(order) = orders.iter().find(|order| order.id() == order_id) else {
            log::warn!(
                "vehicle {} references unknown order {order_id}; skipping stop",
                vehicle.id()
            );
            continue;
        };
        let destination = order.destination();
        points.extend(finder.find_path(cursor, destination));
        stops.push(RouteStop {
            order_id: order_id.clone(),
            location: destination,
        });
        cursor = destination;
    }
    points.extend(finder.find_path(cursor, DEPOT));

    DeliveryRoute {
        vehicle_id: vehicle.id().clone(),
        stops,
        path: LineString::new(points),
    }
}

/// Build routes for every vehicle with at least one bound order.
#[must_use]
pub fn plan_routes<P>(vehicles: &[Vehicle], orders: &[Order], finder: &P) -> Vec<DeliveryRoute>
where
    P: PathFinder + ?Sized,
{
    vehicles
        .iter()
        .filter(|vehicle| !vehicle.orders().is_empty())
        .map(|vehicle| plan_route(vehicle, orders, finder))
        .collect()
}
