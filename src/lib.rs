//! Facade crate for the dronefleet delivery planner.
//!
//! This crate re-exports the core domain types, the A* path finder and the
//! greedy scheduler. Problem-file decoding is available behind the `serde`
//! feature.

#![forbid(unsafe_code)]

pub use dronefleet_core::{
    AStarPathFinder, AssignmentOutcome, AssignmentReport, DEPOT, DeliveryRoute, GreedyScheduler,
    GridPoint, Leg, Order, PathFinder, RecordId, RouteStop, Scheduler, Vehicle, VehicleAssignment,
    VehicleError, assign, find_path, manhattan, plan_route, plan_routes,
};

#[cfg(feature = "serde")]
pub use dronefleet_core::{DeliveryProblem, ProblemError};
