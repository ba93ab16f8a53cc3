//! Core domain types and algorithms for the dronefleet planner.
//!
//! The crate exposes two components used in sequence. A [`Scheduler`]
//! binds delivery [`Order`]s to capacity- and range-limited [`Vehicle`]s,
//! and a [`PathFinder`] draws grid routes between the depot and each stop.
//! Everything here is pure: callers own the vehicle and order collections
//! and hand them in explicitly.
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod grid;
pub mod id;
pub mod order;
pub mod path;
#[cfg(feature = "serde")]
pub mod problem;
pub mod report;
pub mod route;
pub mod scheduler;
pub mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use grid::{DEPOT, GridPoint, manhattan};
pub use id::RecordId;
pub use order::Order;
pub use path::{AStarPathFinder, PathFinder, find_path};
#[cfg(feature = "serde")]
pub use problem::{DeliveryProblem, FleetRecord, OrderRecord, ProblemError, VehicleRecord};
pub use report::{AssignmentReport, VehicleAssignment};
pub use route::{DeliveryRoute, RouteStop, plan_route, plan_routes};
pub use scheduler::{AssignmentOutcome, GreedyScheduler, Scheduler, assign};
pub use vehicle::{Leg, Vehicle, VehicleError};
