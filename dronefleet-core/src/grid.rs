//! Integer grid coordinates and the distance metric shared by the planner.
//!
//! The grid is unbounded, unweighted and 4-connected. The depot sits at the
//! origin and is both the start and the mandatory return point of every
//! delivery.

use geo::Coord;

/// A point on the integer delivery grid.
pub type GridPoint = Coord<i64>;

/// The depot every vehicle departs from and returns to.
///
/// # Examples
/// ```
/// use dronefleet_core::DEPOT;
///
/// assert_eq!((DEPOT.x, DEPOT.y), (0, 0));
/// ```
pub const DEPOT: GridPoint = Coord { x: 0, y: 0 };

/// Manhattan distance `|x1 - x2| + |y1 - y2|` between two grid points.
///
/// Used both as the A* heuristic and as the scheduler's feasibility metric.
/// Each axis uses `abs_diff`, so opposite extremes of `i64` do not overflow
/// the per-axis term.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{DEPOT, manhattan};
///
/// assert_eq!(manhattan(DEPOT, Coord { x: 3, y: -4 }), 7);
/// ```
#[must_use]
pub const fn manhattan(a: GridPoint, b: GridPoint) -> u64 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}
