//! Test-only builders and a deterministic `PathFinder` used by unit and
//! behaviour tests.

use geo::Coord;

use crate::{GridPoint, Order, PathFinder, RecordId, Vehicle};

/// Build an available vehicle with a known-valid speed.
///
/// # Panics
///
/// Panics when `speed` is not a positive finite number or a budget is
/// negative.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "test builders fail loudly on invalid fixtures"
)]
pub fn vehicle(id: impl Into<RecordId>, speed: f64, capacity: f64, max_range: f64) -> Vehicle {
    Vehicle::new(id, speed, capacity, max_range).expect("test vehicle must be valid")
}

/// Build an order delivering to `(x, y)`.
#[must_use]
pub fn order(id: impl Into<RecordId>, x: i64, y: i64, weight: f64, deadline: u64) -> Order {
    Order::new(id, Coord { x, y }, weight, deadline)
}

/// Whether two quantities agree to within floating-point noise.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub const fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

/// `PathFinder` that walks the x axis first, then the y axis.
///
/// Produces the same shape every time, which keeps route assertions exact.
#[derive(Debug, Default, Clone, Copy)]
pub struct AxisFirstPathFinder;

impl PathFinder for AxisFirstPathFinder {
    fn find_path(&self, start: GridPoint, goal: GridPoint) -> Vec<GridPoint> {
        let mut path = Vec::new();
        let mut current = start;
        while current.x != goal.x {
            current.x += (goal.x - current.x).signum();
            path.push(current);
        }
        while current.y != goal.y {
            current.y += (goal.y - current.y).signum();
            path.push(current);
        }
        path
    }
}
