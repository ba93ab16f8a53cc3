//! Shortest paths on the open 4-connected grid.
//!
//! [`AStarPathFinder`] runs A* with unit edge costs and the Manhattan
//! heuristic, which is admissible and consistent on this grid, so every
//! returned path has the minimum number of steps.
//!
//! Paths exclude the start point and include the goal. Equal-priority
//! entries leave the open set in whatever order the heap yields them, so
//! among several shortest paths the one returned is unspecified.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use crate::{GridPoint, manhattan};

/// Unit moves: up, right, down, left.
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Find a route between two grid points.
///
/// Implementations must be pure: the same inputs always describe a path of
/// the same length, and no state is carried between calls.
pub trait PathFinder {
    /// Return the steps from `start` to `goal`, excluding `start`.
    ///
    /// An empty path means no movement is needed (`start == goal`) or that
    /// the goal cannot be reached.
    fn find_path(&self, start: GridPoint, goal: GridPoint) -> Vec<GridPoint>;
}

/// A* search over the unbounded, unobstructed integer lattice.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{AStarPathFinder, DEPOT, PathFinder};
///
/// let path = AStarPathFinder.find_path(DEPOT, Coord { x: 2, y: 1 });
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), Some(&Coord { x: 2, y: 1 }));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AStarPathFinder;

impl PathFinder for AStarPathFinder {
    fn find_path(&self, start: GridPoint, goal: GridPoint) -> Vec<GridPoint> {
        search(start, goal, neighbours)
    }
}

/// A* over whatever successors `expand` yields for each point.
///
/// Returns an empty path when the open set runs dry before `goal` is seen.
fn search<F, I>(start: GridPoint, goal: GridPoint, expand: F) -> Vec<GridPoint>
where
    F: Fn(GridPoint) -> I,
    I: IntoIterator<Item = GridPoint>,
{
    let mut open = BinaryHeap::new();
    let mut came_from: HashMap<GridPoint, GridPoint> = HashMap::new();
    let mut g_score: HashMap<GridPoint, u64> = HashMap::from([(start, 0)]);
    open.push(Reverse(OpenEntry::new(start, 0, goal)));

    while let Some(Reverse(entry)) = open.pop() {
        let current = entry.point;
        if current == goal {
            return reconstruct(&came_from, current);
        }
        // A cheaper route was recorded after this entry was pushed.
        if g_score.get(&current).is_some_and(|&known| entry.g > known) {
            continue;
        }

        let tentative = entry.g.saturating_add(1);
        for neighbour in expand(current) {
            if g_score
                .get(&neighbour)
                .is_none_or(|&known| tentative < known)
            {
                came_from.insert(neighbour, current);
                g_score.insert(neighbour, tentative);
                open.push(Reverse(OpenEntry::new(neighbour, tentative, goal)));
            }
        }
    }

    Vec::new()
}

/// Shortest path from `start` to `goal` using [`AStarPathFinder`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::find_path;
///
/// let here = Coord { x: 4, y: -2 };
/// assert!(find_path(here, here).is_empty());
/// ```
#[must_use]
pub fn find_path(start: GridPoint, goal: GridPoint) -> Vec<GridPoint> {
    AStarPathFinder.find_path(start, goal)
}

/// Open-set entry ordered by `f = g + h` alone.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: u64,
    g: u64,
    point: GridPoint,
}

impl OpenEntry {
    const fn new(point: GridPoint, g: u64, goal: GridPoint) -> Self {
        Self {
            f: g.saturating_add(manhattan(point, goal)),
            g,
            point,
        }
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f)
    }
}

fn neighbours(point: GridPoint) -> impl Iterator<Item = GridPoint> {
    DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
        Some(GridPoint {
            x: point.x.checked_add(dx)?,
            y: point.y.checked_add(dy)?,
        })
    })
}

fn reconstruct(came_from: &HashMap<GridPoint, GridPoint>, goal: GridPoint) -> Vec<GridPoint> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        path.push(current);
        current = previous;
    }
    path.reverse();
    path
}
