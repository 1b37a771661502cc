//! Path solvers.
//!
//! Both solvers work the same way from the outside: they label reachable
//! cells of the grid with a distance from the start point and then hand off
//! to a shared reconstruction pass that descends those labels from the end
//! point back to the start. They differ only in how the labeling frontier is
//! ordered, which is what [`Solver::label_distances`] captures.

pub mod astar;
pub mod wave;

use log::debug;

use crate::error::{MazeError, Result};
use crate::geom::{Point, DIRECTIONS};
use crate::grid::Grid;
use crate::Maze;

pub use astar::AStarSolver;
pub use wave::WaveSolver;

/// A path search over a maze grid.
pub trait Solver {
    /// Label cell distances from `start`, stopping once `end` has been
    /// expanded. Fails with [`MazeError::CalculationFailed`] when `end` is
    /// unreachable from `start`.
    fn label_distances(&self, grid: &mut Grid, start: Point, end: Point) -> Result<()>;

    /// Run the full search on a maze: validate that a grid and both
    /// endpoints exist, label distances, and reconstruct the path.
    ///
    /// The returned points are ordered from the end point back to the
    /// start point; reverse for start-to-end order.
    fn find_path(&self, maze: &mut Maze) -> Result<Vec<Point>> {
        let start = maze.start_point();
        let end = maze.end_point();
        let grid = maze.grid_mut().ok_or_else(MazeError::no_grid)?;
        let start = start.ok_or_else(|| {
            MazeError::DataNotProvided("the start point is not set".to_string())
        })?;
        let end = end
            .ok_or_else(|| MazeError::DataNotProvided("the end point is not set".to_string()))?;
        self.label_distances(grid, start, end)?;
        let path = descend_distances(grid, start, end)?;
        debug!("found a path of {} points from {} to {}", path.len(), end, start);
        Ok(path)
    }
}

/// Walk from `end` back to `start`, at each step moving to the first
/// neighbour (in [`DIRECTIONS`] order) whose label is exactly one less than
/// the current cell's.
///
/// A dead end can only occur if the grid was mutated between labeling and
/// reconstruction; it surfaces as [`MazeError::CalculationFailed`].
fn descend_distances(grid: &Grid, start: Point, end: Point) -> Result<Vec<Point>> {
    let mut path = vec![end];
    let mut point = end;
    while point != start {
        let wanted = match grid.get(point).distance {
            Some(d) if d > 0 => d - 1,
            _ => return Err(dead_end(point)),
        };
        let step = DIRECTIONS
            .into_iter()
            .map(|dir| point + dir)
            .find(|&n| grid.in_bounds(n) && grid.get(n).distance == Some(wanted));
        match step {
            Some(next) => {
                path.push(next);
                point = next;
            }
            None => return Err(dead_end(point)),
        }
    }
    Ok(path)
}

fn dead_end(point: Point) -> MazeError {
    MazeError::CalculationFailed(format!(
        "distance labels do not descend from {point}; was the grid mutated mid-search?"
    ))
}
