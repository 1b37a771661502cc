//! Breadth-first "wave" search.

use fxhash::FxHashSet;
use log::warn;

use crate::error::{MazeError, Result};
use crate::geom::{Point, DIRECTIONS};
use crate::grid::Grid;
use crate::solver::Solver;

/// Expands the frontier layer by layer from the start cell, labeling every
/// cell with its exact BFS distance. Because all passable cells have unit
/// cost, the reconstructed path is a true shortest path.
///
/// The solver does not reset previous search state itself; call
/// [`Maze::clear`](crate::Maze::clear) between runs on the same grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaveSolver;

impl Solver for WaveSolver {
    fn label_distances(&self, grid: &mut Grid, start: Point, end: Point) -> Result<()> {
        let mut distance: u32 = 0;
        let mut frontier = vec![start];
        let mut path_found = false;
        while !frontier.is_empty() && !path_found {
            let mut staged: Vec<Point> = Vec::new();
            let mut staged_set: FxHashSet<Point> = FxHashSet::default();
            for &point in &frontier {
                if point == end {
                    path_found = true;
                }
                grid.get_mut(point).distance = Some(distance);
                for dir in DIRECTIONS {
                    let neighbour = point + dir;
                    let cell = grid.get(neighbour);
                    // First staging wins; later frontier cells may see the
                    // same neighbour but must not re-stage it.
                    if cell.passable && !cell.visited && staged_set.insert(neighbour) {
                        staged.push(neighbour);
                    }
                }
                grid.get_mut(point).visited = true;
            }
            frontier = staged;
            distance += 1;
        }
        if !path_found {
            warn!("wave search exhausted its frontier before reaching {end}");
            return Err(MazeError::CalculationFailed(
                "no path exists between the start and end points".to_string(),
            ));
        }
        Ok(())
    }
}
