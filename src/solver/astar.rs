//! A* search with a squared-Euclidean heuristic.

use log::warn;

use crate::error::{MazeError, Result};
use crate::geom::{Point, DIRECTIONS};
use crate::grid::Grid;
use crate::solver::Solver;

/// Best-first expansion ordered by squared Euclidean distance to the end
/// point added to the path-so-far label.
///
/// The squared heuristic over-estimates the remaining unit-step distance
/// beyond one cell, so the result is a valid path but not necessarily a
/// shortest one. The open list is a plain vector that is stably re-sorted
/// after every expansion; equal-heuristic ties keep insertion order, which
/// is part of the observable behaviour and is kept deliberately instead of
/// an incremental priority queue.
///
/// Unlike [`WaveSolver`](crate::WaveSolver), this solver resets previous
/// search state itself before labeling.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarSolver;

impl AStarSolver {
    fn heuristic(p: Point, end: Point) -> i64 {
        let dx = (end.x - p.x) as i64;
        let dy = (end.y - p.y) as i64;
        dx * dx + dy * dy
    }
}

impl Solver for AStarSolver {
    fn label_distances(&self, grid: &mut Grid, start: Point, end: Point) -> Result<()> {
        grid.clear_all();
        let mut open = vec![start];
        grid.get_mut(start).distance = Some(0);
        let mut path_found = false;
        while !open.is_empty() && !path_found {
            let point = open[0];
            if point == end {
                path_found = true;
            }
            // Every open-list member is labeled when staged.
            let distance = grid.get(point).distance.unwrap();
            for dir in DIRECTIONS {
                let neighbour = point + dir;
                let cell = grid.get(neighbour);
                if cell.passable && cell.distance.is_none() && !open.contains(&neighbour) {
                    open.push(neighbour);
                    grid.get_mut(neighbour).distance = Some(distance + 1);
                }
            }
            open.remove(0);
            open.sort_by_key(|&p| Self::heuristic(p, end));
        }
        if !path_found {
            warn!("A* search exhausted its open list before reaching {end}");
            return Err(MazeError::CalculationFailed(
                "no path exists between the start and end points".to_string(),
            ));
        }
        Ok(())
    }
}
