//! # maze_pathfinding
//!
//! Generates perfect (acyclic, fully connected) rectangular mazes with
//! randomized depth-first carving and finds paths through them with two
//! interchangeable solvers: a breadth-first [`WaveSolver`] that labels exact
//! BFS layers, and an [`AStarSolver`] biased by a squared-Euclidean
//! heuristic. Note that this assumes a uniform-cost grid: every passable
//! cell costs one step.
//!
//! The maze uses the doubled grid encoding: a `width x height` maze of
//! rooms is stored as a `(2*width+1) x (2*height+1)` [`Grid`] where rooms
//! sit on odd coordinates and the cells between them act as walls or
//! carved passages. [`Maze::to_raw`] converts room coordinates into this
//! raw space, which is also the space start and end points live in.
//!
//! ```
//! use maze_pathfinding::{Maze, Point, WaveSolver};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut maze = Maze::new();
//! maze.set_width("8")?;
//! maze.set_height("6")?;
//! maze.generate_with(&mut StdRng::seed_from_u64(1));
//! maze.set_start_point(Some(Maze::to_raw(Point::new(0, 0))))?;
//! maze.set_end_point(Some(Maze::to_raw(Point::new(7, 5))))?;
//! let path = maze.find_path(&WaveSolver)?; // ordered end -> start
//! assert!(!path.is_empty());
//! # Ok::<(), maze_pathfinding::MazeError>(())
//! ```

mod error;
pub mod geom;
pub mod grid;
pub mod solver;


use core::fmt;

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

pub use crate::error::{MazeError, Result};
pub use crate::geom::{Point, Vector, DIRECTIONS};
pub use crate::grid::{Cell, Grid};
pub use crate::solver::{AStarSolver, Solver, WaveSolver};

const DEFAULT_WIDTH: i32 = 10;
const DEFAULT_HEIGHT: i32 = 10;

/// A rectangular maze: caller-set room dimensions, the carved [`Grid`]
/// (absent until [`generate`](Maze::generate) runs) and the optional search
/// endpoints, both held in raw grid coordinates.
///
/// All mutation assumes exclusive single-caller ownership; nothing here is
/// synchronized.
#[derive(Clone, Debug)]
pub struct Maze {
    width: i32,
    height: i32,
    grid: Option<Grid>,
    start_point: Option<Point>,
    end_point: Option<Point>,
}

impl Default for Maze {
    fn default() -> Maze {
        Maze {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid: None,
            start_point: None,
            end_point: None,
        }
    }
}

impl Maze {
    /// A maze with the default 10x10 dimensions and no grid yet.
    pub fn new() -> Maze {
        Maze::default()
    }

    /// Room-space width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Room-space height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The carved grid, if [`generate`](Maze::generate) has run.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Mutable access to the carved grid. Mutating passability directly can
    /// disconnect the maze; searches on such a grid fail with
    /// [`MazeError::CalculationFailed`] rather than misbehave.
    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        self.grid.as_mut()
    }

    pub fn start_point(&self) -> Option<Point> {
        self.start_point
    }

    pub fn end_point(&self) -> Option<Point> {
        self.end_point
    }

    /// Set the maze width from raw text input. Rejects non-integer and
    /// non-positive values without touching the stored width.
    pub fn set_width(&mut self, value: &str) -> Result<()> {
        self.width = parse_dimension(value)?;
        Ok(())
    }

    /// Set the maze height from raw text input. Rejects non-integer and
    /// non-positive values without touching the stored height.
    pub fn set_height(&mut self, value: &str) -> Result<()> {
        self.height = parse_dimension(value)?;
        Ok(())
    }

    /// Convert room coordinates to raw grid coordinates.
    pub fn to_raw(room: Point) -> Point {
        room * 2 + Vector::new(1, 1)
    }

    /// Carve a fresh maze with a thread-local RNG.
    pub fn generate(&mut self) {
        self.generate_with(&mut rand::thread_rng());
    }

    /// Carve a fresh maze using the given random source, replacing any
    /// previous grid and resetting both endpoints to `None` (an endpoint
    /// validated against an old grid says nothing about the new one).
    ///
    /// Randomized depth-first carving: starting from the origin room, keep
    /// stepping to a random uncarved neighbouring room, opening the wall in
    /// between, and backtrack when no uncarved neighbour remains. The
    /// result is a spanning tree over the rooms: every room is reachable
    /// and exactly `width * height - 1` walls are open.
    pub fn generate_with<R: Rng>(&mut self, rng: &mut R) {
        let raw_width = 2 * self.width as usize + 1;
        let raw_height = 2 * self.height as usize + 1;
        let mut grid = Grid::new(raw_width, raw_height);
        grid.get_mut(Maze::to_raw(Point::new(0, 0))).passable = true;

        let mut stack = vec![Point::new(0, 0)];
        let mut directions = DIRECTIONS;
        while let Some(&room) = stack.last() {
            directions.shuffle(rng);
            let uncarved = directions.into_iter().find(|&dir| {
                let target = room + dir;
                self.room_in_bounds(target) && !grid.get(Maze::to_raw(target)).passable
            });
            match uncarved {
                Some(dir) => {
                    let target = room + dir;
                    grid.get_mut(Maze::to_raw(target)).passable = true;
                    grid.get_mut(Maze::to_raw(room) + dir).passable = true;
                    stack.push(target);
                }
                None => {
                    stack.pop();
                }
            }
        }

        info!("generated a {}x{} maze", self.width, self.height);
        self.grid = Some(grid);
        self.start_point = None;
        self.end_point = None;
    }

    fn room_in_bounds(&self, room: Point) -> bool {
        room.x >= 0 && room.y >= 0 && room.x < self.width && room.y < self.height
    }

    /// Set or clear the start point. `None` always succeeds; `Some` requires
    /// a generated grid and a passable cell, and leaves the previous value
    /// in place when rejected.
    pub fn set_start_point(&mut self, point: Option<Point>) -> Result<()> {
        self.validate_endpoint(point)?;
        self.start_point = point;
        Ok(())
    }

    /// Set or clear the end point, with the same validation as
    /// [`set_start_point`](Maze::set_start_point).
    pub fn set_end_point(&mut self, point: Option<Point>) -> Result<()> {
        self.validate_endpoint(point)?;
        self.end_point = point;
        Ok(())
    }

    fn validate_endpoint(&self, point: Option<Point>) -> Result<()> {
        let Some(p) = point else { return Ok(()) };
        let grid = self.grid.as_ref().ok_or_else(MazeError::no_grid)?;
        if !grid.in_bounds(p) || !grid.get(p).passable {
            return Err(MazeError::InvalidArgument(format!(
                "point {p} is not a passable cell of the maze"
            )));
        }
        Ok(())
    }

    /// Reset the transient search state of every cell.
    pub fn clear(&mut self) -> Result<()> {
        let grid = self.grid.as_mut().ok_or_else(MazeError::no_grid)?;
        grid.clear_all();
        Ok(())
    }

    /// Run a search between the configured endpoints. The returned points
    /// are ordered from the end point back to the start point.
    pub fn find_path<S: Solver>(&mut self, solver: &S) -> Result<Vec<Point>> {
        solver.find_path(self)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.grid {
            Some(grid) => write!(f, "{grid}"),
            None => write!(f, "<maze not generated>"),
        }
    }
}

fn parse_dimension(value: &str) -> Result<i32> {
    let parsed: i32 = value.trim().parse().map_err(|_| {
        MazeError::InvalidArgument(format!(
            "bad dimension input {value:?}: expected an integer"
        ))
    })?;
    if parsed < 1 {
        return Err(MazeError::InvalidArgument(format!(
            "dimension must be greater than zero, got {parsed}"
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_maze(width: i32, height: i32, seed: u64) -> Maze {
        let mut maze = Maze::new();
        maze.set_width(&width.to_string()).unwrap();
        maze.set_height(&height.to_string()).unwrap();
        maze.generate_with(&mut StdRng::seed_from_u64(seed));
        maze
    }

    #[test]
    fn defaults() {
        let maze = Maze::new();
        assert_eq!(maze.width(), 10);
        assert_eq!(maze.height(), 10);
        assert!(maze.grid().is_none());
        assert!(maze.start_point().is_none());
        assert!(maze.end_point().is_none());
    }

    #[test]
    fn dimension_parsing_accepts_padded_integers() {
        let mut maze = Maze::new();
        maze.set_width(" 7 ").unwrap();
        assert_eq!(maze.width(), 7);
    }

    #[test]
    fn dimension_parsing_rejections_keep_prior_value() {
        let mut maze = Maze::new();
        maze.set_width("5").unwrap();
        for bad in ["0", "-3", "abc", "2.5", ""] {
            let err = maze.set_width(bad).unwrap_err();
            assert!(matches!(err, MazeError::InvalidArgument(_)), "input {bad:?}");
            assert_eq!(maze.width(), 5, "input {bad:?} mutated the width");
        }
    }

    #[test]
    fn to_raw_maps_rooms_onto_odd_coordinates() {
        assert_eq!(Maze::to_raw(Point::new(0, 0)), Point::new(1, 1));
        assert_eq!(Maze::to_raw(Point::new(2, 1)), Point::new(5, 3));
    }

    #[test]
    fn generate_sizes_the_raw_grid() {
        let maze = seeded_maze(4, 3, 0);
        let grid = maze.grid().unwrap();
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 7);
    }

    #[test]
    fn generated_maze_is_a_spanning_tree() {
        for seed in 0..16 {
            let maze = seeded_maze(6, 5, seed);
            let grid = maze.grid().unwrap();

            let mut rooms = 0;
            let mut open_walls = 0;
            for (y, row) in grid.rows().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    if !cell.passable {
                        continue;
                    }
                    match (x % 2 == 1, y % 2 == 1) {
                        (true, true) => rooms += 1,
                        (false, false) => panic!("carved a corner post at ({x}, {y})"),
                        _ => open_walls += 1,
                    }
                }
            }
            assert_eq!(rooms, 30, "seed {seed}");
            assert_eq!(open_walls, 30 - 1, "seed {seed}");
        }
    }

    #[test]
    fn one_by_one_maze_is_a_single_room() {
        let maze = seeded_maze(1, 1, 0);
        let grid = maze.grid().unwrap();
        assert!(grid.get(Point::new(1, 1)).passable);
        let passable = grid
            .rows()
            .flatten()
            .filter(|cell| cell.passable)
            .count();
        assert_eq!(passable, 1);
    }

    #[test]
    fn border_cells_stay_blocked() {
        let maze = seeded_maze(5, 5, 2);
        let grid = maze.grid().unwrap();
        let (w, h) = (grid.width() as i32, grid.height() as i32);
        for x in 0..w {
            assert!(!grid.get(Point::new(x, 0)).passable);
            assert!(!grid.get(Point::new(x, h - 1)).passable);
        }
        for y in 0..h {
            assert!(!grid.get(Point::new(0, y)).passable);
            assert!(!grid.get(Point::new(w - 1, y)).passable);
        }
    }

    #[test]
    fn endpoint_requires_a_grid() {
        let mut maze = Maze::new();
        let err = maze.set_start_point(Some(Point::new(1, 1))).unwrap_err();
        assert!(matches!(err, MazeError::DataNotProvided(_)));
        assert!(maze.start_point().is_none());
    }

    #[test]
    fn endpoint_on_blocked_cell_is_rejected_without_mutation() {
        let mut maze = seeded_maze(3, 3, 1);
        // Corner posts are never carved.
        let err = maze.set_start_point(Some(Point::new(0, 0))).unwrap_err();
        assert!(matches!(err, MazeError::InvalidArgument(_)));
        assert!(maze.start_point().is_none());

        let good = Maze::to_raw(Point::new(1, 1));
        maze.set_start_point(Some(good)).unwrap();
        let err = maze.set_start_point(Some(Point::new(-4, 2))).unwrap_err();
        assert!(matches!(err, MazeError::InvalidArgument(_)));
        assert_eq!(maze.start_point(), Some(good));
    }

    #[test]
    fn endpoint_can_always_be_cleared() {
        let mut maze = Maze::new();
        maze.set_end_point(None).unwrap();

        let mut maze = seeded_maze(2, 2, 0);
        maze.set_end_point(Some(Maze::to_raw(Point::new(1, 1))))
            .unwrap();
        maze.set_end_point(None).unwrap();
        assert!(maze.end_point().is_none());
    }

    #[test]
    fn generate_resets_endpoints() {
        let mut maze = seeded_maze(3, 3, 4);
        maze.set_start_point(Some(Maze::to_raw(Point::new(0, 0))))
            .unwrap();
        maze.set_end_point(Some(Maze::to_raw(Point::new(2, 2))))
            .unwrap();
        maze.generate_with(&mut StdRng::seed_from_u64(5));
        assert!(maze.start_point().is_none());
        assert!(maze.end_point().is_none());
    }

    #[test]
    fn clear_without_grid_is_rejected() {
        let mut maze = Maze::new();
        assert!(matches!(
            maze.clear().unwrap_err(),
            MazeError::DataNotProvided(_)
        ));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let a = seeded_maze(6, 6, 77);
        let b = seeded_maze(6, 6, 77);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn display_renders_rows() {
        let maze = seeded_maze(2, 2, 0);
        let rendered = maze.to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.lines().all(|line| line.split('\t').count() == 5));

        assert_eq!(Maze::new().to_string(), "<maze not generated>");
    }
}
