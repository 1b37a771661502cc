//! Dense cell storage for the doubled maze grid.

use std::fmt;

use itertools::Itertools;

use crate::geom::Point;

/// A single grid cell: static passability plus the transient state written
/// by a search ([`distance`](Cell::distance) label and
/// [`visited`](Cell::visited) flag).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub passable: bool,
    pub distance: Option<u32>,
    pub visited: bool,
}

impl Cell {
    /// Reset the transient search state, leaving passability untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.distance = None;
        self.visited = false;
    }
}

/// A rectangular grid of [`Cell`]s in the doubled maze encoding: rooms on
/// odd coordinates, walls and passages between them, and an impassable
/// one-cell margin on every side. The margin is what lets carving and the
/// searches step in any direction from a passable cell without bounds
/// checks.
///
/// Addressed exclusively by [`Point`]; an out-of-range point is a
/// programming error and panics. Arbitrary caller-supplied points only
/// enter through the endpoint setters on [`Maze`](crate::Maze), which
/// validate them first.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given raw dimensions with every cell impassable.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Raw width (cells per row).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raw height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        assert!(
            self.in_bounds(p),
            "point {} outside {}x{} grid",
            p,
            self.width,
            self.height
        );
        p.y as usize * self.width + p.x as usize
    }

    #[inline]
    pub fn get(&self, p: Point) -> &Cell {
        &self.cells[self.index(p)]
    }

    #[inline]
    pub fn get_mut(&mut self, p: Point) -> &mut Cell {
        let ix = self.index(p);
        &mut self.cells[ix]
    }

    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        let ix = self.index(p);
        self.cells[ix] = cell;
    }

    /// Reset the transient search state of every cell.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Iterate over rows in row-major (y-major, x-minor) order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }
}

impl fmt::Display for Grid {
    /// Cell-by-cell dump: `.` for passable, `#` for blocked, cells joined
    /// by tabs and rows by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.passable { "." } else { "#" })
                    .join("\t")
            })
            .join("\n");
        write!(f, "{}", rendered)
    }
}
