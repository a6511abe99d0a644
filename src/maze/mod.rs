pub mod cell;
mod grid;

use std::fmt;

pub use cell::Cell;
pub use grid::Grid;

use crate::error::{MazeError, Result};

/// Smallest legal width or height of a maze image.
pub const MIN_DIMENSION: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Moves `steps` cells from `coord` in this direction.
    /// Returns `None` when the result would leave a `width` x `height` grid.
    pub fn step(
        self,
        coord: (u16, u16),
        steps: u16,
        width: u16,
        height: u16,
    ) -> Option<(u16, u16)> {
        let (x, y) = coord;
        let moved = match self {
            Direction::North => (Some(x), y.checked_sub(steps)),
            Direction::East => (x.checked_add(steps), Some(y)),
            Direction::South => (Some(x), y.checked_add(steps)),
            Direction::West => (x.checked_sub(steps), Some(y)),
        };
        match moved {
            (Some(nx), Some(ny)) if nx < width && ny < height => Some((nx, ny)),
            _ => None,
        }
    }
}

/// A neighbouring junction two cells away, with the corridor cell in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub direction: Direction,
    pub corridor: (u16, u16),
    pub junction: (u16, u16),
}

/// Get the in-bounds junction neighbours of a cell.
/// A neighbour is the cell two steps away in a cardinal direction; the cell one step away
/// is the corridor that links the two.
pub fn get_neighbors<T: Copy>(
    coord: (u16, u16),
    grid: &Grid<T>,
) -> impl Iterator<Item = Neighbor> {
    let (width, height) = (grid.width(), grid.height());
    Direction::ALL.into_iter().filter_map(move |direction| {
        let junction = direction.step(coord, 2, width, height)?;
        let corridor = direction.step(coord, 1, width, height)?;
        Some(Neighbor {
            direction,
            corridor,
            junction,
        })
    })
}

/// Checks the generator precondition: both dimensions odd and at least [`MIN_DIMENSION`].
pub fn validate_dimensions(width: u32, height: u32) -> Result<(u16, u16)> {
    let valid = |v: u32| v % 2 == 1 && v >= MIN_DIMENSION as u32 && v <= u16::MAX as u32;
    if valid(width) && valid(height) {
        Ok((width as u16, height as u16))
    } else {
        Err(MazeError::InvalidDimensions { width, height })
    }
}

/// A finished maze: a grid of terminal cell states with an entrance hole at the top-left
/// and an exit hole near the bottom-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<Cell>,
    exit: (u16, u16),
}

impl Maze {
    pub(crate) fn from_parts(grid: Grid<Cell>, exit: (u16, u16)) -> Self {
        Maze { grid, exit }
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid<Cell> {
        &mut self.grid
    }

    /// The boundary hole above the start junction.
    pub fn entrance(&self) -> (u16, u16) {
        (1, 0)
    }

    /// The junction every walk through the maze starts from.
    pub fn start(&self) -> (u16, u16) {
        (1, 1)
    }

    /// The boundary hole carved near the bottom-right corner.
    pub fn exit(&self) -> (u16, u16) {
        self.exit
    }

    /// The interior junction in the bottom-right corner, next to the exit.
    pub fn exit_junction(&self) -> (u16, u16) {
        (self.width() - 2, self.height() - 2)
    }

    /// Junctions sit on odd columns of odd rows.
    pub fn is_junction(&self, coord: (u16, u16)) -> bool {
        coord.0 % 2 == 1 && coord.1 % 2 == 1 && self.grid.is_in_bounds(coord)
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.grid.data().iter().filter(|&&c| c == cell).count()
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", self.grid[(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
