use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Grid, Maze, validate_dimensions},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `width` x `height` cells.
///
/// Both dimensions must be odd and at least 5; callers normalise user input first.
/// The result has an entrance hole above `(1, 1)`, an exit hole near the bottom-right
/// corner and a fully connected, acyclic interior.
pub fn generate_maze<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Result<Maze> {
    let (width, height) = validate_dimensions(width, height)?;
    tracing::info!("[generate] carving {}x{} maze", width, height);

    let mut grid = Grid::new(width, height, Cell::Wall);
    // Keep the outer ring distinct from interior walls while carving
    grid.fill_boundary(Cell::Boundary);
    grid[(1, 0)] = Cell::Path;

    let max_depth = recursive_backtrack(&mut grid, (1, 1), rng);
    tracing::debug!("[generate] frontier stack peaked at {} junctions", max_depth);

    grid.replace_where(Cell::is_transient, Cell::Wall);
    grid[(1, 1)] = Cell::Path;

    let exit = carve_exit(&mut grid, rng)?;
    tracing::debug!("[generate] exit carved at {:?}", exit);

    let maze = Maze::from_parts(grid, exit);
    tracing::trace!("[generate] finished maze:\n{}", maze);
    Ok(maze)
}

/// Opens a hole in the boundary next to the first carved candidate near the
/// bottom-right corner and returns its coordinate.
fn carve_exit<R: Rng + ?Sized>(grid: &mut Grid<Cell>, rng: &mut R) -> Result<(u16, u16)> {
    let (w, h) = (grid.width(), grid.height());

    let hole = if grid[(w - 2, h - 2)] == Cell::Path {
        // The corner junction touches both the bottom and the right edge
        if rng.random_bool(0.5) {
            (w - 2, h - 1)
        } else {
            (w - 1, h - 2)
        }
    } else {
        [
            ((w - 2, h - 3), (w - 1, h - 3)),
            ((w - 2, h - 4), (w - 1, h - 4)),
            ((w - 3, h - 2), (w - 3, h - 1)),
            ((w - 4, h - 2), (w - 4, h - 1)),
        ]
        .into_iter()
        .find(|&(candidate, _)| grid[candidate] == Cell::Path)
        .map(|(_, hole)| hole)
        .ok_or(MazeError::UnreachableExit {
            width: w,
            height: h,
        })?
    };

    grid[hole] = Cell::Path;
    Ok(hole)
}
