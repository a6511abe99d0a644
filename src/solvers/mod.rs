use rand::Rng;

mod dfs;

pub use dfs::solve_dfs;

use crate::{
    error::Result,
    maze::{Direction, Maze},
};

/// Search annotation kept next to the grid while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trail {
    /// The junction the search started from.
    Root,
    /// Reached from the junction lying two cells away in this direction.
    Parent(Direction),
}

/// Solves `maze` and returns a copy with the route from entrance to exit marked as
/// [`Cell::Solution`](crate::maze::Cell::Solution). The input maze is left untouched.
pub fn solve_maze<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> Result<Maze> {
    tracing::info!(
        "[solve] searching {}x{} maze from {:?} to {:?}",
        maze.width(),
        maze.height(),
        maze.start(),
        maze.exit_junction()
    );
    solve_dfs(maze, rng)
}
