use rand::Rng;

use super::Trail;
use crate::{
    error::{MazeError, Result},
    maze::{Cell, Grid, Maze, get_neighbors},
};

/// Depth-first search from the start junction to the exit junction.
///
/// Each newly reached junction records the direction back to the junction it was reached
/// from; once the exit junction is pushed the route is rebuilt by following those records
/// back to the root. In a perfect maze that route is the only simple path between the two.
pub fn solve_dfs<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> Result<Maze> {
    let start = maze.start();
    let goal = maze.exit_junction();
    let grid = maze.grid();

    let mut trails: Grid<Option<Trail>> = Grid::new(maze.width(), maze.height(), None);
    trails[start] = Some(Trail::Root);

    let mut stack = vec![start];
    let mut explored = 1usize;
    let mut reached = start == goal;

    while !reached {
        let Some(&cell) = stack.last() else {
            break;
        };

        // Only open corridors leading to junctions the search has not reached yet
        let neighbors = get_neighbors(cell, grid)
            .filter(|n| {
                grid[n.corridor] == Cell::Path
                    && grid[n.junction] == Cell::Path
                    && trails[n.junction].is_none()
            })
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        trails[neighbor.junction] = Some(Trail::Parent(neighbor.direction.opposite()));
        stack.push(neighbor.junction);
        explored += 1;
        reached = neighbor.junction == goal;
    }

    if !reached {
        return Err(MazeError::SolveUnreachable { exit: goal });
    }
    tracing::debug!("[solve] reached exit after exploring {} junctions", explored);

    let mut solved = maze.clone();
    let (width, height) = (maze.width(), maze.height());
    let route = solved.grid_mut();

    // Backtrace from the exit to the root
    let mut current = goal;
    route[current] = Cell::Solution;
    while let Some(Trail::Parent(direction)) = trails[current] {
        let (Some(corridor), Some(parent)) = (
            direction.step(current, 1, width, height),
            direction.step(current, 2, width, height),
        ) else {
            break;
        };
        route[corridor] = Cell::Solution;
        route[parent] = Cell::Solution;
        current = parent;
    }

    // Extend the route through both boundary holes so it spans the image edge to edge
    for hole in [maze.entrance(), maze.exit()] {
        if route[hole] == Cell::Path {
            route[hole] = Cell::Solution;
        }
    }

    tracing::debug!(
        "[solve] solution covers {} cells",
        solved.count(Cell::Solution)
    );
    Ok(solved)
}
