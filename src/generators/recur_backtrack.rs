use rand::Rng;

use crate::maze::{Cell, Grid, get_neighbors};

/// Carves a perfect maze into `grid` with randomized depth-first backtracking.
///
/// Every junction reachable from `start` through `Wall` junctions is visited exactly once,
/// so the carved cells form a spanning tree. The traversal keeps its own stack instead of
/// recursing, which keeps very large grids off the call stack.
///
/// Returns the deepest the frontier stack got, for diagnostics.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    grid: &mut Grid<Cell>,
    start: (u16, u16),
    rng: &mut R,
) -> usize {
    grid[start] = Cell::Path;

    // The stack holds the current route from the start to the active junction
    let mut stack = vec![start];
    let mut max_depth = stack.len();

    while let Some(&cell) = stack.last() {
        let neighbors = get_neighbors(cell, grid)
            .filter(|n| grid[n.junction] == Cell::Wall)
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack to the previous junction
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid[neighbor.corridor] = Cell::Path;
        grid[neighbor.junction] = Cell::Path;
        stack.push(neighbor.junction);
        max_depth = max_depth.max(stack.len());
    }

    max_depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_visits_every_junction() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(9, 7, Cell::Wall);
        grid.fill_boundary(Cell::Boundary);
        recursive_backtrack(&mut grid, (1, 1), &mut rng);

        for y in (1..7).step_by(2) {
            for x in (1..9).step_by(2) {
                assert_eq!(grid[(x, y)], Cell::Path, "junction ({x}, {y}) not carved");
            }
        }
        // 4 x 3 junctions joined by a tree of 11 corridors
        assert_eq!(grid.iter().filter(|&(_, c)| c == Cell::Path).count(), 12 + 11);
    }

    #[test]
    fn test_never_touches_boundary() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(11, 11, Cell::Wall);
        grid.fill_boundary(Cell::Boundary);
        recursive_backtrack(&mut grid, (1, 1), &mut rng);
        assert!(
            grid.iter()
                .filter(|&((x, y), _)| grid.is_boundary(x, y))
                .all(|(_, c)| c == Cell::Boundary)
        );
    }

    #[test]
    fn test_reports_stack_depth() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(5, 5, Cell::Wall);
        let depth = recursive_backtrack(&mut grid, (1, 1), &mut rng);
        // Four junctions in a 5x5 grid, so the route can be between 2 and 4 deep
        assert!((2..=4).contains(&depth));
    }
}
