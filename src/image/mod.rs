mod bmp;

pub use bmp::{BmpHeader, FILE_HEADER_SIZE, INFO_HEADER_SIZE, row_stride, write_bmp};

use crate::{
    error::{MazeError, Result},
    maze::Maze,
};

/// Maps every cell of `maze` to an RGB triple, in the same row-major order as the grid.
///
/// Walls are black, paths white and solution cells gray. A transient cell state means
/// the grid was never finished, so it is reported instead of being given a colour.
pub fn to_pixels(maze: &Maze) -> Result<Vec<u8>> {
    let grid = maze.grid();
    let mut pixels = Vec::with_capacity(grid.data().len() * 3);
    for ((x, y), cell) in grid.iter() {
        let rgb = cell
            .rgb()
            .ok_or(MazeError::TransientCell { x, y, cell })?;
        pixels.extend_from_slice(&rgb);
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Cell, Grid};

    #[test]
    fn test_pixel_order_and_colors() {
        let mut grid = Grid::new(5, 5, Cell::Wall);
        grid[(1, 0)] = Cell::Path;
        grid[(2, 0)] = Cell::Solution;
        let maze = Maze::from_parts(grid, (3, 4));
        let pixels = to_pixels(&maze).unwrap();
        assert_eq!(pixels.len(), 5 * 5 * 3);
        assert_eq!(&pixels[0..3], &[0, 0, 0]);
        assert_eq!(&pixels[3..6], &[255, 255, 255]);
        assert_eq!(&pixels[6..9], &[128, 128, 128]);
    }

    #[test]
    fn test_transient_cell_is_rejected() {
        let mut grid = Grid::new(5, 5, Cell::Wall);
        grid[(4, 2)] = Cell::Boundary;
        let maze = Maze::from_parts(grid, (3, 4));
        assert!(matches!(
            to_pixels(&maze),
            Err(MazeError::TransientCell {
                x: 4,
                y: 2,
                cell: Cell::Boundary
            })
        ));
    }
}
