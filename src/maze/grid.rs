/// Flat row-major storage for any per-cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: u16, height: u16, value: T) -> Self {
        let data = vec![value; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Converts a flat index back into an `(x, y)` coordinate.
    pub fn unravel_index(&self, index: usize) -> (u16, u16) {
        let width = self.width as usize;
        ((index % width) as u16, (index / width) as u16)
    }

    /// Iterates over every cell together with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &value)| (self.unravel_index(i), value))
    }

    /// Replaces every cell on the outer ring with `value`.
    pub fn fill_boundary(&mut self, value: T) {
        let (width, height) = (self.width, self.height);
        (0..height).for_each(|y| {
            (0..width).for_each(|x| {
                if self.is_boundary(x, y) {
                    self[(x, y)] = value;
                }
            })
        });
    }

    /// Replaces every cell matching `predicate` with `value`.
    pub fn replace_where(&mut self, predicate: impl Fn(T) -> bool, value: T) {
        self.data
            .iter_mut()
            .filter(|cell| predicate(**cell))
            .for_each(|cell| *cell = value);
    }
}

impl<T: Copy> std::ops::Index<(u16, u16)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T: Copy> std::ops::IndexMut<(u16, u16)> for Grid<T> {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 7, 0u8);
        grid[(2, 3)] = 9;
        assert_eq!(grid[(2, 3)], 9);
        assert_eq!(grid.data()[3 * 5 + 2], 9);
        assert_eq!(grid.unravel_index(3 * 5 + 2), (2, 3));
    }

    #[test]
    fn test_fill_boundary() {
        let mut grid = Grid::new(5, 5, false);
        grid.fill_boundary(true);
        assert_eq!(grid.iter().filter(|&(_, v)| v).count(), 16);
        assert!(!grid[(1, 1)]);
        assert!(grid[(4, 2)]);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5, ());
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(grid.is_in_bounds((4, 4)));
    }
}
