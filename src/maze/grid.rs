use super::Coord;

/// Dense row-major storage addressed by `(x, y)` coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u8,
    height: u8,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u8, height: u8, value: T) -> Self {
        let data = vec![value; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` once per coordinate, in row-major order.
    pub fn from_fn(width: u8, height: u8, mut f: impl FnMut(Coord) -> T) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(&mut f)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Flat index of `coord`. The caller guarantees it is in bounds.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.is_in_bounds(coord) {
            self.data.get(self.ravel_index(coord))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        if self.is_in_bounds(coord) {
            let idx = self.ravel_index(coord);
            self.data.get_mut(idx)
        } else {
            None
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 4, 0u32);
        grid[(2, 3)] = 7;
        assert_eq!(grid[(2, 3)], 7);
        assert_eq!(grid.ravel_index((2, 3)), 17);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5, ());
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
        assert!(grid.get((5, 0)).is_none());
    }

    #[test]
    fn test_from_fn_row_major() {
        let grid = Grid::from_fn(2, 3, |c| c);
        assert_eq!(grid.coords().collect::<Vec<_>>(), grid.iter().copied().collect::<Vec<_>>());
        assert_eq!(grid.len(), 6);
    }
}
