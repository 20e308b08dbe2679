use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
};

/// Representative table over every vertex of a grid.
///
/// Each vertex starts as its own representative. Only used while a spanning
/// tree is being built.
pub struct UnionFind {
    parent: Grid<Coord>,
}

impl UnionFind {
    pub fn new(width: u8, height: u8) -> Self {
        UnionFind {
            parent: Grid::from_fn(width, height, |coord| coord),
        }
    }

    /// Follows representative links from `v` until reaching a vertex that is its own representative.
    pub fn find(&self, v: Coord) -> Result<Coord> {
        let mut current = v;
        // A well-formed chain is never longer than the number of vertices
        for _ in 0..=self.parent.len() {
            let next = *self.parent.get(current).ok_or(MazeError::VertexNotFound {
                coord: current,
                width: self.parent.width(),
                height: self.parent.height(),
            })?;
            if next == current {
                return Ok(current);
            }
            current = next;
        }
        Err(MazeError::RepresentativeCycle(v))
    }

    /// Makes `v2` the representative of `v1`. No compression is applied.
    pub fn union(&mut self, v1: Coord, v2: Coord) -> Result<()> {
        if !self.parent.is_in_bounds(v2) {
            return Err(MazeError::VertexNotFound {
                coord: v2,
                width: self.parent.width(),
                height: self.parent.height(),
            });
        }
        let width = self.parent.width();
        let height = self.parent.height();
        let slot = self.parent.get_mut(v1).ok_or(MazeError::VertexNotFound {
            coord: v1,
            width,
            height,
        })?;
        *slot = v2;
        Ok(())
    }

    /// Whether `a` and `b` share a representative.
    pub fn connected(&self, a: Coord, b: Coord) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}
