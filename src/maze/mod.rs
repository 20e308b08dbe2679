pub mod edge;
pub mod grid;

use rand::Rng;

use crate::{
    error::{MazeError, Result},
    generators,
};
pub use edge::{Edge, EdgeId};
pub use grid::Grid;

/// `(column, row)` position of a vertex.
pub type Coord = (u8, u8);

/// Structural vertex data: its position and the tree edges touching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    coord: Coord,
    edges: Vec<EdgeId>,
}

impl Vertex {
    fn new(coord: Coord) -> Self {
        Vertex {
            coord,
            edges: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Ids of the tree edges incident to this vertex.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

/// A perfect maze: a spanning tree over a rectangular grid of vertices.
pub struct Maze {
    vertices: Grid<Vertex>,
    edges: Vec<Edge>,
}

impl Maze {
    /// Creates a maze with every vertex isolated.
    pub fn new(width: u8, height: u8) -> Self {
        Maze {
            vertices: Grid::from_fn(width, height, Vertex::new),
            edges: Vec::new(),
        }
    }

    /// Generates a random perfect maze with Kruskal's algorithm.
    pub fn generate<R: Rng>(width: u8, height: u8, rng: &mut R) -> Result<Self> {
        let mut candidates = generators::candidate_edges(width, height, rng);
        generators::sort_by_weight(&mut candidates);
        let tree = generators::build_spanning_tree(width, height, candidates)?;
        Maze::from_tree_edges(width, height, tree)
    }

    /// Builds a maze from already chosen tree edges and wires the adjacency of every vertex.
    ///
    /// Every endpoint must lie inside the grid. Each edge lands in the adjacency
    /// list of both of its endpoints.
    pub fn from_tree_edges(width: u8, height: u8, edges: Vec<Edge>) -> Result<Self> {
        let mut maze = Maze::new(width, height);
        for (id, edge) in edges.iter().enumerate() {
            for coord in [edge.from, edge.to] {
                let vertex = maze
                    .vertices
                    .get_mut(coord)
                    .ok_or(MazeError::VertexNotFound {
                        coord,
                        width,
                        height,
                    })?;
                // A self-loop is only listed once
                if vertex.edges.last() != Some(&id) {
                    vertex.edges.push(id);
                }
            }
        }
        maze.edges = edges;
        Ok(maze)
    }

    pub fn width(&self) -> u8 {
        self.vertices.width()
    }

    pub fn height(&self) -> u8 {
        self.vertices.height()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.vertices.is_in_bounds(coord)
    }

    /// Top-left vertex, where the player and every search start.
    pub fn entry(&self) -> Coord {
        (0, 0)
    }

    /// Bottom-right vertex.
    pub fn exit(&self) -> Coord {
        (self.width().saturating_sub(1), self.height().saturating_sub(1))
    }

    pub fn vertices(&self) -> &Grid<Vertex> {
        &self.vertices
    }

    pub fn vertex(&self, coord: Coord) -> Option<&Vertex> {
        self.vertices.get(coord)
    }

    /// Tree edges, in the order they were accepted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Vertices connected to `coord` by a tree edge. Empty when out of bounds.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.vertex(coord)
            .into_iter()
            .flat_map(|vertex| vertex.edges.iter())
            .filter_map(move |&id| self.edges[id].other(coord))
    }

    /// Whether a tree edge joins `a` and `b`.
    pub fn has_edge(&self, a: Coord, b: Coord) -> bool {
        self.neighbors(a).any(|n| n == b)
    }

    /// Whether `a` and `b` differ by exactly one step along a single axis.
    pub fn is_grid_adjacent(&self, a: Coord, b: Coord) -> bool {
        self.is_in_bounds(a)
            && self.is_in_bounds(b)
            && a.0.abs_diff(b.0) as u16 + a.1.abs_diff(b.1) as u16 == 1
    }

    /// A move is legal when the cells are grid neighbours joined by a tree edge.
    pub fn can_move(&self, from: Coord, to: Coord) -> bool {
        self.is_grid_adjacent(from, to) && self.has_edge(from, to)
    }
}
