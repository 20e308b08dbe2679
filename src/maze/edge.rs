use std::hash::{Hash, Hasher};

use super::Coord;

/// Index of an edge in a maze's tree-edge list.
pub type EdgeId = usize;

/// Undirected edge between two vertices.
///
/// The weight only orders candidates during generation. Equality and hashing
/// ignore it and treat `(u, v)` and `(v, u)` as the same edge.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: Coord,
    pub to: Coord,
    pub weight: u64,
}

impl Edge {
    pub fn new(from: Coord, to: Coord, weight: u64) -> Self {
        Edge { from, to, weight }
    }

    /// Endpoints ordered so that the smaller coordinate comes first.
    fn key(&self) -> (Coord, Coord) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    /// Whether `coord` is one of the endpoints.
    pub fn touches(&self, coord: Coord) -> bool {
        self.from == coord || self.to == coord
    }

    /// The endpoint opposite `coord`, or `None` if `coord` is not an endpoint.
    pub fn other(&self, coord: Coord) -> Option<Coord> {
        if self.from == coord {
            Some(self.to)
        } else if self.to == coord {
            Some(self.from)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
