use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
mod union_find;

pub use kruskal::build_spanning_tree;
pub use union_find::UnionFind;

use crate::maze::Edge;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Every right and down adjacency of a `width` x `height` grid, each with an
/// independently drawn weight.
///
/// Yields exactly `width * (height - 1) + (width - 1) * height` edges.
pub fn candidate_edges<R: Rng>(width: u8, height: u8, rng: &mut R) -> Vec<Edge> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then_some(((x, y), (x + 1, y))),
                (y + 1 < height).then_some(((x, y), (x, y + 1))),
            ]
        })
        .flatten()
        .map(|(from, to)| Edge::new(from, to, rng.random()))
        .collect()
}

/// Sorts ascending by weight. Equal weights keep their relative order.
pub fn sort_by_weight(edges: &mut [Edge]) {
    edges.sort_by_key(|edge| edge.weight);
}
