use crate::{
    error::{MazeError, Result},
    generators::union_find::UnionFind,
    maze::Edge,
};

/// Runs Kruskal's algorithm over `sorted` candidates, lowest weight first.
///
/// An edge is accepted when its endpoints have different representatives and
/// rejected when it would close a cycle. Stops once `width * height - 1` edges
/// are accepted. The returned edges keep acceptance order.
pub fn build_spanning_tree(width: u8, height: u8, sorted: Vec<Edge>) -> Result<Vec<Edge>> {
    let required = (width as usize * height as usize).saturating_sub(1);
    let mut uf = UnionFind::new(width, height);
    let mut tree = Vec::with_capacity(required);

    let mut worklist = sorted.into_iter();
    while tree.len() < required {
        let Some(edge) = worklist.next() else {
            return Err(MazeError::Disconnected {
                accepted: tree.len(),
                required,
            });
        };

        let root_to = uf.find(edge.to)?;
        let root_from = uf.find(edge.from)?;
        if root_to != root_from {
            uf.union(root_to, root_from)?;
            tree.push(edge);
        }
    }

    tracing::debug!(
        "[kruskal] built {}x{} spanning tree with {} edges",
        width,
        height,
        tree.len()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{candidate_edges, get_rng, sort_by_weight};
    use crate::maze::Coord;

    const A: Coord = (0, 0);
    const B: Coord = (0, 1);
    const C: Coord = (0, 2);
    const D: Coord = (1, 0);
    const E: Coord = (1, 1);
    const F: Coord = (1, 2);

    #[test]
    fn test_fixed_weights_tree() {
        let mut edges = vec![
            Edge::new(A, B, 30),
            Edge::new(B, C, 40),
            Edge::new(F, D, 50),
            Edge::new(E, C, 15),
            Edge::new(A, E, 50),
            Edge::new(B, E, 35),
            Edge::new(C, D, 25),
            Edge::new(B, F, 50),
        ];
        sort_by_weight(&mut edges);
        let tree = build_spanning_tree(2, 3, edges).unwrap();
        assert_eq!(
            tree,
            vec![
                Edge::new(E, C, 15),
                Edge::new(C, D, 25),
                Edge::new(A, B, 30),
                Edge::new(B, E, 35),
                Edge::new(F, D, 50),
            ]
        );
    }

    #[test]
    fn test_tree_has_no_cycle() {
        let mut rng = get_rng(Some(5));
        let mut candidates = candidate_edges(9, 7, &mut rng);
        sort_by_weight(&mut candidates);
        let tree = build_spanning_tree(9, 7, candidates).unwrap();
        assert_eq!(tree.len(), 62);

        // Re-adding the tree edges must never join two already connected vertices
        let mut uf = UnionFind::new(9, 7);
        for edge in &tree {
            let (a, b) = (uf.find(edge.from).unwrap(), uf.find(edge.to).unwrap());
            assert_ne!(a, b);
            uf.union(a, b).unwrap();
        }
    }

    #[test]
    fn test_accepted_weights_ascend() {
        let mut candidates = candidate_edges(12, 12, &mut get_rng(Some(9)));
        sort_by_weight(&mut candidates);
        let tree = build_spanning_tree(12, 12, candidates).unwrap();
        assert!(tree.windows(2).all(|pair| pair[0].weight <= pair[1].weight));
    }

    #[test]
    fn test_single_vertex_needs_no_edges() {
        let tree = build_spanning_tree(1, 1, Vec::new()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_disconnected_candidates() {
        let edges = vec![Edge::new(A, B, 1), Edge::new(A, B, 2)];
        assert_eq!(
            build_spanning_tree(2, 3, edges),
            Err(MazeError::Disconnected {
                accepted: 1,
                required: 5
            })
        );
    }
}
