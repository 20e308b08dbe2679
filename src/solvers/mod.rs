use std::collections::{HashMap, HashSet};

mod frontier;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Maze},
};
use frontier::Frontier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    BreadthFirst,
    DepthFirst,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::BreadthFirst => write!(f, "Breadth-First Search (BFS)"),
            SearchMode::DepthFirst => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

/// Outcome of one traversal run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Search {
    /// Expanded vertices in discovery order, without duplicates. Never holds the goal.
    pub explored: Vec<Coord>,
    /// Maps each discovered vertex to the vertex it was discovered from.
    pub predecessors: HashMap<Coord, Coord>,
    /// Solution path ordered from the goal back to the start.
    pub path: Vec<Coord>,
}

/// Searches from the maze entry to its exit.
pub fn search(maze: &Maze, mode: SearchMode) -> Result<Search> {
    search_between(maze, maze.entry(), maze.exit(), mode)
}

/// Traverses tree edges from `start` until `goal` is popped from the frontier.
///
/// When `start == goal` the result is the single-vertex path `[start]` with
/// nothing explored.
pub fn search_between(maze: &Maze, start: Coord, goal: Coord, mode: SearchMode) -> Result<Search> {
    for coord in [start, goal] {
        if !maze.is_in_bounds(coord) {
            return Err(MazeError::VertexNotFound {
                coord,
                width: maze.width(),
                height: maze.height(),
            });
        }
    }

    let mut explored = Vec::new();
    let mut explored_set = HashSet::new();
    let mut predecessors = HashMap::new();
    let mut frontier = Frontier::new(mode);
    frontier.push(start);

    while let Some(next) = frontier.pop() {
        if next == goal {
            let path = reconstruct_path(&predecessors, start, goal)?;
            tracing::debug!(
                "[solver] {} explored {} vertices, path length {}",
                mode,
                explored.len(),
                path.len()
            );
            return Ok(Search {
                explored,
                predecessors,
                path,
            });
        }

        for neighbor in maze.neighbors(next) {
            if explored_set.contains(&neighbor) || predecessors.contains_key(&neighbor) {
                continue;
            }
            // Only vertices that lead somewhere new are recorded, so leaves never are
            if explored_set.insert(next) {
                explored.push(next);
            }
            predecessors.insert(neighbor, next);
            frontier.push(neighbor);
        }
    }

    Err(MazeError::GoalUnreachable { start, goal })
}

/// Walks predecessor links back from `goal` to `start`.
///
/// The returned path starts at `goal` and ends at `start`.
pub fn reconstruct_path(
    predecessors: &HashMap<Coord, Coord>,
    start: Coord,
    goal: Coord,
) -> Result<Vec<Coord>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        // Longer than every recorded link means the chain loops
        if path.len() > predecessors.len() {
            return Err(MazeError::BrokenPredecessorChain(current));
        }
        current = *predecessors
            .get(&current)
            .ok_or(MazeError::BrokenPredecessorChain(current))?;
        path.push(current);
    }
    Ok(path)
}
