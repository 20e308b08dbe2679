use std::collections::VecDeque;

use super::SearchMode;
use crate::maze::Coord;

/// Discovered-but-unexpanded vertices. Always expanded from the front.
pub struct Frontier {
    queue: VecDeque<Coord>,
    mode: SearchMode,
}

impl Frontier {
    pub fn new(mode: SearchMode) -> Self {
        Frontier {
            queue: VecDeque::new(),
            mode,
        }
    }

    /// Breadth-first appends to the back, depth-first prepends to the front.
    pub fn push(&mut self, coord: Coord) {
        match self.mode {
            SearchMode::BreadthFirst => self.queue.push_back(coord),
            SearchMode::DepthFirst => self.queue.push_front(coord),
        }
    }

    pub fn pop(&mut self) -> Option<Coord> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadth_first_is_fifo() {
        let mut frontier = Frontier::new(SearchMode::BreadthFirst);
        frontier.push((0, 0));
        frontier.push((1, 0));
        frontier.push((2, 0));
        assert_eq!(frontier.pop(), Some((0, 0)));
        assert_eq!(frontier.pop(), Some((1, 0)));
    }

    #[test]
    fn test_depth_first_is_lifo() {
        let mut frontier = Frontier::new(SearchMode::DepthFirst);
        frontier.push((0, 0));
        frontier.push((1, 0));
        frontier.push((2, 0));
        assert_eq!(frontier.pop(), Some((2, 0)));
        assert_eq!(frontier.pop(), Some((1, 0)));
        assert_eq!(frontier.pop(), Some((0, 0)));
        assert_eq!(frontier.pop(), None);
    }
}
