use crate::{
    maze::{Coord, Grid},
    solvers::Search,
};

/// Presentation flags for one vertex. Kept apart from the maze structure.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    /// Revealed as explored by the search replay
    pub scanned: bool,
    /// Revealed as part of the solution path
    pub in_solution_path: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counter is -1: nothing revealed yet
    Idle,
    /// One explored vertex is revealed per tick
    RevealingExplored,
    /// One path vertex is revealed per tick, starting from the goal
    RevealingPath,
    /// Everything is revealed and further ticks do nothing
    Settled,
}

/// Tick-driven replay of a finished search.
pub struct Animation {
    /// -1 while idle, then the index of the entry revealed by the latest tick
    counter: i64,
    search: Option<Search>,
    display: Grid<DisplayState>,
}

impl Animation {
    /// An animation with nothing to replay. Ticks are ignored until [`Animation::start`].
    pub fn idle(width: u8, height: u8) -> Self {
        Animation {
            counter: -1,
            search: None,
            display: Grid::new(width, height, DisplayState::default()),
        }
    }

    /// Replaces any previous replay with `search` and clears every display flag.
    pub fn start(&mut self, search: Search) {
        self.clear_flags();
        self.counter = -1;
        self.search = Some(search);
    }

    /// Drops the current replay and clears every display flag.
    pub fn reset(&mut self) {
        self.clear_flags();
        self.counter = -1;
        self.search = None;
    }

    fn clear_flags(&mut self) {
        self.display
            .iter_mut()
            .for_each(|state| *state = DisplayState::default());
    }

    /// Total number of ticks that change a flag.
    fn total(&self) -> i64 {
        self.search
            .as_ref()
            .map_or(0, |s| (s.explored.len() + s.path.len()) as i64)
    }

    /// Advances the counter by one and reveals at most one vertex.
    pub fn tick(&mut self) {
        let Some(search) = &self.search else {
            return;
        };
        self.counter = self.counter.saturating_add(1);

        let idx = self.counter as usize;
        let explored_len = search.explored.len();
        let target = if idx < explored_len {
            search.explored.get(idx).map(|&c| (c, true))
        } else {
            search.path.get(idx - explored_len).map(|&c| (c, false))
        };

        if let Some((coord, is_explored)) = target
            && let Some(state) = self.display.get_mut(coord)
        {
            if is_explored {
                state.scanned = true;
            } else {
                state.in_solution_path = true;
            }
        }
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn phase(&self) -> Phase {
        let explored_len = self
            .search
            .as_ref()
            .map_or(0, |s| s.explored.len() as i64);
        match self.counter {
            c if c < 0 => Phase::Idle,
            c if c < explored_len => Phase::RevealingExplored,
            c if c < self.total() => Phase::RevealingPath,
            _ => Phase::Settled,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase() == Phase::Settled
    }

    /// The search being replayed, if any.
    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn display(&self, coord: Coord) -> DisplayState {
        self.display.get(coord).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_search() -> Search {
        Search {
            explored: vec![(0, 0), (1, 0), (0, 1)],
            path: vec![(1, 1), (0, 1), (0, 0)],
            ..Default::default()
        }
    }

    fn scanned(animation: &Animation) -> usize {
        animation.display.iter().filter(|s| s.scanned).count()
    }

    fn in_path(animation: &Animation) -> usize {
        animation.display.iter().filter(|s| s.in_solution_path).count()
    }

    #[test]
    fn test_idle_ticks_do_nothing() {
        let mut animation = Animation::idle(2, 2);
        animation.tick();
        animation.tick();
        assert_eq!(animation.counter(), -1);
        assert_eq!(animation.phase(), Phase::Idle);
        assert_eq!(scanned(&animation), 0);
    }

    #[test]
    fn test_reveals_explored_then_path() {
        let mut animation = Animation::idle(2, 2);
        animation.start(sample_search());
        assert_eq!(animation.phase(), Phase::Idle);

        for k in 1..=3 {
            animation.tick();
            assert_eq!(animation.counter(), k - 1);
            assert_eq!(scanned(&animation), k as usize);
            assert_eq!(in_path(&animation), 0);
        }
        assert!(animation.display((0, 1)).scanned);
        assert!(!animation.display((1, 1)).scanned);

        animation.tick();
        assert_eq!(animation.phase(), Phase::RevealingPath);
        assert!(animation.display((1, 1)).in_solution_path);
        assert_eq!(in_path(&animation), 1);

        animation.tick();
        animation.tick();
        assert_eq!(in_path(&animation), 3);
        assert_eq!(animation.phase(), Phase::RevealingPath);
        animation.tick();
        assert_eq!(animation.phase(), Phase::Settled);
    }

    #[test]
    fn test_ticks_past_the_end_are_noops() {
        let mut animation = Animation::idle(2, 2);
        animation.start(sample_search());
        (0..6).for_each(|_| animation.tick());
        let before = animation.display.clone();
        (0..10).for_each(|_| animation.tick());
        assert_eq!(animation.display, before);
        assert!(animation.is_settled());
    }

    #[test]
    fn test_phase_boundaries() {
        let mut animation = Animation::idle(2, 2);
        animation.start(sample_search());
        let phases = (0..7)
            .map(|_| {
                animation.tick();
                animation.phase()
            })
            .collect::<Vec<_>>();
        assert_eq!(
            phases,
            vec![
                Phase::RevealingExplored,
                Phase::RevealingExplored,
                Phase::RevealingExplored,
                Phase::RevealingPath,
                Phase::RevealingPath,
                Phase::RevealingPath,
                Phase::Settled,
            ]
        );
    }

    #[test]
    fn test_restart_clears_flags() {
        let mut animation = Animation::idle(2, 2);
        animation.start(sample_search());
        (0..6).for_each(|_| animation.tick());
        animation.start(sample_search());
        assert_eq!(animation.counter(), -1);
        assert_eq!(scanned(&animation), 0);
        assert_eq!(in_path(&animation), 0);

        animation.reset();
        assert!(animation.search().is_none());
        animation.tick();
        assert_eq!(animation.counter(), -1);
    }

    #[test]
    fn test_single_vertex_replay() {
        let mut animation = Animation::idle(1, 1);
        animation.start(Search {
            path: vec![(0, 0)],
            ..Default::default()
        });
        animation.tick();
        assert!(animation.display((0, 0)).in_solution_path);
        assert!(!animation.display((0, 0)).scanned);
        animation.tick();
        assert!(animation.is_settled());
    }
}
