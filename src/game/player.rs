use crate::maze::Coord;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The coordinate one step away from `from`, or `None` if it would leave the `u8` range.
    pub fn step(self, from: Coord) -> Option<Coord> {
        let (x, y) = from;
        match self {
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Down => Some((x, y.checked_add(1)?)),
            Direction::Left => Some((x.checked_sub(1)?, y)),
            Direction::Right => Some((x.checked_add(1)?, y)),
        }
    }
}

pub struct Player {
    /// Tracks where the player currently is
    position: Coord,
    /// Every position the player has stood on, starting with the entry
    trail: Vec<Coord>,
    /// One point per successful move
    score: u32,
    show_trail: bool,
}

impl Player {
    pub fn new(start: Coord) -> Self {
        Player {
            position: start,
            trail: vec![start],
            score: 0,
            show_trail: true,
        }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn trail(&self) -> &[Coord] {
        &self.trail
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn show_trail(&self) -> bool {
        self.show_trail
    }

    pub fn toggle_trail(&mut self) {
        self.show_trail = !self.show_trail;
    }

    /// Moves to an already validated position.
    pub(super) fn advance(&mut self, to: Coord) {
        self.position = to;
        self.trail.push(to);
        self.score += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_saturates_at_edges() {
        assert_eq!(Direction::Up.step((3, 0)), None);
        assert_eq!(Direction::Left.step((0, 3)), None);
        assert_eq!(Direction::Right.step((u8::MAX, 0)), None);
        assert_eq!(Direction::Down.step((2, 2)), Some((2, 3)));
        assert_eq!(Direction::Right.step((2, 2)), Some((3, 2)));
    }

    #[test]
    fn test_advance_records_trail_and_score() {
        let mut player = Player::new((0, 0));
        player.advance((1, 0));
        player.advance((1, 1));
        assert_eq!(player.position(), (1, 1));
        assert_eq!(player.trail(), &[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(player.score(), 2);
    }

    #[test]
    fn test_toggle_trail() {
        let mut player = Player::new((0, 0));
        assert!(player.show_trail());
        player.toggle_trail();
        assert!(!player.show_trail());
    }
}
