use std::collections::VecDeque;

use tracing::trace;

use super::direction::Direction;
use super::state::Position;

/// The player's snake.
///
/// The body is the head plus a tail of previously vacated head positions,
/// newest first. The tail only changes length through [`Snake::grow`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Position,
    /// Direction of the last advance
    direction: Direction,
    /// Direction the next advance will take
    next_direction: Direction,
    tail: VecDeque<Position>,
    /// Pixels travelled per advance
    step: i32,
}

impl Snake {
    /// Create a length-1 snake at `head`, moving one cell of `step` pixels
    /// per advance
    pub fn new(head: Position, direction: Direction, step: i32) -> Self {
        Self {
            head,
            direction,
            next_direction: direction,
            tail: VecDeque::new(),
            step,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Tail segments, closest to the head first
    pub fn tail(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.tail.iter()
    }

    /// Head followed by the tail
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().copied())
    }

    /// Number of segments including the head
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// A snake always has a head
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Queue a direction change for the next advance. Reversing onto the
    /// direction of travel is ignored.
    pub fn turn(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            trace!(?direction, current = ?self.direction, "ignored reversing turn");
            return;
        }
        self.next_direction = direction;
    }

    /// Move one cell. The tail shifts as a fixed-length FIFO: the old head
    /// enters at the front and the oldest segment drops off the back.
    pub fn advance(&mut self) {
        self.direction = self.next_direction;

        if !self.tail.is_empty() {
            self.tail.push_front(self.head);
            self.tail.pop_back();
        }

        self.head = self.head.moved_in_direction(self.direction, self.step);
    }

    /// Add a segment at the current head position to the back of the tail
    pub fn grow(&mut self) {
        self.tail.push_back(self.head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: i32 = 15;

    fn snake_at(x: i32, y: i32, direction: Direction) -> Snake {
        Snake::new(Position::new(x, y), direction, CELL)
    }

    #[test]
    fn test_snake_creation() {
        let snake = snake_at(15, 15, Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(15, 15));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.tail().len(), 0);
    }

    #[test]
    fn test_reverse_turn_ignored() {
        for dir in Direction::ALL {
            let mut snake = snake_at(150, 150, dir);
            snake.turn(dir.opposite());
            assert_eq!(snake.next_direction(), dir);

            snake.advance();
            assert_eq!(snake.direction(), dir);
        }
    }

    #[test]
    fn test_same_and_perpendicular_turns_accepted() {
        for dir in Direction::ALL {
            for new_dir in Direction::ALL {
                if dir.is_opposite(new_dir) {
                    continue;
                }
                let mut snake = snake_at(150, 150, dir);
                snake.turn(new_dir);
                assert_eq!(snake.next_direction(), new_dir);
            }
        }
    }

    #[test]
    fn test_turn_takes_effect_on_advance() {
        let mut snake = snake_at(150, 150, Direction::Right);
        snake.turn(Direction::Up);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Position::new(150, 150));

        snake.advance();
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Position::new(150, 135));
    }

    #[test]
    fn test_no_reversal_within_one_tick() {
        // Up then Left between two advances must not send a right-moving
        // snake back onto itself
        let mut snake = snake_at(150, 150, Direction::Right);
        snake.turn(Direction::Up);
        snake.turn(Direction::Left);
        assert_eq!(snake.next_direction(), Direction::Up);

        snake.advance();
        assert_eq!(snake.head(), Position::new(150, 135));
    }

    #[test]
    fn test_advance_without_tail() {
        let mut snake = snake_at(15, 15, Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), Position::new(30, 15));
        assert_eq!(snake.tail().len(), 0);
    }

    #[test]
    fn test_grow_appends_head() {
        let mut snake = snake_at(30, 15, Direction::Right);
        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail().copied().collect::<Vec<_>>(), vec![Position::new(30, 15)]);
    }

    #[test]
    fn test_tail_is_fifo_of_recent_heads() {
        let mut snake = snake_at(15, 15, Direction::Right);
        snake.grow();
        snake.advance();
        snake.grow();
        snake.advance();
        snake.grow();
        snake.advance();
        let length = snake.tail().len();
        assert_eq!(length, 3);

        let mut history = Vec::new();
        for i in 0..10 {
            if i % 3 == 0 {
                snake.turn(Direction::Down);
            } else {
                snake.turn(Direction::Right);
            }
            history.push(snake.head());
            snake.advance();
            assert_eq!(snake.tail().len(), length);
        }

        let expected: Vec<Position> = history.iter().rev().take(length).copied().collect();
        assert_eq!(snake.tail().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_growth_never_shrinks() {
        let mut snake = snake_at(15, 15, Direction::Right);
        let mut last = snake.len();
        for i in 0..20 {
            if i % 4 == 0 {
                snake.grow();
                assert_eq!(snake.len(), last + 1);
            }
            snake.advance();
            assert!(snake.len() >= last);
            last = snake.len();
        }
        assert_eq!(snake.len(), 6);
    }

    #[test]
    fn test_head_stays_aligned() {
        let mut snake = snake_at(15, 15, Direction::Right);
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        for i in 0..40 {
            snake.turn(turns[i % turns.len()]);
            snake.advance();
            assert!(snake.head().is_aligned(CELL));
        }
    }

    #[test]
    fn test_segments_start_with_head() {
        let mut snake = snake_at(15, 15, Direction::Right);
        snake.grow();
        snake.advance();
        let segments: Vec<Position> = snake.segments().collect();
        assert_eq!(segments, vec![Position::new(30, 15), Position::new(15, 15)]);
    }
}
