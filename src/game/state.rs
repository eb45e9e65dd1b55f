use std::time::Duration;

use super::direction::Direction;
use super::food::Food;
use super::snake::Snake;

/// A pixel position on the canvas. Game entities only ever hold
/// grid-aligned positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, saturating at the ends of the i32 range
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Move position `step` pixels in a direction. Movement stops at the
    /// furthest multiple of `step` an i32 can hold, so aligned positions
    /// stay aligned.
    pub fn moved_in_direction(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: step_axis(self.x, dx, step),
            y: step_axis(self.y, dy, step),
        }
    }

    /// Euclidean distance in pixels
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether both coordinates are multiples of `cell_size`
    pub fn is_aligned(&self, cell_size: i32) -> bool {
        self.x % cell_size == 0 && self.y % cell_size == 0
    }
}

fn step_axis(value: i32, unit: i32, step: i32) -> i32 {
    let cell = i64::from(step.max(1));
    let limit = i64::from(i32::MAX) / cell * cell;
    let moved = i64::from(value) + i64::from(unit) * i64::from(step);
    moved.clamp(-limit, limit) as i32
}

/// Everything that lives for one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    /// Host timestamp of the last tick that fired
    pub last_tick: Duration,
    /// Number of ticks fired so far
    pub ticks: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food) -> Self {
        Self {
            snake,
            food,
            last_tick: Duration::ZERO,
            ticks: 0,
        }
    }

    /// Whether the head currently sits on the food
    pub fn head_on_food(&self) -> bool {
        self.snake.head().distance_to(self.food.position()) <= 0.0
    }
}
