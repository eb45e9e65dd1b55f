use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    config::GameConfig,
    direction::Direction,
    food::Food,
    snake::Snake,
    state::GameState,
};
use crate::render::{RenderSurface, draw_frame};

/// Information about a tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Snake length after the tick
    pub length: usize,
}

/// What a clock callback did
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The tick interval has not elapsed; nothing changed
    Waiting,
    /// One simulation step ran
    Ticked(StepInfo),
}

/// The fixed-tick simulation loop
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state for a fresh session: a length-1 snake at the start
    /// cell heading right, and food on a random cell
    pub fn new_session(&mut self) -> GameState {
        let snake = Snake::new(
            self.config.start_position(),
            Direction::Right,
            self.config.cell_size,
        );
        let food = Food::spawn(&mut self.rng, &self.config);

        info!(
            head = ?snake.head(),
            food = ?food.position(),
            columns = self.config.columns(),
            rows = self.config.rows(),
            "new session"
        );

        GameState::new(snake, food)
    }

    /// Clock callback. Runs one step if at least one tick interval has
    /// passed since the last tick, otherwise leaves the state untouched.
    pub fn on_frame<S: RenderSurface + ?Sized>(
        &mut self,
        state: &mut GameState,
        timestamp: Duration,
        surface: &mut S,
    ) -> FrameOutcome {
        if timestamp.saturating_sub(state.last_tick) < self.config.tick_interval() {
            return FrameOutcome::Waiting;
        }

        state.last_tick = timestamp;
        FrameOutcome::Ticked(self.step(state, surface))
    }

    /// Execute one step: advance, render, then eat if the head is on the food
    pub fn step<S: RenderSurface + ?Sized>(&mut self, state: &mut GameState, surface: &mut S) -> StepInfo {
        state.snake.advance();
        state.ticks += 1;
        trace!(tick = state.ticks, head = ?state.snake.head(), "tick");

        draw_frame(surface, state, &self.config);

        let ate_food = state.head_on_food();
        if ate_food {
            state.snake.grow();
            state.food.relocate(&mut self.rng, &self.config);
            debug!(
                length = state.snake.len(),
                food = ?state.food.position(),
                "food eaten"
            );
        }

        StepInfo {
            ate_food,
            length: state.snake.len(),
        }
    }

    /// Draw the current state without stepping
    pub fn render<S: RenderSurface + ?Sized>(&self, state: &GameState, surface: &mut S) {
        draw_frame(surface, state, &self.config);
    }
}
