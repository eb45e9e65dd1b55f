//! Core game logic module for Snake
//!
//! This module contains the entities and the fixed-tick simulation loop. It
//! draws through the [`RenderSurface`](crate::render::RenderSurface) trait
//! and has no terminal or I/O dependencies of its own.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{FrameOutcome, GameEngine, StepInfo};
pub use food::Food;
pub use snake::Snake;
pub use state::{GameState, Position};
