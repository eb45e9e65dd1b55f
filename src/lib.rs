//! Grid Snake - a snake game on a fixed pixel grid
//!
//! This library provides:
//! - Core game logic and the fixed-tick simulation loop (game module)
//! - Key-to-direction routing (input module)
//! - The render surface trait and its terminal presentation (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal host (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::InitializationError;
