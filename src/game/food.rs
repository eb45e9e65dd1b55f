use rand::Rng;

use super::config::GameConfig;
use super::state::Position;

/// The food pellet. Always sits on a grid cell inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Place food at a known position
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Place food on a random cell
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Self {
        Self {
            position: random_cell(rng, config),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move to a new random cell. The snake's body is not excluded, and the
    /// new cell may equal the old one.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &GameConfig) {
        self.position = random_cell(rng, config);
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Position {
    let column = rng.gen_range(0..config.columns());
    let row = rng.gen_range(0..config.rows());
    Position::new(column * config.cell_size, row * config.cell_size)
}
