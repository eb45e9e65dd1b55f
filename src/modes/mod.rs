pub mod human;

pub use human::{DEFAULT_FRAME_RATE, HumanMode, preflight};
