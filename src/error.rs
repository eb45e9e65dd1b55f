use std::io;

use thiserror::Error;

/// Fatal startup failures. Raised before any game state is constructed.
#[derive(Debug, Error)]
pub enum InitializationError {
    /// The terminal drawing context could not be obtained
    #[error("terminal drawing surface is not supported: {0}")]
    SurfaceUnsupported(#[source] io::Error),

    /// No terminal is attached to the output stream
    #[error("no terminal found to render into (is stderr redirected?)")]
    TargetMissing,

    /// The canvas does not fit in the terminal
    #[error(
        "terminal is {available_cols}x{available_rows}, \
         the canvas needs at least {needed_cols}x{needed_rows}"
    )]
    TerminalTooSmall {
        needed_cols: u16,
        needed_rows: u16,
        available_cols: u16,
        available_rows: u16,
    },

    /// The configuration cannot produce a grid-aligned canvas
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
