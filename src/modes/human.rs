use std::io::{IsTerminal, Stderr, stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::error::InitializationError;
use crate::game::{FrameOutcome, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{PixelCanvas, Renderer};

/// Host frame rate used when none is given
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Check that a terminal able to show the whole canvas is attached. Runs
/// before any game state exists.
pub fn preflight(config: &GameConfig) -> Result<(), InitializationError> {
    config.validate()?;

    if !stderr().is_terminal() {
        return Err(InitializationError::TargetMissing);
    }

    let (available_cols, available_rows) =
        terminal::size().map_err(InitializationError::SurfaceUnsupported)?;
    let (needed_cols, needed_rows) = Renderer::required_size(config);
    if available_cols < needed_cols || available_rows < needed_rows {
        return Err(InitializationError::TerminalTooSmall {
            needed_cols,
            needed_rows,
            available_cols,
            available_rows,
        });
    }

    Ok(())
}

fn prepare_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(())
}

/// Merge the game loop and terminal cleanup results. A loop failure wins;
/// a cleanup failure behind it is logged rather than lost.
fn combine_outcomes(game: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (game, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            warn!(error = %cleanup_err, "terminal cleanup failed after game error");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), cleanup) => cleanup,
    }
}

/// Interactive play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    canvas: PixelCanvas,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, frame_rate: u32) -> Result<Self, InitializationError> {
        config.validate()?;
        if frame_rate == 0 {
            return Err(InitializationError::InvalidConfig(
                "frame rate must be at least 1".to_string(),
            ));
        }

        let mut engine = GameEngine::new(config);
        let state = engine.new_session();
        let mut canvas = PixelCanvas::new(engine.config());
        engine.render(&state, &mut canvas);

        Ok(Self {
            engine,
            state,
            canvas,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(frame_rate)),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().map_err(InitializationError::SurfaceUnsupported)?;
        let mut stderr = stderr();
        if let Err(err) = execute!(stderr, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(InitializationError::SurfaceUnsupported(err).into());
        }
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
                return Err(InitializationError::SurfaceUnsupported(err).into());
            }
        };
        info!(
            tick_interval_ms = self.engine.config().tick_interval().as_secs_f64() * 1000.0,
            "session started"
        );

        // Run game loop with cleanup
        let result = match prepare_terminal(&mut terminal) {
            Ok(()) => self.run_game_loop(&mut terminal).await,
            Err(err) => Err(err),
        };

        // Cleanup terminal
        let cleanup = self.cleanup_terminal(&mut terminal);

        self.metrics.update();
        info!(
            ticks = self.metrics.ticks,
            food_eaten = self.metrics.food_eaten,
            length = self.metrics.length,
            elapsed = %self.metrics.format_time(),
            "session ended"
        );

        combine_outcomes(result, cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let session_start = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Host clock
                frame_time = frame_timer.tick() => {
                    self.on_frame(frame_time.duration_since(session_start));
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.canvas, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            match action {
                KeyAction::Turn(_) => self.input_handler.route(&action, &mut self.state.snake),
                KeyAction::Quit => {
                    debug!("quit requested");
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn on_frame(&mut self, timestamp: Duration) {
        let outcome = self
            .engine
            .on_frame(&mut self.state, timestamp, &mut self.canvas);
        if let FrameOutcome::Ticked(info) = outcome {
            self.metrics.on_tick(&info);
        }
        self.metrics.update();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
