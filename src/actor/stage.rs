//! Stage: the terminal session the card is drawn on.
//!
//! Owns raw mode and the alternate screen, the application buffer and the
//! input/render actors. Dropping the stage stops the actors and restores
//! the terminal.

use super::messages::{InputEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::buffer::Buffer;
use crate::error::Result;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::{Duration, Instant};

/// Configuration for the [`Stage`].
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Upper bound on frames per second.
    pub target_fps: u32,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl StageConfig {
    /// Minimum time between two frames.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

/// A raw-mode terminal session with its input and render threads.
pub struct Stage {
    config: StageConfig,
    input_rx: Receiver<InputEvent>,
    render_tx: Sender<RenderCommand>,
    input_actor: Option<InputActor>,
    renderer_actor: Option<RendererActor>,
    /// Application buffer, drawn into by widgets.
    buffer: Buffer,
    frame_start: Instant,
    frame_count: u64,
    running: bool,
}

impl Stage {
    /// Open a stage with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or a thread cannot be spawned.
    pub fn new() -> Result<Self> {
        Self::with_config(StageConfig::default())
    }

    /// Open a stage with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or a thread cannot be spawned.
    pub fn with_config(config: StageConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let (render_tx, render_rx) = bounded::<RenderCommand>(4);

        // From here on the Drop impl restores the terminal if a spawn fails.
        let mut stage = Self {
            config,
            input_rx,
            render_tx,
            input_actor: None,
            renderer_actor: None,
            buffer: Buffer::new(width.max(1), height.max(1)),
            frame_start: Instant::now(),
            frame_count: 0,
            running: true,
        };
        stage.input_actor = Some(InputActor::spawn(input_tx, stage.config.input_poll_timeout)?);
        stage.renderer_actor = Some(RendererActor::spawn(render_rx, width.max(1), height.max(1))?);

        tracing::debug!(width, height, "stage opened");
        Ok(stage)
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get a reference to the buffer.
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Get a mutable reference to the buffer.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Get the input receiver for event-driven loops.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Check if the stage is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the stage; the main loop should exit.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Request a full redraw of the current buffer.
    pub fn request_redraw(&self) {
        let _ = self
            .render_tx
            .send(RenderCommand::FullRedraw(Box::new(self.buffer.clone())));
    }

    /// Request a diff-based update of the current buffer.
    ///
    /// When the render thread is behind, the frame is dropped; the next one
    /// carries the complete picture anyway.
    pub fn request_update(&self) {
        match self
            .render_tx
            .try_send(RenderCommand::Update(Box::new(self.buffer.clone())))
        {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => tracing::trace!("render queue full, frame dropped"),
            Err(TrySendError::Disconnected(_)) => tracing::warn!("render thread is gone"),
        }
    }

    /// Handle a resize event.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let (width, height) = (width.max(1), height.max(1));
        self.buffer.resize(width, height);
        let _ = self.render_tx.send(RenderCommand::Resize { width, height });
        tracing::debug!(width, height, "stage resized");
    }

    /// Begin a new frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// End a frame and request an update.
    ///
    /// Sleeps if necessary to stay under the target FPS.
    pub fn end_frame(&mut self) {
        self.frame_count += 1;
        self.request_update();

        let budget = self.config.frame_duration();
        let elapsed = self.frame_start.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
    }

    /// Get the current frame count.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }

        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        tracing::debug!(frames = self.frame_count, "stage closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let config = StageConfig::default();
        assert_eq!(config.frame_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_frame_duration_zero_fps() {
        let config = StageConfig {
            target_fps: 0,
            ..StageConfig::default()
        };
        assert_eq!(config.frame_duration(), Duration::from_secs(1));
    }
}
