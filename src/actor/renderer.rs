//! Renderer Actor: Dedicated thread for rendering to the terminal.
//!
//! This actor owns the visible buffer. It receives complete frames from the
//! main loop, diffs them against what is on screen and flushes the result
//! in a single write.

use super::messages::RenderCommand;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::Buffer;
use crate::error::{Result, TypewriterError};
use crate::terminal::OutputBuffer;
use crossbeam_channel::Receiver;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Renderer actor that handles terminal output.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total cells changed across all frames.
    pub cells_changed: u64,
    /// Total bytes written to terminal.
    pub bytes_written: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// Internal renderer state.
struct Renderer<W: Write> {
    /// What the terminal currently shows.
    current: Buffer,
    /// Diff state for cursor/color tracking.
    diff_state: DiffState,
    /// Pre-allocated output buffer.
    output: OutputBuffer,
    writer: W,
    stats: RenderStats,
    /// Whether the next frame must be drawn from scratch.
    needs_full_redraw: bool,
}

impl<W: Write> Renderer<W> {
    fn new(writer: W, width: u16, height: u16) -> Self {
        Self {
            current: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: OutputBuffer::with_capacity(16 * 1024),
            writer,
            stats: RenderStats::default(),
            needs_full_redraw: true,
        }
    }

    /// Draw `next`, diffing against the current screen when possible.
    fn render(&mut self, next: Buffer) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        // A frame drawn for a stale size cannot be diffed cell-for-cell.
        if next.width() != self.current.width() || next.height() != self.current.height() {
            self.needs_full_redraw = true;
        }

        if self.needs_full_redraw {
            render_full(&next, &mut self.output, &mut self.diff_state);
            self.stats.cells_changed += next.cells().len() as u64;
            self.needs_full_redraw = false;
        } else {
            let result = render_diff(&self.current, &next, &mut self.output, &mut self.diff_state);
            self.stats.cells_changed += result.cells_changed as u64;
        }

        if !self.output.is_empty() {
            self.output.flush_to(&mut self.writer)?;
        }
        self.current = next;

        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.needs_full_redraw = true;
    }

    /// Apply one command. Returns `false` on shutdown.
    fn handle(&mut self, command: RenderCommand) -> io::Result<bool> {
        match command {
            RenderCommand::Update(buffer) => self.render(*buffer)?,
            RenderCommand::FullRedraw(buffer) => {
                self.needs_full_redraw = true;
                self.render(*buffer)?;
            }
            RenderCommand::Resize { width, height } => self.resize(width, height),
            RenderCommand::Shutdown => return Ok(false),
        }
        Ok(true)
    }
}

impl RendererActor {
    /// Spawn the renderer actor thread writing to stdout.
    pub fn spawn(receiver: Receiver<RenderCommand>, width: u16, height: u16) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("typewriter-render".to_string())
            .spawn(move || {
                let renderer = Renderer::new(io::stdout(), width, height);
                match Self::run_loop(renderer, &receiver, &shutdown_clone) {
                    Ok(stats) => tracing::debug!(
                        frames = stats.frames,
                        cells = stats.cells_changed,
                        bytes = stats.bytes_written,
                        "render thread stopped"
                    ),
                    Err(e) => tracing::error!(error = %e, "render thread failed"),
                }
            })
            .map_err(|source| TypewriterError::Spawn {
                name: "render",
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the render thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop<W: Write>(
        mut renderer: Renderer<W>,
        receiver: &Receiver<RenderCommand>,
        shutdown: &AtomicBool,
    ) -> io::Result<RenderStats> {
        while !shutdown.load(Ordering::Relaxed) {
            if let Ok(command) = receiver.recv_timeout(Duration::from_millis(16)) {
                if !renderer.handle(command)? {
                    break;
                }
            }
        }
        Ok(renderer.stats)
    }
}

impl Drop for RendererActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
