//! Typist Actor: runs a [`Typewriter`] against the wall clock.
//!
//! The thread sleeps on its control channel until the engine's next
//! deadline, fires whatever is due and publishes a [`Frame`] per change.
//! Because the sleep is a channel receive, a shutdown request wakes it
//! immediately instead of waiting out a 3 second cooldown.

use super::messages::TypistEvent;
use crate::engine::{DelaySource, Frame, Typewriter};
use crate::error::{Result, TypewriterError};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, SendTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How long a blocked frame send waits before re-checking for shutdown.
const SEND_RETRY: Duration = Duration::from_millis(20);

/// Typist actor that drives the engine in real time.
pub struct TypistActor {
    /// Handle to the typist thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Wakes the thread out of its deadline wait.
    wake_tx: Sender<()>,
    /// Receiver for frames.
    event_rx: Receiver<TypistEvent>,
}

impl TypistActor {
    /// Move `typewriter` onto its own thread and start it after `initial_delay`.
    ///
    /// The engine clock is anchored to the moment of the call. A frame with
    /// the initial (empty) state is published right away.
    pub fn spawn<D>(typewriter: Typewriter<D>, initial_delay: Duration) -> Result<Self>
    where
        D: DelaySource + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let (wake_tx, wake_rx) = bounded(1);
        let (event_tx, event_rx) = bounded(64);
        let origin = Instant::now();

        let handle = thread::Builder::new()
            .name("typewriter-typist".to_string())
            .spawn(move || {
                Self::run_loop(
                    typewriter,
                    initial_delay,
                    origin,
                    &wake_rx,
                    &event_tx,
                    &shutdown_clone,
                );
            })
            .map_err(|source| TypewriterError::Spawn {
                name: "typist",
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            wake_tx,
            event_rx,
        })
    }

    /// Receiver for [`TypistEvent`]s.
    ///
    /// Use this with `select!` next to the input receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<TypistEvent> {
        &self.event_rx
    }

    /// Ask the thread to stop. Pending engine timers are cancelled on exit.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
        let _ = self.wake_tx.try_send(());
    }

    /// Stop the thread and wait for it. No frame is sent after this returns.
    pub fn join(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("typist thread panicked");
            }
        }
    }

    fn run_loop<D: DelaySource>(
        mut typewriter: Typewriter<D>,
        initial_delay: Duration,
        origin: Instant,
        wake_rx: &Receiver<()>,
        event_tx: &Sender<TypistEvent>,
        shutdown: &AtomicBool,
    ) {
        typewriter.start(initial_delay);
        let mut running = Self::publish(event_tx, typewriter.frame(), shutdown);

        while running && !shutdown.load(Ordering::Acquire) {
            let woken = match typewriter.next_deadline() {
                Some(deadline) => {
                    let wait = (origin + deadline).saturating_duration_since(Instant::now());
                    match wake_rx.recv_timeout(wait) {
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
                        Err(RecvTimeoutError::Timeout) => false,
                    }
                }
                // Nothing scheduled (empty script): sleep until told to stop.
                None => {
                    let _ = wake_rx.recv();
                    true
                }
            };
            if woken {
                break;
            }

            let steps = typewriter.advance_to(origin.elapsed());
            if !steps.is_empty() {
                running = Self::publish(event_tx, typewriter.frame(), shutdown);
            }
        }

        typewriter.teardown();
        let _ = event_tx.try_send(TypistEvent::Stopped);
        tracing::debug!(cycles = typewriter.cycles(), "typist stopped");
    }

    /// Send a frame, giving up if the receiver is gone or shutdown is requested.
    fn publish(event_tx: &Sender<TypistEvent>, frame: Frame, shutdown: &AtomicBool) -> bool {
        let mut event = TypistEvent::Frame(frame);
        loop {
            match event_tx.send_timeout(event, SEND_RETRY) {
                Ok(()) => return true,
                Err(SendTimeoutError::Disconnected(_)) => return false,
                Err(SendTimeoutError::Timeout(returned)) => {
                    if shutdown.load(Ordering::Acquire) {
                        return false;
                    }
                    event = returned;
                }
            }
        }
    }
}

impl Drop for TypistActor {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}
