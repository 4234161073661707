//! Typewriter: the reveal state machine and its scheduler.
//!
//! The engine keeps its own clock (time since mount) and a single pending
//! timer. Callers advance the clock, either from a real-time thread
//! ([`TypistActor`](crate::actor::TypistActor)) or from a test that jumps
//! straight to the next deadline. Each fired timer schedules its successor
//! relative to its own deadline, so both drivers produce the same sequence.
//!
//! ```text
//!   Start ──▶ Reveal ─┬─▶ Reveal ...
//!                     └─▶ LinePause ─┬─▶ Reveal (next line)
//!                                    └─▶ Cooldown ──▶ Restart ──▶ Reveal ...
//! ```

use super::delay::{DelaySource, RandomDelay};
use super::state::{Frame, RevealState};
use super::timer::{Timer, TimerKind, TimerSlot};
use crate::config::TypewriterConfig;
use crate::script::Script;
use std::time::Duration;

/// What happened when a timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The loop became active (initial start).
    Started,
    /// One grapheme was revealed.
    Revealed {
        /// Line that grew.
        line: usize,
        /// Its new revealed length.
        len: usize,
    },
    /// The cursor moved past a completed line.
    LineDone {
        /// The line that was completed.
        line: usize,
    },
    /// The completed text was cleared; the loop is idle until restart.
    Reset {
        /// Number of completed cycles, including this one.
        cycle: u64,
    },
    /// The loop became active again after a reset.
    Restarted,
}

/// Timer-driven typewriter effect over a fixed [`Script`].
#[derive(Debug)]
pub struct Typewriter<D = RandomDelay> {
    script: Script,
    config: TypewriterConfig,
    delays: D,
    state: RevealState,
    timer: TimerSlot,
    now: Duration,
    cycles: u64,
}

impl Typewriter<RandomDelay> {
    /// Create an engine with entropy-seeded jitter.
    pub fn new(script: Script, config: TypewriterConfig) -> Self {
        Self::with_delays(script, config, RandomDelay::from_entropy())
    }
}

impl<D: DelaySource> Typewriter<D> {
    /// Create an engine with a specific delay source.
    pub fn with_delays(script: Script, config: TypewriterConfig, delays: D) -> Self {
        Self {
            script,
            config,
            delays,
            state: RevealState::new(),
            timer: TimerSlot::new(),
            now: Duration::ZERO,
            cycles: 0,
        }
    }

    /// Begin the effect after `initial_delay`.
    ///
    /// An empty script is a no-op: nothing is scheduled and the engine stays
    /// idle forever. Calling `start` again before the first cycle only moves
    /// the start deadline; once running it is ignored. Returns whether a
    /// start timer is pending.
    pub fn start(&mut self, initial_delay: Duration) -> bool {
        if self.script.is_empty() {
            tracing::debug!("empty script, typewriter stays idle");
            return false;
        }
        if self.state.is_active() || self.state.revealed_counts().len() == self.script.len() {
            return false;
        }
        self.timer.arm(TimerKind::Start, self.now + initial_delay);
        tracing::debug!(
            lines = self.script.len(),
            delay_ms = initial_delay.as_millis(),
            "typewriter scheduled"
        );
        !self.timer.is_cancelled()
    }

    /// Deadline of the pending timer on the engine clock.
    #[inline]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.peek().map(|t| t.deadline)
    }

    /// The pending timer, if any.
    #[inline]
    pub fn pending(&self) -> Option<Timer> {
        self.timer.peek()
    }

    /// Advance the clock to `now`, firing every timer due by then.
    ///
    /// Returns the steps in firing order. Time never runs backwards; an
    /// earlier `now` is a no-op.
    pub fn advance_to(&mut self, now: Duration) -> Vec<Step> {
        let mut steps = Vec::new();
        while let Some(timer) = self.timer.take_due(now) {
            self.now = timer.deadline;
            steps.push(self.fire(timer.kind));
        }
        self.now = self.now.max(now);
        steps
    }

    /// Advance the clock by `delta`.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Step> {
        self.advance_to(self.now + delta)
    }

    /// Jump to the next deadline and fire exactly that timer.
    ///
    /// Returns `None` when nothing is pending (empty script, not started, or
    /// torn down).
    pub fn step(&mut self) -> Option<Step> {
        let deadline = self.next_deadline()?;
        let timer = self.timer.take_due(deadline)?;
        self.now = self.now.max(timer.deadline);
        Some(self.fire(timer.kind))
    }

    /// Cancel the pending timer and refuse all further scheduling.
    ///
    /// After teardown no call mutates the reveal state again.
    pub fn teardown(&mut self) {
        if let Some(timer) = self.timer.cancel() {
            tracing::debug!(pending = ?timer.kind, "typewriter torn down");
        }
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.timer.is_cancelled()
    }

    /// The reveal state.
    #[inline]
    pub const fn state(&self) -> &RevealState {
        &self.state
    }

    /// The script being typed.
    #[inline]
    pub const fn script(&self) -> &Script {
        &self.script
    }

    /// Timing configuration.
    #[inline]
    pub const fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Engine clock (time since mount).
    #[inline]
    pub const fn elapsed(&self) -> Duration {
        self.now
    }

    /// Completed cycles.
    #[inline]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Snapshot of the current state.
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.script, &self.state, self.cycles, self.now)
    }

    fn fire(&mut self, kind: TimerKind) -> Step {
        match kind {
            TimerKind::Start => {
                self.state.activate(&self.script);
                tracing::debug!("typewriter started");
                self.schedule_typing();
                Step::Started
            }
            TimerKind::Reveal => {
                let line = self.state.line_index();
                self.state.reveal_next(&self.script);
                let len = self.state.revealed_len(line);
                tracing::trace!(line, len, "revealed");
                self.schedule_typing();
                Step::Revealed { line, len }
            }
            TimerKind::LinePause => {
                let line = self.state.line_index();
                self.state.next_line();
                tracing::debug!(line, "line complete");
                self.schedule_typing();
                Step::LineDone { line }
            }
            TimerKind::Cooldown => {
                self.state.reset();
                self.cycles += 1;
                tracing::debug!(cycle = self.cycles, "cycle complete, cleared");
                self.arm(TimerKind::Restart, self.config.restart_delay);
                Step::Reset { cycle: self.cycles }
            }
            TimerKind::Restart => {
                self.state.activate(&self.script);
                tracing::debug!(cycle = self.cycles + 1, "typewriter restarted");
                self.schedule_typing();
                Step::Restarted
            }
        }
    }

    /// Arm the timer for whatever the running loop needs next.
    fn schedule_typing(&mut self) {
        if self.state.is_complete(&self.script) {
            self.arm(TimerKind::Cooldown, self.config.cycle_cooldown);
            return;
        }
        let line_len = self
            .script
            .line(self.state.line_index())
            .map_or(0, crate::script::ScriptLine::len);
        if self.state.char_index() < line_len {
            let delay = self.delays.char_delay(&self.config);
            self.arm(TimerKind::Reveal, delay);
        } else {
            self.arm(TimerKind::LinePause, self.config.line_pause);
        }
    }

    fn arm(&mut self, kind: TimerKind, delay: Duration) {
        self.timer.arm(kind, self.now + delay);
    }
}

impl<D> Drop for Typewriter<D> {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FixedDelay;

    const MS: Duration = Duration::from_millis(1);

    fn engine(lines: &[&str]) -> Typewriter<FixedDelay> {
        Typewriter::with_delays(
            Script::new(lines.iter().copied()),
            TypewriterConfig::default(),
            FixedDelay,
        )
    }

    /// Fire timers until the first reset, checking prefix invariants on the way.
    fn run_to_completion<D: DelaySource>(tw: &mut Typewriter<D>) -> Frame {
        let mut last_lens = vec![0; tw.script().len()];
        for _ in 0..100_000 {
            let step = tw.step().expect("engine stalled");
            let frame = tw.frame();
            for (i, line) in frame.lines.iter().enumerate() {
                assert!(line.revealed <= line.source.len());
                assert!(line.source.text().starts_with(line.text()));
                assert!(line.revealed >= last_lens[i], "prefix shrank mid-cycle");
                last_lens[i] = line.revealed;
            }
            if tw.state().is_complete(tw.script()) && matches!(step, Step::LineDone { .. }) {
                return frame;
            }
        }
        panic!("cycle never completed");
    }

    #[test]
    fn test_single_line_scenario() {
        let mut tw = engine(&["const x = 1;"]);
        assert!(tw.start(Duration::ZERO));
        let frame = run_to_completion(&mut tw);
        assert_eq!(frame.revealed(), vec!["const x = 1;"]);
        assert!(frame.caret_line().is_none());
    }

    #[test]
    fn test_all_lines_revealed_after_cycle() {
        let lines = ["const developer = {", "  name: \"Hoeun\",", "", "};"];
        let mut tw = Typewriter::with_delays(
            Script::new(lines),
            TypewriterConfig::default(),
            RandomDelay::seeded(3),
        );
        tw.start(Duration::from_millis(1000));
        let frame = run_to_completion(&mut tw);
        assert_eq!(frame.revealed(), lines.to_vec());
        assert_eq!(frame.lines.len(), lines.len());
    }

    #[test]
    fn test_initial_delay_holds_first_character() {
        let mut tw = engine(&["ab"]);
        tw.start(MS * 1000);
        assert!(tw.advance_to(MS * 999).is_empty());
        assert!(tw.state().revealed_counts().is_empty());
        assert_eq!(tw.advance_to(MS * 1000), vec![Step::Started]);
        assert!(tw.state().is_active());
        // FixedDelay: first character 50ms after start.
        assert!(tw.advance_to(MS * 1049).is_empty());
        assert_eq!(
            tw.advance_to(MS * 1050),
            vec![Step::Revealed { line: 0, len: 1 }]
        );
    }

    #[test]
    fn test_timing_of_full_cycle() {
        // 2 chars at 50ms, 200ms line pause, 3000ms cooldown, 1000ms restart.
        let mut tw = engine(&["ab"]);
        tw.start(Duration::ZERO);
        let steps = tw.advance_to(MS * 300);
        assert_eq!(
            steps,
            vec![
                Step::Started,
                Step::Revealed { line: 0, len: 1 },
                Step::Revealed { line: 0, len: 2 },
                Step::LineDone { line: 0 },
            ]
        );
        assert_eq!(tw.pending().unwrap().kind, TimerKind::Cooldown);
        assert_eq!(tw.next_deadline(), Some(MS * 3300));

        assert_eq!(tw.advance_to(MS * 3300), vec![Step::Reset { cycle: 1 }]);
        assert_eq!(tw.state().revealed_counts(), &[0]);
        assert_eq!(tw.state().line_index(), 0);
        assert!(!tw.state().is_active());

        assert_eq!(tw.advance_to(MS * 4300), vec![Step::Restarted]);
        assert!(tw.state().is_active());
    }

    #[test]
    fn test_resumes_after_reset_without_intervention() {
        let mut tw = engine(&["hi", "yo"]);
        tw.start(Duration::ZERO);
        run_to_completion(&mut tw);
        assert_eq!(tw.step(), Some(Step::Reset { cycle: 1 }));
        assert_eq!(tw.frame().revealed(), vec!["", ""]);
        assert_eq!(tw.step(), Some(Step::Restarted));
        let frame = run_to_completion(&mut tw);
        assert_eq!(frame.revealed(), vec!["hi", "yo"]);
        assert_eq!(frame.cycle, 1);
    }

    #[test]
    fn test_caret_follows_current_line() {
        let mut tw = engine(&["ab", "cd"]);
        tw.start(Duration::ZERO);
        tw.step(); // Started
        assert_eq!(tw.frame().caret_line(), Some(0));
        tw.step();
        tw.step(); // "ab" complete, pause pending
        assert_eq!(tw.frame().caret_line(), None);
        tw.step(); // LineDone
        assert_eq!(tw.frame().caret_line(), Some(1));
    }

    #[test]
    fn test_empty_line_gets_line_pause() {
        let mut tw = engine(&["", "x"]);
        tw.start(Duration::ZERO);
        tw.step();
        assert_eq!(tw.pending().unwrap().kind, TimerKind::LinePause);
        assert_eq!(tw.step(), Some(Step::LineDone { line: 0 }));
        assert_eq!(tw.pending().unwrap().kind, TimerKind::Reveal);
    }

    #[test]
    fn test_empty_script_is_noop() {
        let mut tw = engine(&[]);
        assert!(!tw.start(Duration::ZERO));
        assert!(tw.pending().is_none());
        assert!(tw.advance_by(Duration::from_secs(3600)).is_empty());
        assert!(tw.step().is_none());
        assert!(tw.frame().lines.is_empty());
    }

    #[test]
    fn test_teardown_mid_reveal_freezes_state() {
        let mut tw = engine(&["0123456789"]);
        tw.start(Duration::ZERO);
        tw.step();
        tw.step();
        tw.step();
        assert_eq!(tw.state().revealed_len(0), 2);

        tw.teardown();
        let before = tw.state().clone();
        assert!(tw.pending().is_none());
        assert!(tw.advance_by(Duration::from_secs(60)).is_empty());
        assert!(tw.step().is_none());
        assert!(!tw.start(Duration::ZERO));
        assert_eq!(tw.state(), &before);
    }

    #[test]
    fn test_start_twice_does_not_duplicate_timers() {
        let mut tw = engine(&["a"]);
        tw.start(MS * 500);
        tw.start(MS * 100);
        assert_eq!(tw.next_deadline(), Some(MS * 100));
        assert_eq!(tw.advance_to(MS * 100), vec![Step::Started]);
        assert!(!tw.start(Duration::ZERO));
        assert_eq!(tw.pending().unwrap().kind, TimerKind::Reveal);
    }

    #[test]
    fn test_advance_matches_stepping() {
        let lines = ["const a = 1;", "  b", "c"];
        let mut stepped = Typewriter::with_delays(
            Script::new(lines),
            TypewriterConfig::default(),
            RandomDelay::seeded(11),
        );
        let mut advanced = Typewriter::with_delays(
            Script::new(lines),
            TypewriterConfig::default(),
            RandomDelay::seeded(11),
        );
        stepped.start(MS * 10);
        advanced.start(MS * 10);

        let mut from_steps = Vec::new();
        while stepped.elapsed() < Duration::from_secs(6) {
            from_steps.push(stepped.step().unwrap());
        }
        let from_advance = advanced.advance_to(stepped.elapsed());
        assert_eq!(from_steps, from_advance);
        assert_eq!(stepped.frame(), advanced.frame());
    }
}
