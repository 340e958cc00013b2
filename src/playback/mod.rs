use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default period between automatic advancement ticks, in seconds.
pub const DEFAULT_TICK_PERIOD_SECONDS: f64 = 2.5;

/// Lifecycle phase of one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// Index 0, not playing; the state every new story starts in.
    Idle,
    Playing,
    Paused,
    /// Index at the end, completion already signaled, timer dropped.
    Finished,
}

/// Public playback snapshot exposed to hosts and render frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
}

/// Single recurring timer owned by the controller.
///
/// Deterministic dt-stepping: the host reports elapsed wall time and the
/// timer converts it into whole elapsed periods, carrying the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickTimer {
    period_seconds: f64,
    elapsed_seconds: f64,
}

impl TickTimer {
    fn new(period_seconds: f64) -> Self {
        Self {
            period_seconds,
            elapsed_seconds: 0.0,
        }
    }

    fn advance(&mut self, delta_seconds: f64) -> u32 {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 || self.period_seconds <= 0.0 {
            return 0;
        }
        self.elapsed_seconds += delta_seconds;
        let ticks = (self.elapsed_seconds / self.period_seconds).floor();
        self.elapsed_seconds -= ticks * self.period_seconds;
        ticks as u32
    }
}

/// Stateful playback driver over one story sequence.
///
/// Owns the only mutable playback state in the system. At most one timer
/// exists at a time: it is created inside `start`, canceled on `pause`,
/// `reset`, and the transition to `Finished`, and never stacked. Cancellation
/// is cooperative and never rolls back the index.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    event_count: usize,
    current_index: usize,
    phase: PlaybackPhase,
    timer: Option<TickTimer>,
    tick_period_seconds: f64,
    completion_emitted: bool,
}

impl PlaybackController {
    #[must_use]
    pub fn new(event_count: usize) -> Self {
        Self::with_period(event_count, DEFAULT_TICK_PERIOD_SECONDS)
    }

    #[must_use]
    pub fn with_period(event_count: usize, tick_period_seconds: f64) -> Self {
        Self {
            event_count,
            current_index: 0,
            phase: PlaybackPhase::Idle,
            timer: None,
            tick_period_seconds,
            completion_emitted: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            is_playing: self.phase == PlaybackPhase::Playing,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn tick_period_seconds(&self) -> f64 {
        self.tick_period_seconds
    }

    fn last_index(&self) -> usize {
        self.event_count.saturating_sub(1)
    }

    /// Begins or resumes automatic advancement.
    ///
    /// Returns `false` without side effects when already playing (the running
    /// timer keeps its accumulated elapsed time), when the sequence has fewer
    /// than 2 events, or when playback already finished; `reset` is the only
    /// way out of `Finished`.
    pub fn start(&mut self) -> bool {
        if self.phase == PlaybackPhase::Playing {
            return false;
        }
        if self.event_count < 2 || self.phase == PlaybackPhase::Finished {
            return false;
        }

        debug!(
            index = self.current_index,
            period_seconds = self.tick_period_seconds,
            "playback start"
        );
        self.timer = Some(TickTimer::new(self.tick_period_seconds));
        self.phase = PlaybackPhase::Playing;
        true
    }

    /// Suspends automatic advancement and cancels the pending tick.
    pub fn pause(&mut self) {
        if self.phase != PlaybackPhase::Playing {
            return;
        }
        debug!(index = self.current_index, "playback pause");
        self.timer = None;
        self.phase = PlaybackPhase::Paused;
    }

    /// Advances by exactly one event, clamped at the last index.
    ///
    /// Play/pause status is unchanged; callable from any phase.
    pub fn skip_next(&mut self) {
        let clamped = (self.current_index + 1).min(self.last_index());
        trace!(from = self.current_index, to = clamped, "playback skip");
        self.current_index = clamped;
    }

    /// Moves the cursor directly, clamped to the valid range.
    ///
    /// Used for manual scrubbing; play/pause status is unchanged.
    pub fn jump_to(&mut self, index: usize) {
        let clamped = index.min(self.last_index());
        trace!(from = self.current_index, to = clamped, "playback jump");
        self.current_index = clamped;
    }

    /// Returns to `Idle` at index 0, canceling any pending timer and clearing
    /// the completion latch so a later run can signal again.
    pub fn reset(&mut self) {
        debug!(index = self.current_index, "playback reset");
        self.current_index = 0;
        self.phase = PlaybackPhase::Idle;
        self.timer = None;
        self.completion_emitted = false;
    }

    /// Feeds elapsed wall time into the playback timer.
    ///
    /// Fires one internal tick per fully elapsed period. Returns `true` when
    /// this call drove playback to its natural completion; the caller is then
    /// responsible for emitting the completion signal exactly once.
    pub fn advance(&mut self, delta_seconds: f64) -> bool {
        if self.phase != PlaybackPhase::Playing {
            return false;
        }
        let ticks = match self.timer.as_mut() {
            Some(timer) => timer.advance(delta_seconds),
            None => return false,
        };

        let mut completed = false;
        for _ in 0..ticks {
            if self.phase != PlaybackPhase::Playing {
                break;
            }
            completed |= self.tick();
        }
        completed
    }

    /// One automatic advancement step.
    ///
    /// Reaching the last index finishes the run; a tick fired while already at
    /// the last index (reachable by skipping or jumping during playback)
    /// finishes without moving the cursor.
    fn tick(&mut self) -> bool {
        let last = self.last_index();
        let next = self.current_index + 1;
        if next < last {
            self.current_index = next;
            trace!(index = self.current_index, "playback tick");
            return false;
        }

        self.current_index = next.min(last);
        self.timer = None;
        self.phase = PlaybackPhase::Finished;
        debug!(index = self.current_index, "playback finished");

        if self.completion_emitted {
            return false;
        }
        self.completion_emitted = true;
        true
    }
}
