use crate::core::StoryEvent;

/// Signal stream exposed to external effect collaborators.
///
/// The playback core never invokes celebratory effects directly; it emits
/// these signals and independent observers decide what to do with them.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineSignal {
    /// A new story sequence replaced the previous one.
    StoryReplaced { events_len: usize },
    /// Playback returned to the initial state; any pending completion-derived
    /// flags held by observers should be cleared.
    PlaybackReset,
    /// Playback naturally reached the last event.
    ///
    /// Carries the final event and the special flag so observers can decide
    /// on celebratory visuals without re-querying the sequence.
    Completed {
        last_event: StoryEvent,
        is_special: bool,
    },
}

/// Hook interface for bounded external reactions.
///
/// Observers can watch the signal stream without mutating engine internals.
pub trait TimelineObserver {
    fn id(&self) -> &str;
    fn on_signal(&mut self, signal: &TimelineSignal);
}
