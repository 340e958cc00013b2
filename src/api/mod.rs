mod frame_builder;
mod observer;
mod viewport_binding;

pub use observer::{TimelineObserver, TimelineSignal};
pub use viewport_binding::ViewportBinding;

use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::core::{
    ChartLayout, DEFAULT_TENSION, LayoutTuning, StorySequence, Viewport, event_x,
};
use crate::error::{TimelineError, TimelineResult};
use crate::playback::{DEFAULT_TICK_PERIOD_SECONDS, PlaybackController, PlaybackPhase, PlaybackState};
use crate::render::{Renderer, TimelineFrame};

/// Construction parameters for the timeline engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    pub tick_period_seconds: f64,
    pub tension: f64,
    pub layout_tuning: LayoutTuning,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            tick_period_seconds: DEFAULT_TICK_PERIOD_SECONDS,
            tension: DEFAULT_TENSION,
            layout_tuning: LayoutTuning::default(),
        }
    }

    #[must_use]
    pub fn with_tick_period(mut self, tick_period_seconds: f64) -> Self {
        self.tick_period_seconds = tick_period_seconds;
        self
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn with_layout_tuning(mut self, layout_tuning: LayoutTuning) -> Self {
        self.layout_tuning = layout_tuning;
        self
    }
}

/// Main orchestration facade consumed by host applications.
///
/// Owns the single mutable session state (the current story sequence and its
/// playback controller), derives layout from the latest viewport sample, and
/// materializes deterministic `TimelineFrame`s for the renderer. Completion
/// is decoupled from visual effects through `TimelineSignal` observers.
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    layout: ChartLayout,
    layout_tuning: LayoutTuning,
    tick_period_seconds: f64,
    tension: f64,
    story: Option<StorySequence>,
    subjects: Option<(String, String)>,
    playback: PlaybackController,
    observers: Vec<Box<dyn TimelineObserver>>,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        if !config.tick_period_seconds.is_finite() || config.tick_period_seconds <= 0.0 {
            return Err(TimelineError::InvalidData(
                "tick period must be finite and > 0".to_owned(),
            ));
        }
        if !config.tension.is_finite() {
            return Err(TimelineError::InvalidData(
                "curve tension must be finite".to_owned(),
            ));
        }

        let layout = ChartLayout::from_viewport_tuned(config.viewport, config.layout_tuning)?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            layout,
            layout_tuning: config.layout_tuning,
            tick_period_seconds: config.tick_period_seconds,
            tension: config.tension,
            story: None,
            subjects: None,
            playback: PlaybackController::with_period(0, config.tick_period_seconds),
            observers: Vec::new(),
        })
    }

    /// Admits a freshly fetched story, replacing playback state wholesale.
    ///
    /// Out-of-range metrics are tolerated (they are clamped at use sites) but
    /// audited here once so bad generator output is visible in logs.
    pub fn set_story(&mut self, story: StorySequence) {
        let out_of_range = story
            .events
            .iter()
            .filter(|event| event.is_out_of_range())
            .count();
        if out_of_range > 0 {
            warn!(
                out_of_range,
                events_len = story.len(),
                "story events carry out-of-range distance/emotion values; clamping at render time"
            );
        }
        debug!(
            events_len = story.len(),
            is_special = story.is_special,
            "set story"
        );

        self.playback = PlaybackController::with_period(story.len(), self.tick_period_seconds);
        let events_len = story.len();
        self.story = Some(story);
        self.notify(&TimelineSignal::StoryReplaced { events_len });
    }

    /// Drops the current story; subsequent frames are blank.
    pub fn clear_story(&mut self) {
        debug!("clear story");
        self.story = None;
        self.playback = PlaybackController::with_period(0, self.tick_period_seconds);
    }

    /// Labels the two lines with the subjects' names.
    pub fn set_subjects(&mut self, name_a: impl Into<String>, name_b: impl Into<String>) {
        self.subjects = Some((name_a.into(), name_b.into()));
    }

    pub fn add_observer(&mut self, observer: Box<dyn TimelineObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, signal: &TimelineSignal) {
        for observer in &mut self.observers {
            observer.on_signal(signal);
        }
    }

    // Control surface: the only mutators of playback state.

    pub fn start(&mut self) -> bool {
        self.playback.start()
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle_play(&mut self) -> bool {
        if self.playback.is_playing() {
            self.playback.pause();
            false
        } else {
            self.playback.start()
        }
    }

    pub fn skip_next(&mut self) {
        self.playback.skip_next();
    }

    pub fn jump_to(&mut self, index: usize) {
        self.playback.jump_to(index);
    }

    pub fn reset(&mut self) {
        self.playback.reset();
        self.notify(&TimelineSignal::PlaybackReset);
    }

    /// Feeds elapsed wall time into playback and dispatches the completion
    /// signal when this call drives the run to its natural end.
    pub fn advance(&mut self, delta_seconds: f64) {
        if !self.playback.advance(delta_seconds) {
            return;
        }
        let Some(story) = self.story.as_ref() else {
            return;
        };
        let Some(last_event) = story.last_event().cloned() else {
            return;
        };
        let signal = TimelineSignal::Completed {
            last_event,
            is_special: story.is_special,
        };
        debug!(is_special = story.is_special, "playback completed");
        self.notify(&signal);
    }

    // Viewport handling: layout-only recomputation.

    /// Applies one viewport sample, recomputing layout.
    ///
    /// Never touches playback or story state.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        self.layout = ChartLayout::from_viewport_tuned(viewport, self.layout_tuning)?;
        self.viewport = viewport;
        Ok(())
    }

    // Scrub support.

    /// Index of the event whose x position is nearest to `x_px`.
    ///
    /// `None` without a story. Considers the full sequence, not just the
    /// visible prefix, so scrub targets ahead of the cursor resolve too.
    #[must_use]
    pub fn nearest_event_index(&self, x_px: f64) -> Option<usize> {
        let story = self.story.as_ref()?;
        if story.is_empty() {
            return None;
        }
        (0..story.len())
            .min_by_key(|&index| OrderedFloat((event_x(index, story.len(), self.layout) - x_px).abs()))
    }

    /// Scrubs the playback cursor to the event nearest `x_px`.
    pub fn jump_to_pixel(&mut self, x_px: f64) {
        if let Some(index) = self.nearest_event_index(x_px) {
            self.playback.jump_to(index);
        }
    }

    // Accessors.

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn story(&self) -> Option<&StorySequence> {
        self.story.as_ref()
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    #[must_use]
    pub fn playback_phase(&self) -> PlaybackPhase {
        self.playback.phase()
    }

    /// Builds the render description for the current session state.
    #[must_use]
    pub fn frame(&self) -> TimelineFrame {
        frame_builder::build_frame(
            self.story.as_ref(),
            self.subjects.as_ref(),
            self.layout,
            self.viewport,
            self.playback.state(),
            self.tension,
        )
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
