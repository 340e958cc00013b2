use serde::{Deserialize, Serialize};

/// Upper bound of the inverse-closeness metric (`distance`).
pub const DISTANCE_MAX: f64 = 100.0;

/// Upper bound of the affect intensity metric (`emotion_score`).
pub const EMOTION_SCORE_MAX: f64 = 10.0;

/// Palette selector delivered alongside the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Celebratory/highlighted rendering.
    Destiny,
    /// Neutral rendering.
    Default,
}

/// One narrative step of the two-person story.
///
/// `distance` is inverse closeness: 0 means the two subjects coincide, 100
/// means maximal separation. `emotion_score` only drives color selection.
/// Out-of-range values are tolerated on input and clamped at use sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEvent {
    pub year: i32,
    #[serde(rename = "event")]
    pub text: String,
    pub distance: f64,
    pub emotion_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl StoryEvent {
    #[must_use]
    pub fn new(year: i32, text: impl Into<String>, distance: f64, emotion_score: f64) -> Self {
        Self {
            year,
            text: text.into(),
            distance,
            emotion_score,
            phase: None,
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// `distance` forced into `[0, 100]`.
    #[must_use]
    pub fn clamped_distance(&self) -> f64 {
        self.distance.clamp(0.0, DISTANCE_MAX)
    }

    /// `emotion_score` forced into `[0, 10]`.
    #[must_use]
    pub fn clamped_emotion_score(&self) -> f64 {
        self.emotion_score.clamp(0.0, EMOTION_SCORE_MAX)
    }

    /// Whether either metric lies outside its documented range.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        !(0.0..=DISTANCE_MAX).contains(&self.distance)
            || !(0.0..=EMOTION_SCORE_MAX).contains(&self.emotion_score)
    }
}

/// Ordered story delivered once per successful fetch.
///
/// Replaced wholesale on a new submission; never mutated in place. An empty
/// `events` list renders nothing rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySequence {
    pub events: Vec<StoryEvent>,
    pub is_special: bool,
    pub theme: Theme,
}

impl StorySequence {
    #[must_use]
    pub fn new(events: Vec<StoryEvent>, is_special: bool, theme: Theme) -> Self {
        Self {
            events,
            is_special,
            theme,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn last_event(&self) -> Option<&StoryEvent> {
        self.events.last()
    }
}
