pub mod curve;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod types;

pub use curve::{CubicSegment, DEFAULT_TENSION, SmoothPath, smooth_path};
pub use event::{DISTANCE_MAX, EMOTION_SCORE_MAX, StoryEvent, StorySequence, Theme};
pub use geometry::{LinePair, LineSide, ProjectedPoint, distance_to_y, event_x, project_timeline};
pub use layout::{ChartLayout, LayoutTuning, Padding};
pub use palette::{EmotionBucket, EmotionPalette, emotion_bucket, emotion_color};
pub use types::Viewport;
