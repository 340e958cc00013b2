use crate::core::{ChartLayout, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::playback::PlaybackState;
use crate::render::{LinePrimitive, PathPrimitive, PointPrimitive, TextPrimitive};

/// Backend-agnostic scene for one timeline draw pass.
///
/// Fully materialized and deterministic: two smooth paths (possibly empty),
/// per-point colored markers, labels, the dashed center axis, and the
/// playback snapshot the frame was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineFrame {
    pub viewport: Viewport,
    pub layout: ChartLayout,
    pub center_axis: LinePrimitive,
    pub line_a: PathPrimitive,
    pub line_b: PathPrimitive,
    pub points: Vec<PointPrimitive>,
    pub labels: Vec<TextPrimitive>,
    pub playback: PlaybackState,
}

impl TimelineFrame {
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.center_axis.validate()?;
        self.line_a.validate()?;
        self.line_b.validate()?;
        for point in &self.points {
            point.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    /// True when the story contributed nothing to draw.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.line_a.is_empty() && self.line_b.is_empty() && self.points.is_empty()
    }
}
