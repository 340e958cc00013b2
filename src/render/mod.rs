mod frame;
mod null_renderer;
mod primitives;

pub use frame::TimelineFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, PathPrimitive, PointPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `TimelineFrame` so
/// drawing code remains isolated from story and playback logic.
pub trait Renderer {
    fn render(&mut self, frame: &TimelineFrame) -> TimelineResult<()>;
}
