use crate::core::event::{DISTANCE_MAX, StoryEvent};
use crate::core::layout::ChartLayout;

/// Which of the two mirrored lines a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    /// Drawn above the center axis (first subject).
    A,
    /// Drawn below the center axis (second subject).
    B,
}

/// Pixel-space point tagged with the event it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub event_index: usize,
}

/// The two ordered point lists produced for one visible prefix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinePair {
    pub line_a: Vec<ProjectedPoint>,
    pub line_b: Vec<ProjectedPoint>,
}

impl LinePair {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_a.is_empty() && self.line_b.is_empty()
    }
}

/// Horizontal step between adjacent events.
///
/// The step always uses the full sequence length so x positions stay stable
/// regardless of how many events are currently revealed.
#[must_use]
pub fn x_step(total_events: usize, layout: ChartLayout) -> f64 {
    layout.chart_width / total_events.saturating_sub(1).max(1) as f64
}

/// X coordinate of the event at `index`.
#[must_use]
pub fn event_x(index: usize, total_events: usize, layout: ChartLayout) -> f64 {
    layout.padding.left + index as f64 * x_step(total_events, layout)
}

/// Maps inverse closeness onto a Y coordinate mirrored around the center axis.
///
/// `distance = 0` puts both lines exactly on the center axis; `distance = 100`
/// separates them by exactly `2 * max_offset`. Out-of-range distances are
/// clamped so geometry never escapes the chart bounds.
#[must_use]
pub fn distance_to_y(distance: f64, side: LineSide, layout: ChartLayout) -> f64 {
    let offset = distance.clamp(0.0, DISTANCE_MAX) / DISTANCE_MAX * layout.max_offset;
    match side {
        LineSide::A => layout.center_y - offset,
        LineSide::B => layout.center_y + offset,
    }
}

/// Projects the visible prefix of `events` into the two mirrored point lists.
///
/// `visible_count` is clamped to the sequence length; an empty sequence yields
/// empty lists. The function is deterministic and side-effect free so both
/// rendering and tests consume the exact same geometry output.
#[must_use]
pub fn project_timeline(
    events: &[StoryEvent],
    visible_count: usize,
    layout: ChartLayout,
) -> LinePair {
    if events.is_empty() {
        return LinePair::default();
    }

    let visible = visible_count.min(events.len());
    let mut line_a = Vec::with_capacity(visible);
    let mut line_b = Vec::with_capacity(visible);

    for (index, event) in events.iter().take(visible).enumerate() {
        let x = event_x(index, events.len(), layout);
        line_a.push(ProjectedPoint {
            x,
            y: distance_to_y(event.distance, LineSide::A, layout),
            event_index: index,
        });
        line_b.push(ProjectedPoint {
            x,
            y: distance_to_y(event.distance, LineSide::B, layout),
            event_index: index,
        });
    }

    LinePair { line_a, line_b }
}
