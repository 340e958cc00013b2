use crate::core::types::Viewport;
use crate::error::{TimelineError, TimelineResult};

/// Per-side chart padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

/// Tuning for responsive layout derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTuning {
    /// Viewport widths below this render in compact mode.
    pub compact_breakpoint_px: f64,
    /// Fixed horizontal margin subtracted from the viewport width.
    pub outer_margin_px: f64,
    /// Upper cap on the derived chart width.
    pub max_width_px: f64,
    /// Height caps and width fractions per mode.
    pub max_height_px: f64,
    pub compact_max_height_px: f64,
    pub height_ratio: f64,
    pub compact_height_ratio: f64,
    pub padding: Padding,
    pub compact_padding: Padding,
    /// Margin kept between the extreme line offset and the chart edge.
    pub axis_margin_px: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            compact_breakpoint_px: 640.0,
            outer_margin_px: 32.0,
            max_width_px: 1200.0,
            max_height_px: 400.0,
            compact_max_height_px: 280.0,
            height_ratio: 0.5,
            compact_height_ratio: 0.6,
            padding: Padding::new(40.0, 60.0, 60.0, 60.0),
            compact_padding: Padding::new(25.0, 15.0, 45.0, 15.0),
            axis_margin_px: 10.0,
        }
    }
}

/// Chart geometry derived from the ambient viewport.
///
/// Recomputed reactively on viewport changes. Derivation is a pure function
/// of the latest viewport sample and never touches playback or story state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub is_compact: bool,
    /// Drawable width between left and right padding.
    pub chart_width: f64,
    /// Drawable height between top and bottom padding.
    pub chart_height: f64,
    /// Horizontal destiny axis around which both lines mirror.
    pub center_y: f64,
    /// Largest offset either line may take from the center axis.
    pub max_offset: f64,
}

impl ChartLayout {
    /// Derives the layout for a viewport using default tuning.
    pub fn from_viewport(viewport: Viewport) -> TimelineResult<Self> {
        Self::from_viewport_tuned(viewport, LayoutTuning::default())
    }

    pub fn from_viewport_tuned(viewport: Viewport, tuning: LayoutTuning) -> TimelineResult<Self> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let viewport_width = f64::from(viewport.width);
        let is_compact = viewport_width < tuning.compact_breakpoint_px;

        let width = (viewport_width - tuning.outer_margin_px).min(tuning.max_width_px);
        let height = if is_compact {
            tuning
                .compact_max_height_px
                .min(width * tuning.compact_height_ratio)
        } else {
            tuning.max_height_px.min(width * tuning.height_ratio)
        };

        if width <= 0.0 || height <= 0.0 {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let padding = if is_compact {
            tuning.compact_padding
        } else {
            tuning.padding
        };

        let chart_width = (width - padding.horizontal()).max(0.0);
        let chart_height = (height - padding.vertical()).max(0.0);
        let center_y = height / 2.0;
        let max_offset = (chart_height / 2.0 - tuning.axis_margin_px).max(0.0);

        Ok(Self {
            width,
            height,
            padding,
            is_compact,
            chart_width,
            chart_height,
            center_y,
            max_offset,
        })
    }

    /// Whether the year label at `index` is shown.
    ///
    /// Compact mode thins labels to first, last, current, and even indices so
    /// narrow screens stay readable.
    #[must_use]
    pub fn shows_year_label(self, index: usize, total: usize, current_index: usize) -> bool {
        if !self.is_compact {
            return true;
        }
        index == 0
            || (total > 0 && index == total - 1)
            || index == current_index
            || index % 2 == 0
    }

    /// Phase labels are suppressed entirely in compact mode.
    #[must_use]
    pub fn shows_phase_labels(self) -> bool {
        !self.is_compact
    }
}
