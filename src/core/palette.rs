use crate::core::event::{EMOTION_SCORE_MAX, Theme};
use crate::core::geometry::LineSide;
use crate::render::Color;

/// Affect bucket selected by `emotion_score`, evaluated high-to-low.
///
/// Boundaries are inclusive on the lower bound: a score of exactly 8 is
/// `Radiant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionBucket {
    /// score >= 8
    Radiant,
    /// score >= 6
    Warm,
    /// score >= 4
    Calm,
    /// everything below
    Subdued,
}

/// Fixed four-color table; one per theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionPalette {
    pub radiant: Color,
    pub warm: Color,
    pub calm: Color,
    pub subdued: Color,
}

impl EmotionPalette {
    #[must_use]
    pub const fn color(self, bucket: EmotionBucket) -> Color {
        match bucket {
            EmotionBucket::Radiant => self.radiant,
            EmotionBucket::Warm => self.warm,
            EmotionBucket::Calm => self.calm,
            EmotionBucket::Subdued => self.subdued,
        }
    }
}

/// Destiny theme: gold, pink, violet, indigo.
pub const DESTINY_PALETTE: EmotionPalette = EmotionPalette {
    radiant: Color::from_rgb8(0xF5, 0x9E, 0x0B),
    warm: Color::from_rgb8(0xEC, 0x48, 0x99),
    calm: Color::from_rgb8(0x8B, 0x5C, 0xF6),
    subdued: Color::from_rgb8(0x63, 0x66, 0xF1),
};

/// Default theme: green, blue, violet, gray.
pub const DEFAULT_PALETTE: EmotionPalette = EmotionPalette {
    radiant: Color::from_rgb8(0x10, 0xB9, 0x81),
    warm: Color::from_rgb8(0x3B, 0x82, 0xF6),
    calm: Color::from_rgb8(0x8B, 0x5C, 0xF6),
    subdued: Color::from_rgb8(0x6B, 0x72, 0x80),
};

/// Classifies a score into its bucket, clamping out-of-range input.
#[must_use]
pub fn emotion_bucket(score: f64) -> EmotionBucket {
    let score = score.clamp(0.0, EMOTION_SCORE_MAX);
    if score >= 8.0 {
        EmotionBucket::Radiant
    } else if score >= 6.0 {
        EmotionBucket::Warm
    } else if score >= 4.0 {
        EmotionBucket::Calm
    } else {
        EmotionBucket::Subdued
    }
}

#[must_use]
pub const fn theme_palette(theme: Theme) -> EmotionPalette {
    match theme {
        Theme::Destiny => DESTINY_PALETTE,
        Theme::Default => DEFAULT_PALETTE,
    }
}

/// Pure classifier used for per-point and per-segment coloring.
#[must_use]
pub fn emotion_color(score: f64, theme: Theme) -> Color {
    theme_palette(theme).color(emotion_bucket(score))
}

/// Base stroke color for a line (theme gradients are a host concern).
#[must_use]
pub const fn line_stroke(side: LineSide) -> Color {
    match side {
        LineSide::A => Color::from_rgb8(0x8B, 0x5C, 0xF6),
        LineSide::B => Color::from_rgb8(0xEC, 0x48, 0x99),
    }
}

/// Fill for year labels along the bottom edge.
#[must_use]
pub const fn year_label_color(theme: Theme) -> Color {
    match theme {
        Theme::Destiny => Color::from_rgb8(0xA7, 0x8B, 0xFA),
        Theme::Default => Color::from_rgb8(0x6B, 0x72, 0x80),
    }
}

/// Fill for phase labels above the year row.
#[must_use]
pub const fn phase_label_color(theme: Theme) -> Color {
    match theme {
        Theme::Destiny => Color::from_rgb8(0xEC, 0x48, 0x99),
        Theme::Default => Color::from_rgb8(0x9C, 0xA3, 0xAF),
    }
}

/// Fill for the subject name label attached to a line.
#[must_use]
pub const fn subject_label_color(side: LineSide, theme: Theme) -> Color {
    match (side, theme) {
        (LineSide::A, Theme::Destiny) | (LineSide::B, Theme::Default) => {
            Color::from_rgb8(0xEC, 0x48, 0x99)
        }
        (LineSide::A, Theme::Default) | (LineSide::B, Theme::Destiny) => {
            Color::from_rgb8(0x8B, 0x5C, 0xF6)
        }
    }
}

/// Fill for the "together" row of the closeness legend.
#[must_use]
pub const fn legend_center_color(theme: Theme) -> Color {
    match theme {
        Theme::Destiny => Color::from_rgb8(0xF5, 0x9E, 0x0B),
        Theme::Default => Color::from_rgb8(0x10, 0xB9, 0x81),
    }
}

/// Fill for the "apart" rows of the closeness legend.
#[must_use]
pub const fn legend_edge_color(theme: Theme) -> Color {
    match theme {
        Theme::Destiny => Color::rgba(1.0, 1.0, 1.0, 0.5),
        Theme::Default => Color::rgba(0.0, 0.0, 0.0, 0.3),
    }
}

/// Stroke for the dashed center destiny axis.
#[must_use]
pub const fn center_axis_color(theme: Theme) -> Color {
    match theme {
        Theme::Destiny => Color::rgba(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 0.3),
        Theme::Default => Color::rgba(0.0, 0.0, 0.0, 0.1),
    }
}
