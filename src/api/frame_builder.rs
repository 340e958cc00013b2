use crate::core::palette::{
    center_axis_color, emotion_color, legend_center_color, legend_edge_color, line_stroke,
    phase_label_color, subject_label_color, year_label_color,
};
use crate::core::{
    ChartLayout, LinePair, LineSide, StorySequence, Theme, Viewport, event_x, project_timeline,
    smooth_path,
};
use crate::playback::PlaybackState;
use crate::render::{
    LinePrimitive, LineStrokeStyle, PathPrimitive, PointPrimitive, TextHAlign, TextPrimitive,
    TimelineFrame,
};

const LINE_STROKE_WIDTH: f64 = 3.0;
const SPECIAL_LINE_STROKE_WIDTH: f64 = 4.0;
const POINT_RADIUS: f64 = 5.0;
const SPECIAL_POINT_RADIUS: f64 = 6.0;

/// Materializes one deterministic draw pass from the current session state.
///
/// Missing or empty stories degrade to a blank frame: empty paths, no points,
/// no labels, just the center axis.
pub(super) fn build_frame(
    story: Option<&StorySequence>,
    subjects: Option<&(String, String)>,
    layout: ChartLayout,
    viewport: Viewport,
    playback: PlaybackState,
    tension: f64,
) -> TimelineFrame {
    let theme = story.map_or(Theme::Default, |story| story.theme);
    let center_axis = LinePrimitive::new(
        layout.padding.left,
        layout.center_y,
        layout.width - layout.padding.right,
        layout.center_y,
        1.0,
        LineStrokeStyle::Dashed,
        center_axis_color(theme),
    );

    let mut frame = TimelineFrame {
        viewport,
        layout,
        center_axis,
        line_a: PathPrimitive::new(String::new(), LINE_STROKE_WIDTH, line_stroke(LineSide::A)),
        line_b: PathPrimitive::new(String::new(), LINE_STROKE_WIDTH, line_stroke(LineSide::B)),
        points: Vec::new(),
        labels: Vec::new(),
        playback,
    };

    let Some(story) = story else {
        return frame;
    };
    if story.is_empty() {
        return frame;
    }

    let stroke_width = if story.is_special {
        SPECIAL_LINE_STROKE_WIDTH
    } else {
        LINE_STROKE_WIDTH
    };
    let visible = playback.current_index.saturating_add(1);
    let pair = project_timeline(&story.events, visible, layout);

    frame.line_a = PathPrimitive::new(
        smooth_path(&pair.line_a, tension).to_svg(),
        stroke_width,
        line_stroke(LineSide::A),
    );
    frame.line_b = PathPrimitive::new(
        smooth_path(&pair.line_b, tension).to_svg(),
        stroke_width,
        line_stroke(LineSide::B),
    );
    frame.points = build_points(story, &pair, playback);
    frame.labels = build_labels(story, subjects, layout, playback);
    frame
}

fn build_points(
    story: &StorySequence,
    pair: &LinePair,
    playback: PlaybackState,
) -> Vec<PointPrimitive> {
    let radius = if story.is_special {
        SPECIAL_POINT_RADIUS
    } else {
        POINT_RADIUS
    };

    let mut points = Vec::with_capacity(pair.line_a.len() + pair.line_b.len());
    for projected in pair.line_a.iter().chain(pair.line_b.iter()) {
        let event = &story.events[projected.event_index];
        points.push(PointPrimitive {
            x: projected.x,
            y: projected.y,
            radius,
            fill: emotion_color(event.emotion_score, story.theme),
            event_index: projected.event_index,
            is_current: projected.event_index == playback.current_index,
        });
    }
    points
}

fn build_labels(
    story: &StorySequence,
    subjects: Option<&(String, String)>,
    layout: ChartLayout,
    playback: PlaybackState,
) -> Vec<TextPrimitive> {
    let theme = story.theme;
    let mut labels = Vec::new();

    let year_font = if layout.is_compact { 8.0 } else { 12.0 };
    let year_y = layout.height - if layout.is_compact { 8.0 } else { 15.0 };
    for (index, event) in story.events.iter().enumerate() {
        let revealed = index <= playback.current_index;
        if layout.shows_year_label(index, story.len(), playback.current_index) {
            let text = if layout.is_compact {
                format!("{:02}", event.year.rem_euclid(100))
            } else {
                event.year.to_string()
            };
            let x = event_x(index, story.len(), layout);
            labels.push(
                TextPrimitive::new(
                    text,
                    x,
                    year_y,
                    year_font,
                    year_label_color(theme),
                    TextHAlign::Center,
                )
                .with_revealed(revealed),
            );
        }

        if layout.shows_phase_labels() && revealed {
            if let Some(phase) = event.phase.as_deref().filter(|phase| !phase.is_empty()) {
                let x = event_x(index, story.len(), layout);
                labels.push(TextPrimitive::new(
                    phase,
                    x,
                    layout.height - 35.0,
                    10.0,
                    phase_label_color(theme),
                    TextHAlign::Center,
                ));
            }
        }
    }

    if let Some((name_a, name_b)) = subjects {
        labels.extend(subject_labels(name_a, name_b, theme, layout));
    }

    if !layout.is_compact {
        labels.extend(closeness_legend(theme, layout));
    }

    labels
}

fn subject_labels(
    name_a: &str,
    name_b: &str,
    theme: Theme,
    layout: ChartLayout,
) -> Vec<TextPrimitive> {
    let font = if layout.is_compact { 12.0 } else { 14.0 };
    let (x, align) = if layout.is_compact {
        (layout.padding.left + 5.0, TextHAlign::Left)
    } else {
        (layout.padding.left - 10.0, TextHAlign::Right)
    };
    let top_y = if layout.is_compact {
        layout.padding.top - 8.0
    } else {
        layout.padding.top
    };
    let bottom_y = if layout.is_compact {
        layout.height - layout.padding.bottom + 15.0
    } else {
        layout.height - layout.padding.bottom
    };

    let mut labels = Vec::with_capacity(2);
    if !name_a.is_empty() {
        labels.push(TextPrimitive::new(
            name_a,
            x,
            top_y,
            font,
            subject_label_color(LineSide::A, theme),
            align,
        ));
    }
    if !name_b.is_empty() {
        labels.push(TextPrimitive::new(
            name_b,
            x,
            bottom_y,
            font,
            subject_label_color(LineSide::B, theme),
            align,
        ));
    }
    labels
}

fn closeness_legend(theme: Theme, layout: ChartLayout) -> Vec<TextPrimitive> {
    let x = layout.width - layout.padding.right + 10.0;
    vec![
        TextPrimitive::new(
            "apart",
            x,
            layout.padding.top,
            12.0,
            legend_edge_color(theme),
            TextHAlign::Left,
        ),
        TextPrimitive::new(
            "together",
            x,
            layout.center_y,
            12.0,
            legend_center_color(theme),
            TextHAlign::Left,
        ),
        TextPrimitive::new(
            "apart",
            x,
            layout.height - layout.padding.bottom,
            12.0,
            legend_edge_color(theme),
            TextHAlign::Left,
        ),
    ]
}
