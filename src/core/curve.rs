use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::core::geometry::ProjectedPoint;

/// Default cardinal spline tension.
pub const DEFAULT_TENSION: f64 = 0.3;

/// One cubic Bezier segment of a smooth path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub cp1_x: f64,
    pub cp1_y: f64,
    pub cp2_x: f64,
    pub cp2_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// Smooth path through an ordered point list.
///
/// Stories are short, so segments stay inline for typical sequence lengths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothPath {
    pub start: Option<(f64, f64)>,
    pub segments: SmallVec<[CubicSegment; 8]>,
}

impl SmoothPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Serializes the path as SVG path data (`M … C …`).
    ///
    /// Output is byte-identical for identical inputs; an empty path yields an
    /// empty string so hosts can skip the draw call.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let Some((start_x, start_y)) = self.start else {
            return String::new();
        };
        if self.segments.is_empty() {
            return String::new();
        }

        let mut data = format!("M {start_x} {start_y}");
        for segment in &self.segments {
            let _ = write!(
                data,
                " C {} {}, {} {}, {} {}",
                segment.cp1_x,
                segment.cp1_y,
                segment.cp2_x,
                segment.cp2_y,
                segment.end_x,
                segment.end_y
            );
        }
        data
    }
}

/// Builds a cardinal (Catmull-Rom-style) spline through `points`.
///
/// For each consecutive pair `p1, p2` the neighbors `p0` (clamped to the
/// first point) and `p3` (clamped to the last) shape the two control points:
/// `cp1 = p1 + (p2 - p0) * tension` and `cp2 = p2 - (p3 - p1) * tension`.
///
/// Edge policy: zero or one points produce an empty path; exactly two points
/// produce a single cubic degenerating toward a straight line. The function
/// is pure and referentially transparent.
#[must_use]
pub fn smooth_path(points: &[ProjectedPoint], tension: f64) -> SmoothPath {
    if points.len() < 2 {
        return SmoothPath::default();
    }

    let mut segments = SmallVec::with_capacity(points.len() - 1);
    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        segments.push(CubicSegment {
            cp1_x: p1.x + (p2.x - p0.x) * tension,
            cp1_y: p1.y + (p2.y - p0.y) * tension,
            cp2_x: p2.x - (p3.x - p1.x) * tension,
            cp2_y: p2.y - (p3.y - p1.y) * tension,
            end_x: p2.x,
            end_y: p2.y,
        });
    }

    SmoothPath {
        start: Some((points[0].x, points[0].y)),
        segments,
    }
}
