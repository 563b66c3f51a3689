//! Court geometry generator: `MeasurementSet` → `Diagram`.
//!
//! Model
//! - Origin at the left end of the goal line, +x along the goal line, +y towards the half line.
//! - Goal-area and free-throw lines are a straight piece between the posts plus two quarter
//!   arcs centred on the posts. Arc radius equals the straight piece's offset and the centres
//!   sit on `y = 0`, so the pieces meet tangentially by construction.
//! - Both pairs of quarter arcs have their angular range cut where they would cross a
//!   sideline. The free-throw arcs are also dashed and marked for baseline clipping
//!   (`y >= 0` samples only).
//!
//! Code cross-refs: `MeasurementSet::validate`, `Diagram`, `geom::{Arc, Segment}`.

use std::f64::consts::{FRAC_PI_2, PI};

use super::diagram::{Diagram, Feature, Item, Shape, Side};
use super::measure::{InvalidMeasurementError, MeasurementSet};
use crate::geom::{Arc, Disc, Label, Point, Segment};

/// Placement of text annotations. Offsets are in court units, title anchor in
/// fractions of the court extent.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationCfg {
    /// Offset of the penalty label from the right end of the penalty line.
    pub penalty_label_offset: (f64, f64),
    pub penalty_label: String,
    /// Title anchor as `(x / court_width, y / court_length)`.
    pub title_anchor_frac: (f64, f64),
    pub title: String,
}

impl Default for AnnotationCfg {
    fn default() -> Self {
        Self {
            penalty_label_offset: (200.0, 150.0),
            penalty_label: "7m".to_string(),
            title_anchor_frac: (0.04, 0.95),
            title: "Handball half-court (IHF standard, corrected geometry)".to_string(),
        }
    }
}

/// Generate the diagram with default annotations.
pub fn generate(m: &MeasurementSet) -> Result<Diagram, InvalidMeasurementError> {
    generate_with(m, &AnnotationCfg::default())
}

/// Generate the diagram; fails before emitting anything if `m` is invalid.
pub fn generate_with(
    m: &MeasurementSet,
    notes: &AnnotationCfg,
) -> Result<Diagram, InvalidMeasurementError> {
    m.validate()?;
    let w = m.court_width;
    let h = m.court_length;
    let cx = m.center_x();
    let left = Point::new(m.goal_left_x(), 0.0);
    let right = Point::new(m.goal_right_x(), 0.0);

    let mut items = Vec::with_capacity(24);
    let mut push = |feature: Feature, shape: Shape| items.push(Item { feature, shape });

    let corners = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ];
    for k in 0..corners.len() {
        let edge = Segment::new(corners[k], corners[(k + 1) % corners.len()]);
        push(Feature::Boundary, Shape::Segment(edge));
    }

    push(Feature::GoalLine, Shape::Segment(Segment::new(left, right).heavy()));

    // 6 m
    let r6 = m.goal_area_radius;
    push(
        Feature::GoalAreaLine,
        Shape::Segment(Segment::new(left + up(r6), right + up(r6))),
    );
    let (l6, r6_arc) = quarter_arcs(m, left, right, r6);
    push(Feature::GoalAreaArc(Side::Left), Shape::Arc(l6));
    push(Feature::GoalAreaArc(Side::Right), Shape::Arc(r6_arc));

    // 9 m
    let r9 = m.free_throw_radius;
    push(
        Feature::FreeThrowLine,
        Shape::Segment(Segment::new(left + up(r9), right + up(r9)).dashed()),
    );
    let (l9, r9_arc) = quarter_arcs(m, left, right, r9);
    push(
        Feature::FreeThrowArc(Side::Left),
        Shape::Arc(l9.dashed().clipped()),
    );
    push(
        Feature::FreeThrowArc(Side::Right),
        Shape::Arc(r9_arc.dashed().clipped()),
    );

    // 7 m mark and its label
    let penalty = Segment::centered(cx, m.penalty_offset, m.penalty_length);
    let (dx, dy) = notes.penalty_label_offset;
    let label_anchor = Point::new(penalty.b.x + dx, penalty.b.y + dy);
    push(Feature::PenaltyLine, Shape::Segment(penalty));
    push(
        Feature::PenaltyLabel,
        Shape::Label(Label {
            anchor: label_anchor,
            text: notes.penalty_label.clone(),
        }),
    );

    // 4 m goalkeeper mark
    push(
        Feature::GoalkeeperLine,
        Shape::Segment(Segment::centered(cx, m.gk_line_offset, m.gk_line_length)),
    );

    push(
        Feature::HalfLine,
        Shape::Segment(Segment::new(Point::new(0.0, h), Point::new(w, h))),
    );
    push(
        Feature::CenterCircle,
        Shape::Arc(Arc::new(Point::new(cx, h), m.center_circle_radius, 0.0, PI)),
    );

    for (side, at) in [(Side::Left, left), (Side::Right, right)] {
        push(
            Feature::Post(side),
            Shape::Disc(Disc {
                center: at,
                radius: m.post_radius,
            }),
        );
    }

    let (fx, fy) = notes.title_anchor_frac;
    push(
        Feature::Title,
        Shape::Label(Label {
            anchor: Point::new(fx * w, fy * h),
            text: notes.title.clone(),
        }),
    );

    Ok(Diagram::new(*m, items))
}

#[inline]
fn up(d: f64) -> nalgebra::Vector2<f64> {
    nalgebra::Vector2::new(0.0, d)
}

/// Left and right quarter arcs of radius `r` around the posts, cut at the sidelines.
///
/// The left arc starts at π/2, the right arc ends there, so both meet the straight
/// piece at `y = r`. Validation keeps both posts strictly inside the court, which
/// leaves each arc a sweep greater than zero.
fn quarter_arcs(m: &MeasurementSet, left: Point, right: Point, r: f64) -> (Arc, Arc) {
    let left_end = sideline_limit(left.x, r, PI);
    let right_start = PI - sideline_limit(m.court_width - right.x, r, PI);
    (
        Arc::new(left, r, FRAC_PI_2, left_end),
        Arc::new(right, r, right_start, FRAC_PI_2),
    )
}

/// Largest angle in `[π/2, max]` at which an arc of radius `r`, centred `room` units
/// inside the left sideline, stays on the court (`x >= 0`).
///
/// The right-hand arc uses the same bound reflected through `θ ↦ π − θ`.
fn sideline_limit(room: f64, r: f64, max: f64) -> f64 {
    if r <= room {
        return max;
    }
    (-room / r).acos().min(max)
}
