//! The generated diagram: an ordered list of tagged shapes.
//!
//! A `Diagram` is built once by `layout::generate` and never mutated; renderers
//! walk `items()` in order. Each item carries a `Feature` tag naming the court
//! marking it depicts so consumers (and tests) can look shapes up by role.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

use super::measure::MeasurementSet;
use crate::geom::cfg::POINT_EPS;
use crate::geom::{Arc, Disc, Label, Point, Segment};

/// Which goal post a feature hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Court marking a shape belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Outer rectangle; four segments in loop order.
    Boundary,
    GoalLine,
    GoalAreaLine,
    GoalAreaArc(Side),
    FreeThrowLine,
    FreeThrowArc(Side),
    PenaltyLine,
    PenaltyLabel,
    GoalkeeperLine,
    HalfLine,
    CenterCircle,
    Post(Side),
    Title,
}

impl Feature {
    /// Counterpart under reflection about the court midline.
    pub fn mirrored(self) -> Self {
        match self {
            Feature::GoalAreaArc(s) => Feature::GoalAreaArc(s.flip()),
            Feature::FreeThrowArc(s) => Feature::FreeThrowArc(s.flip()),
            Feature::Post(s) => Feature::Post(s.flip()),
            other => other,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |s: &Side| match s {
            Side::Left => "left",
            Side::Right => "right",
        };
        match self {
            Feature::Boundary => write!(f, "boundary"),
            Feature::GoalLine => write!(f, "goal_line"),
            Feature::GoalAreaLine => write!(f, "goal_area_line"),
            Feature::GoalAreaArc(s) => write!(f, "goal_area_arc_{}", side(s)),
            Feature::FreeThrowLine => write!(f, "free_throw_line"),
            Feature::FreeThrowArc(s) => write!(f, "free_throw_arc_{}", side(s)),
            Feature::PenaltyLine => write!(f, "penalty_line"),
            Feature::PenaltyLabel => write!(f, "penalty_label"),
            Feature::GoalkeeperLine => write!(f, "goalkeeper_line"),
            Feature::HalfLine => write!(f, "half_line"),
            Feature::CenterCircle => write!(f, "center_circle"),
            Feature::Post(s) => write!(f, "post_{}", side(s)),
            Feature::Title => write!(f, "title"),
        }
    }
}

/// One drawable primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Segment(Segment),
    Arc(Arc),
    Disc(Disc),
    Label(Label),
}

impl Shape {
    pub fn mirror_x(&self, axis_x: f64) -> Self {
        match self {
            Shape::Segment(s) => Shape::Segment(s.mirror_x(axis_x)),
            Shape::Arc(a) => Shape::Arc(a.mirror_x(axis_x)),
            Shape::Disc(d) => Shape::Disc(d.mirror_x(axis_x)),
            Shape::Label(l) => Shape::Label(Label {
                anchor: Point::new(2.0 * axis_x - l.anchor.x, l.anchor.y),
                text: l.text.clone(),
            }),
        }
    }

    pub fn approx_eq(&self, other: &Shape, tol: f64) -> bool {
        match (self, other) {
            (Shape::Segment(a), Shape::Segment(b)) => a.approx_eq(b, tol),
            (Shape::Arc(a), Shape::Arc(b)) => a.approx_eq(b, tol),
            (Shape::Disc(a), Shape::Disc(b)) => {
                (a.center - b.center).norm() <= tol && (a.radius - b.radius).abs() <= tol
            }
            (Shape::Label(a), Shape::Label(b)) => {
                a.text == b.text && (a.anchor - b.anchor).norm() <= tol
            }
            _ => false,
        }
    }

    /// Stroked point sequence; `None` for discs and labels.
    pub fn polyline(&self, samples_per_arc: usize) -> Option<Vec<Point>> {
        match self {
            Shape::Segment(s) => Some(vec![s.a, s.b]),
            Shape::Arc(a) => Some(a.polyline(samples_per_arc)),
            Shape::Disc(_) | Shape::Label(_) => None,
        }
    }

    /// Axis-aligned extent `(min, max)`; arcs use their exact angular extremes.
    pub fn extent(&self) -> (Point, Point) {
        match self {
            Shape::Segment(s) => (s.a.inf(&s.b), s.a.sup(&s.b)),
            Shape::Arc(a) => {
                let (mut lo, mut hi) = (a.start_point(), a.start_point());
                let end = a.end_point();
                lo = lo.inf(&end);
                hi = hi.sup(&end);
                for k in -4i32..=4 {
                    let theta = f64::from(k) * FRAC_PI_2;
                    if a.contains_angle(theta) {
                        let p = a.point_at(theta);
                        lo = lo.inf(&p);
                        hi = hi.sup(&p);
                    }
                }
                (lo, hi)
            }
            Shape::Disc(d) => {
                let r = nalgebra::Vector2::new(d.radius, d.radius);
                (d.center - r, d.center + r)
            }
            Shape::Label(l) => (l.anchor, l.anchor),
        }
    }
}

/// Tagged shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub feature: Feature,
    pub shape: Shape,
}

/// Complete half-court drawing for one measurement set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    measurements: MeasurementSet,
    items: Vec<Item>,
}

impl Diagram {
    pub(crate) fn new(measurements: MeasurementSet, items: Vec<Item>) -> Self {
        Self {
            measurements,
            items,
        }
    }
    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// All shapes tagged with `feature`, in emission order.
    pub fn shapes(&self, feature: Feature) -> impl Iterator<Item = &Shape> + '_ {
        self.items
            .iter()
            .filter(move |it| it.feature == feature)
            .map(|it| &it.shape)
    }
    /// First shape tagged with `feature`.
    pub fn get(&self, feature: Feature) -> Option<&Shape> {
        self.shapes(feature).next()
    }
    pub fn segment(&self, feature: Feature) -> Option<&Segment> {
        self.shapes(feature).find_map(|s| match s {
            Shape::Segment(seg) => Some(seg),
            _ => None,
        })
    }
    pub fn arc(&self, feature: Feature) -> Option<&Arc> {
        self.shapes(feature).find_map(|s| match s {
            Shape::Arc(a) => Some(a),
            _ => None,
        })
    }
    pub fn label(&self, feature: Feature) -> Option<&Label> {
        self.shapes(feature).find_map(|s| match s {
            Shape::Label(l) => Some(l),
            _ => None,
        })
    }

    /// Bounding box of every shape (posts and the centre circle reach past the court rectangle).
    pub fn bounds(&self) -> (Point, Point) {
        let w = self.measurements.court_width;
        let h = self.measurements.court_length;
        let init = (Point::new(0.0, 0.0), Point::new(w, h));
        self.items.iter().fold(init, |(lo, hi), it| {
            let (a, b) = it.shape.extent();
            (lo.inf(&a), hi.sup(&b))
        })
    }

    /// Reflection of every item about the court's vertical midline.
    ///
    /// Sided features swap tags so a symmetric court maps onto itself item by item.
    pub fn mirrored(&self) -> Diagram {
        let axis = self.measurements.center_x();
        let items = self
            .items
            .iter()
            .map(|it| Item {
                feature: it.feature.mirrored(),
                shape: it.shape.mirror_x(axis),
            })
            .collect();
        Diagram::new(self.measurements, items)
    }

    /// Every stroked or filled item has a mirrored counterpart with the matching tag.
    /// Labels are ignored.
    pub fn is_symmetric(&self) -> bool {
        self.mirrored().items.iter().all(|m| {
            matches!(m.shape, Shape::Label(_))
                || self
                    .items
                    .iter()
                    .any(|o| o.feature == m.feature && o.shape.approx_eq(&m.shape, POINT_EPS))
        })
    }
}
