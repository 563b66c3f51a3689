//! Drawing primitives: segments, arcs, discs and text labels.
//!
//! - `Stroke`, `Weight`: style classes the renderer maps to dash patterns and line widths.
//! - `Segment`, `Arc`: stroked geometry in court units.
//! - `Disc`, `Label`: filled markers and annotation anchors.
//!
//! All shapes are plain `Copy`/`Clone` values; nothing here knows about the court.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::sample::{above_baseline, sample_arc, ArcSamples, ClippedSamples};

/// A 2D coordinate in court units.
pub type Point = Point2<f64>;

/// Line pattern class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    #[default]
    Solid,
    Dashed,
}

/// Line width class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    #[default]
    Regular,
    Heavy,
}

#[inline]
fn mirror_point(p: Point, axis_x: f64) -> Point {
    Point::new(2.0 * axis_x - p.x, p.y)
}

#[inline]
fn close(a: Point, b: Point, tol: f64) -> bool {
    (a - b).norm() <= tol
}

/// Straight line from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
    pub stroke: Stroke,
    pub weight: Weight,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            stroke: Stroke::Solid,
            weight: Weight::Regular,
        }
    }
    /// Horizontal segment of length `len` centred on `(cx, y)`.
    #[inline]
    pub fn centered(cx: f64, y: f64, len: f64) -> Self {
        let half = 0.5 * len;
        Self::new(Point::new(cx - half, y), Point::new(cx + half, y))
    }
    #[inline]
    pub fn dashed(self) -> Self {
        Self {
            stroke: Stroke::Dashed,
            ..self
        }
    }
    #[inline]
    pub fn heavy(self) -> Self {
        Self {
            weight: Weight::Heavy,
            ..self
        }
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.a, &self.b)
    }
    /// Reflection across the vertical line `x = axis_x`.
    pub fn mirror_x(&self, axis_x: f64) -> Self {
        Self {
            a: mirror_point(self.a, axis_x),
            b: mirror_point(self.b, axis_x),
            ..*self
        }
    }
    /// Same style and same endpoint set (orientation ignored).
    pub fn approx_eq(&self, other: &Segment, tol: f64) -> bool {
        if self.stroke != other.stroke || self.weight != other.weight {
            return false;
        }
        (close(self.a, other.a, tol) && close(self.b, other.b, tol))
            || (close(self.a, other.b, tol) && close(self.b, other.a, tol))
    }
}

/// Circular arc swept counter-clockwise from `start` to `end` (radians, from +x).
///
/// `clip_below_baseline` marks arcs whose samples must never go below `y = 0`;
/// `polyline`-style consumers should sample them through `clipped_samples`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
    pub stroke: Stroke,
    pub clip_below_baseline: bool,
}

impl Arc {
    #[inline]
    pub fn new(center: Point, radius: f64, start: f64, end: f64) -> Self {
        Self {
            center,
            radius,
            start,
            end,
            stroke: Stroke::Solid,
            clip_below_baseline: false,
        }
    }
    #[inline]
    pub fn dashed(self) -> Self {
        Self {
            stroke: Stroke::Dashed,
            ..self
        }
    }
    #[inline]
    pub fn clipped(self) -> Self {
        Self {
            clip_below_baseline: true,
            ..self
        }
    }
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
    #[inline]
    pub fn point_at(&self, theta: f64) -> Point {
        self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius
    }
    #[inline]
    pub fn start_point(&self) -> Point {
        self.point_at(self.start)
    }
    #[inline]
    pub fn end_point(&self) -> Point {
        self.point_at(self.end)
    }
    #[inline]
    pub fn contains_angle(&self, theta: f64) -> bool {
        self.start <= theta && theta <= self.end
    }
    /// `n` evenly spaced samples including both endpoints (at least two).
    pub fn samples(&self, n: usize) -> ArcSamples {
        sample_arc(self.center, self.radius, self.start, self.end, n)
    }
    /// Like `samples`, with points below the baseline `y = 0` dropped.
    pub fn clipped_samples(&self, n: usize) -> ClippedSamples {
        self.samples(n).filter(above_baseline as fn(&Point) -> bool)
    }
    /// Samples honouring `clip_below_baseline`.
    pub fn polyline(&self, n: usize) -> Vec<Point> {
        if self.clip_below_baseline {
            self.clipped_samples(n).collect()
        } else {
            self.samples(n).collect()
        }
    }
    /// Reflection across `x = axis_x`; θ maps to π − θ, so the range flips.
    pub fn mirror_x(&self, axis_x: f64) -> Self {
        use std::f64::consts::PI;
        Self {
            center: mirror_point(self.center, axis_x),
            start: PI - self.end,
            end: PI - self.start,
            ..*self
        }
    }
    pub fn approx_eq(&self, other: &Arc, tol: f64) -> bool {
        self.stroke == other.stroke
            && self.clip_below_baseline == other.clip_below_baseline
            && close(self.center, other.center, tol)
            && (self.radius - other.radius).abs() <= tol
            && (self.start - other.start).abs() <= tol
            && (self.end - other.end).abs() <= tol
    }
}

/// Filled circle (goal posts).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
}

impl Disc {
    pub fn mirror_x(&self, axis_x: f64) -> Self {
        Self {
            center: mirror_point(self.center, axis_x),
            radius: self.radius,
        }
    }
}

/// Text annotation anchored at a point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub anchor: Point,
    pub text: String,
}
