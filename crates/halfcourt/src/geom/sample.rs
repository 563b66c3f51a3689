//! Lazy arc sampling.
//!
//! Sampling density is a rendering concern: the iterator only decides where the
//! intermediate points fall, never which arcs exist or their angular range.
//! The first and last samples are evaluated at exactly `start` and `end`.

use nalgebra::Vector2;

use super::types::Point;

/// Finite, restartable (`Clone`) sequence of points along a circular arc.
#[derive(Clone, Debug)]
pub struct ArcSamples {
    center: Point,
    radius: f64,
    start: f64,
    end: f64,
    count: usize,
    next: usize,
}

/// `ArcSamples` with below-baseline points filtered out.
pub type ClippedSamples = std::iter::Filter<ArcSamples, fn(&Point) -> bool>;

/// Sample `count` points (clamped to at least 2) from `start` to `end`.
pub fn sample_arc(center: Point, radius: f64, start: f64, end: f64, count: usize) -> ArcSamples {
    ArcSamples {
        center,
        radius,
        start,
        end,
        count: count.max(2),
        next: 0,
    }
}

/// Baseline predicate used for clipping (`y >= 0`).
#[inline]
pub(crate) fn above_baseline(p: &Point) -> bool {
    p.y >= 0.0
}

impl ArcSamples {
    fn angle(&self, k: usize) -> f64 {
        if k + 1 == self.count {
            return self.end;
        }
        let t = k as f64 / (self.count - 1) as f64;
        self.start + t * (self.end - self.start)
    }
}

impl Iterator for ArcSamples {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.count {
            return None;
        }
        let theta = self.angle(self.next);
        self.next += 1;
        Some(self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ArcSamples {}
