//! Point-in-zone classification against the measured court.

use serde::{Deserialize, Serialize};

use super::measure::MeasurementSet;
use crate::geom::Point;

/// Region of the half-court a point falls in. Lines belong to the inner zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Outside,
    GoalArea,
    FreeThrowZone,
    Field,
}

/// Distance from `p` to the goal mouth (the segment between the posts on `y = 0`).
pub fn distance_to_goal(m: &MeasurementSet, p: Point) -> f64 {
    let dx = if p.x < m.goal_left_x() {
        m.goal_left_x() - p.x
    } else if p.x > m.goal_right_x() {
        p.x - m.goal_right_x()
    } else {
        0.0
    };
    dx.hypot(p.y)
}

/// Classify `p`. Assumes `m` has been validated.
pub fn classify(m: &MeasurementSet, p: Point) -> Zone {
    let inside = (0.0..=m.court_width).contains(&p.x) && (0.0..=m.court_length).contains(&p.y);
    if !inside {
        return Zone::Outside;
    }
    let d = distance_to_goal(m, p);
    if d <= m.goal_area_radius {
        Zone::GoalArea
    } else if d <= m.free_throw_radius {
        Zone::FreeThrowZone
    } else {
        Zone::Field
    }
}
