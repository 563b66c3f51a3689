//! Measurement set: the named constants every court primitive is derived from.
//!
//! Units are whatever the caller picks, as long as all fields share it; the
//! `Default` values are the IHF half-court in millimetres.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard court measurements, all in one length unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Sideline to sideline.
    pub court_width: f64,
    /// Goal line to half line.
    pub court_length: f64,
    /// Inner distance between the goal posts.
    pub goal_width: f64,
    /// 6 m line.
    pub goal_area_radius: f64,
    /// 9 m line.
    pub free_throw_radius: f64,
    /// Distance of the 7 m mark from the goal line.
    pub penalty_offset: f64,
    pub penalty_length: f64,
    /// Distance of the 4 m goalkeeper mark from the goal line.
    pub gk_line_offset: f64,
    pub gk_line_length: f64,
    pub center_circle_radius: f64,
    pub post_radius: f64,
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self {
            court_width: 20_000.0,
            court_length: 20_000.0,
            goal_width: 3_000.0,
            goal_area_radius: 6_000.0,
            free_throw_radius: 9_000.0,
            penalty_offset: 7_000.0,
            penalty_length: 1_000.0,
            gk_line_offset: 4_000.0,
            gk_line_length: 150.0,
            center_circle_radius: 2_000.0,
            post_radius: 100.0,
        }
    }
}

/// Rejected measurement set. Carries the offending field names and values.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidMeasurementError {
    /// A field is zero, negative, or not finite.
    NonPositive { field: &'static str, value: f64 },
    /// `lesser < greater` (or `<=` when `inclusive`) does not hold.
    Ordering {
        lesser: &'static str,
        lesser_value: f64,
        greater: &'static str,
        greater_value: f64,
        inclusive: bool,
    },
}

impl fmt::Display for InvalidMeasurementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "invalid measurement: {field} must be positive and finite (got {value})")
            }
            Self::Ordering {
                lesser,
                lesser_value,
                greater,
                greater_value,
                inclusive,
            } => {
                let op = if *inclusive { "<=" } else { "<" };
                write!(
                    f,
                    "invalid measurement: {lesser} {op} {greater} required (got {lesser_value} vs {greater_value})"
                )
            }
        }
    }
}

impl std::error::Error for InvalidMeasurementError {}

fn ordered(
    lesser: (&'static str, f64),
    greater: (&'static str, f64),
    inclusive: bool,
) -> Result<(), InvalidMeasurementError> {
    let ok = if inclusive {
        lesser.1 <= greater.1
    } else {
        lesser.1 < greater.1
    };
    if ok {
        Ok(())
    } else {
        Err(InvalidMeasurementError::Ordering {
            lesser: lesser.0,
            lesser_value: lesser.1,
            greater: greater.0,
            greater_value: greater.1,
            inclusive,
        })
    }
}

impl MeasurementSet {
    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 11] {
        [
            ("court_width", self.court_width),
            ("court_length", self.court_length),
            ("goal_width", self.goal_width),
            ("goal_area_radius", self.goal_area_radius),
            ("free_throw_radius", self.free_throw_radius),
            ("penalty_offset", self.penalty_offset),
            ("penalty_length", self.penalty_length),
            ("gk_line_offset", self.gk_line_offset),
            ("gk_line_length", self.gk_line_length),
            ("center_circle_radius", self.center_circle_radius),
            ("post_radius", self.post_radius),
        ]
    }

    /// Check positivity and the ordering invariants; first violation wins.
    pub fn validate(&self) -> Result<(), InvalidMeasurementError> {
        for (field, value) in self.fields() {
            if !(value.is_finite() && value > 0.0) {
                return Err(InvalidMeasurementError::NonPositive { field, value });
            }
        }
        let w = ("court_width", self.court_width);
        let h = ("court_length", self.court_length);
        ordered(
            ("goal_area_radius", self.goal_area_radius),
            ("free_throw_radius", self.free_throw_radius),
            false,
        )?;
        ordered(("free_throw_radius", self.free_throw_radius), h, false)?;
        ordered(("goal_width", self.goal_width), w, false)?;
        ordered(("penalty_length", self.penalty_length), w, false)?;
        ordered(("gk_line_length", self.gk_line_length), w, false)?;
        ordered(("penalty_offset", self.penalty_offset), h, false)?;
        ordered(("gk_line_offset", self.gk_line_offset), h, false)?;
        ordered(
            ("center_circle_radius", self.center_circle_radius),
            ("court_width / 2", self.half_width()),
            true,
        )?;
        Ok(())
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * self.court_width
    }
    /// Horizontal midpoint of the court (x of the goal centre).
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.half_width()
    }
    #[inline]
    pub fn goal_left_x(&self) -> f64 {
        self.center_x() - 0.5 * self.goal_width
    }
    #[inline]
    pub fn goal_right_x(&self) -> f64 {
        self.center_x() + 0.5 * self.goal_width
    }
}
