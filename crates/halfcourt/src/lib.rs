//! Handball half-court geometry.
//!
//! Derives every line, arc and marker of an IHF half-court from a `MeasurementSet`
//! and hands the result to a caller-owned drawing surface.
//!
//! Layout
//! - `geom`: drawing primitives and lazy arc sampling.
//! - `court`: measurements, the layout generator, the `Diagram` container, zones.
//! - `render`: the `Surface` trait a renderer implements.
//!
//! API Policy
//! - `api` and `prelude` are the intended import surfaces; module paths may move.

pub mod api;
pub mod court;
pub mod geom;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use court::{generate, Diagram, InvalidMeasurementError, MeasurementSet};
pub use nalgebra::{Point2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::court::{
        classify, generate, generate_with, AnnotationCfg, Diagram, Feature, InvalidMeasurementError,
        Item, MeasurementSet, Shape, Side, Zone,
    };
    pub use crate::geom::{Arc, Disc, Label, Point, Segment, Stroke, Weight};
    pub use crate::render::Surface;
}
