//! Curated re-exports for binaries and benches.
//!
//! Prefer these over deep module paths; the module layout underneath may change.

// Court layout
pub use crate::court::{
    classify, distance_to_goal, generate, generate_with, AnnotationCfg, Diagram, Feature,
    InvalidMeasurementError, Item, MeasurementSet, Shape, Side, Zone,
};
// Primitives and sampling
pub use crate::geom::{
    sample_arc, Arc, ArcSamples, ClippedSamples, Disc, Label, Point, Segment, Stroke, Weight,
};
// Rendering seam
pub use crate::render::Surface;
