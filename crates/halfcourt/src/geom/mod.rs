//! 2D drawing primitives and arc sampling.
//!
//! Purpose
//! - Provide the value types the court layout emits (`Segment`, `Arc`, `Disc`, `Label`)
//!   together with the style classes a renderer maps to strokes.
//! - Keep arc sampling lazy and separate from the decision of which arcs exist.
//!
//! Code cross-refs: `court::layout::generate`, `render::Surface`.

pub(crate) mod cfg;
mod sample;
mod types;

pub use sample::{sample_arc, ArcSamples, ClippedSamples};
pub use types::{Arc, Disc, Label, Point, Segment, Stroke, Weight};
