//! Handball half-court layout.
//!
//! Purpose
//! - Turn a validated `MeasurementSet` into an immutable `Diagram` of tagged shapes.
//! - Everything is derived algebraically from the measurement fields; annotation
//!   placement is the only extra input (`AnnotationCfg`).
//!
//! Structure
//! - `measure.rs`: measurement set, invariants, `InvalidMeasurementError`.
//! - `layout.rs`: the generator.
//! - `diagram.rs`: output container and lookups.
//! - `zone.rs`: point classification against the same measurements.

mod diagram;
mod layout;
mod measure;
mod zone;

pub use diagram::{Diagram, Feature, Item, Shape, Side};
pub use layout::{generate, generate_with, AnnotationCfg};
pub use measure::{InvalidMeasurementError, MeasurementSet};
pub use zone::{classify, distance_to_goal, Zone};

#[cfg(test)]
mod tests;
