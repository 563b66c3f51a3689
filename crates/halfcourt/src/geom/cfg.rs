//! Tolerance defaults for court geometry (internal).
//!
//! Policy
//! - Fixed constants; coordinates are in millimetre-scale units, so absolute
//!   tolerances are chosen against magnitudes around 1e4.

/// Coincidence tolerance for points compared after derivation (tangency, mirroring).
pub(crate) const POINT_EPS: f64 = 1e-6;