//! Optional adapters for external drawing libraries.
//!
//! Enable feature flags (e.g. `plotters`) to add `PointSurface` impls for
//! external drawing targets.

#[cfg(feature = "plotters")]
pub mod plotters;
