//! B-Spline curve evaluation with the Cox-de Boor recursion.
//!
//! The crate is built around three pieces that compose into one pipeline:
//! clamped knot-vector generation ([`knots`]), basis-function evaluation
//! ([`basis`]) and the curve type itself ([`BSpline`]), which sums weighted
//! control points into curve points and samples them at a chosen level of
//! detail. Sampled points can be handed to any rasterization surface
//! through the [`PointSurface`] trait; the core has no dependency on a
//! graphics API.
//!
//! Curves are generic over a caller-supplied [`Point`] type, so integration
//! with external math libraries only requires implementing a small trait.
//! [`PointN`] is provided for the common case.
//!
//! ```rust
//! use knotwork::{BSpline, PointN};
//!
//! // A clamped cubic over 4 control points is a single Bezier segment.
//! let curve: BSpline<PointN<f64, 3>, 8, 4, 3> = BSpline::clamped_uniform([
//!     PointN::new([0.0, 0.0, 0.0]),
//!     PointN::new([1.0, 2.0, 0.0]),
//!     PointN::new([2.0, -1.0, 0.0]),
//!     PointN::new([3.0, 0.0, 0.0]),
//! ])
//! .unwrap();
//!
//! let polyline: Vec<_> = curve.sample(5).unwrap().collect();
//! assert_eq!(polyline.len(), 5);
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

pub mod adapters;
pub mod basis;
pub mod bspline;
pub mod knots;
pub mod point;
pub mod point_n;
pub mod raster;

pub use basis::cox_de_boor;
pub use bspline::{BSpline, CurveError, Samples};
pub use knots::open_uniform;
pub use point::Point;
pub use point_n::PointN;
pub use raster::{render, PointSurface, RenderError, RenderStyle, Rgb};

/// The floating point type used for casts from integer step counters and
/// for surface coordinates.
pub type NativeFloat = f64;

/// Squared-distance tolerance used throughout the tests.
pub const EPSILON: NativeFloat = 1e-10;
