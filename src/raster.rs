//! Seam between curve sampling and an external rasterization surface.
//!
//! The library never talks to a graphics API itself. Anything that can plot
//! a filled dot implements [`PointSurface`], and [`render`] feeds it one
//! draw command per control point and per curve sample, followed by a
//! single `present`.

use core::fmt;

use num_traits::ToPrimitive;

use crate::bspline::{BSpline, CurveError};
use crate::point::Point;
use crate::NativeFloat;

/// An RGB color handed to the surface with every draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// A rasterization surface accepting point-draw commands.
///
/// Coordinates arrive in surface space (whatever the implementor's pixel or
/// chart coordinates are); `present` is called once per rendered curve to
/// flush the drawn points.
pub trait PointSurface {
    type Error;

    /// Draw a filled dot of the given `radius` centered on (`x`, `y`).
    fn draw_point(
        &mut self,
        x: NativeFloat,
        y: NativeFloat,
        color: Rgb,
        radius: u32,
    ) -> Result<(), Self::Error>;

    /// Flush everything drawn so far to the output.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Dot colors and radii used by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub control_color: Rgb,
    pub control_radius: u32,
    pub curve_color: Rgb,
    pub curve_radius: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            control_color: Rgb::new(0, 100, 100),
            control_radius: 5,
            curve_color: Rgb::new(255, 100, 0),
            curve_radius: 1,
        }
    }
}

/// Errors from [`render`]: either the curve rejected its inputs or the
/// surface failed to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError<E> {
    Curve(CurveError),
    Surface(E),
}

impl<E> From<CurveError> for RenderError<E> {
    fn from(err: CurveError) -> Self {
        RenderError::Curve(err)
    }
}

impl<E: fmt::Display> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Curve(err) => write!(f, "curve error: {}", err),
            RenderError::Surface(err) => write!(f, "surface error: {}", err),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for RenderError<E> {}

/// Rasterize a curve onto a surface: one dot per control point, one dot per
/// curve sample at the given level of detail, then a single present.
///
/// Points are projected onto the surface through their first two axes, so
/// nominally 3-D curves draw their x/y shadow.
pub fn render<P, S, const K: usize, const C: usize, const D: usize>(
    curve: &BSpline<P, K, C, D>,
    lod: usize,
    style: &RenderStyle,
    surface: &mut S,
) -> Result<(), RenderError<S::Error>>
where
    P: Point,
    S: PointSurface + ?Sized,
{
    for control_point in curve.control_points() {
        surface
            .draw_point(
                surface_axis(control_point, 0),
                surface_axis(control_point, 1),
                style.control_color,
                style.control_radius,
            )
            .map_err(RenderError::Surface)?;
    }

    for sample in curve.sample(lod)? {
        surface
            .draw_point(
                surface_axis(&sample, 0),
                surface_axis(&sample, 1),
                style.curve_color,
                style.curve_radius,
            )
            .map_err(RenderError::Surface)?;
    }

    surface.present().map_err(RenderError::Surface)
}

fn surface_axis<P: Point>(point: &P, index: usize) -> NativeFloat {
    point.axis(index).to_f64().unwrap()
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::PointN;

    #[derive(Default)]
    struct RecordingSurface {
        dots: Vec<(NativeFloat, NativeFloat, Rgb, u32)>,
        presented: usize,
    }

    impl PointSurface for RecordingSurface {
        type Error = core::convert::Infallible;

        fn draw_point(
            &mut self,
            x: NativeFloat,
            y: NativeFloat,
            color: Rgb,
            radius: u32,
        ) -> Result<(), Self::Error> {
            self.dots.push((x, y, color, radius));
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.presented += 1;
            Ok(())
        }
    }

    struct RefusingSurface;

    impl PointSurface for RefusingSurface {
        type Error = &'static str;

        fn draw_point(
            &mut self,
            _x: NativeFloat,
            _y: NativeFloat,
            _color: Rgb,
            _radius: u32,
        ) -> Result<(), Self::Error> {
            Err("surface is full")
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn curve() -> BSpline<PointN<f64, 3>, 8, 4, 3> {
        BSpline::clamped_uniform([
            PointN::new([0.0, 0.0, 0.0]),
            PointN::new([1.0, 2.0, 5.0]),
            PointN::new([2.0, -1.0, -5.0]),
            PointN::new([3.0, 0.0, 0.0]),
        ])
        .unwrap()
    }

    #[test]
    fn renders_control_points_then_samples() {
        let curve = curve();
        let style = RenderStyle::default();
        let mut surface = RecordingSurface::default();

        render(&curve, 50, &style, &mut surface).unwrap();

        assert_eq!(surface.dots.len(), 4 + 50);
        assert_eq!(surface.presented, 1);

        let (x, y, color, radius) = surface.dots[0];
        assert_eq!((x, y), (0.0, 0.0));
        assert_eq!(color, style.control_color);
        assert_eq!(radius, style.control_radius);

        // z never reaches the surface, only the x/y projection does
        let (x, y, color, radius) = surface.dots[4];
        assert_eq!((x, y), (0.0, 0.0));
        assert_eq!(color, style.curve_color);
        assert_eq!(radius, style.curve_radius);
    }

    #[test]
    fn curve_errors_surface_before_drawing() {
        let curve = curve();
        let mut surface = RecordingSurface::default();

        let err = render(&curve, 1, &RenderStyle::default(), &mut surface);
        assert_eq!(
            err.err(),
            Some(RenderError::Curve(CurveError::TooFewSamples { lod: 1 }))
        );
        // control points draw before sampling starts
        assert_eq!(surface.dots.len(), 4);
        assert_eq!(surface.presented, 0);
    }

    #[test]
    fn surface_errors_propagate() {
        let curve = curve();
        let err = render(&curve, 10, &RenderStyle::default(), &mut RefusingSurface);
        assert_eq!(err.err(), Some(RenderError::Surface("surface is full")));
    }
}
