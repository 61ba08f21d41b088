//! Plotters adapter implementations.
//!
//! Enable this adapter with the `plotters` feature (on by default) to use a
//! `plotters::DrawingArea` as a [`PointSurface`]. Add `plotters` as a direct
//! dependency to construct the backend in your own code.
//!
//! # Example
//! ```rust,no_run
//! use knotwork::{render, BSpline, PointN, RenderStyle};
//! use plotters::prelude::*;
//!
//! let curve: BSpline<PointN<f64, 2>, 8, 4, 3> = BSpline::clamped_uniform([
//!     PointN::new([100.0, 400.0]),
//!     PointN::new([250.0, 350.0]),
//!     PointN::new([640.0, 700.0]),
//!     PointN::new([980.0, 620.0]),
//! ])
//! .unwrap();
//!
//! let mut area = BitMapBackend::new("curve.png", (1000, 1000)).into_drawing_area();
//! area.fill(&BLACK).unwrap();
//! render(&curve, 2000, &RenderStyle::default(), &mut area).unwrap();
//! ```
//!
//! Every draw command becomes a filled `Circle` in the area's pixel
//! coordinates; `present` flushes the backend.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::Circle;
use plotters::style::{Color, RGBColor};

use crate::raster::{PointSurface, Rgb};
use crate::NativeFloat;

impl<DB: DrawingBackend> PointSurface for DrawingArea<DB, Shift> {
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn draw_point(
        &mut self,
        x: NativeFloat,
        y: NativeFloat,
        color: Rgb,
        radius: u32,
    ) -> Result<(), Self::Error> {
        let style = RGBColor(color.r, color.g, color.b).filled();
        self.draw(&Circle::new((x as i32, y as i32), radius as i32, style))
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        DrawingArea::present(self)
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use plotters::prelude::*;

    use crate::{render, BSpline, PointN, RenderStyle};

    #[test]
    fn draws_onto_a_bitmap_buffer() {
        let curve: BSpline<PointN<f64, 2>, 8, 4, 3> = BSpline::clamped_uniform([
            PointN::new([10.0, 10.0]),
            PointN::new([30.0, 90.0]),
            PointN::new([70.0, 10.0]),
            PointN::new([90.0, 90.0]),
        ])
        .unwrap();

        let mut buffer = vec![0u8; 100 * 100 * 3];
        {
            let mut area =
                BitMapBackend::with_buffer(&mut buffer, (100, 100)).into_drawing_area();
            render(&curve, 64, &RenderStyle::default(), &mut area).unwrap();
        }

        // at least the curve dots must have left non-black pixels behind
        assert!(buffer.iter().any(|&byte| byte != 0));
    }
}
