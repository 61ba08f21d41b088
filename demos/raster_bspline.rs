use knotwork::{render, BSpline, PointN, RenderStyle};
use plotters::prelude::*;

const LOD: usize = 2000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Seven 3-D control points; the z axis is nominal and never reaches the
    // bitmap, only the x/y shadow is drawn.
    let curve: BSpline<PointN<f64, 3>, 11, 7, 3> = BSpline::clamped_uniform([
        PointN::new([100.0, 400.0, 0.0]),
        PointN::new([150.0, 580.0, 20.0]),
        PointN::new([250.0, 350.0, 0.0]),
        PointN::new([500.0, 500.0, -20.0]),
        PointN::new([640.0, 700.0, 0.0]),
        PointN::new([640.0, 850.0, 2.0]),
        PointN::new([980.0, 620.0, 0.0]),
    ])?;

    let mut area = BitMapBackend::new("bspline_curve.png", (1000, 1000)).into_drawing_area();
    area.fill(&BLACK)?;

    render(&curve, LOD, &RenderStyle::default(), &mut area)?;

    let (kmin, kmax) = curve.knot_domain();
    println!(
        "rendered {} samples over t in [{}, {}] to bspline_curve.png",
        LOD, kmin, kmax
    );
    Ok(())
}
