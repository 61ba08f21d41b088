use knotwork::{BSpline, PointN};

const WIDTH: usize = 78;
const HEIGHT: usize = 22;

fn main() {
    let control_points = [
        PointN::new([100.0, 400.0]),
        PointN::new([150.0, 580.0]),
        PointN::new([250.0, 350.0]),
        PointN::new([500.0, 500.0]),
        PointN::new([640.0, 700.0]),
        PointN::new([640.0, 850.0]),
        PointN::new([980.0, 620.0]),
    ];
    let curve: BSpline<PointN<f64, 2>, 11, 7, 3> =
        BSpline::clamped_uniform(control_points).expect("valid control polygon");

    let samples: Vec<PointN<f64, 2>> = curve
        .sample(WIDTH * 4)
        .expect("lod is large enough")
        .collect();

    // fit the grid around everything we are going to draw
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for point in samples.iter().chain(control_points.iter()) {
        for axis in 0..2 {
            min[axis] = min[axis].min(point[axis]);
            max[axis] = max[axis].max(point[axis]);
        }
    }

    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];
    for point in &samples {
        let (col, row) = to_cell(point, &min, &max);
        grid[row][col] = '*';
    }
    // overlay the control polygon corners
    for point in &control_points {
        let (col, row) = to_cell(point, &min, &max);
        grid[row][col] = 'o';
    }

    let (kmin, kmax) = curve.knot_domain();
    println!("B-spline curve (* = curve samples, o = control points)");
    println!("domain: [{:.2}, {:.2}]", kmin, kmax);
    for row in grid {
        let line: String = row.into_iter().collect();
        println!("{}", line);
    }
}

fn to_cell(point: &PointN<f64, 2>, min: &[f64; 2], max: &[f64; 2]) -> (usize, usize) {
    let u = (point[0] - min[0]) / (max[0] - min[0]);
    let v = (point[1] - min[1]) / (max[1] - min[1]);
    let col = (u * (WIDTH - 1) as f64).round() as usize;
    // character rows grow downward, curve coordinates upward
    let row = ((1.0 - v) * (HEIGHT - 1) as f64).round() as usize;
    (col.min(WIDTH - 1), row.min(HEIGHT - 1))
}
