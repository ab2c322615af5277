/// Time-series line graph construction
use crate::geometry::Point2;
use crate::path::Path;
use crate::transform;

/// Sample data used by the demos
pub const DEMO_SERIES: [i32; 10] = [11, 29, 10, 20, 12, 5, 31, 24, 21, 13];

/// Build an open polyline plotting `series` into a width x height box.
///
/// Sample index maps to x, sample value to y. The series minimum lands on
/// y = 0 and the maximum on y = height; x spans width / count per sample.
/// Degenerate inputs stay total: an empty series yields an empty path, a
/// single sample a lone move, and a flat series (max == min) keeps its
/// translated y values instead of dividing by a zero range.
pub fn line_graph(series: &[i32], width: f64, height: f64) -> Path {
    if series.is_empty() {
        return Path::new();
    }

    let mut points = Vec::with_capacity(series.len());
    let mut min_value = i32::MAX;
    let mut max_value = i32::MIN;
    for (i, &value) in series.iter().enumerate() {
        points.push(Point2::new(i as f64, value as f64));
        min_value = min_value.min(value);
        max_value = max_value.max(value);
    }

    let points = transform::translate_points(&points, 0.0, -f64::from(min_value));

    let x_scale = width / series.len() as f64;
    let y_scale = if max_value == min_value {
        1.0
    } else {
        height / (f64::from(max_value) - f64::from(min_value))
    };
    let points = transform::scale_points(&points, x_scale, y_scale);

    Path::open_polyline(&points)
}
