use serde_json::{json, Value};

use crate::math::Point2;

/// Demonstration polygon: a 3-4-5 right triangle.
pub const SAMPLE_POINTS: [(f64, f64); 3] = [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)];

/// Returns the sample polygon's vertices.
#[must_use]
pub fn sample_points() -> Vec<Point2> {
    SAMPLE_POINTS
        .iter()
        .map(|&(x, y)| Point2::new(x, y))
        .collect()
}

/// Returns the sample polygon as pretty-printed JSON input text.
#[must_use]
pub fn sample_input() -> String {
    let points: Value = SAMPLE_POINTS
        .iter()
        .map(|&(x, y)| json!({ "x": x, "y": y }))
        .collect();
    // Alternate `Display` of a `Value` is the infallible pretty printer.
    format!("{points:#}")
}
