use serde_json::Value;

use crate::error::{PointFormatError, PolyedgeError, Result, ShapeError};
use crate::math::Point2;

/// Checks a parsed value and converts it into polygon vertices.
///
/// The value must be an array of at least two objects, each with numeric
/// `x` and `y` members. Extra members are ignored.
///
/// # Errors
///
/// - `ShapeError::NotASequence` if `value` is not an array.
/// - `ShapeError::TooFewPoints` if the array holds fewer than two elements.
/// - `PointFormatError::InvalidPoint` naming the first malformed element (1-based).
pub fn validate_points(value: &Value) -> Result<Vec<Point2>> {
    let Value::Array(items) = value else {
        return Err(ShapeError::NotASequence.into());
    };
    if items.len() < 2 {
        return Err(ShapeError::TooFewPoints { count: items.len() }.into());
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            point_from_value(item)
                .ok_or_else(|| PolyedgeError::from(PointFormatError::InvalidPoint { index: i + 1 }))
        })
        .collect()
}

fn point_from_value(item: &Value) -> Option<Point2> {
    let x = item.get("x")?.as_f64()?;
    let y = item.get("y")?.as_f64()?;
    Some(Point2::new(x, y))
}
