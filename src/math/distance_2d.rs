use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
///
/// Non-finite coordinates propagate into the result (`NaN` or infinity).
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
