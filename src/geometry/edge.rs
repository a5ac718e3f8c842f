use crate::math::Point2;

/// A polygon side between two consecutive vertices.
///
/// Endpoints are copied out of the input sequence. `length` is already
/// rounded to the precision the edges were derived with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// 1-based position of the edge in the closed loop.
    pub index: usize,
    pub from: Point2,
    pub to: Point2,
    pub length: f64,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(index: usize, from: Point2, to: Point2, length: f64) -> Self {
        Self {
            index,
            from,
            to,
            length,
        }
    }
}
