use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::geometry::Edge;
use crate::math::distance_2d::distance;
use crate::math::rounding::round_to;
use crate::math::Point2;

/// Default number of decimals edge lengths are rounded to.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Derives the edges of a closed polygon from its ordered vertices.
///
/// The vertex sequence is treated as cyclic: the last vertex connects back to
/// the first, so `n` vertices always yield `n` edges.
pub struct PolygonEdges<'a> {
    points: &'a [Point2],
    decimals: u32,
}

impl<'a> PolygonEdges<'a> {
    /// Creates a new `PolygonEdges` query rounding lengths to two decimals.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Sets the number of decimals edge lengths are rounded to.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Executes the query, returning one edge per vertex in input order.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::TooFewPoints` if fewer than two vertices are given.
    pub fn execute(&self) -> Result<Vec<Edge>> {
        let n = self.points.len();
        if n < 2 {
            return Err(ShapeError::TooFewPoints { count: n }.into());
        }

        let edges: Vec<Edge> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &from)| {
                let to = self.points[(i + 1) % n];
                let length = round_to(distance(&from, &to), self.decimals);
                Edge::new(i + 1, from, to, length)
            })
            .collect();

        debug!(vertices = n, decimals = self.decimals, "derived polygon edges");
        Ok(edges)
    }
}
