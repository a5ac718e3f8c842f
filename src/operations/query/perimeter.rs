use crate::geometry::Edge;

/// Computes the perimeter of a closed polygon from its derived edges.
///
/// Sums the edge lengths as stored, so the result carries the per-edge
/// rounding already applied during edge derivation.
pub struct Perimeter<'a> {
    edges: &'a [Edge],
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(edges: &'a [Edge]) -> Self {
        Self { edges }
    }

    /// Executes the query, returning the total length. Zero for no edges.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.edges.iter().map(|e| e.length).sum()
    }
}
