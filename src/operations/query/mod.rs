mod perimeter;
mod polygon_edges;

pub use perimeter::Perimeter;
pub use polygon_edges::{PolygonEdges, DEFAULT_DECIMALS};
