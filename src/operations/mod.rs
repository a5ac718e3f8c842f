pub mod query;

pub use query::{Perimeter, PolygonEdges};
