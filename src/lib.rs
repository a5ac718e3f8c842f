pub mod calculator;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod operations;
pub mod report;

pub use calculator::{Calculator, Computation};
pub use config::CalculatorConfig;
pub use error::{PolyedgeError, Result};
