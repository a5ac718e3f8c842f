use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::error::{PolyedgeError, Result};
use crate::geometry::Edge;
use crate::input::{parse_input, validate_points};
use crate::math::rounding::round_to;
use crate::operations::{Perimeter, PolygonEdges};

/// Runs the text → points → edges pipeline.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a new `Calculator`.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Parses `text`, validates it as a polygon and derives its edges.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text cannot be read, a `ShapeError` if it
    /// is not an array of at least two elements, or a `PointFormatError` for
    /// the first element without numeric `x` and `y`.
    pub fn calculate(&self, text: &str) -> Result<Vec<Edge>> {
        let value = parse_input(text, self.config.lenient)?;
        let points = validate_points(&value)?;
        debug!(points = points.len(), "validated polygon input");
        PolygonEdges::new(&points)
            .with_decimals(self.config.decimals)
            .execute()
    }

    /// Runs one computation pass and captures its outcome.
    ///
    /// Never fails: errors end up in [`Computation::error`] with no edges.
    #[must_use]
    pub fn compute(&self, text: &str) -> Computation {
        match self.calculate(text) {
            Ok(edges) => Computation {
                edges,
                error: None,
                decimals: self.config.decimals,
                error_label: self.config.error_label.clone(),
            },
            Err(err) => {
                warn!(%err, "polygon computation failed");
                Computation {
                    edges: Vec::new(),
                    error: Some(err),
                    decimals: self.config.decimals,
                    error_label: self.config.error_label.clone(),
                }
            }
        }
    }
}

/// Outcome of a single computation pass.
///
/// Holds either the derived edges or the error that stopped the pass, never
/// both. A new pass produces a new `Computation`.
#[derive(Debug)]
pub struct Computation {
    edges: Vec<Edge>,
    error: Option<PolyedgeError>,
    decimals: u32,
    error_label: String,
}

impl Computation {
    /// Derived edges; empty when the pass failed.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn error(&self) -> Option<&PolyedgeError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Decimal places lengths were rounded to.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Total perimeter rounded like the edge lengths, or `None` when the pass failed.
    #[must_use]
    pub fn perimeter(&self) -> Option<f64> {
        self.is_ok()
            .then(|| round_to(Perimeter::new(&self.edges).execute(), self.decimals))
    }

    /// The error as a single labelled line, e.g. `Error: input must be an array of points`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|err| format!("{}: {err}", self.error_label))
    }

    /// Converts back into the fallible form.
    ///
    /// # Errors
    ///
    /// Returns the captured error if the pass failed.
    pub fn into_result(self) -> Result<Vec<Edge>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.edges),
        }
    }
}
