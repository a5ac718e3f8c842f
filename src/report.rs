//! Presenting a [`Computation`] as text or JSON.

use std::fmt;

use serde::Serialize;

use crate::calculator::Computation;
use crate::geometry::Edge;
use crate::math::rounding::MAX_DECIMALS;
use crate::math::Point2;

/// Machine-readable form of a [`Computation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub edges: Vec<EdgeRecord>,
    /// `None` when the computation failed.
    pub perimeter: Option<f64>,
    /// Labelled error message, `None` on success.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub index: usize,
    pub length: f64,
    pub from: PointRecord,
    pub to: PointRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

impl From<&Point2> for PointRecord {
    fn from(p: &Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            index: edge.index,
            length: edge.length,
            from: PointRecord::from(&edge.from),
            to: PointRecord::from(&edge.to),
        }
    }
}

impl From<&Computation> for Report {
    fn from(result: &Computation) -> Self {
        Self {
            edges: result.edges().iter().map(EdgeRecord::from).collect(),
            perimeter: result.perimeter(),
            error: result.error_message(),
        }
    }
}

/// Renders the edge list and perimeter, or the labelled error line.
impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.error_message() {
            return write!(f, "{message}");
        }
        let prec = self.decimals().min(MAX_DECIMALS) as usize;
        writeln!(f, "Results:")?;
        for edge in self.edges() {
            // Adding 0.0 turns -0.0 into 0.0.
            writeln!(
                f,
                "  Edge {}: {:.prec$} (from ({}, {}) to ({}, {}))",
                edge.index,
                edge.length,
                edge.from.x + 0.0,
                edge.from.y + 0.0,
                edge.to.x + 0.0,
                edge.to.y + 0.0
            )?;
        }
        write!(
            f,
            "Total perimeter: {:.prec$}",
            self.perimeter().unwrap_or_default()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;
    use crate::config::CalculatorConfig;
    use serde_json::json;

    #[test]
    fn renders_right_triangle() {
        let result = Calculator::default().compute("[{x:0,y:0},{x:3,y:0},{x:3,y:4}]");
        let expected = "\
Results:
  Edge 1: 3.00 (from (0, 0) to (3, 0))
  Edge 2: 4.00 (from (3, 0) to (3, 4))
  Edge 3: 5.00 (from (3, 4) to (0, 0))
Total perimeter: 12.00";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn renders_fractional_coordinates() {
        let result = Calculator::default().compute(r#"[{"x":0.5,"y":-1},{"x":1.5,"y":-1}]"#);
        assert!(result
            .to_string()
            .contains("Edge 1: 1.00 (from (0.5, -1) to (1.5, -1))"));
        assert!(result.to_string().ends_with("Total perimeter: 2.00"));
    }

    #[test]
    fn renders_error_only() {
        let result = Calculator::default().compute("not json");
        let text = result.to_string();
        assert!(text.starts_with("Error: could not parse input as JSON"));
        assert!(!text.contains("Results"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn precision_follows_decimals() {
        let calc = Calculator::new(CalculatorConfig::new().with_decimals(3));
        let result = calc.compute(r#"[{"x":0,"y":0},{"x":1,"y":1}]"#);
        assert!(result.to_string().contains("Edge 1: 1.414 "));
        assert!(result.to_string().ends_with("Total perimeter: 2.828"));
    }

    #[test]
    fn json_report_success() {
        let result = Calculator::default().compute(r#"[{"x":0,"y":0},{"x":3,"y":4}]"#);
        let value = serde_json::to_value(Report::from(&result)).unwrap();
        assert_eq!(
            value,
            json!({
                "edges": [
                    {"index": 1, "length": 5.0, "from": {"x": 0.0, "y": 0.0}, "to": {"x": 3.0, "y": 4.0}},
                    {"index": 2, "length": 5.0, "from": {"x": 3.0, "y": 4.0}, "to": {"x": 0.0, "y": 0.0}}
                ],
                "perimeter": 10.0,
                "error": null
            })
        );
    }

    #[test]
    fn json_perimeter_is_rounded() {
        let result =
            Calculator::default().compute("[{x:0,y:0},{x:0.1,y:0},{x:0.1,y:0.2},{x:0,y:0.2}]");
        let value = serde_json::to_value(Report::from(&result)).unwrap();
        assert_eq!(value["perimeter"], json!(0.6));
        assert!(serde_json::to_string(&Report::from(&result))
            .unwrap()
            .contains("\"perimeter\":0.6,"));
        assert!(result.to_string().ends_with("Total perimeter: 0.60"));
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        let result = Calculator::default().compute("[{x:-0,y:0},{x:3,y:-0.0}]");
        assert!(result.to_string().contains("(from (0, 0) to (3, 0))"));
    }

    #[test]
    fn excessive_decimals_render_bounded_precision() {
        let calc = Calculator::new(CalculatorConfig::new().with_decimals(400));
        let result = calc.compute(r#"[{"x":0,"y":0},{"x":0,"y":0},{"x":3,"y":4}]"#);
        let text = result.to_string();
        assert!(text.contains("Edge 1: 0.000000000000000 "));
        assert!(text.ends_with("Total perimeter: 10.000000000000000"));
        assert!(text.len() < 400);
    }

    #[test]
    fn json_report_failure() {
        let result = Calculator::default().compute("[]");
        let report = Report::from(&result);
        assert!(report.edges.is_empty());
        assert!(report.perimeter.is_none());
        assert_eq!(
            report.error.as_deref(),
            Some("Error: at least 2 points are needed to form a polygon, got 0")
        );
    }
}
