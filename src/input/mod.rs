//! Turning user-supplied text into polygon vertices.
//!
//! Text is first read as strict JSON. When that fails and the text looks like
//! an array of object literals (`[{x: ...}]`), it is handed to the lenient
//! object-literal parser in [`lenient`].

pub mod lenient;
pub mod sample;
pub mod validate;

use serde_json::Value;
use tracing::debug;

use crate::error::ParseError;

pub use sample::{sample_input, sample_points, SAMPLE_POINTS};
pub use validate::validate_points;

/// Parses raw input text into a generic value.
///
/// With `lenient` set, text rejected by the JSON parser gets a second chance
/// through [`lenient::parse`] if it passes [`looks_like_point_literal`].
///
/// # Errors
///
/// Returns `ParseError::Json` when strict parsing fails and the fallback does
/// not apply, or `ParseError::Syntax` when the fallback itself fails.
pub fn parse_input(text: &str, lenient: bool) -> Result<Value, ParseError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(err) if lenient && looks_like_point_literal(text) => {
            debug!(%err, "strict JSON parse failed, trying object-literal syntax");
            lenient::parse(text)
        }
        Err(err) => Err(ParseError::Json(err)),
    }
}

/// Returns `true` if `text` has the outline `[ { x : ... } ]`.
///
/// The `x` is matched ASCII case-insensitively and at least one character
/// must follow the colon.
#[must_use]
pub fn looks_like_point_literal(text: &str) -> bool {
    let text = text.trim();
    let Some(body) = text
        .strip_prefix('[')
        .map(str::trim_start)
        .and_then(|s| s.strip_prefix('{'))
        .map(str::trim_start)
        .and_then(|s| s.strip_prefix(|c: char| c.eq_ignore_ascii_case(&'x')))
        .map(str::trim_start)
        .and_then(|s| s.strip_prefix(':'))
    else {
        return false;
    };
    body.strip_suffix(']')
        .map(str::trim_end)
        .and_then(|s| s.strip_suffix('}'))
        .is_some_and(|rest| !rest.is_empty())
}
