//! Geographic locations as `geo:` URIs or Google Maps links.

use super::{EncodeContext, query_param};
use crate::domain::fields::FieldMap;
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal number, optionally signed, with optional exponent.
static LEADING_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid number regex")
});

/// `geo:<lat>,<lng>[?q=<label>]`, or `https://maps.google.com/?q=<lat>,<lng>`
/// when the `maps` flag is set (the label is ignored in that mode).
pub fn encode_location(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let lat = parse_coordinate(fields.text("lat"));
    let lng = parse_coordinate(fields.text("lng"));

    if fields.flag("maps") {
        return format!("https://maps.google.com/?q={lat},{lng}");
    }

    let mut out = format!("geo:{lat},{lng}");
    let label = fields.text("label");
    if !label.is_empty() {
        out.push_str(&query_param(false, "q", label));
    }
    out
}

/// Reads the leading number of `input` the way a form field is usually
/// read: `"41.0082"` and `"41.0082 N"` both give `41.0082`. Anything
/// without a leading number, or not finite, gives `0`.
fn parse_coordinate(input: &str) -> f64 {
    let value = LEADING_NUMBER_REGEX
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    // -0 would print as "-0"
    if value == 0.0 { 0.0 } else { value }
}
