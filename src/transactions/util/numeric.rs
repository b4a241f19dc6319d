use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref DECIMAL_REGEX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Returns the search text as a number when the whole (trimmed) text is a
/// decimal literal.
pub fn parse_search_number(search: &str) -> Option<f64> {
    let trimmed = search.trim();

    if !DECIMAL_REGEX.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Accepts a JSON number or a numeric string. Non-finite values are rejected.
pub fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    price.filter(|p| p.is_finite())
}

/// Lenient query parsing: anything unparsable or below 1 yields `default`.
pub fn parse_positive(value: Option<&str>, default: i64) -> i64 {
    match value.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(n) if n >= 1 => n,
        _ => default,
    }
}
