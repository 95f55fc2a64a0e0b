use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect quantity strings
    /// Matches: number (optional grouping, decimal, scientific notation) + optional whitespace + unit
    /// Examples: "12 in", "10.5 m", "-40F", "1,200 ft", "1e3 km", "3 fl oz", "20 °C"
    pub(crate) static ref QUANTITY_PATTERN: Regex = Regex::new(
        r#"^(?P<value>[+-]?(?:\d[\d,]*(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>[a-zA-Z°"'][a-zA-Z°_ ]*)$"#
    ).unwrap();
}

/// Check if a string looks like "<number> <unit>"
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}
