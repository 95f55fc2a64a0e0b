use crate::convert::error::ConversionError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal number after grouping separators are removed.
    /// Matches: "12", "-0.5", ".25", "3.", "1e3", "+2.5E-4"
    static ref DECIMAL_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();

    /// Integer part written with a separator every three digits.
    /// Matches: "1,000", "-12,345,678"; not ",5", "1,2,3", "1,,000"
    static ref GROUPED_INTEGER_PATTERN: Regex =
        Regex::new(r"^[+-]?\d{1,3}(,\d{3})+$").unwrap();
}

const GROUPING_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// Decimal-style number formatter used by every field on the form.
/// Formats values for display and filters text before it reaches conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormatter {
    pub max_fraction_digits: usize,
    pub grouping: bool,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self {
            max_fraction_digits: 3,
            grouping: true,
        }
    }
}

impl DecimalFormatter {
    pub fn new(max_fraction_digits: usize, grouping: bool) -> Self {
        Self {
            max_fraction_digits,
            grouping,
        }
    }

    /// Format a value rounded to `max_fraction_digits`, trailing zeros trimmed
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let (negative, digits) = match fixed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, fixed.as_str()),
        };

        let (integer, fraction) = match digits.split_once(DECIMAL_SEPARATOR) {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (digits, ""),
        };

        let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();

        let mut out = String::with_capacity(fixed.len() + integer.len() / 3);
        if negative && !is_zero {
            out.push('-');
        }
        if self.grouping {
            out.push_str(&group_digits(integer));
        } else {
            out.push_str(integer);
        }
        if !fraction.is_empty() {
            out.push(DECIMAL_SEPARATOR);
            out.push_str(fraction);
        }
        out
    }

    /// Parse field text into a finite number, rejecting anything else
    pub fn parse(&self, text: &str) -> Result<f64, ConversionError> {
        let trimmed = text.trim();
        let invalid = || ConversionError::InvalidNumber(trimmed.to_string());

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let integer_end = trimmed
            .find(|c: char| c == DECIMAL_SEPARATOR || c == 'e' || c == 'E')
            .unwrap_or(trimmed.len());
        let (integer, rest) = trimmed.split_at(integer_end);
        if rest.contains(GROUPING_SEPARATOR) {
            return Err(invalid());
        }
        if integer.contains(GROUPING_SEPARATOR)
            && (!self.grouping || !GROUPED_INTEGER_PATTERN.is_match(integer))
        {
            return Err(invalid());
        }

        let cleaned: String = integer
            .chars()
            .filter(|c| *c != GROUPING_SEPARATOR)
            .chain(rest.chars())
            .collect();

        if !DECIMAL_PATTERN.is_match(&cleaned) {
            return Err(invalid());
        }

        let value = cleaned.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(value)
    }
}

/// Insert a grouping separator every three digits from the right
fn group_digits(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
