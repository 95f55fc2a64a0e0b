use crate::convert::detector::QUANTITY_PATTERN;
use crate::convert::error::ConversionError;
use crate::convert::formatter::DecimalFormatter;
use crate::convert::types::Unit;

/// A number paired with the unit it was written in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

/// Parse a quantity string (e.g., "12 in", "-40F", "1,200 ft")
pub fn parse_quantity(
    input: &str,
    formatter: &DecimalFormatter,
) -> Result<Quantity, ConversionError> {
    let trimmed = input.trim();
    let (value_text, unit_text) = split_quantity(trimmed).ok_or_else(|| {
        ConversionError::ParseError(format!("Expected '<number> <unit>', got '{}'", trimmed))
    })?;

    let value = formatter.parse(value_text)?;
    let unit = unit_text.parse::<Unit>()?;

    Ok(Quantity { value, unit })
}

/// Split a quantity string into its number text and unit text without
/// interpreting either
pub fn split_quantity(input: &str) -> Option<(&str, &str)> {
    let captures = QUANTITY_PATTERN.captures(input.trim())?;
    let value = captures.name("value")?.as_str();
    let unit = captures.name("unit")?.as_str();
    Some((value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantities() {
        let formatter = DecimalFormatter::default();

        let q = parse_quantity("12 in", &formatter).unwrap();
        assert_eq!(q, Quantity { value: 12.0, unit: Unit::Inches });

        let q = parse_quantity("-40F", &formatter).unwrap();
        assert_eq!(q, Quantity { value: -40.0, unit: Unit::Fahrenheit });

        let q = parse_quantity(" 1,200 ft ", &formatter).unwrap();
        assert_eq!(q, Quantity { value: 1200.0, unit: Unit::Feet });

        let q = parse_quantity("2 fl oz", &formatter).unwrap();
        assert_eq!(q.unit, Unit::Ounces);

        let q = parse_quantity("1 Gallons", &formatter).unwrap();
        assert_eq!(q.unit, Unit::Gallons);
    }

    #[test]
    fn test_split_quantity() {
        assert_eq!(split_quantity("12 in"), Some(("12", "in")));
        assert_eq!(split_quantity("-1.5e2km"), Some(("-1.5e2", "km")));
        assert_eq!(split_quantity("in 12"), None);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let formatter = DecimalFormatter::default();
        let err = parse_quantity("3 furlongs", &formatter).unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("furlongs".to_string()));
    }

    #[test]
    fn test_parse_not_a_quantity() {
        let formatter = DecimalFormatter::default();
        assert!(matches!(
            parse_quantity("feet", &formatter),
            Err(ConversionError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("12", &formatter),
            Err(ConversionError::ParseError(_))
        ));
    }
}
