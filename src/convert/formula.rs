use crate::convert::types::Unit;

/// Affine map between a unit and its group's base unit:
/// `base = value * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formula {
    pub scale: f64,
    pub offset: f64,
}

const FAHRENHEIT_SCALE: f64 = 5.0 / 9.0;
const CELSIUS_OFFSET: f64 = 273.15;

impl Formula {
    pub const fn linear(scale: f64) -> Self {
        Self { scale, offset: 0.0 }
    }

    pub const fn affine(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.scale
    }
}

/// Fixed conversion formula for a unit.
/// Length is based on meters, temperature on kelvin, liquid volume on liters
/// (US customary fluid ounce, liquid pint and gallon).
pub fn formula_for(unit: Unit) -> Formula {
    match unit {
        Unit::Inches => Formula::linear(0.0254),
        Unit::Feet => Formula::linear(0.3048),
        Unit::Yards => Formula::linear(0.9144),
        Unit::Miles => Formula::linear(1609.344),
        Unit::Meters => Formula::linear(1.0),
        Unit::Kilometers => Formula::linear(1000.0),
        Unit::Fahrenheit => {
            Formula::affine(FAHRENHEIT_SCALE, CELSIUS_OFFSET - 32.0 * FAHRENHEIT_SCALE)
        }
        Unit::Celsius => Formula::affine(1.0, CELSIUS_OFFSET),
        Unit::Kelvin => Formula::linear(1.0),
        Unit::Ounces => Formula::linear(0.0295735295625),
        Unit::Pints => Formula::linear(0.473176473),
        Unit::Gallons => Formula::linear(3.785411784),
        Unit::Liters => Formula::linear(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::types::UnitKind;
    use proptest::prelude::*;

    fn convert(value: f64, from: Unit, to: Unit) -> f64 {
        formula_for(to).from_base(formula_for(from).to_base(value))
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_base_units_are_identity() {
        for kind in UnitKind::ALL {
            let formula = formula_for(kind.base_unit());
            assert_eq!(formula, Formula::linear(1.0));
        }
    }

    #[test]
    fn test_known_length_conversions() {
        assert_close(convert(12.0, Unit::Inches, Unit::Feet), 1.0);
        assert_close(convert(3.0, Unit::Feet, Unit::Yards), 1.0);
        assert_close(convert(1.0, Unit::Miles, Unit::Feet), 5280.0);
        assert_close(convert(1.0, Unit::Kilometers, Unit::Meters), 1000.0);
    }

    #[test]
    fn test_known_temperature_conversions() {
        assert_close(convert(0.0, Unit::Celsius, Unit::Fahrenheit), 32.0);
        assert_close(convert(0.0, Unit::Celsius, Unit::Kelvin), 273.15);
        assert_close(convert(212.0, Unit::Fahrenheit, Unit::Celsius), 100.0);
        assert_close(convert(-40.0, Unit::Fahrenheit, Unit::Celsius), -40.0);
        assert_close(convert(0.0, Unit::Kelvin, Unit::Fahrenheit), -459.67);
    }

    #[test]
    fn test_known_volume_conversions() {
        assert_close(convert(1.0, Unit::Gallons, Unit::Pints), 8.0);
        assert_close(convert(1.0, Unit::Pints, Unit::Ounces), 16.0);
        let liters = convert(1.0, Unit::Gallons, Unit::Liters);
        assert!((liters - 3.785).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn round_trip_through_base(index in 0usize..Unit::ALL.len(), value in -1.0e9f64..1.0e9) {
            let formula = formula_for(Unit::ALL[index]);
            let back = formula.from_base(formula.to_base(value));
            let tolerance = 1e-9 * value.abs().max(1.0);
            prop_assert!((back - value).abs() <= tolerance, "{} -> {}", value, back);
        }
    }
}
