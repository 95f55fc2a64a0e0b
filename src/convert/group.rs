use crate::convert::error::ConversionError;
use crate::convert::formula::formula_for;
use crate::convert::types::{Unit, UnitKind};
use std::collections::HashMap;

/// Relative tolerance used when checking that a group is consistent
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Current values of every unit of one kind
#[derive(Debug, Clone, PartialEq)]
pub struct UnitGroup {
    kind: UnitKind,
    values: HashMap<Unit, f64>,
}

impl UnitGroup {
    /// A group with every value at zero
    pub fn new(kind: UnitKind) -> Self {
        let values = kind.units().iter().map(|unit| (*unit, 0.0)).collect();
        Self { kind, values }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn units(&self) -> &'static [Unit] {
        self.kind.units()
    }

    pub fn contains(&self, unit: Unit) -> bool {
        unit.kind() == self.kind
    }

    /// Value currently held for `unit`, zero for a unit outside the group
    pub fn value(&self, unit: Unit) -> f64 {
        self.values.get(&unit).copied().unwrap_or(0.0)
    }

    /// Units paired with their values, in display order
    pub fn entries(&self) -> impl Iterator<Item = (Unit, f64)> + '_ {
        self.units().iter().map(move |unit| (*unit, self.value(*unit)))
    }

    /// Store `value` for `unit` and rewrite every other unit in the group
    /// from the shared base value. Storage is untouched unless every
    /// converted value is finite.
    pub fn recompute(&mut self, unit: Unit, value: f64) -> Result<(), ConversionError> {
        if !self.contains(unit) {
            return Err(ConversionError::UnitNotInGroup {
                unit,
                group: self.kind,
            });
        }
        if !value.is_finite() {
            return Err(ConversionError::NonFinite(value));
        }

        let base = formula_for(unit).to_base(value);
        if !base.is_finite() {
            return Err(ConversionError::NonFinite(base));
        }

        let mut converted = Vec::with_capacity(self.units().len());
        for other in self.units() {
            let other_value = if *other == unit {
                value
            } else {
                formula_for(*other).from_base(base)
            };
            if !other_value.is_finite() {
                return Err(ConversionError::NonFinite(other_value));
            }
            converted.push((*other, other_value));
        }
        self.values.extend(converted);

        log::debug!(
            "{} group recomputed from {} = {} (base {} = {})",
            self.kind,
            unit,
            value,
            self.kind.base_unit(),
            base
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = 0.0;
        }
    }

    /// True when every unit converts to the same base value within `tolerance`
    /// (relative to the magnitude of the base value, absolute below 1).
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        let bases: Vec<f64> = self
            .entries()
            .map(|(unit, value)| formula_for(unit).to_base(value))
            .collect();
        let reference = bases[0];
        let allowed = tolerance * reference.abs().max(1.0);
        bases.iter().all(|base| (base - reference).abs() <= allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_new_group_is_zeroed() {
        for kind in UnitKind::ALL {
            let group = UnitGroup::new(kind);
            assert_eq!(group.entries().count(), kind.units().len());
            assert!(group.entries().all(|(_, v)| v == 0.0));
        }
    }

    #[test]
    fn test_inches_to_feet() {
        let mut group = UnitGroup::new(UnitKind::Linear);
        group.recompute(Unit::Inches, 12.0).unwrap();
        assert_close(group.value(Unit::Feet), 1.0, 1e-12);
        assert_close(group.value(Unit::Yards), 1.0 / 3.0, 1e-12);
        assert_close(group.value(Unit::Meters), 0.3048, 1e-12);
        assert_eq!(group.value(Unit::Inches), 12.0);
    }

    #[test]
    fn test_celsius_zero() {
        let mut group = UnitGroup::new(UnitKind::Temperature);
        group.recompute(Unit::Celsius, 0.0).unwrap();
        assert_close(group.value(Unit::Fahrenheit), 32.0, 1e-9);
        assert_close(group.value(Unit::Kelvin), 273.15, 1e-9);
    }

    #[test]
    fn test_one_gallon_in_liters() {
        let mut group = UnitGroup::new(UnitKind::Liquid);
        group.recompute(Unit::Gallons, 1.0).unwrap();
        assert_close(group.value(Unit::Liters), 3.785, 1e-3);
        assert_close(group.value(Unit::Pints), 8.0, 1e-9);
        assert_close(group.value(Unit::Ounces), 128.0, 1e-9);
    }

    #[test]
    fn test_recompute_overwrites_previous_values() {
        let mut group = UnitGroup::new(UnitKind::Linear);
        group.recompute(Unit::Miles, 2.0).unwrap();
        group.recompute(Unit::Meters, 1.0).unwrap();
        assert_close(group.value(Unit::Kilometers), 0.001, 1e-15);
        assert_close(group.value(Unit::Miles), 1.0 / 1609.344, 1e-15);
        assert!(group.is_consistent(DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_consistent_after_every_commit() {
        for unit in Unit::ALL {
            let mut group = UnitGroup::new(unit.kind());
            group.recompute(unit, -17.25).unwrap();
            assert!(group.is_consistent(DEFAULT_TOLERANCE), "{:?}", unit);
        }
    }

    #[test]
    fn test_zeroed_temperature_is_inconsistent() {
        // 0 F, 0 C and 0 K are different temperatures
        let group = UnitGroup::new(UnitKind::Temperature);
        assert!(!group.is_consistent(DEFAULT_TOLERANCE));
        assert!(UnitGroup::new(UnitKind::Linear).is_consistent(DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_unit_from_other_group_rejected() {
        let mut group = UnitGroup::new(UnitKind::Liquid);
        let err = group.recompute(Unit::Feet, 3.0).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnitNotInGroup {
                unit: Unit::Feet,
                group: UnitKind::Liquid
            }
        );
        assert_eq!(group, UnitGroup::new(UnitKind::Liquid));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut group = UnitGroup::new(UnitKind::Linear);
        group.recompute(Unit::Feet, 1.0).unwrap();
        let before = group.clone();
        assert!(group.recompute(Unit::Feet, f64::NAN).is_err());
        assert!(group.recompute(Unit::Feet, f64::INFINITY).is_err());
        assert_eq!(group, before);
    }

    #[test]
    fn test_overflowing_commit_rejected() {
        let mut group = UnitGroup::new(UnitKind::Linear);
        group.recompute(Unit::Feet, 2.0).unwrap();
        let before = group.clone();

        // 1e306 km is finite, but the same length in inches is not
        let err = group.recompute(Unit::Kilometers, 1e306).unwrap_err();
        assert!(matches!(err, ConversionError::NonFinite(v) if v.is_infinite()));
        assert_eq!(group, before);

        // The base value itself overflows
        assert!(group.recompute(Unit::Miles, f64::MAX).is_err());
        assert_eq!(group, before);
    }

    #[test]
    fn test_large_finite_commit_stays_consistent() {
        let mut group = UnitGroup::new(UnitKind::Linear);
        group.recompute(Unit::Kilometers, 1e300).unwrap();
        assert!(group.entries().all(|(_, v)| v.is_finite()));
        assert!(group.is_consistent(DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_reset() {
        let mut group = UnitGroup::new(UnitKind::Temperature);
        group.recompute(Unit::Kelvin, 300.0).unwrap();
        group.reset();
        assert_eq!(group, UnitGroup::new(UnitKind::Temperature));
    }
}
