use crate::config::Config;
use crate::convert::error::ConversionError;
use crate::convert::formatter::DecimalFormatter;
use crate::convert::group::UnitGroup;
use crate::convert::parser::Quantity;
use crate::convert::types::{Unit, UnitKind};
use crate::form::models::{FieldSnapshot, FormSnapshot, SectionSnapshot};

/// In-memory state of the converter form: one group per section
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterForm {
    linear: UnitGroup,
    temperature: UnitGroup,
    liquid: UnitGroup,
    formatter: DecimalFormatter,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::with_formatter(DecimalFormatter::default())
    }

    pub fn with_formatter(formatter: DecimalFormatter) -> Self {
        Self {
            linear: UnitGroup::new(UnitKind::Linear),
            temperature: UnitGroup::new(UnitKind::Temperature),
            liquid: UnitGroup::new(UnitKind::Liquid),
            formatter,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_formatter(config.formatter())
    }

    pub fn formatter(&self) -> &DecimalFormatter {
        &self.formatter
    }

    pub fn group(&self, kind: UnitKind) -> &UnitGroup {
        match kind {
            UnitKind::Linear => &self.linear,
            UnitKind::Temperature => &self.temperature,
            UnitKind::Liquid => &self.liquid,
        }
    }

    fn group_mut(&mut self, kind: UnitKind) -> &mut UnitGroup {
        match kind {
            UnitKind::Linear => &mut self.linear,
            UnitKind::Temperature => &mut self.temperature,
            UnitKind::Liquid => &mut self.liquid,
        }
    }

    pub fn value(&self, unit: Unit) -> f64 {
        self.group(unit.kind()).value(unit)
    }

    /// Text shown in the unit's field
    pub fn display_value(&self, unit: Unit) -> String {
        self.formatter.format(self.value(unit))
    }

    /// Commit a value for `unit` and recompute the rest of its group.
    /// Returns the section that needs re-rendering.
    pub fn commit(&mut self, unit: Unit, value: f64) -> Result<UnitKind, ConversionError> {
        let kind = unit.kind();
        self.group_mut(kind).recompute(unit, value)?;
        log::info!("Setting values based on {}", unit.label());
        Ok(kind)
    }

    /// Commit field text; text the formatter rejects leaves the form untouched
    pub fn commit_text(&mut self, unit: Unit, text: &str) -> Result<UnitKind, ConversionError> {
        let value = self.formatter.parse(text)?;
        self.commit(unit, value)
    }

    pub fn commit_quantity(&mut self, quantity: Quantity) -> Result<UnitKind, ConversionError> {
        self.commit(quantity.unit, quantity.value)
    }

    pub fn reset(&mut self) {
        for kind in UnitKind::ALL {
            self.reset_section(kind);
        }
    }

    pub fn reset_section(&mut self, kind: UnitKind) {
        self.group_mut(kind).reset();
        log::info!("Reset {} values", kind.title());
    }

    pub fn section_snapshot(&self, kind: UnitKind) -> SectionSnapshot {
        let group = self.group(kind);
        SectionSnapshot {
            kind,
            title: kind.title().to_string(),
            base_unit: kind.base_unit(),
            values: group
                .entries()
                .map(|(unit, value)| FieldSnapshot {
                    unit,
                    label: unit.label().to_string(),
                    value,
                    display: self.formatter.format(value),
                })
                .collect(),
        }
    }

    /// Snapshot of the sections `config` asks for, in its order
    pub fn snapshot(&self, config: &Config) -> FormSnapshot {
        FormSnapshot {
            title: config.title.clone(),
            sections: config
                .sections
                .iter()
                .map(|kind| self.section_snapshot(*kind))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::group::DEFAULT_TOLERANCE;

    #[test]
    fn test_new_form_is_zeroed() {
        let form = ConverterForm::new();
        for unit in Unit::ALL {
            assert_eq!(form.value(unit), 0.0);
            assert_eq!(form.display_value(unit), "0");
        }
    }

    #[test]
    fn test_commit_dispatches_to_owning_group() {
        let mut form = ConverterForm::new();
        let changed = form.commit(Unit::Inches, 12.0).unwrap();
        assert_eq!(changed, UnitKind::Linear);
        assert_eq!(form.display_value(Unit::Feet), "1");

        let changed = form.commit(Unit::Celsius, 0.0).unwrap();
        assert_eq!(changed, UnitKind::Temperature);
        assert_eq!(form.display_value(Unit::Fahrenheit), "32");
        assert_eq!(form.display_value(Unit::Kelvin), "273.15");

        let changed = form.commit(Unit::Gallons, 1.0).unwrap();
        assert_eq!(changed, UnitKind::Liquid);
        assert_eq!(form.display_value(Unit::Liters), "3.785");
    }

    #[test]
    fn test_commit_leaves_other_groups_alone() {
        let mut form = ConverterForm::new();
        form.commit(Unit::Miles, 3.0).unwrap();
        let before = form.clone();

        form.commit(Unit::Pints, 2.0).unwrap();
        assert_eq!(form.group(UnitKind::Linear), before.group(UnitKind::Linear));
        assert_eq!(
            form.group(UnitKind::Temperature),
            before.group(UnitKind::Temperature)
        );
    }

    #[test]
    fn test_commit_text() {
        let mut form = ConverterForm::new();
        form.commit_text(Unit::Feet, "5,280").unwrap();
        assert!((form.value(Unit::Miles) - 1.0).abs() < 1e-12);
        assert!(form.group(UnitKind::Linear).is_consistent(DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_rejected_text_leaves_form_unchanged() {
        let mut form = ConverterForm::new();
        form.commit(Unit::Kelvin, 300.0).unwrap();
        let before = form.clone();

        let err = form.commit_text(Unit::Celsius, "warm").unwrap_err();
        assert_eq!(err, ConversionError::InvalidNumber("warm".to_string()));
        assert_eq!(form, before);
    }

    #[test]
    fn test_overflowing_text_leaves_form_unchanged() {
        let mut form = ConverterForm::new();
        form.commit(Unit::Feet, 3.0).unwrap();
        let before = form.clone();

        let err = form.commit_text(Unit::Kilometers, "1e306").unwrap_err();
        assert!(matches!(err, ConversionError::NonFinite(_)));
        assert_eq!(form, before);
        assert_eq!(form.display_value(Unit::Yards), "1");
    }

    #[test]
    fn test_reset_section() {
        let mut form = ConverterForm::new();
        form.commit(Unit::Meters, 1.0).unwrap();
        form.commit(Unit::Liters, 1.0).unwrap();

        form.reset_section(UnitKind::Linear);
        assert_eq!(form.value(Unit::Inches), 0.0);
        assert_eq!(form.value(Unit::Liters), 1.0);

        form.reset();
        assert_eq!(form, ConverterForm::new());
    }

    #[test]
    fn test_snapshot_follows_config_order() {
        let mut form = ConverterForm::new();
        form.commit(Unit::Inches, 12.0).unwrap();

        let mut config = Config::empty();
        config.sections = vec![UnitKind::Liquid, UnitKind::Linear];
        let snapshot = form.snapshot(&config);

        assert_eq!(snapshot.title, "Unit Converter");
        let kinds: Vec<_> = snapshot.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![UnitKind::Liquid, UnitKind::Linear]);

        let feet = snapshot
            .section(UnitKind::Linear)
            .and_then(|s| s.field(Unit::Feet))
            .unwrap();
        assert_eq!(feet.display, "1");
        assert_eq!(feet.label, "Feet");
        assert!(snapshot.section(UnitKind::Temperature).is_none());
    }
}
