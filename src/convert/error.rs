use crate::convert::types::{Unit, UnitKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    UnknownUnit(String),
    InvalidNumber(String),
    ParseError(String),
    NonFinite(f64),
    UnitNotInGroup { unit: Unit, group: UnitKind },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnknownUnit(name) => write!(f, "Unknown unit: {}", name),
            ConversionError::InvalidNumber(text) => write!(f, "Not a number: '{}'", text),
            ConversionError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConversionError::NonFinite(value) => {
                write!(f, "Value must be a finite number, got {}", value)
            }
            ConversionError::UnitNotInGroup { unit, group } => write!(
                f,
                "Unit '{}' does not belong to the {} group",
                unit.label(),
                group.title()
            ),
        }
    }
}

impl std::error::Error for ConversionError {}
