use crate::convert::error::ConversionError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A physical quantity with its own section on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Linear,
    Temperature,
    Liquid,
}

/// Every unit that has a field on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inches,
    Feet,
    Yards,
    Miles,
    Meters,
    Kilometers,
    Fahrenheit,
    Celsius,
    Kelvin,
    Ounces,
    Pints,
    Gallons,
    Liters,
}

const LINEAR_UNITS: &[Unit] = &[
    Unit::Inches,
    Unit::Feet,
    Unit::Yards,
    Unit::Miles,
    Unit::Meters,
    Unit::Kilometers,
];

const TEMPERATURE_UNITS: &[Unit] = &[Unit::Fahrenheit, Unit::Celsius, Unit::Kelvin];

const LIQUID_UNITS: &[Unit] = &[Unit::Ounces, Unit::Pints, Unit::Gallons, Unit::Liters];

impl UnitKind {
    pub const ALL: [UnitKind; 3] = [UnitKind::Linear, UnitKind::Temperature, UnitKind::Liquid];

    /// Section header shown on the form
    pub fn title(&self) -> &'static str {
        match self {
            UnitKind::Linear => "Linear",
            UnitKind::Temperature => "Temperature",
            UnitKind::Liquid => "Liquid",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            UnitKind::Linear => "linear",
            UnitKind::Temperature => "temperature",
            UnitKind::Liquid => "liquid",
        }
    }

    /// Units of this kind, in display order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitKind::Linear => LINEAR_UNITS,
            UnitKind::Temperature => TEMPERATURE_UNITS,
            UnitKind::Liquid => LIQUID_UNITS,
        }
    }

    /// Reference unit every conversion in the group passes through
    pub fn base_unit(&self) -> Unit {
        match self {
            UnitKind::Linear => Unit::Meters,
            UnitKind::Temperature => Unit::Kelvin,
            UnitKind::Liquid => Unit::Liters,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for UnitKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "length" => Ok(UnitKind::Linear),
            "temperature" | "temp" => Ok(UnitKind::Temperature),
            "liquid" | "volume" => Ok(UnitKind::Liquid),
            other => Err(ConversionError::ParseError(format!(
                "Unknown section: {}",
                other
            ))),
        }
    }
}

impl Unit {
    pub const ALL: [Unit; 13] = [
        Unit::Inches,
        Unit::Feet,
        Unit::Yards,
        Unit::Miles,
        Unit::Meters,
        Unit::Kilometers,
        Unit::Fahrenheit,
        Unit::Celsius,
        Unit::Kelvin,
        Unit::Ounces,
        Unit::Pints,
        Unit::Gallons,
        Unit::Liters,
    ];

    /// Row label
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Inches => "Inches",
            Unit::Feet => "Feet",
            Unit::Yards => "Yards",
            Unit::Miles => "Miles",
            Unit::Meters => "Meters",
            Unit::Kilometers => "Kilometers",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Celsius => "Celsius",
            Unit::Kelvin => "Kelvin",
            Unit::Ounces => "Ounces",
            Unit::Pints => "Pints",
            Unit::Gallons => "Gallons",
            Unit::Liters => "Liters",
        }
    }

    /// Canonical identifier, same as the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Feet => "feet",
            Unit::Yards => "yards",
            Unit::Miles => "miles",
            Unit::Meters => "meters",
            Unit::Kilometers => "kilometers",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Celsius => "celsius",
            Unit::Kelvin => "kelvin",
            Unit::Ounces => "ounces",
            Unit::Pints => "pints",
            Unit::Gallons => "gallons",
            Unit::Liters => "liters",
        }
    }

    /// Alternative spellings and symbols accepted on input (lowercase)
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Unit::Inches => &["in", "inch", "\""],
            Unit::Feet => &["ft", "foot", "'"],
            Unit::Yards => &["yd", "yard"],
            Unit::Miles => &["mi", "mile"],
            Unit::Meters => &["m", "meter", "metre", "metres"],
            Unit::Kilometers => &["km", "kilometer", "kilometre", "kilometres"],
            Unit::Fahrenheit => &["f", "°f", "degf"],
            Unit::Celsius => &["c", "°c", "degc", "celcius", "centigrade"],
            Unit::Kelvin => &["k"],
            Unit::Ounces => &["oz", "ounce", "floz", "fl oz", "fl_oz", "fluid ounces"],
            Unit::Pints => &["pt", "pint"],
            Unit::Gallons => &["gal", "gallon"],
            Unit::Liters => &["l", "liter", "litre", "litres"],
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Inches
            | Unit::Feet
            | Unit::Yards
            | Unit::Miles
            | Unit::Meters
            | Unit::Kilometers => UnitKind::Linear,
            Unit::Fahrenheit | Unit::Celsius | Unit::Kelvin => UnitKind::Temperature,
            Unit::Ounces | Unit::Pints | Unit::Gallons | Unit::Liters => UnitKind::Liquid,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

lazy_static! {
    /// Lowercase identifier or alias -> unit
    static ref UNIT_NAMES: HashMap<&'static str, Unit> = {
        let mut names = HashMap::new();
        for unit in Unit::ALL {
            names.insert(unit.id(), unit);
            for alias in unit.aliases() {
                names.insert(*alias, unit);
            }
        }
        names
    };
}

impl FromStr for Unit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        UNIT_NAMES
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit(s.trim().to_string()))
    }
}
