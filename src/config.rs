use crate::convert::formatter::DecimalFormatter;
use crate::convert::types::UnitKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Title line above the form
    #[serde(default = "default_title")]
    pub title: String,

    // Sections to render, in order
    #[serde(default = "default_sections")]
    pub sections: Vec<UnitKind>,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,

    #[serde(default = "default_grouping")]
    pub grouping: bool,

    // Width of the unit label column
    #[serde(default = "default_label_width")]
    pub label_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: default_max_fraction_digits(),
            grouping: default_grouping(),
            label_width: default_label_width(),
        }
    }
}

fn default_title() -> String {
    "Unit Converter".to_string()
}

fn default_sections() -> Vec<UnitKind> {
    UnitKind::ALL.to_vec()
}

fn default_max_fraction_digits() -> usize {
    3
}

fn default_grouping() -> bool {
    true
}

fn default_label_width() -> usize {
    12
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self {
            title: default_title(),
            sections: default_sections(),
            display: DisplayConfig::default(),
        }
    }

    /// Field formatter configured by the `[display]` table
    pub fn formatter(&self) -> DecimalFormatter {
        DecimalFormatter::new(self.display.max_fraction_digits, self.display.grouping)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
