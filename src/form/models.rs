use crate::convert::types::{Unit, UnitKind};
use serde::{Deserialize, Serialize};

/// Serializable picture of the whole form
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSnapshot {
    pub title: String,
    pub sections: Vec<SectionSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionSnapshot {
    pub kind: UnitKind,
    pub title: String,
    pub base_unit: Unit,
    pub values: Vec<FieldSnapshot>,
}

// One row: the stored value and the text the field displays
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldSnapshot {
    pub unit: Unit,
    pub label: String,
    pub value: f64,
    pub display: String,
}

impl FormSnapshot {
    pub fn section(&self, kind: UnitKind) -> Option<&SectionSnapshot> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

impl SectionSnapshot {
    pub fn field(&self, unit: Unit) -> Option<&FieldSnapshot> {
        self.values.iter().find(|f| f.unit == unit)
    }
}
