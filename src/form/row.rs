use crate::convert::types::Unit;

/// One field row: the label in a fixed-width column followed by the field text
pub struct SectionRow<'a> {
    pub unit: Unit,
    pub display: &'a str,
    pub label_width: usize,
}

impl<'a> SectionRow<'a> {
    pub fn new(unit: Unit, display: &'a str, label_width: usize) -> Self {
        Self {
            unit,
            display,
            label_width,
        }
    }

    pub fn render(&self) -> String {
        let label = self.unit.label();
        // Labels wider than the column still get a separating space
        let width = self.label_width.max(label.len() + 1);
        format!("{:<width$}{}", label, self.display, width = width)
    }
}
