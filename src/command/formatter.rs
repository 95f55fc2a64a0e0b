use crate::convert::types::UnitKind;
use crate::form::models::{FormSnapshot, SectionSnapshot};

pub const HELP: &str = "\
Commands:
  <unit> = <value>      commit a value (e.g. inches = 12)
  <unit> <value>        same (e.g. celsius 0)
  <value> <unit>        same (e.g. 1 gal, -40F)
  show [section]        render the form or one section
  reset [section]       zero the form or one section
  json                  print the form as JSON
  units                 list units and accepted names
  help                  show this help
  quit                  leave
";

pub fn format_snapshot(snapshot: &FormSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

pub fn format_section(section: &SectionSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(section)
}

/// Every group with its base unit, units and accepted names
pub fn format_units() -> String {
    let mut out = String::new();
    for kind in UnitKind::ALL {
        out.push_str(&format!(
            "{} (base: {})\n",
            kind.title(),
            kind.base_unit().id()
        ));
        for unit in kind.units() {
            out.push_str(&format!(
                "  {:<12}{}\n",
                unit.id(),
                unit.aliases().join(", ")
            ));
        }
    }
    out
}
