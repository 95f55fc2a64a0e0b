// Unit groups and the conversion dispatch behind every field on the form.
// Each group converts through a single base unit with fixed affine formulas.

pub mod detector;
pub mod error;
pub mod formatter;
pub mod formula;
pub mod group;
pub mod parser;
pub mod types;

pub use detector::looks_like_quantity;
pub use error::ConversionError;
pub use formatter::DecimalFormatter;
pub use formula::{formula_for, Formula};
pub use group::{UnitGroup, DEFAULT_TOLERANCE};
pub use parser::{parse_quantity, split_quantity, Quantity};
pub use types::{Unit, UnitKind};
