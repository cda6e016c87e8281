//! Document variables and the baseline page rules.

mod baseline;
mod variables;

pub use baseline::{BASELINE_SELECTOR, baseline_declarations};
pub use variables::{VariableTable, is_variable_line, substitute_references};
