//! Display helpers shared by the text-producing engines.

use std::fmt::Display;

/// Render an optional measurement, with "--" for a missing value.
pub(crate) fn opt_num<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "--".to_string(), |v| v.to_string())
}
