use serde::{Deserialize, Serialize};

/// Declarative `N(m,k)` format, as it appears in configuration.
///
/// Only `precision` is required; `scale` defaults to 0 and `only_positive`
/// to `false`. Limits are checked when converting into a
/// [`NumberValidator`](crate::NumberValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub precision: i32,
    #[serde(default)]
    pub scale: i32,
    #[serde(default)]
    pub only_positive: bool,
}

impl NumberFormat {
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Self {
        Self {
            precision,
            scale,
            only_positive,
        }
    }
}
