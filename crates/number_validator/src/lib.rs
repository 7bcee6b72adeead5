//! Validation of decimal literals against an `N(m,k)` numeric format.
mod error;
mod format;
mod parse;
mod validator;

pub use error::NumberFormatError;
pub use format::NumberFormat;
pub use parse::{parse_number, ParsedNumber, Sign};
pub use validator::NumberValidator;
