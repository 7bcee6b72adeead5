use std::fmt;

use drill_logging::{drill_debug, drill_warn};

use crate::error::NumberFormatError;
use crate::format::NumberFormat;
use crate::parse::parse_number;

/// Immutable checker for decimal literals in `N(m,k)` format.
///
/// `precision` (m) bounds the sign plus all digits; `scale` (k) bounds the
/// fractional digits. Both are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberValidator {
    precision: usize,
    scale: usize,
    only_positive: bool,
}

impl NumberValidator {
    /// Build a validator, rejecting `precision <= 0` and scales outside `0..precision`.
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Result<Self, NumberFormatError> {
        let (precision, scale) = check_limits(precision, scale).inspect_err(|err| {
            drill_warn!("rejected number format N({precision},{scale}): {err}");
        })?;
        Ok(Self {
            precision,
            scale,
            only_positive,
        })
    }

    /// Integer-only validator that also accepts negative numbers.
    pub fn with_precision(precision: i32) -> Result<Self, NumberFormatError> {
        Self::new(precision, 0, false)
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// Check a literal against the format. Absent, empty and malformed text is invalid.
    pub fn is_valid<'a>(&self, text: impl Into<Option<&'a str>>) -> bool {
        let Some(text) = text.into().filter(|t| !t.is_empty()) else {
            return false;
        };
        let Some(number) = parse_number(text) else {
            drill_debug!("{text:?} is not a decimal literal");
            return false;
        };
        if number.significant_len() > self.precision || number.frac_len() > self.scale {
            drill_debug!("{text:?} does not fit {}", self);
            return false;
        }
        !(self.only_positive && number.is_negative())
    }
}

fn check_limits(precision: i32, scale: i32) -> Result<(usize, usize), NumberFormatError> {
    let Ok(positive) = usize::try_from(precision) else {
        return Err(NumberFormatError::NonPositivePrecision { precision });
    };
    if positive == 0 {
        return Err(NumberFormatError::NonPositivePrecision { precision });
    }
    match usize::try_from(scale) {
        Ok(scale_len) if scale_len < positive => Ok((positive, scale_len)),
        _ => Err(NumberFormatError::ScaleOutOfRange { precision, scale }),
    }
}

impl TryFrom<NumberFormat> for NumberValidator {
    type Error = NumberFormatError;

    fn try_from(format: NumberFormat) -> Result<Self, Self::Error> {
        Self::new(format.precision, format.scale, format.only_positive)
    }
}

impl From<NumberValidator> for NumberFormat {
    fn from(validator: NumberValidator) -> Self {
        // Limits were checked against i32 inputs, so they fit back.
        Self::new(
            validator.precision as i32,
            validator.scale as i32,
            validator.only_positive,
        )
    }
}

impl fmt::Display for NumberValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}
