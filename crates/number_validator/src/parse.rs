use std::sync::LazyLock;

use regex::Regex;

// Optional sign, integer digits, optional separator with fraction digits.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)([0-9]+)(?:[.,]([0-9]+))?$").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// Structural pieces of a decimal literal, before any limits are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber<'a> {
    pub sign: Option<Sign>,
    pub int_digits: &'a str,
    pub frac_digits: &'a str,
}

impl ParsedNumber<'_> {
    /// Sign character (if any) plus integer digits.
    pub fn int_len(&self) -> usize {
        usize::from(self.sign.is_some()) + self.int_digits.len()
    }

    pub fn frac_len(&self) -> usize {
        self.frac_digits.len()
    }

    /// Characters counted against precision; the separator is not one of them.
    pub fn significant_len(&self) -> usize {
        self.int_len() + self.frac_len()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }
}

/// Match `text` as a whole against `[+-]?digits([.,]digits)?`.
///
/// Returns `None` for anything else, including surrounding whitespace.
pub fn parse_number(text: &str) -> Option<ParsedNumber<'_>> {
    let caps = NUMBER_PATTERN.captures(text)?;
    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("+") => Some(Sign::Plus),
        Some("-") => Some(Sign::Minus),
        _ => None,
    };
    Some(ParsedNumber {
        sign,
        int_digits: caps.get(2).map_or("", |m| m.as_str()),
        frac_digits: caps.get(3).map_or("", |m| m.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sign_integer_and_fraction() {
        let parsed = parse_number("-12,345").unwrap();
        assert_eq!(parsed.sign, Some(Sign::Minus));
        assert_eq!(parsed.int_digits, "12");
        assert_eq!(parsed.frac_digits, "345");
        assert_eq!(parsed.int_len(), 3);
        assert_eq!(parsed.significant_len(), 6);
    }

    #[test]
    fn integer_without_sign_has_no_fraction() {
        let parsed = parse_number("007").unwrap();
        assert_eq!(parsed.sign, None);
        assert_eq!(parsed.frac_len(), 0);
        assert!(!parsed.is_negative());
    }

    #[test]
    fn rejects_partial_and_malformed_literals() {
        for text in [
            "", "+", "-.5", "1.", ".1", "1.2.3", " 1", "1 ", "1e5", "++1", "1_000", "١٢",
        ] {
            assert_eq!(parse_number(text), None, "{text:?} should not parse");
        }
    }
}
