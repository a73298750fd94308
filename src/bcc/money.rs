use crate::Result;

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use thiserror::Error;

/// Number of fractional units in one whole unit of currency
const SCALE: i128 = 10_000;

/// Digits kept after the decimal point
const DECIMAL_PLACES: usize = 4;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),

    #[error("Money value out of range: {0}")]
    OutOfRange(f64),
}

/// Fixed-point amount with four decimal places, backed by i128 so large balances still decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i128);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn from_whole(whole: i64) -> Self {
        return Self(whole as i128 * SCALE);
    }

    /// Parses a decimal string such as `50`, `10.5` or `-3.25`.
    ///
    /// More than four decimal places is rejected rather than rounded.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        if unsigned.split('.').count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let mut parts = unsigned.split('.');
        let whole = parts.next().unwrap_or("");
        let fraction = parts.next().unwrap_or("");

        if whole.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits", string.to_string()))?
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            Err(MoneyError::Parse("Unexpected character", string.to_string()))?
        }

        if fraction.len() > DECIMAL_PLACES {
            Err(MoneyError::Parse("Too many decimal places", string.to_string()))?
        }

        let whole: i128 = if whole.is_empty() { 0 } else { whole.parse()? };
        let fraction: i128 = format!("{:0<4}", fraction).parse()?;

        let value = whole
            .checked_mul(SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Amount too large", string.to_string()))?;

        return Ok(Money(if negative { -value } else { value }));
    }

    pub fn from_f64(value: f64) -> std::result::Result<Self, MoneyError> {
        let scaled = (value * SCALE as f64).round();

        if !scaled.is_finite() || scaled.abs() >= i128::MAX as f64 {
            return Err(MoneyError::OutOfRange(value));
        }

        return Ok(Money(scaled as i128));
    }

    pub fn to_f64(self) -> f64 {
        return self.0 as f64 / SCALE as f64;
    }

    pub fn is_whole(self) -> bool {
        return self.0 % SCALE == 0;
    }
}

/// Always renders two decimal places, rounding half away from zero.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.0 < 0 && cents != 0 { "-" } else { "" };

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}

/// Whole amounts go on the wire as integers (`50`), everything else as floats (`10.5`).
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_whole() {
            if let Ok(whole) = i64::try_from(self.0 / SCALE) {
                return serializer.serialize_i64(whole);
            }
        }

        return serializer.serialize_f64(self.to_f64());
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;

        return Money::from_f64(value).map_err(de::Error::custom);
    }
}
