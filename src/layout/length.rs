use std::{fmt, str::FromStr};

use crate::foundation::error::{RectflowError, RectflowResult};

/// A size or offset, either absolute or relative to a reference dimension.
///
/// String grammar, first match wins:
/// - `"0"`
/// - `<digits>px`
/// - `<digits>%`
///
/// Signs, fractions, whitespace and unitless numbers other than `0` are rejected, as are
/// magnitudes above [`Length::MAX`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Length {
    #[default]
    Zero,
    Pixels(i64),
    Percent(f64),
}

impl Length {
    /// Largest pixel count or percentage a length may carry.
    pub const MAX: i64 = i32::MAX as i64;

    pub fn parse(spec: &str) -> RectflowResult<Self> {
        if spec == "0" {
            return Ok(Self::Zero);
        }

        if let Some(digits) = spec.strip_suffix("px") {
            let n = parse_digits(digits).ok_or_else(|| RectflowError::invalid_length(spec))?;
            return Ok(Self::Pixels(n));
        }

        if let Some(digits) = spec.strip_suffix('%') {
            if parse_digits(digits).is_none() {
                return Err(RectflowError::invalid_length(spec));
            }
            let percent = digits
                .parse::<f64>()
                .map_err(|_| RectflowError::invalid_length(spec))?;
            return Ok(Self::Percent(percent));
        }

        Err(RectflowError::invalid_length(spec))
    }

    /// Resolve to pixels against `reference`.
    ///
    /// Percentages round half away from zero.
    pub fn resolve(self, reference: i64) -> i64 {
        match self {
            Self::Zero => 0,
            Self::Pixels(n) => n,
            Self::Percent(p) => ((reference as f64) * p / 100.0).round() as i64,
        }
    }

}

/// Parse `spec` and resolve it against `reference` in one step.
pub fn resolve_length(reference: i64, spec: &str) -> RectflowResult<i64> {
    Ok(Length::parse(spec)?.resolve(reference))
}

/// Resolve an optional length, treating absence as zero.
pub fn resolve_or_zero(reference: i64, length: Option<Length>) -> i64 {
    length.map_or(0, |l| l.resolve(reference))
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i64>().ok().filter(|n| *n <= Length::MAX)
}

impl FromStr for Length {
    type Err = RectflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::Pixels(n) => write!(f, "{n}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl serde::Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/length.rs"]
mod tests;
