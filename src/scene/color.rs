use crate::foundation::{
    core::Rgba8Premul,
    error::{RectflowError, RectflowResult},
};

/// Background color as written in a scene.
///
/// Kept unparsed until the tree is built so that a bad color surfaces as
/// [`RectflowError::InvalidColor`] rather than a generic deserialization failure.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#RGB`, `#RRGGBB` or `#RRGGBBAA`, case-insensitive, `#` optional.
    Hex(String),
    /// Straight (non-premultiplied) components in `0..=1`.
    Rgba {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default = "one")]
        a: f64,
    },
}

fn one() -> f64 {
    1.0
}

impl ColorSpec {
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }

    pub fn to_rgba8_premul(&self) -> RectflowResult<Rgba8Premul> {
        match self {
            Self::Hex(s) => {
                let [r, g, b, a] = parse_hex(s)?;
                Ok(Rgba8Premul::from_straight_rgba(r, g, b, a))
            }
            Self::Rgba { r, g, b, a } => {
                for (name, v) in [("r", r), ("g", g), ("b", b), ("a", a)] {
                    if !v.is_finite() {
                        return Err(RectflowError::invalid_color(format!(
                            "component {name} must be finite"
                        )));
                    }
                }
                Ok(Rgba8Premul::from_straight_rgba(
                    unit_to_u8(*r),
                    unit_to_u8(*g),
                    unit_to_u8(*b),
                    unit_to_u8(*a),
                ))
            }
        }
    }
}

fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn parse_hex(s: &str) -> RectflowResult<[u8; 4]> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> RectflowResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| RectflowError::invalid_color(format!("invalid hex byte \"{pair}\"")))
    }

    if !digits.is_ascii() {
        return Err(RectflowError::invalid_color(format!(
            "hex color \"{s}\" contains non-ASCII characters"
        )));
    }

    match digits.len() {
        3 => {
            let mut out = [0u8, 0, 0, 255];
            for (i, c) in digits.chars().enumerate() {
                out[i] = hex_byte(&format!("{c}{c}"))?;
            }
            Ok(out)
        }
        6 => Ok([
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
            255,
        ]),
        8 => Ok([
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
            hex_byte(&digits[6..8])?,
        ]),
        _ => Err(RectflowError::invalid_color(format!(
            "hex color \"{s}\" must be #RGB, #RRGGBB or #RRGGBBAA"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/color.rs"]
mod tests;
