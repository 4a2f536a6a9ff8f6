use crate::foundation::error::{RectflowError, RectflowResult};

pub use kurbo::{Point, Rect, Size};

/// Size of the drawing surface; seeds the root layout context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> RectflowResult<Self> {
        if width == 0 || height == 0 {
            return Err(RectflowError::render("viewport must be non-empty"));
        }
        Ok(Self { width, height })
    }

    /// Root box at the origin spanning the whole viewport.
    pub fn to_box(self) -> PixelBox {
        PixelBox {
            x: 0,
            y: 0,
            width: i64::from(self.width),
            height: i64::from(self.height),
        }
    }
}

/// Axis-aligned box in absolute integer pixels (top-left origin).
///
/// Sizes are signed: padding larger than a box yields a negative content size, which is carried
/// through layout unchanged rather than clamped.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelBox {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(self) -> i64 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(self) -> i64 {
        self.y.saturating_add(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_straight_rgba(self) -> [u8; 4] {
        fn unpremul(c: u8, a: u8) -> u8 {
            if a == 0 {
                return 0;
            }
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * 255) + a / 2) / a).min(255) as u8
        }

        [
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
