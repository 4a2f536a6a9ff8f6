use crate::{
    foundation::core::{Point, Rect, Rgba8Premul, Size},
    render::node::RectangleNode,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Shape primitive a painter is asked to draw.
pub enum Shape {
    /// Axis-aligned rectangle.
    Rectangle,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Outline settings. Rectangles are currently always drawn without one.
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8Premul,
    /// Stroke width in pixels.
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One immutable draw request.
///
/// Geometry is center-anchored: `center` is the midpoint of the shape and `size` its full extent.
pub struct DrawCommand {
    /// Primitive kind.
    pub shape: Shape,
    /// Midpoint in absolute pixels.
    pub center: Point,
    /// Full width and height.
    pub size: Size,
    /// Solid fill.
    pub fill: Rgba8Premul,
    /// Optional outline; `None` means no stroke.
    pub stroke: Option<Stroke>,
}

impl DrawCommand {
    /// Convert a top-left-anchored rectangle into a center-anchored fill command.
    pub fn fill_rect(node: &RectangleNode) -> Self {
        let bounds = node.bounds();
        Self {
            shape: Shape::Rectangle,
            center: bounds.center(),
            size: Size::new(node.width as f64, node.height as f64),
            fill: node.fill,
            stroke: None,
        }
    }

    /// Top-left-anchored extent of the shape.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/command.rs"]
mod tests;
