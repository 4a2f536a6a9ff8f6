use crate::foundation::core::{PixelBox, Rgba8Premul};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Fully resolved geometry, ready to draw.
///
/// Coordinates are absolute pixels with a top-left origin. The tree holds no reference back to
/// the scene or typed nodes it was laid out from.
pub enum RenderNode {
    /// A filled rectangle; its children are drawn after it.
    Rectangle(RectangleNode),
    /// A non-drawing group. Only produced at the root.
    Container(ContainerNode),
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A solid rectangle with its flattened descendants.
pub struct RectangleNode {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels, after auto-growth.
    pub height: i64,
    /// Solid fill.
    pub fill: Rgba8Premul,
    /// Every descendant's geometry in traversal order.
    pub children: Vec<RenderNode>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Grouping node without geometry of its own.
pub struct ContainerNode {
    /// Grouped nodes in draw order.
    pub children: Vec<RenderNode>,
}

impl RectangleNode {
    pub fn bounds(&self) -> PixelBox {
        PixelBox::new(self.x, self.y, self.width, self.height)
    }
}

impl RenderNode {
    pub fn children(&self) -> &[RenderNode] {
        match self {
            Self::Rectangle(r) => &r.children,
            Self::Container(c) => &c.children,
        }
    }

    pub fn as_rectangle(&self) -> Option<&RectangleNode> {
        match self {
            Self::Rectangle(r) => Some(r),
            Self::Container(_) => None,
        }
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Rectangles in pre-order, the order they are drawn in.
    pub fn rectangles(&self) -> Vec<&RectangleNode> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Some(r) = n.as_rectangle() {
                out.push(r);
            }
        });
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/node.rs"]
mod tests;
