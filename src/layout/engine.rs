use crate::{
    build::tree::{RectNode, TypedNode},
    foundation::core::{PixelBox, Viewport},
    layout::length::resolve_or_zero,
    render::node::{ContainerNode, RectangleNode, RenderNode},
};

/// The content box a node lays out inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutContext {
    pub parent: PixelBox,
}

impl LayoutContext {
    pub fn new(parent: PixelBox) -> Self {
        Self { parent }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(viewport.to_box())
    }
}

/// Geometry emitted for one node plus the box its parent stacks against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutOutput {
    pub nodes: Vec<RenderNode>,
    pub bounding_box: PixelBox,
}

/// Lay out a whole tree inside `viewport` and wrap the result in a root container.
#[tracing::instrument(skip_all, fields(width = viewport.width, height = viewport.height))]
pub fn layout_root(root: &TypedNode, viewport: Viewport) -> RenderNode {
    let out = layout_node(root, &LayoutContext::for_viewport(viewport));
    RenderNode::Container(ContainerNode {
        children: out.nodes,
    })
}

/// Lay out one node and its subtree inside `ctx.parent`.
pub fn layout_node(node: &TypedNode, ctx: &LayoutContext) -> LayoutOutput {
    match node {
        TypedNode::Rect(rect) => layout_rect(rect, ctx),
    }
}

fn layout_rect(rect: &RectNode, ctx: &LayoutContext) -> LayoutOutput {
    let parent = ctx.parent;

    // Nested percentages can exceed i64; coordinates saturate.
    let x = parent.x.saturating_add(resolve_or_zero(parent.width, rect.left));
    let y = parent.y.saturating_add(resolve_or_zero(parent.height, rect.top));
    let width = rect.width.resolve(parent.width);
    let mut height = rect.height.resolve(parent.height);

    let pad_left = resolve_or_zero(parent.width, rect.padding.left);
    let pad_top = resolve_or_zero(parent.height, rect.padding.top);
    let pad_right = resolve_or_zero(parent.width, rect.padding.right);
    let pad_bottom = resolve_or_zero(parent.height, rect.padding.bottom);

    let content_left = x.saturating_add(pad_left);
    let mut content_top = y.saturating_add(pad_top);
    let content_right = x.saturating_add(width).saturating_sub(pad_right);
    let mut content_bottom = y.saturating_add(height).saturating_sub(pad_bottom);

    // Children share one reference size; only the vertical cursor moves.
    let content_width = content_right.saturating_sub(content_left);
    let content_height = content_bottom.saturating_sub(content_top);

    let mut children = Vec::new();
    for child in &rect.children {
        let child_ctx = LayoutContext::new(PixelBox::new(
            content_left,
            content_top,
            content_width,
            content_height,
        ));
        let out = layout_node(child, &child_ctx);
        children.extend(out.nodes);

        content_top = out.bounding_box.bottom();
        content_bottom = content_bottom.max(content_top);
    }

    let consumed = content_top.saturating_sub(y);
    height = height.max(consumed.saturating_add(pad_bottom));

    tracing::trace!(
        key = rect.key.as_deref().unwrap_or(""),
        x,
        y,
        width,
        height,
        content_bottom,
        "laid out rect"
    );

    LayoutOutput {
        nodes: vec![RenderNode::Rectangle(RectangleNode {
            x,
            y,
            width,
            height,
            fill: rect.fill,
            children,
        })],
        bounding_box: PixelBox::new(x, y, width, height),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
