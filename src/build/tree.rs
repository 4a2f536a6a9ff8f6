use crate::{
    foundation::{
        core::Rgba8Premul,
        error::{RectflowError, RectflowResult},
    },
    layout::length::Length,
    scene::model::{PaddingDef, RectProps, SceneNode},
};

/// Discriminator accepted for rectangle nodes.
pub const RECT_KIND: &str = "rect";

/// Validated node tree consumed by layout.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedNode {
    Rect(RectNode),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub key: Option<String>,
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub width: Length,
    pub height: Length,
    pub fill: Rgba8Premul,
    pub padding: Padding,
    pub children: Vec<TypedNode>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
}

impl TypedNode {
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Rect(r) => r.key.as_deref(),
        }
    }

    pub fn children(&self) -> &[TypedNode] {
        match self {
            Self::Rect(r) => &r.children,
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(TypedNode::node_count)
            .sum::<usize>()
    }
}

/// Validate a declarative scene and convert it into a [`TypedNode`] tree.
///
/// Children are built depth-first in declaration order. The first invalid node type, length or
/// color aborts the whole build.
#[tracing::instrument(skip(scene), fields(nodes = scene.node_count(), depth = scene.depth()))]
pub fn build_tree(scene: &SceneNode) -> RectflowResult<TypedNode> {
    build_node(scene)
}

fn build_node(node: &SceneNode) -> RectflowResult<TypedNode> {
    if node.kind != RECT_KIND {
        return Err(RectflowError::unsupported_node_type(node.kind.as_str()));
    }

    let mut rect = build_rect(&node.props)?;
    tracing::debug!(
        key = rect.key.as_deref().unwrap_or(""),
        children = node.children.len(),
        "built rect"
    );

    rect.children = node
        .children
        .iter()
        .map(build_node)
        .collect::<RectflowResult<Vec<_>>>()?;
    Ok(TypedNode::Rect(rect))
}

fn build_rect(props: &RectProps) -> RectflowResult<RectNode> {
    Ok(RectNode {
        key: props.key.clone(),
        left: parse_opt(props.left.as_deref())?,
        top: parse_opt(props.top.as_deref())?,
        width: Length::parse(&props.width)?,
        height: Length::parse(&props.height)?,
        fill: props.background.color.to_rgba8_premul()?,
        padding: build_padding(&props.padding)?,
        children: Vec::new(),
    })
}

fn build_padding(p: &PaddingDef) -> RectflowResult<Padding> {
    Ok(Padding {
        left: parse_opt(p.left.as_deref())?,
        top: parse_opt(p.top.as_deref())?,
        right: parse_opt(p.right.as_deref())?,
        bottom: parse_opt(p.bottom.as_deref())?,
    })
}

fn parse_opt(spec: Option<&str>) -> RectflowResult<Option<Length>> {
    spec.map(Length::parse).transpose()
}

#[cfg(test)]
#[path = "../../tests/unit/build/tree.rs"]
mod tests;
