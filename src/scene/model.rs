use crate::scene::color::ColorSpec;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A declarative scene node.
///
/// This is the plain input format: lengths and colors are kept as written and only validated
/// when the tree is built (see [`crate::build_tree`]).
///
/// ```json
/// {
///   "type": "rect",
///   "props": { "width": "50%", "height": "100px", "background": { "color": "#FF8000" } },
///   "children": []
/// }
/// ```
pub struct SceneNode {
    /// Node discriminator. Only `"rect"` is supported.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rectangle properties.
    pub props: RectProps,
    /// Ordered children; order decides block-flow stacking.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Properties of a `rect` node.
pub struct RectProps {
    /// Diagnostic identifier; not required to be unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Horizontal offset from the parent content box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Vertical offset from the parent content box (or the previous sibling).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Fixed width.
    pub width: String,
    /// Minimum height; the node grows to fit its children.
    pub height: String,
    /// Solid fill.
    pub background: Background,
    /// Inner spacing between the border box and the content box.
    #[serde(default)]
    pub padding: PaddingDef,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Background fill.
pub struct Background {
    /// Fill color.
    pub color: ColorSpec,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Padding edges; absent edges are zero.
pub struct PaddingDef {
    /// Left padding, resolved against the container width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Top padding, resolved against the container height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Right padding, resolved against the container width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Bottom padding, resolved against the container height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

impl SceneNode {
    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
