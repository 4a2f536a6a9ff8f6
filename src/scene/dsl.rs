use crate::scene::{
    color::ColorSpec,
    model::{Background, PaddingDef, RectProps, SceneNode},
};

/// Fluent construction of `rect` scene nodes.
///
/// ```
/// use rectflow::RectBuilder;
///
/// let scene = RectBuilder::new("50%", "50%")
///     .key("parent")
///     .left("20%")
///     .top("10%")
///     .color("#FF8000")
///     .padding("20px", "10px", "20px", "10px")
///     .child(RectBuilder::new("100%", "100%").color("#FFFFFF"))
///     .build();
/// assert_eq!(scene.children.len(), 1);
/// ```
pub struct RectBuilder {
    props: RectProps,
    children: Vec<SceneNode>,
}

impl RectBuilder {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            props: RectProps {
                key: None,
                left: None,
                top: None,
                width: width.into(),
                height: height.into(),
                background: Background {
                    color: ColorSpec::hex("#000000"),
                },
                padding: PaddingDef::default(),
            },
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.props.key = Some(key.into());
        self
    }

    pub fn left(mut self, left: impl Into<String>) -> Self {
        self.props.left = Some(left.into());
        self
    }

    pub fn top(mut self, top: impl Into<String>) -> Self {
        self.props.top = Some(top.into());
        self
    }

    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.props.background.color = ColorSpec::hex(hex);
        self
    }

    pub fn background(mut self, color: ColorSpec) -> Self {
        self.props.background.color = color;
        self
    }

    /// Set all four padding edges, in `left, top, right, bottom` order.
    pub fn padding(
        mut self,
        left: impl Into<String>,
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
    ) -> Self {
        self.props.padding = PaddingDef {
            left: Some(left.into()),
            top: Some(top.into()),
            right: Some(right.into()),
            bottom: Some(bottom.into()),
        };
        self
    }

    pub fn padding_bottom(mut self, bottom: impl Into<String>) -> Self {
        self.props.padding.bottom = Some(bottom.into());
        self
    }

    pub fn child(mut self, child: RectBuilder) -> Self {
        self.children.push(child.build());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RectBuilder>) -> Self {
        self.children
            .extend(children.into_iter().map(RectBuilder::build));
        self
    }

    /// Finish the node. Values are not validated here; see [`crate::build_tree`].
    pub fn build(self) -> SceneNode {
        SceneNode {
            kind: "rect".to_string(),
            props: self.props,
            children: self.children,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
