use super::*;
use crate::scene::dsl::RectBuilder;

fn leaf(key: &str) -> RectBuilder {
    RectBuilder::new("100%", "100%").key(key).color("#FFFFFF")
}

#[test]
fn builds_typed_rect_with_parsed_fields() {
    let scene = RectBuilder::new("50%", "50%")
        .key("parent")
        .left("20%")
        .top("10%")
        .color("#FF8000")
        .padding("20px", "10px", "20px", "10px")
        .build();

    let TypedNode::Rect(rect) = build_tree(&scene).unwrap();
    assert_eq!(rect.key.as_deref(), Some("parent"));
    assert_eq!(rect.left, Some(Length::Percent(20.0)));
    assert_eq!(rect.top, Some(Length::Percent(10.0)));
    assert_eq!(rect.width, Length::Percent(50.0));
    assert_eq!(rect.height, Length::Percent(50.0));
    assert_eq!(rect.fill, Rgba8Premul::from_straight_rgba(255, 128, 0, 255));
    assert_eq!(
        rect.padding,
        Padding {
            left: Some(Length::Pixels(20)),
            top: Some(Length::Pixels(10)),
            right: Some(Length::Pixels(20)),
            bottom: Some(Length::Pixels(10)),
        }
    );
}

#[test]
fn absent_optionals_stay_absent() {
    let scene = RectBuilder::new("1px", "1px").build();
    let TypedNode::Rect(rect) = build_tree(&scene).unwrap();
    assert_eq!(rect.left, None);
    assert_eq!(rect.top, None);
    assert_eq!(rect.padding, Padding::default());
}

#[test]
fn preserves_child_order_recursively() {
    let scene = RectBuilder::new("100%", "100%")
        .key("root")
        .child(leaf("a").child(leaf("a1")).child(leaf("a2")))
        .child(leaf("b"))
        .build();

    let tree = build_tree(&scene).unwrap();
    assert_eq!(tree.node_count(), 5);

    let keys: Vec<_> = tree.children().iter().map(|c| c.key().unwrap()).collect();
    assert_eq!(keys, ["a", "b"]);
    let nested: Vec<_> = tree.children()[0]
        .children()
        .iter()
        .map(|c| c.key().unwrap())
        .collect();
    assert_eq!(nested, ["a1", "a2"]);
}

#[test]
fn unsupported_type_anywhere_fails_the_build() {
    let mut scene = RectBuilder::new("100%", "100%")
        .child(leaf("a").child(leaf("deep")))
        .build();
    scene.children[0].children[0].kind = "circle".to_string();

    let err = build_tree(&scene).unwrap_err();
    assert!(matches!(err, RectflowError::UnsupportedNodeType(ref k) if k == "circle"));
}

#[test]
fn unsupported_type_at_root_fails() {
    let mut scene = RectBuilder::new("1px", "1px").build();
    scene.kind = "Rect".to_string();
    assert!(matches!(
        build_tree(&scene),
        Err(RectflowError::UnsupportedNodeType(_))
    ));
}

#[test]
fn invalid_length_fails_the_build() {
    let scene = RectBuilder::new("100%", "100%")
        .child(RectBuilder::new("5", "1px"))
        .build();
    let err = build_tree(&scene).unwrap_err();
    assert!(matches!(err, RectflowError::InvalidLength(ref s) if s == "5"));

    let scene = RectBuilder::new("100%", "100%").padding("1px", "2px", "-3px", "0").build();
    assert!(matches!(
        build_tree(&scene),
        Err(RectflowError::InvalidLength(_))
    ));
}

#[test]
fn invalid_color_fails_the_build() {
    let scene = RectBuilder::new("1px", "1px").color("orange").build();
    assert!(matches!(
        build_tree(&scene),
        Err(RectflowError::InvalidColor(_))
    ));
}
