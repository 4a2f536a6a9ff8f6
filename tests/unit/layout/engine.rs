use super::*;
use crate::{
    build::tree::build_tree,
    foundation::core::Rgba8Premul,
    scene::{dsl::RectBuilder, model::SceneNode},
};

fn typed(scene: &SceneNode) -> TypedNode {
    build_tree(scene).unwrap()
}

fn full_bleed(key: &str) -> RectBuilder {
    RectBuilder::new("100%", "100%")
        .key(key)
        .left("0")
        .top("0")
        .color("#FFFFFF")
}

fn parent_with(children: Vec<RectBuilder>) -> SceneNode {
    RectBuilder::new("50%", "50%")
        .key("parent")
        .left("20%")
        .top("10%")
        .color("#FF8000")
        .padding("20px", "10px", "20px", "10px")
        .children(children)
        .build()
}

fn viewport() -> Viewport {
    Viewport::new(1000, 800).unwrap()
}

fn root_rect(tree: &RenderNode) -> &RectangleNode {
    tree.children()[0].as_rectangle().unwrap()
}

#[test]
fn two_full_bleed_children_stack_and_grow_parent() {
    let scene = parent_with(vec![full_bleed("childA"), full_bleed("childB")]);
    let tree = layout_root(&typed(&scene), viewport());

    let RenderNode::Container(container) = &tree else {
        panic!("root must be a container");
    };
    assert_eq!(container.children.len(), 1);

    let root = root_rect(&tree);
    assert_eq!((root.x, root.y, root.width), (200, 80, 500));
    assert_eq!(root.height, 780);
    assert_eq!(root.fill, Rgba8Premul::from_straight_rgba(255, 128, 0, 255));

    let a = root.children[0].as_rectangle().unwrap();
    let b = root.children[1].as_rectangle().unwrap();
    assert_eq!(a.bounds(), PixelBox::new(220, 90, 460, 380));
    assert_eq!(b.bounds(), PixelBox::new(220, 470, 460, 380));
}

#[test]
fn later_sibling_top_offset_is_relative_to_cursor() {
    let scene = parent_with(vec![
        full_bleed("childA"),
        RectBuilder::new("50%", "50%")
            .key("childB")
            .left("0")
            .top("15px")
            .color("#FFFFFF"),
    ]);
    let tree = layout_root(&typed(&scene), viewport());
    let root = root_rect(&tree);

    let b = root.children[1].as_rectangle().unwrap();
    // Reference box stays the parent's initial content box: 460x380.
    assert_eq!(b.bounds(), PixelBox::new(220, 485, 230, 190));
    // 485 + 190 + 10 - 80
    assert_eq!(root.height, 605);
}

#[test]
fn stacked_sibling_starts_where_previous_ended() {
    let scene = RectBuilder::new("100%", "100%")
        .children([
            RectBuilder::new("10px", "37px"),
            RectBuilder::new("10px", "5px"),
            RectBuilder::new("10px", "25%"),
        ])
        .build();
    let tree = layout_root(&typed(&scene), viewport());
    let rects = root_rect(&tree)
        .children
        .iter()
        .map(|n| n.as_rectangle().unwrap().bounds())
        .collect::<Vec<_>>();

    assert_eq!(rects[0].y, 0);
    assert_eq!(rects[1].y, rects[0].y + rects[0].height);
    assert_eq!(rects[2].y, rects[1].y + rects[1].height);
    assert_eq!(rects[2].height, 200);
}

#[test]
fn declared_height_is_a_floor_not_a_cap() {
    let fits = RectBuilder::new("100px", "100px")
        .child(RectBuilder::new("100%", "30px"))
        .build();
    let tree = layout_root(&typed(&fits), viewport());
    assert_eq!(root_rect(&tree).height, 100);

    let overflows = RectBuilder::new("100px", "100px")
        .padding_bottom("7px")
        .children([
            RectBuilder::new("100%", "60px"),
            RectBuilder::new("100%", "60px"),
        ])
        .build();
    let tree = layout_root(&typed(&overflows), viewport());
    assert_eq!(root_rect(&tree).height, 127);
}

#[test]
fn width_never_grows() {
    let scene = RectBuilder::new("100px", "10px")
        .child(RectBuilder::new("500px", "10px"))
        .build();
    let tree = layout_root(&typed(&scene), viewport());
    let root = root_rect(&tree);
    assert_eq!(root.width, 100);
    assert_eq!(root.children[0].as_rectangle().unwrap().width, 500);
}

#[test]
fn padding_percentages_use_parent_axes() {
    let scene = RectBuilder::new("100%", "100%")
        .padding("10%", "10%", "10%", "10%")
        .child(RectBuilder::new("100%", "100%"))
        .build();
    let tree = layout_root(&typed(&scene), Viewport::new(200, 100).unwrap());
    let root = root_rect(&tree);
    let child = root.children[0].as_rectangle().unwrap();

    // left/right against width 200, top/bottom against height 100.
    assert_eq!(child.bounds(), PixelBox::new(20, 10, 160, 80));
    // 10 + 80 + 10
    assert_eq!(root.height, 100);
}

#[test]
fn grandchildren_are_nested_under_their_own_parent() {
    let scene = RectBuilder::new("100%", "100%")
        .key("root")
        .child(
            RectBuilder::new("50%", "50%")
                .key("mid")
                .padding("5px", "5px", "5px", "5px")
                .child(RectBuilder::new("100%", "10px").key("leaf")),
        )
        .build();
    let tree = layout_root(&typed(&scene), Viewport::new(100, 100).unwrap());
    let root = root_rect(&tree);
    assert_eq!(root.children.len(), 1);

    let mid = root.children[0].as_rectangle().unwrap();
    assert_eq!(mid.bounds(), PixelBox::new(0, 0, 50, 50));
    let leaf = mid.children[0].as_rectangle().unwrap();
    assert_eq!(leaf.bounds(), PixelBox::new(5, 5, 40, 10));
}

#[test]
fn empty_node_grows_to_its_padding() {
    let scene = RectBuilder::new("10px", "0")
        .padding("0", "4px", "0", "6px")
        .build();
    let tree = layout_root(&typed(&scene), viewport());
    assert_eq!(root_rect(&tree).height, 10);
}

#[test]
fn layout_is_deterministic() {
    let scene = parent_with(vec![full_bleed("a"), full_bleed("b")]);
    let node = typed(&scene);
    let first = layout_root(&node, viewport());
    let second = layout_root(&node, viewport());
    assert_eq!(first, second);
}

#[test]
fn layout_node_reports_final_bounding_box() {
    let scene = parent_with(vec![full_bleed("a"), full_bleed("b")]);
    let out = layout_node(&typed(&scene), &LayoutContext::for_viewport(viewport()));
    assert_eq!(out.nodes.len(), 1);
    assert_eq!(out.bounding_box, PixelBox::new(200, 80, 500, 780));
}

#[test]
fn context_offsets_shift_the_whole_subtree() {
    let scene = RectBuilder::new("10px", "10px")
        .left("1px")
        .top("2px")
        .build();
    let ctx = LayoutContext::new(PixelBox::new(100, 200, 50, 50));
    let out = layout_node(&typed(&scene), &ctx);
    assert_eq!(out.bounding_box, PixelBox::new(101, 202, 10, 10));
}

#[test]
fn out_of_range_pixel_length_is_rejected_before_layout() {
    let scene = RectBuilder::new("9223372036854775807px", "10px")
        .left("1px")
        .build();
    let err = build_tree(&scene).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::RectflowError::InvalidLength(ref s) if s == "9223372036854775807px"
    ));
}

#[test]
fn nested_extreme_percentages_saturate_instead_of_overflowing() {
    let mut node = RectBuilder::new("2147483647%", "10px").left("2147483647%");
    for _ in 0..3 {
        node = RectBuilder::new("2147483647%", "10px")
            .left("2147483647%")
            .child(node);
    }
    let scene = RectBuilder::new("2147483647px", "10px")
        .left("2147483647px")
        .top("2147483647px")
        .child(node)
        .build();

    let tree = layout_root(&typed(&scene), viewport());
    let rects = tree.rectangles();
    assert_eq!(rects.len(), 5);

    let deepest = rects[4];
    assert_eq!(deepest.x, i64::MAX);
    assert_eq!(deepest.width, i64::MAX);
    assert_eq!(deepest.bounds().right(), i64::MAX);

    let root = root_rect(&tree);
    assert_eq!((root.y, root.height), (2_147_483_647, 10));
}
