//! Rectflow lays out declarative rectangle scenes and paints them onto a 2D surface.
//!
//! A scene is a tree of `rect` nodes whose sizes, offsets and padding are written as lengths
//! (`"0"`, `"12px"` or `"50%"`). Rectflow resolves those against each parent's content box,
//! stacks siblings vertically (block flow), grows parents to fit their children, and hands the
//! resulting absolute geometry to a [`Painter`].
//!
//! # Pipeline overview
//!
//! 1. **Build**: `SceneNode -> TypedNode` (validate node types, lengths and colors)
//! 2. **Layout**: `TypedNode + Viewport -> RenderNode` (absolute integer pixels)
//! 3. **Render**: `RenderNode -> [DrawCommand]` issued to a [`Painter`] in pre-order
//! 4. **Paint**: a single [`Painter::update`] commits the frame
//!
//! [`render_scene`] runs all four and returns per-phase timings in [`RenderStats`].
//!
//! ```
//! use rectflow::{RecordingPainter, RectBuilder, Viewport, render_scene};
//!
//! let scene = RectBuilder::new("50%", "50%")
//!     .left("20%")
//!     .top("10%")
//!     .color("#FF8000")
//!     .padding("20px", "10px", "20px", "10px")
//!     .child(RectBuilder::new("100%", "100%").color("#FFFFFF"))
//!     .child(RectBuilder::new("100%", "100%").color("#FFFFFF"))
//!     .build();
//!
//! let mut painter = RecordingPainter::new();
//! let stats = render_scene(&scene, Viewport::new(1000, 800).unwrap(), &mut painter).unwrap();
//! assert_eq!(stats.rectangles_drawn, 3);
//! ```
#![forbid(unsafe_code)]

mod build;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod scene;

pub use build::tree::{Padding, RECT_KIND, RectNode, TypedNode, build_tree};
pub use foundation::core::{PixelBox, Point, Rect, Rgba8Premul, Size, Viewport};
pub use foundation::error::{RectflowError, RectflowResult};
pub use layout::engine::{LayoutContext, LayoutOutput, layout_node, layout_root};
pub use layout::length::{Length, resolve_length, resolve_or_zero};
pub use pipeline::{PhaseTimings, RenderStats, layout_scene, render_scene};
pub use render::backend::{FrameRGBA, PainterKind, RenderSettings, create_painter};
pub use render::command::{DrawCommand, Shape, Stroke};
pub use render::cpu::CpuPainter;
pub use render::driver::{collect_commands, render_all};
pub use render::node::{ContainerNode, RectangleNode, RenderNode};
pub use render::painter::{Painter, RecordingPainter};
pub use scene::color::ColorSpec;
pub use scene::dsl::RectBuilder;
pub use scene::model::{Background, PaddingDef, RectProps, SceneNode};
