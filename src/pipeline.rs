use std::time::{Duration, Instant};

use crate::{
    build::tree::build_tree,
    foundation::{core::Viewport, error::RectflowResult},
    layout::engine::layout_root,
    render::{
        driver::{collect_commands, draw_and_commit},
        node::RenderNode,
        painter::Painter,
    },
    scene::model::SceneNode,
};

/// Wall-clock time spent in each phase of a render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub build: Duration,
    pub layout: Duration,
    pub render: Duration,
    pub paint: Duration,
    pub total: Duration,
}

/// Outcome of a successful render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub nodes_built: usize,
    pub rectangles_drawn: usize,
    pub timings: PhaseTimings,
}

/// Build and lay out `scene` without drawing anything.
pub fn layout_scene(scene: &SceneNode, viewport: Viewport) -> RectflowResult<RenderNode> {
    let tree = build_tree(scene)?;
    Ok(layout_root(&tree, viewport))
}

/// Build, lay out, draw and commit `scene` onto `painter`.
///
/// Pipeline:
/// 1. [`build_tree`](crate::build_tree): declaration → typed tree
/// 2. [`layout_root`](crate::layout_root): typed tree → geometry
/// 3. draw: one [`Painter::draw`] per rectangle, pre-order
/// 4. paint: a single [`Painter::update`]
///
/// Build and layout finish before the painter is touched, so their errors leave the painter as
/// it was.
#[tracing::instrument(skip_all, fields(width = viewport.width, height = viewport.height))]
pub fn render_scene(
    scene: &SceneNode,
    viewport: Viewport,
    painter: &mut dyn Painter,
) -> RectflowResult<RenderStats> {
    let started = Instant::now();
    let mut timings = PhaseTimings::default();

    let tree = {
        let _span = tracing::info_span!("build").entered();
        let t0 = Instant::now();
        let tree = build_tree(scene)?;
        timings.build = t0.elapsed();
        tree
    };

    let geometry = {
        let _span = tracing::info_span!("layout").entered();
        let t0 = Instant::now();
        let geometry = layout_root(&tree, viewport);
        timings.layout = t0.elapsed();
        geometry
    };

    let commands = collect_commands(&geometry);
    let pass = draw_and_commit(&commands, painter)?;
    timings.render = pass.draw;
    timings.paint = pass.commit;

    timings.total = started.elapsed();
    let stats = RenderStats {
        nodes_built: tree.node_count(),
        rectangles_drawn: commands.len(),
        timings,
    };
    tracing::info!(
        nodes = stats.nodes_built,
        rectangles = stats.rectangles_drawn,
        total_us = stats.timings.total.as_micros() as u64,
        "render pass complete"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
