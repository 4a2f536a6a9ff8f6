use std::time::{Duration, Instant};

use crate::{
    foundation::error::RectflowResult,
    render::{command::DrawCommand, node::RenderNode, painter::Painter},
};

/// Draw commands for `root` in depth-first pre-order.
pub fn collect_commands(root: &RenderNode) -> Vec<DrawCommand> {
    root.rectangles()
        .into_iter()
        .map(DrawCommand::fill_rect)
        .collect()
}

/// Issue every draw call for `root`, then commit the frame with a single update.
///
/// On a failed draw the painter is told to discard the partial frame and the error is returned
/// without committing. Returns the number of commands drawn.
#[tracing::instrument(skip(root, painter))]
pub fn render_all(root: &RenderNode, painter: &mut dyn Painter) -> RectflowResult<usize> {
    let commands = collect_commands(root);
    draw_and_commit(&commands, painter)?;
    Ok(commands.len())
}

/// Time spent issuing draws and committing the frame.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PassTimings {
    pub(crate) draw: Duration,
    pub(crate) commit: Duration,
}

/// Issue `commands` in order, then a single `update`.
pub(crate) fn draw_and_commit(
    commands: &[DrawCommand],
    painter: &mut dyn Painter,
) -> RectflowResult<PassTimings> {
    let mut timings = PassTimings::default();
    {
        let _span = tracing::info_span!("render", commands = commands.len()).entered();
        let t0 = Instant::now();
        issue(commands, painter)?;
        timings.draw = t0.elapsed();
    }
    {
        let _span = tracing::info_span!("paint").entered();
        let t0 = Instant::now();
        painter.update()?;
        timings.commit = t0.elapsed();
    }
    Ok(timings)
}

fn issue(commands: &[DrawCommand], painter: &mut dyn Painter) -> RectflowResult<()> {
    for cmd in commands {
        tracing::trace!(
            cx = cmd.center.x,
            cy = cmd.center.y,
            w = cmd.size.width,
            h = cmd.size.height,
            "draw rectangle"
        );
        if let Err(err) = painter.draw(cmd) {
            painter.discard();
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
