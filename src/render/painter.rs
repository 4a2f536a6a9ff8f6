use crate::{foundation::error::RectflowResult, render::command::DrawCommand};

/// Drawing surface the render driver submits commands to.
///
/// A pass issues any number of [`Painter::draw`] calls followed by exactly one
/// [`Painter::update`], which makes the frame visible.
pub trait Painter {
    fn draw(&mut self, cmd: &DrawCommand) -> RectflowResult<()>;

    fn update(&mut self) -> RectflowResult<()>;

    /// Drop everything drawn since the last update. Called when a pass is abandoned.
    fn discard(&mut self) {}
}

/// Painter that only remembers what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    frames: Vec<Vec<DrawCommand>>,
    pending: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed frames, oldest first.
    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Commands drawn since the last commit.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    pub fn updates(&self) -> usize {
        self.frames.len()
    }
}

impl Painter for RecordingPainter {
    fn draw(&mut self, cmd: &DrawCommand) -> RectflowResult<()> {
        self.pending.push(*cmd);
        Ok(())
    }

    fn update(&mut self) -> RectflowResult<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }

    fn discard(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
