use crate::{
    foundation::{
        core::{Rect, Viewport},
        error::{RectflowError, RectflowResult},
    },
    render::{
        backend::{FrameRGBA, RenderSettings},
        command::{DrawCommand, Shape},
        painter::Painter,
    },
};

/// Software painter backed by `vello_cpu`.
///
/// Draw calls are queued; [`Painter::update`] rasterizes the queue onto a fresh surface and
/// swaps it in as the visible frame. Until then the previous frame stays visible.
pub struct CpuPainter {
    settings: RenderSettings,
    width: u16,
    height: u16,
    queued: Vec<DrawCommand>,
    frame: Option<FrameRGBA>,
}

impl CpuPainter {
    pub fn new(viewport: Viewport, settings: RenderSettings) -> RectflowResult<Self> {
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| RectflowError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| RectflowError::render("surface height exceeds u16"))?;
        Ok(Self {
            settings,
            width,
            height,
            queued: Vec::new(),
            frame: None,
        })
    }

    /// Last committed frame.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.frame.as_ref()
    }

    pub fn into_frame(self) -> Option<FrameRGBA> {
        self.frame
    }

    fn surface_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

impl Painter for CpuPainter {
    fn draw(&mut self, cmd: &DrawCommand) -> RectflowResult<()> {
        let r = cmd.rect();
        if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
            return Err(RectflowError::render(format!(
                "non-finite geometry in draw command: {r:?}"
            )));
        }
        self.queued.push(*cmd);
        Ok(())
    }

    fn update(&mut self) -> RectflowResult<()> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&to_cpu_rect(self.surface_rect()));
        }

        for cmd in self.queued.drain(..) {
            match cmd.shape {
                Shape::Rectangle => {
                    let [r, g, b, a] = cmd.fill.to_straight_rgba();
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                    ctx.fill_rect(&to_cpu_rect(cmd.rect()));
                }
            }
        }

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        self.frame = Some(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        });
        Ok(())
    }

    fn discard(&mut self) {
        self.queued.clear();
    }
}

fn to_cpu_rect(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
