use crate::{
    foundation::{
        core::{Rgba8Premul, Viewport},
        error::RectflowResult,
    },
    render::{cpu::CpuPainter, painter::Painter, painter::RecordingPainter},
};

/// A committed frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default. The `premultiplied` flag is included to make
/// this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data, as expected by image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            };
            out.extend_from_slice(&c.to_straight_rgba());
        }
        out
    }
}

/// Available painter kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PainterKind {
    /// Software rasterizer powered by `vello_cpu`.
    Cpu,
    /// Keeps draw commands without rasterizing.
    Recording,
}

/// Painter settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, painters clear the surface to this straight RGBA8 color before drawing a frame.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Create a painter implementation for a surface of `viewport` size.
pub fn create_painter(
    kind: PainterKind,
    viewport: Viewport,
    settings: &RenderSettings,
) -> RectflowResult<Box<dyn Painter>> {
    match kind {
        PainterKind::Cpu => Ok(Box::new(CpuPainter::new(viewport, settings.clone())?)),
        PainterKind::Recording => Ok(Box::new(RecordingPainter::new())),
    }
}
