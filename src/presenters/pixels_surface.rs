use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::pipeline::ports::DisplaySurface;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presents completed frames through a `pixels` GPU surface.
///
/// The pipeline's buffer is packed RGB; the pixels frame is RGBA, so each
/// presentation expands rows with an opaque alpha channel before rendering.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }
}

impl DisplaySurface for PixelsSurface {
    fn present(&mut self, buffer: &FrameBuffer) {
        if buffer.width() != self.width || buffer.height() != self.height {
            log::warn!(
                "frame size {}x{} does not match surface {}x{}, skipping present",
                buffer.width(),
                buffer.height(),
                self.width,
                self.height
            );
            return;
        }

        let frame = self.pixels.frame_mut();
        for (rgb, rgba) in buffer
            .bytes()
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(frame.chunks_exact_mut(4))
        {
            rgba[0] = rgb[0];
            rgba[1] = rgb[1];
            rgba[2] = rgb[2];
            rgba[3] = 0xFF;
        }

        if let Err(err) = self.pixels.render() {
            log::error!("surface render failed: {}", err);
        }
    }
}
