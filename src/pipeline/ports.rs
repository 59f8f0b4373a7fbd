use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::nav::events::InputEvent;

/// Accepts a completed frame and shows it. Presentation failures are the
/// adapter's concern; the pipeline never inspects a result.
pub trait DisplaySurface {
    fn present(&mut self, buffer: &FrameBuffer);
}

/// Produces one frame's finite batch of discrete events. An empty batch is
/// an ordinary no-op frame.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
