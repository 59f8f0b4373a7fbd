use crate::core::data::frame_buffer::FrameBuffer;
use std::path::Path;

pub trait FilePresenterPort {
    fn present(&self, buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
