use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBufferError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(
                    f,
                    "frame buffer dimensions must be non-zero, got {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// A dense, row-major RGB raster, allocated once and overwritten every frame.
///
/// The frame compute step is the only writer; presenters read it during
/// presentation. Rows are handed out as disjoint mutable slices so workers
/// never share a write destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        if width == 0 || height == 0 {
            return Err(FrameBufferError::ZeroDimension { width, height });
        }

        let total_bytes = width as usize * height as usize * BYTES_PER_PIXEL;

        Ok(Self {
            width,
            height,
            bytes: vec![0; total_bytes],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Disjoint mutable views of each pixel row, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        self.bytes.chunks_exact_mut(row_bytes)
    }
}
