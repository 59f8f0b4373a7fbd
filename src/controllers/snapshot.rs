use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::viewport::ViewportState;
use crate::core::escape::budget::adjusted_iterations;
use crate::core::render::frame_compute::render_frame;

const SNAPSHOT_WIDTH: u32 = 800;
const SNAPSHOT_HEIGHT: u32 = 600;

/// Headless render path: computes one frame at the default view and hands it
/// to a file presenter. Exercises the full compute stack without a window.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let view = ViewportState::default();
        let budget = adjusted_iterations(view.zoom);
        let mut buffer = FrameBuffer::new(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)?;

        log::info!(
            "rendering {}x{} snapshot, budget {} iterations",
            SNAPSHOT_WIDTH,
            SNAPSHOT_HEIGHT,
            budget
        );

        let start = Instant::now();
        render_frame(&view, budget, &mut buffer);
        log::info!("compute took {:?}", start.elapsed());

        self.buffer = Some(buffer);
        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }
}
