use std::time::Instant;

use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::escape::budget::adjusted_iterations;
use crate::core::nav::controller::ViewportController;
use crate::core::nav::limits::NavLimits;
use crate::core::render::frame_compute::render_frame;
use crate::pipeline::ports::{DisplaySurface, InputSource};

/// One control thread driving the frame loop: drain input, advance the
/// viewport, compute the raster in parallel, present, repeat.
///
/// The off-screen buffer is allocated once here and overwritten every frame.
/// A frame that observes Quit still finishes and is presented; frames are
/// never skipped or coalesced, so an expensive frame just slows the loop.
pub struct FramePipeline<S: DisplaySurface, I: InputSource> {
    controller: ViewportController,
    buffer: FrameBuffer,
    surface: S,
    input: I,
    frames_presented: u64,
}

impl<S: DisplaySurface, I: InputSource> FramePipeline<S, I> {
    pub fn new(
        width: u32,
        height: u32,
        surface: S,
        input: I,
    ) -> Result<Self, FrameBufferError> {
        Ok(Self {
            controller: ViewportController::new(width, height, NavLimits::default()),
            buffer: FrameBuffer::new(width, height)?,
            surface,
            input,
            frames_presented: 0,
        })
    }

    /// Runs exactly one frame. Returns `true` while the loop should keep
    /// going, `false` once this frame drained a Quit.
    pub fn run_frame(&mut self) -> bool {
        let events = self.input.poll_events();
        let report = self.controller.step(&events);

        let view = self.controller.view();
        let budget = adjusted_iterations(view.zoom);

        let started = Instant::now();
        render_frame(&view, budget, &mut self.buffer);
        let compute_elapsed = started.elapsed();

        self.surface.present(&self.buffer);
        self.frames_presented += 1;

        log::debug!(
            "frame {}: zoom {:.3e}, budget {}, compute {:?}",
            self.frames_presented,
            view.zoom,
            budget,
            compute_elapsed
        );

        !report.quit_requested
    }

    pub fn run(&mut self) {
        while self.run_frame() {}
        log::info!("quit observed after {} frames", self.frames_presented);
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}
