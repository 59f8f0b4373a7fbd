mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod pipeline;
mod presenters;

pub use controllers::snapshot::SnapshotController;
pub use crate::core::colour_map::warm_gradient::warm_gradient;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::viewport::ViewportState;
pub use crate::core::escape::budget::{MAX_ITERATIONS, MIN_ITERATIONS, adjusted_iterations};
pub use crate::core::escape::evaluator::{EscapeResult, escape_time};
pub use crate::core::nav::controller::{NavStepReport, ViewportController};
pub use crate::core::nav::events::{InputEvent, PanDirection};
pub use crate::core::nav::limits::NavLimits;
pub use crate::core::render::coords::pixel_to_complex;
pub use crate::core::render::frame_compute::render_frame;
pub use pipeline::frame_pipeline::FramePipeline;
pub use pipeline::ports::{DisplaySurface, InputSource};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::winit_source::WinitInputSource;
#[cfg(feature = "gui")]
pub use presenters::pixels_surface::PixelsSurface;
