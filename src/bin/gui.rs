use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new()?;

    // pixels borrows the window for the surface lifetime; leaking it keeps
    // the borrow 'static for the duration of the process.
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandel Drift")
            .with_inner_size(LogicalSize::new(
                f64::from(WINDOW_WIDTH),
                f64::from(WINDOW_HEIGHT),
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let surface = mandel_drift::PixelsSurface::new(window, size.width, size.height)?;
    let input = mandel_drift::WinitInputSource::new(event_loop);

    let mut pipeline =
        mandel_drift::FramePipeline::new(size.width, size.height, surface, input)?;
    pipeline.run();

    Ok(())
}
