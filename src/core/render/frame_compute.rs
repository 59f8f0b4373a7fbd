use rayon::prelude::*;

use crate::core::colour_map::warm_gradient::warm_gradient;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::core::data::viewport::ViewportState;
use crate::core::escape::evaluator::escape_time;
use crate::core::render::coords::pixel_to_complex;

/// Fills the frame buffer from an immutable viewport snapshot.
///
/// Rows are distributed over rayon's work-stealing pool; per-pixel cost is
/// wildly non-uniform near the set boundary, so static striping would starve
/// the cheap rows. Every pixel is written by exactly one row task and the
/// parallel iterator joins before returning, so the caller may present the
/// buffer immediately afterwards.
pub fn render_frame(view: &ViewportState, budget: u32, buffer: &mut FrameBuffer) {
    let width = buffer.width();
    let height = buffer.height();
    let row_bytes = buffer.row_bytes();

    buffer
        .rows_mut()
        .collect::<Vec<_>>()
        .into_par_iter()
        .enumerate()
        .for_each(|(y, row)| {
            debug_assert_eq!(row.len(), row_bytes);

            for x in 0..width {
                let c = pixel_to_complex(x as i32, y as i32, width, height, view);
                let escape = escape_time(c, budget);
                let colour = warm_gradient(escape.iterations, budget);

                let offset = x as usize * BYTES_PER_PIXEL;
                row[offset] = colour.r;
                row[offset + 1] = colour.g;
                row[offset + 2] = colour.b;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::escape::budget::adjusted_iterations;

    fn small_buffer() -> FrameBuffer {
        FrameBuffer::new(64, 48).unwrap()
    }

    #[test]
    fn test_render_is_deterministic_under_parallel_execution() {
        let view = ViewportState::default();
        let budget = adjusted_iterations(view.zoom);
        let mut first = small_buffer();
        let mut second = small_buffer();

        render_frame(&view, budget, &mut first);
        render_frame(&view, budget, &mut second);

        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn test_render_matches_serial_reference() {
        let view = ViewportState {
            zoom: 4.0,
            offset_x: -0.5,
            ..ViewportState::default()
        };
        let budget = adjusted_iterations(view.zoom);
        let mut parallel = small_buffer();
        render_frame(&view, budget, &mut parallel);

        let mut serial = small_buffer();
        let width = serial.width();
        let height = serial.height();
        for (y, row) in serial.rows_mut().enumerate() {
            for x in 0..width {
                let c = pixel_to_complex(x as i32, y as i32, width, height, &view);
                let colour = warm_gradient(escape_time(c, budget).iterations, budget);
                let offset = x as usize * BYTES_PER_PIXEL;
                row[offset] = colour.r;
                row[offset + 1] = colour.g;
                row[offset + 2] = colour.b;
            }
        }

        assert_eq!(parallel.bytes(), serial.bytes());
    }

    #[test]
    fn test_pruned_interior_renders_the_phase_origin_colour() {
        let view = ViewportState::default();
        let budget = adjusted_iterations(view.zoom);
        let mut buffer = small_buffer();

        render_frame(&view, budget, &mut buffer);

        // The screen centre is the origin, pruned interior at (0, 0.0);
        // with t = 0 the palette sits at its phase origin.
        let expected = warm_gradient(0, budget);
        let centre = (24 * 64 + 32) * BYTES_PER_PIXEL;
        let pixel = &buffer.bytes()[centre..centre + BYTES_PER_PIXEL];

        assert_eq!(
            Colour {
                r: pixel[0],
                g: pixel[1],
                b: pixel[2]
            },
            expected
        );
    }

    #[test]
    fn test_render_overwrites_previous_frame_contents() {
        let mut buffer = small_buffer();
        for row in buffer.rows_mut() {
            row.fill(0xAA);
        }
        let view = ViewportState::default();
        let budget = adjusted_iterations(view.zoom);

        render_frame(&view, budget, &mut buffer);

        let mut fresh = small_buffer();
        render_frame(&view, budget, &mut fresh);
        assert_eq!(buffer.bytes(), fresh.bytes());
    }
}
