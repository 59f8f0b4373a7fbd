use crate::core::data::complex::Complex;
use crate::core::data::viewport::ViewportState;

/// Affine map from an integer screen pixel to a complex-plane point.
///
/// The horizontal span is always `4.0 / zoom` plane units across the screen
/// width, and the same per-pixel scale is used vertically. On a non-square
/// screen the view is therefore not aspect-corrected; deliberate, not a
/// bug.
#[must_use]
pub fn pixel_to_complex(x: i32, y: i32, width: u32, height: u32, view: &ViewportState) -> Complex {
    let scale = 4.0 / (f64::from(width) * view.zoom);

    Complex {
        real: (f64::from(x) - f64::from(width) / 2.0) * scale + view.offset_x,
        imag: (f64::from(y) - f64::from(height) / 2.0) * scale + view.offset_y,
    }
}
