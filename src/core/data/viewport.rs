/// Navigation state for the visible region of the complex plane.
///
/// `zoom` only ever evolves by multiplication with a strictly positive
/// factor, so it can never reach or cross zero. The horizontal span of the
/// view is `4.0 / zoom` plane units regardless of screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub target_offset_x: f64,
    pub target_offset_y: f64,
    pub zoom_speed: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            target_offset_x: 0.0,
            target_offset_y: 0.0,
            zoom_speed: 1.0,
        }
    }
}
