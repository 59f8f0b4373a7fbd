use crate::core::data::viewport::ViewportState;
use crate::core::nav::events::{InputEvent, PanDirection};
use crate::core::nav::limits::NavLimits;
use crate::core::render::coords::pixel_to_complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavStepReport {
    pub quit_requested: bool,
    pub velocity_clamped: bool,
}

/// Advances the viewport once per frame from that frame's input events.
///
/// The controller is the only component with cross-frame state. Each step
/// drains the event batch in arrival order, then runs the motion update:
/// exponential approach to the click target, velocity clamp, zoom-scaled
/// pan, geometric velocity decay, multiplicative zoom.
#[derive(Debug)]
pub struct ViewportController {
    view: ViewportState,
    limits: NavLimits,
    width: u32,
    height: u32,
}

impl ViewportController {
    #[must_use]
    pub fn new(width: u32, height: u32, limits: NavLimits) -> Self {
        Self {
            view: ViewportState::default(),
            limits,
            width,
            height,
        }
    }

    /// Read-only snapshot for the frame about to be computed.
    #[must_use]
    pub fn view(&self) -> ViewportState {
        self.view
    }

    pub fn step(&mut self, events: &[InputEvent]) -> NavStepReport {
        let mut report = NavStepReport::default();

        for &event in events {
            self.apply_event(event, &mut report);
        }

        self.approach_click_target();
        report.velocity_clamped = self.clamp_velocity();
        self.apply_velocity();
        self.decay_velocity();
        self.view.zoom *= self.view.zoom_speed;

        report
    }

    fn apply_event(&mut self, event: InputEvent, report: &mut NavStepReport) {
        match event {
            InputEvent::Quit => report.quit_requested = true,
            InputEvent::MouseDown { x, y } => {
                // Pan destination is the plane point under the cursor at the
                // pre-update view.
                let target = pixel_to_complex(x, y, self.width, self.height, &self.view);
                self.view.target_offset_x = target.real;
                self.view.target_offset_y = target.imag;
            }
            InputEvent::KeyDown(direction) => {
                let accel = self.limits.acceleration;
                match direction {
                    PanDirection::Up => self.view.velocity_y -= accel,
                    PanDirection::Down => self.view.velocity_y += accel,
                    PanDirection::Left => self.view.velocity_x -= accel,
                    PanDirection::Right => self.view.velocity_x += accel,
                }
            }
            InputEvent::KeyUp(_) => {}
            InputEvent::Wheel { delta } => {
                if delta > 0.0 {
                    self.view.zoom_speed *= self.limits.wheel_zoom_in;
                } else if delta < 0.0 {
                    self.view.zoom_speed *= self.limits.wheel_zoom_out;
                }
                self.view.zoom_speed = self
                    .view
                    .zoom_speed
                    .clamp(self.limits.min_zoom_speed, self.limits.max_zoom_speed);
            }
        }
    }

    fn approach_click_target(&mut self) {
        let click_speed = self.limits.click_speed;
        self.view.offset_x += (self.view.target_offset_x - self.view.offset_x) * click_speed;
        self.view.offset_y += (self.view.target_offset_y - self.view.offset_y) * click_speed;
    }

    fn clamp_velocity(&mut self) -> bool {
        let max_speed = self.limits.max_speed;
        let clamped_x = self.view.velocity_x.clamp(-max_speed, max_speed);
        let clamped_y = self.view.velocity_y.clamp(-max_speed, max_speed);

        let clamped = clamped_x != self.view.velocity_x || clamped_y != self.view.velocity_y;
        self.view.velocity_x = clamped_x;
        self.view.velocity_y = clamped_y;
        clamped
    }

    fn apply_velocity(&mut self) {
        // Divide by zoom so panning speed stays constant in screen space.
        self.view.offset_x += self.view.velocity_x / self.view.zoom;
        self.view.offset_y += self.view.velocity_y / self.view.zoom;
    }

    fn decay_velocity(&mut self) {
        self.view.velocity_x *= self.limits.velocity_decay;
        self.view.velocity_y *= self.limits.velocity_decay;
    }
}
