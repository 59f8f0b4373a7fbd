#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLimits {
    /// Velocity added per key-down event, in screen-space plane units.
    pub acceleration: f64,
    /// Clamp applied to each velocity axis every frame.
    pub max_speed: f64,
    /// Fraction of the remaining distance to the pan target covered per
    /// frame (exponential approach, never reaches the target exactly).
    pub click_speed: f64,
    /// Multiplicative velocity decay applied every frame.
    pub velocity_decay: f64,
    /// Factor applied to zoom_speed per wheel notch toward zooming in.
    pub wheel_zoom_in: f64,
    /// Factor applied to zoom_speed per wheel notch toward zooming out.
    pub wheel_zoom_out: f64,
    /// Inclusive clamp range for zoom_speed.
    pub min_zoom_speed: f64,
    pub max_zoom_speed: f64,
}

impl Default for NavLimits {
    fn default() -> Self {
        Self {
            acceleration: 0.02,
            max_speed: 0.1,
            click_speed: 0.1,
            velocity_decay: 0.9,
            wheel_zoom_in: 1.01,
            wheel_zoom_out: 0.99,
            min_zoom_speed: 0.9,
            max_zoom_speed: 1.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavLimits;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = NavLimits::default();

        assert!(limits.acceleration > 0.0);
        assert!(limits.max_speed > 0.0);
        assert!(limits.click_speed > 0.0 && limits.click_speed < 1.0);
        assert!(limits.velocity_decay > 0.0 && limits.velocity_decay < 1.0);
        assert!(limits.wheel_zoom_in > 1.0);
        assert!(limits.wheel_zoom_out < 1.0 && limits.wheel_zoom_out > 0.0);
        assert!(limits.min_zoom_speed > 0.0);
        assert!(limits.min_zoom_speed < 1.0);
        assert!(limits.max_zoom_speed > 1.0);
    }

    #[test]
    fn zoom_speed_clamp_range_brackets_the_identity_factor() {
        let limits = NavLimits::default();

        assert!(limits.min_zoom_speed <= 1.0);
        assert!(limits.max_zoom_speed >= 1.0);
    }
}
