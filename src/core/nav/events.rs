#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// One frame's worth of discrete navigation input.
///
/// The closed event set the pipeline consumes; adapters translate whatever
/// the windowing layer produces into these before the controller runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(PanDirection),
    KeyUp(PanDirection),
    MouseDown { x: i32, y: i32 },
    Wheel { delta: f64 },
}

#[cfg(test)]
mod tests {
    use super::{InputEvent, PanDirection};

    #[test]
    fn events_compare_by_value() {
        assert_eq!(
            InputEvent::KeyDown(PanDirection::Left),
            InputEvent::KeyDown(PanDirection::Left)
        );
        assert_ne!(
            InputEvent::KeyDown(PanDirection::Left),
            InputEvent::KeyUp(PanDirection::Left)
        );
        assert_eq!(
            InputEvent::MouseDown { x: 3, y: 4 },
            InputEvent::MouseDown { x: 3, y: 4 }
        );
    }
}
