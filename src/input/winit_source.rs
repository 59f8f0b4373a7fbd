use crate::core::nav::events::{InputEvent, PanDirection};
use crate::pipeline::ports::InputSource;
use std::time::Duration;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::EventLoopExtPumpEvents;

/// Translates one pump of the winit event loop into the pipeline's closed
/// event set. WASD and the arrow keys pan, left click retargets, the wheel
/// adjusts zoom speed, Escape or a close request quits.
pub struct WinitInputSource {
    event_loop: EventLoop<()>,
    cursor_x: i32,
    cursor_y: i32,
}

impl WinitInputSource {
    #[must_use]
    pub fn new(event_loop: EventLoop<()>) -> Self {
        Self {
            event_loop,
            cursor_x: 0,
            cursor_y: 0,
        }
    }
}

impl InputSource for WinitInputSource {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut batch = Vec::new();
        let Self {
            event_loop,
            cursor_x,
            cursor_y,
        } = self;

        let _status = event_loop.pump_events(Some(Duration::ZERO), |event, _| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => batch.push(InputEvent::Quit),
                WindowEvent::CursorMoved { position, .. } => {
                    *cursor_x = position.x as i32;
                    *cursor_y = position.y as i32;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    batch.push(InputEvent::MouseDown {
                        x: *cursor_x,
                        y: *cursor_y,
                    });
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let delta = match delta {
                        MouseScrollDelta::LineDelta(_, lines) => f64::from(lines),
                        MouseScrollDelta::PixelDelta(position) => position.y,
                    };
                    batch.push(InputEvent::Wheel { delta });
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.repeat {
                        return;
                    }

                    let PhysicalKey::Code(key_code) = key_event.physical_key else {
                        return;
                    };

                    if key_code == KeyCode::Escape && key_event.state == ElementState::Pressed {
                        batch.push(InputEvent::Quit);
                        return;
                    }

                    if let Some(direction) = pan_direction(key_code) {
                        batch.push(match key_event.state {
                            ElementState::Pressed => InputEvent::KeyDown(direction),
                            ElementState::Released => InputEvent::KeyUp(direction),
                        });
                    }
                }
                _ => {}
            }
        });

        batch
    }
}

fn pan_direction(key_code: KeyCode) -> Option<PanDirection> {
    match key_code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(PanDirection::Up),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(PanDirection::Down),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(PanDirection::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(PanDirection::Right),
        _ => None,
    }
}
