pub mod coords;
pub mod frame_compute;
