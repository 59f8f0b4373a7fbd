pub mod frame_pipeline;
pub mod ports;
