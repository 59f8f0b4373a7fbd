pub mod winit_source;
