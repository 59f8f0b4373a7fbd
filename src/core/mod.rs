pub mod colour_map;
pub mod data;
pub mod escape;
pub mod nav;
pub mod render;
