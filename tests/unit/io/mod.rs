pub mod api;
pub mod render;
