pub mod render;
pub mod routing;
pub mod types;
