pub mod render;
pub mod scoring;

pub use render::*;
pub use scoring::*;
