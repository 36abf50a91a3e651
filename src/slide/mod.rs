//! Slide model and HTML rendering

mod outline;
mod render;

pub use outline::{Section, SlideOutline, MAX_POINT_CHARS, MAX_SECTIONS};
pub use render::SlideRenderer;
