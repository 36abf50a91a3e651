//! Slide generation pipeline
//!
//! Runs the stages in a fixed order and keeps the latest result in an
//! explicit [`Session`].

mod controller;
mod session;

pub use controller::PipelineController;
pub use session::{download_filename, local_filename, RenderedSlide, Session};
