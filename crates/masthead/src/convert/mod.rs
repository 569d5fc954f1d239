//! The conversion pipeline: extraction, renderer invocation, orchestration
//!
//! Blocks flow from the extractor to the renderer, driven once per
//! document by the orchestrator.

mod extract;
mod orchestrator;
mod renderer;

pub use extract::*;
pub use orchestrator::*;
pub use renderer::*;
