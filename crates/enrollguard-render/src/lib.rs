//! Rendering utilities for human-facing surfaces (Markdown, terminal).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableOutcome, RenderableReport, RenderableVerdict};
