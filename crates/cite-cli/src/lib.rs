//! CLI library components for the citation table annotator.

pub mod logging;
pub mod pipeline;
