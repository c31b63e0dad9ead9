//! Schema module - Configuration and document types for saved animations.

mod config;
mod document;

pub use config::*;
pub use document::*;
