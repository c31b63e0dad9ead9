//! Encode module - Packs animation frames into the byte layout a matrix board scans.

mod encoder;
mod layout;

pub use encoder::*;
pub use layout::*;
