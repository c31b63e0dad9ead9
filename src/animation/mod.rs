//! Playback and export for edited animations.
//!
//! Neither part takes part in encoding: playback only moves the displayed
//! frame, and export only persists a finished image.
//!
//! # Image Format
//!
//! Exported `.BIN` files are the raw encoder output:
//!
//! ```text
//! Frame 0 bytes | Frame 1 bytes | ... | zero padding (fixed capacity only)
//! ```
//!
//! There is no header, magic or version field. The byte layout of a frame
//! is decided by the grid size (see [`crate::encode::LayoutStrategy`]).

mod export;
mod playback;

pub use export::{ExportError, ExportStats, Exporter, suggested_file_name};
pub use playback::{DEFAULT_FPS, MAX_FPS, Playback};
