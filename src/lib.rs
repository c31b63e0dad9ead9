//! dotmatrix - Pixel animations for multiplexed LED dot-matrix boards.
//!
//! This crate holds hand-drawn, multi-frame ON/OFF animations and encodes
//! them into the scan-line byte images that EEPROM-fed matrix boards read.
//!
//! # Architecture
//!
//! - `store`: Frames, animations and the editing session (`FrameStore`)
//! - `encode`: Layout strategies and the whole-animation encoder
//! - `animation`: Playback clock and image export
//! - `schema`: Editor configuration and the JSON animation document
//!
//! # Example
//!
//! ```rust
//! use dotmatrix::{
//!     encode::{OutputMode, encode},
//!     store::{FrameStore, Pixel},
//! };
//!
//! // A single 8x8 module
//! let mut store = FrameStore::create(8, 8);
//! store.set_pixel(0, 0, 0, Pixel::On).unwrap();
//!
//! // Column-scanned, bit 7 = top row
//! let image = encode(store.animation(), OutputMode::Variable);
//! assert_eq!(image[0], 0b1000_0000);
//!
//! // Padded to a full 8 KiB EEPROM
//! let eeprom = encode(store.animation(), OutputMode::eeprom());
//! assert_eq!(eeprom.len(), 8192);
//! ```

pub mod animation;
pub mod encode;
pub mod schema;
pub mod store;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use encode::{BinaryEncoder, EEPROM_CAPACITY, LayoutStrategy, OutputMode, encode};
pub use schema::{AnimationDocument, EditorConfig};
pub use store::{Animation, Dimensions, Frame, FrameStore, Pixel, StoreError};
