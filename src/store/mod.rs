//! Store module - Frames, animations and the editing session that mutates them.

mod animation;
mod dimensions;
mod error;
mod frame;
mod frame_store;

pub use animation::*;
pub use dimensions::*;
pub use error::*;
pub use frame::*;
pub use frame_store::*;
