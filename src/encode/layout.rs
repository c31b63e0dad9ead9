//! Byte-packing layouts for the supported matrix wirings.
//!
//! Each layout is a direct port of how one board is wired: which column
//! drives which data bit, and which 8×8 module sits at which address block.
//! The four formats are not interchangeable.
//!
//! | Layout   | Grid   | Bytes/frame | Order                                   |
//! |----------|--------|-------------|-----------------------------------------|
//! | Ribbon   | 8×32   | 32          | 4 column blocks, rows, LSB = left       |
//! | Tiled    | 16×16  | 32          | TL, TR, BL, BR quadrants, LSB = left    |
//! | Standard | 8×8    | 8           | columns, MSB = top row                  |
//! | Generic  | other  | rows        | rows, first 8 columns, LSB = left       |

use crate::store::{Dimensions, Frame};

/// Side length of one matrix module.
pub const MODULE_SIZE: usize = 8;

/// Byte-packing algorithm for one physical wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutStrategy {
    /// Four 8×8 modules side by side.
    Ribbon,
    /// Four 8×8 modules in a 2×2 square.
    Tiled,
    /// One 8×8 module, column scanned.
    Standard,
    /// Anything else: one byte per row, columns past 8 dropped.
    Generic,
}

/// Exact-size layouts, checked in order. Sizes not listed use [`LayoutStrategy::Generic`].
const SELECTION_TABLE: &[(Dimensions, LayoutStrategy)] = &[
    (Dimensions::new(8, 32), LayoutStrategy::Ribbon),
    (Dimensions::new(16, 16), LayoutStrategy::Tiled),
    (Dimensions::new(8, 8), LayoutStrategy::Standard),
];

impl LayoutStrategy {
    /// Pick the layout for a grid size. Never fails.
    pub fn select(dimensions: Dimensions) -> Self {
        SELECTION_TABLE
            .iter()
            .find(|(dims, _)| *dims == dimensions)
            .map(|&(_, strategy)| strategy)
            .unwrap_or(LayoutStrategy::Generic)
    }

    /// Encoded size of one frame of `dimensions` under this layout.
    pub fn bytes_per_frame(self, dimensions: Dimensions) -> usize {
        match self {
            LayoutStrategy::Ribbon | LayoutStrategy::Tiled => 4 * MODULE_SIZE,
            LayoutStrategy::Standard => MODULE_SIZE,
            LayoutStrategy::Generic => dimensions.rows(),
        }
    }

    /// Append the bytes for `frame` to `out`.
    pub fn encode_frame(self, frame: &Frame, out: &mut Vec<u8>) {
        match self {
            LayoutStrategy::Ribbon => encode_ribbon(frame, out),
            LayoutStrategy::Tiled => encode_tiled(frame, out),
            LayoutStrategy::Standard => encode_standard(frame, out),
            LayoutStrategy::Generic => encode_generic(frame, out),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutStrategy::Ribbon => "ribbon",
            LayoutStrategy::Tiled => "tiled",
            LayoutStrategy::Standard => "standard",
            LayoutStrategy::Generic => "generic",
        }
    }
}

impl std::fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pack `width` pixels of `row` starting at `col_offset`, bit 0 = leftmost.
#[inline]
fn pack_row_lsb(frame: &Frame, row: usize, col_offset: usize, width: usize) -> u8 {
    (0..width).fold(0u8, |byte, c| {
        if frame.is_on(row, col_offset + c) {
            byte | (1 << c)
        } else {
            byte
        }
    })
}

/// Emit one 8×8 module whose top-left pixel is `(row_offset, col_offset)`.
#[inline]
fn push_module(frame: &Frame, row_offset: usize, col_offset: usize, out: &mut Vec<u8>) {
    for r in row_offset..row_offset + MODULE_SIZE {
        out.push(pack_row_lsb(frame, r, col_offset, MODULE_SIZE));
    }
}

/// 8×32 ribbon: modules at columns 0, 8, 16, 24, each as 8 row bytes.
pub fn encode_ribbon(frame: &Frame, out: &mut Vec<u8>) {
    for block in 0..4 {
        push_module(frame, 0, block * MODULE_SIZE, out);
    }
}

/// 16×16 square: top-left, top-right, bottom-left, bottom-right modules.
pub fn encode_tiled(frame: &Frame, out: &mut Vec<u8>) {
    for (row_offset, col_offset) in [(0, 0), (0, 8), (8, 0), (8, 8)] {
        push_module(frame, row_offset, col_offset, out);
    }
}

/// Single 8×8: one byte per column, bit 7 = row 0.
pub fn encode_standard(frame: &Frame, out: &mut Vec<u8>) {
    for c in 0..MODULE_SIZE {
        let byte = (0..MODULE_SIZE).fold(0u8, |byte, r| {
            if frame.is_on(r, c) {
                byte | (1 << (7 - r))
            } else {
                byte
            }
        });
        out.push(byte);
    }
}

/// Fallback: one byte per row of the first eight columns.
///
/// Wider grids lose every column from index 8 on. Multi-byte rows are not
/// supported by any board this targets.
pub fn encode_generic(frame: &Frame, out: &mut Vec<u8>) {
    let width = frame.cols().min(MODULE_SIZE);
    for r in 0..frame.rows() {
        out.push(pack_row_lsb(frame, r, 0, width));
    }
}
