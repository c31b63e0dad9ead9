//! Grid dimensions and the permissive fallback applied to user input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value substituted for any non-positive, oversized or unparsable dimension.
pub const FALLBACK_DIMENSION: usize = 8;

/// Largest accepted rows or cols value.
pub const MAX_DIMENSION: usize = 1024;

/// Rows of a freshly opened editor (one row of four 8×8 modules).
pub const DEFAULT_ROWS: usize = 8;

/// Columns of a freshly opened editor.
pub const DEFAULT_COLS: usize = 32;

/// Grid size as `(rows, cols)`.
///
/// Both values always lie in `1..=MAX_DIMENSION`, including after
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDimensions")]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

#[derive(Deserialize)]
struct RawDimensions {
    rows: usize,
    cols: usize,
}

impl From<RawDimensions> for Dimensions {
    fn from(raw: RawDimensions) -> Self {
        Self::new(raw.rows, raw.cols)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Dimensions {
    /// Dimensions as given. Zero values and values above [`MAX_DIMENSION`]
    /// are replaced by [`FALLBACK_DIMENSION`].
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: checked_dimension(rows),
            cols: checked_dimension(cols),
        }
    }

    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Dimensions from signed input; anything `<= 0` or above [`MAX_DIMENSION`]
    /// becomes [`FALLBACK_DIMENSION`].
    ///
    /// Bad sizes are substituted rather than rejected so the editor always
    /// has a drawable grid.
    pub fn sanitized(rows: i64, cols: i64) -> Self {
        Self::new(sanitize_dimension(rows), sanitize_dimension(cols))
    }

    /// Dimensions from free text, as typed into a size field.
    pub fn from_input(rows: &str, cols: &str) -> Self {
        Self::new(parse_dimension(rows), parse_dimension(cols))
    }

    /// Number of pixels in one frame.
    #[inline]
    pub fn area(self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

const fn checked_dimension(value: usize) -> usize {
    if value == 0 || value > MAX_DIMENSION {
        FALLBACK_DIMENSION
    } else {
        value
    }
}

/// Map a signed dimension to a usable one.
pub fn sanitize_dimension(value: i64) -> usize {
    match usize::try_from(value) {
        Ok(v) => checked_dimension(v),
        Err(_) => FALLBACK_DIMENSION,
    }
}

/// Parse the leading integer of `input` (after whitespace), like a form field.
///
/// `"12px"` parses as 12. Empty, non-numeric, zero, negative or oversized
/// input yields [`FALLBACK_DIMENSION`].
pub fn parse_dimension(input: &str) -> usize {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return FALLBACK_DIMENSION;
    }
    match digits[..end].parse::<usize>() {
        Ok(v) => checked_dimension(v),
        Err(_) => FALLBACK_DIMENSION,
    }
}
