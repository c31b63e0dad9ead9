//! Pixel grids for a single animation frame.

use std::fmt;

use super::dimensions::{Dimensions, MAX_DIMENSION};
use super::error::StoreError;

/// A single LED: lit or unlit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(u8)]
pub enum Pixel {
    #[default]
    Off = 0,
    On = 1,
}

impl Pixel {
    #[inline]
    pub fn is_on(self) -> bool {
        self == Pixel::On
    }

    /// The opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Pixel::Off => Pixel::On,
            Pixel::On => Pixel::Off,
        }
    }

    /// Parse one character of the ASCII-art row format.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' | '1' | 'X' | 'x' | '*' => Some(Pixel::On),
            '.' | '0' | ' ' | '-' => Some(Pixel::Off),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Pixel::Off => '.',
            Pixel::On => '#',
        }
    }
}

impl From<bool> for Pixel {
    fn from(on: bool) -> Self {
        if on { Pixel::On } else { Pixel::Off }
    }
}

/// A `rows × cols` grid of pixels, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    dimensions: Dimensions,
    pixels: Vec<Pixel>,
}

impl Frame {
    /// Create an all-OFF frame.
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            pixels: vec![Pixel::Off; dimensions.area()],
        }
    }

    /// Build a frame from ASCII-art rows (`#` on, `.` off).
    ///
    /// Every row must have the same length, and the grid must be non-empty
    /// and at most [`MAX_DIMENSION`] on each side.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, StoreError> {
        let cols = rows
            .first()
            .map(|r| r.as_ref().chars().count())
            .ok_or(StoreError::EmptyFrame)?;
        if cols == 0 {
            return Err(StoreError::EmptyFrame);
        }
        if rows.len() > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(StoreError::FrameTooLarge {
                rows: rows.len(),
                cols,
                max: MAX_DIMENSION,
            });
        }

        let mut pixels = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != cols {
                return Err(StoreError::RaggedFrame {
                    row: r,
                    expected: cols,
                    found: len,
                });
            }
            for (c, ch) in row.chars().enumerate() {
                let pixel = Pixel::from_char(ch).ok_or(StoreError::InvalidPixel {
                    row: r,
                    col: c,
                    ch,
                })?;
                pixels.push(pixel);
            }
        }

        Ok(Self {
            dimensions: Dimensions::new(rows.len(), cols),
            pixels,
        })
    }

    /// Render the frame as ASCII-art rows.
    pub fn to_rows(&self) -> Vec<String> {
        self.pixels
            .chunks(self.dimensions.cols().max(1))
            .map(|row| row.iter().map(|p| p.to_char()).collect())
            .collect()
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dimensions.cols()
    }

    /// Pixel at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.dimensions.rows() && col < self.dimensions.cols() {
            Some(self.pixels[row * self.dimensions.cols() + col])
        } else {
            None
        }
    }

    /// True if `(row, col)` is inside the grid and lit.
    #[inline]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Pixel::is_on)
    }

    /// Overwrite one pixel in place.
    pub fn set(&mut self, row: usize, col: usize, value: Pixel) -> Result<(), StoreError> {
        if row >= self.dimensions.rows() {
            return Err(StoreError::IndexOutOfRange {
                axis: "row",
                index: row,
                len: self.dimensions.rows(),
            });
        }
        if col >= self.dimensions.cols() {
            return Err(StoreError::IndexOutOfRange {
                axis: "column",
                index: col,
                len: self.dimensions.cols(),
            });
        }
        self.pixels[row * self.dimensions.cols() + col] = value;
        Ok(())
    }

    /// Row `row` as a slice, or `None` outside the grid.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row < self.dimensions.rows() {
            let start = row * self.dimensions.cols();
            Some(&self.pixels[start..start + self.dimensions.cols()])
        } else {
            None
        }
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_on()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| !p.is_on())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
