//! Editing session state: the animation plus the active frame position.

use std::sync::Arc;

use super::animation::Animation;
use super::dimensions::Dimensions;
use super::error::StoreError;
use super::frame::{Frame, Pixel};

/// Owns an [`Animation`] and every mutation the drawing surface may apply.
///
/// Usage:
/// ```
/// use dotmatrix::store::{FrameStore, Pixel};
///
/// let mut store = FrameStore::create(8, 8);
/// store.set_pixel(0, 0, 0, Pixel::On)?;
/// store.insert_frame_after(0)?;
/// assert_eq!(store.frame_count(), 2);
/// assert_eq!(store.current_index(), 1);
/// # Ok::<(), dotmatrix::store::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    animation: Animation,
    current: usize,
}

impl FrameStore {
    /// Store with one blank frame. Non-positive sizes fall back to 8.
    pub fn create(rows: i64, cols: i64) -> Self {
        Self::with_dimensions(Dimensions::sanitized(rows, cols))
    }

    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            animation: Animation::new(dimensions),
            current: 0,
        }
    }

    /// Adopt an existing animation, active position at frame 0.
    pub fn from_animation(animation: Animation) -> Self {
        Self {
            animation,
            current: 0,
        }
    }

    #[inline]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn into_animation(self) -> Animation {
        self.animation
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.animation.dimensions()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dimensions().rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dimensions().cols()
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.animation.frame_count()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.animation.frame(index)
    }

    /// Shared snapshot of a frame; later edits replace the slot, not this value.
    pub fn frame_handle(&self, index: usize) -> Option<Arc<Frame>> {
        self.animation.frame_handle(index)
    }

    pub fn frames(&self) -> impl ExactSizeIterator<Item = &Frame> + '_ {
        self.animation.frames()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active frame. Every mutation keeps the active position in range.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.animation.frame(self.current)
    }

    pub fn set_current_index(&mut self, index: usize) -> Result<(), StoreError> {
        self.animation.check_index(index)?;
        self.current = index;
        Ok(())
    }

    /// Move the active position forward by `steps`, wrapping at the end.
    pub fn advance(&mut self, steps: u64) -> usize {
        let len = self.frame_count() as u64;
        self.current = ((self.current as u64 + steps % len) % len) as usize;
        self.current
    }

    /// Write one pixel. Bounds are checked before anything is touched.
    pub fn set_pixel(
        &mut self,
        frame: usize,
        row: usize,
        col: usize,
        value: Pixel,
    ) -> Result<(), StoreError> {
        let mut edited = self.animation.frame_checked(frame)?.clone();
        edited.set(row, col, value)?;
        self.animation.replace(frame, edited);
        Ok(())
    }

    /// Flip one pixel.
    pub fn toggle_pixel(&mut self, frame: usize, row: usize, col: usize) -> Result<Pixel, StoreError> {
        let current = self
            .animation
            .frame_checked(frame)?
            .get(row, col)
            .ok_or_else(|| self.pixel_out_of_range(row, col))?;
        let next = current.toggled();
        self.set_pixel(frame, row, col, next)?;
        Ok(next)
    }

    /// Light one pixel, as a drag stroke does.
    pub fn paint_pixel(&mut self, frame: usize, row: usize, col: usize) -> Result<(), StoreError> {
        self.set_pixel(frame, row, col, Pixel::On)
    }

    /// Duplicate `frame` right after itself and make the copy active.
    pub fn insert_frame_after(&mut self, frame: usize) -> Result<usize, StoreError> {
        let copy = self.animation.frame_checked(frame)?.clone();
        self.animation.insert(frame + 1, copy);
        self.current = frame + 1;
        Ok(self.current)
    }

    /// Remove `frame`. A no-op when it is the only frame left.
    ///
    /// Returns whether a frame was removed.
    pub fn delete_frame(&mut self, frame: usize) -> Result<bool, StoreError> {
        self.animation.check_index(frame)?;
        if self.frame_count() <= 1 {
            return Ok(false);
        }

        self.animation.remove(frame);
        if self.current >= frame {
            self.current = self.current.saturating_sub(1);
        }
        self.current = self.current.min(self.frame_count() - 1);
        Ok(true)
    }

    /// Replace `frame` with a blank frame of the current size.
    pub fn clear_frame(&mut self, frame: usize) -> Result<(), StoreError> {
        self.animation.check_index(frame)?;
        self.animation.replace(frame, Frame::empty(self.dimensions()));
        Ok(())
    }

    /// Discard every frame and start over with one blank frame at `rows × cols`.
    pub fn resize(&mut self, rows: i64, cols: i64) -> Dimensions {
        self.reset_to(Dimensions::sanitized(rows, cols))
    }

    /// [`resize`](Self::resize) from typed text; unparsable sizes become 8.
    pub fn resize_from_input(&mut self, rows: &str, cols: &str) -> Dimensions {
        self.reset_to(Dimensions::from_input(rows, cols))
    }

    /// Discard every frame, keeping the current size.
    pub fn reset(&mut self) {
        self.reset_to(self.dimensions());
    }

    fn reset_to(&mut self, dimensions: Dimensions) -> Dimensions {
        log::debug!(
            "Resetting animation to {} ({} frames discarded)",
            dimensions,
            self.frame_count()
        );
        self.animation = Animation::new(dimensions);
        self.current = 0;
        dimensions
    }

    fn pixel_out_of_range(&self, row: usize, col: usize) -> StoreError {
        let dims = self.dimensions();
        if row >= dims.rows() {
            StoreError::IndexOutOfRange {
                axis: "row",
                index: row,
                len: dims.rows(),
            }
        } else {
            StoreError::IndexOutOfRange {
                axis: "column",
                index: col,
                len: dims.cols(),
            }
        }
    }
}
