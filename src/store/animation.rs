//! Ordered sequence of equally sized frames.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::dimensions::Dimensions;
use super::error::StoreError;
use super::frame::Frame;
use crate::schema::{AnimationDocument, DocumentError};

/// A non-empty sequence of frames sharing one size.
///
/// Frames are held behind `Arc` so callers can keep a snapshot of a frame
/// while the store keeps editing. Edits never write through a shared frame:
/// the edited copy replaces the slot instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnimationDocument", into = "AnimationDocument")]
pub struct Animation {
    dimensions: Dimensions,
    frames: Vec<Arc<Frame>>,
}

impl Animation {
    /// One all-OFF frame at `dimensions`.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            frames: vec![Arc::new(Frame::empty(dimensions))],
        }
    }

    /// Build from existing frames, checking they are non-empty and equally sized.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self, StoreError> {
        let dimensions = frames
            .first()
            .map(Frame::dimensions)
            .ok_or(StoreError::EmptyAnimation)?;
        for (i, frame) in frames.iter().enumerate() {
            if frame.dimensions() != dimensions {
                return Err(StoreError::DimensionMismatch {
                    frame: i,
                    expected: dimensions,
                    found: frame.dimensions(),
                });
            }
        }
        Ok(Self {
            dimensions,
            frames: frames.into_iter().map(Arc::new).collect(),
        })
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of frames (always at least one).
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index).map(Arc::as_ref)
    }

    /// Shared handle to a frame; unaffected by later edits.
    pub fn frame_handle(&self, index: usize) -> Option<Arc<Frame>> {
        self.frames.get(index).cloned()
    }

    /// Frames in playback order.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = &Frame> + '_ {
        self.frames.iter().map(Arc::as_ref)
    }

    pub(crate) fn frame_checked(&self, index: usize) -> Result<&Frame, StoreError> {
        self.frame(index).ok_or(StoreError::IndexOutOfRange {
            axis: "frame",
            index,
            len: self.frames.len(),
        })
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), StoreError> {
        self.frame_checked(index).map(|_| ())
    }

    /// Swap a fully built frame into `index`.
    pub(crate) fn replace(&mut self, index: usize, frame: Frame) {
        debug_assert_eq!(frame.dimensions(), self.dimensions);
        self.frames[index] = Arc::new(frame);
    }

    pub(crate) fn insert(&mut self, index: usize, frame: Frame) {
        debug_assert_eq!(frame.dimensions(), self.dimensions);
        self.frames.insert(index, Arc::new(frame));
    }

    pub(crate) fn remove(&mut self, index: usize) {
        debug_assert!(self.frames.len() > 1);
        self.frames.remove(index);
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl TryFrom<AnimationDocument> for Animation {
    type Error = DocumentError;

    fn try_from(doc: AnimationDocument) -> Result<Self, Self::Error> {
        doc.into_animation()
    }
}

impl From<Animation> for AnimationDocument {
    fn from(animation: Animation) -> Self {
        AnimationDocument::from_animation(&animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_one_blank_frame() {
        let anim = Animation::new(Dimensions::new(4, 6));
        assert_eq!(anim.frame_count(), 1);
        assert_eq!(anim.dimensions(), Dimensions::new(4, 6));
        assert!(anim.frame(0).unwrap().is_blank());
    }

    #[test]
    fn test_from_frames_rejects_mismatch() {
        let a = Frame::empty(Dimensions::new(8, 8));
        let b = Frame::empty(Dimensions::new(8, 16));
        let err = Animation::from_frames(vec![a, b]).unwrap_err();
        assert!(matches!(err, StoreError::DimensionMismatch { frame: 1, .. }));
    }

    #[test]
    fn test_from_frames_rejects_empty() {
        assert_eq!(
            Animation::from_frames(Vec::new()),
            Err(StoreError::EmptyAnimation)
        );
    }

    #[test]
    fn test_handle_survives_replace() {
        let mut anim = Animation::new(Dimensions::new(2, 2));
        let before = anim.frame_handle(0).unwrap();

        let mut edited = (*before).clone();
        edited.set(0, 0, super::super::Pixel::On).unwrap();
        anim.replace(0, edited);

        assert!(before.is_blank());
        assert!(anim.frame(0).unwrap().is_on(0, 0));
    }

    #[test]
    fn test_json_roundtrip() {
        let frames = vec![
            Frame::from_rows(&["#.", ".#"]).unwrap(),
            Frame::from_rows(&["..", "##"]).unwrap(),
        ];
        let anim = Animation::from_frames(frames).unwrap();

        let json = serde_json::to_string(&anim).unwrap();
        let decoded: Animation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, anim);
    }
}
