//! JSON interchange form of an animation.
//!
//! Frames are stored as ASCII-art rows so documents stay hand-editable:
//!
//! ```json
//! {
//!   "frames": [
//!     ["#......#", ".#....#.", "..#..#..", "...##...", "...##...", "..#..#..", ".#....#.", "#......#"]
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::store::{Animation, Frame, StoreError};

/// Serializable animation: one list of row strings per frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationDocument {
    pub frames: Vec<Vec<String>>,
}

impl AnimationDocument {
    pub fn from_animation(animation: &Animation) -> Self {
        Self {
            frames: animation.frames().map(Frame::to_rows).collect(),
        }
    }

    /// Parse and validate every frame.
    pub fn into_animation(self) -> Result<Animation, DocumentError> {
        let frames = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, rows)| {
                Frame::from_rows(rows.as_slice()).map_err(|source| DocumentError::Frame { frame: i, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Animation::from_frames(frames)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors loading an animation document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Frame {frame}: {source}")]
    Frame {
        frame: usize,
        #[source]
        source: StoreError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Invalid animation JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dimensions;

    #[test]
    fn test_parse_document() {
        let doc = AnimationDocument::from_json(
            r##"{"frames": [["#...", "...."], ["....", "...#"]]}"##,
        )
        .unwrap();
        let anim = doc.into_animation().unwrap();
        assert_eq!(anim.dimensions(), Dimensions::new(2, 4));
        assert_eq!(anim.frame_count(), 2);
        assert!(anim.frame(0).unwrap().is_on(0, 0));
        assert!(anim.frame(1).unwrap().is_on(1, 3));
    }

    #[test]
    fn test_empty_document_rejected() {
        let err = AnimationDocument::default().into_animation().unwrap_err();
        assert!(matches!(err, DocumentError::Store(StoreError::EmptyAnimation)));
    }

    #[test]
    fn test_bad_frame_reports_index() {
        let doc = AnimationDocument {
            frames: vec![vec!["##".into()], vec!["#?".into()]],
        };
        let err = doc.into_animation().unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Frame {
                frame: 1,
                source: StoreError::InvalidPixel { .. }
            }
        ));
    }

    #[test]
    fn test_mismatched_frames_rejected() {
        let doc = AnimationDocument {
            frames: vec![vec!["##".into()], vec!["###".into()]],
        };
        assert!(matches!(
            doc.into_animation(),
            Err(DocumentError::Store(StoreError::DimensionMismatch { frame: 1, .. }))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AnimationDocument::from_json("{"),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn test_animation_roundtrip() {
        let anim = Animation::from_frames(vec![
            Frame::from_rows(&["#.#", ".#."]).unwrap(),
            Frame::from_rows(&["...", "###"]).unwrap(),
        ])
        .unwrap();
        let doc = AnimationDocument::from_animation(&anim);
        assert_eq!(doc.frames[1], vec!["...", "###"]);
        assert_eq!(doc.into_animation().unwrap(), anim);
    }
}
