//! Whole-animation encoding into a raw memory image.

use serde::{Deserialize, Serialize};

use super::layout::LayoutStrategy;
use crate::store::Animation;

/// Size of the 8 KiB parallel EEPROM (28C64) the boards are fed from.
pub const EEPROM_CAPACITY: usize = 8192;

/// How the encoded frames are laid into the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "capacity")]
pub enum OutputMode {
    /// Exactly `frame_count * bytes_per_frame` bytes.
    #[default]
    Variable,
    /// A zero-padded buffer of this many bytes. Frames that do not fit
    /// entirely are left out.
    FixedCapacity(usize),
}

impl OutputMode {
    /// Fixed image sized for [`EEPROM_CAPACITY`].
    pub const fn eeprom() -> Self {
        OutputMode::FixedCapacity(EEPROM_CAPACITY)
    }
}

/// Encodes animations with a fixed [`OutputMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryEncoder {
    mode: OutputMode,
}

impl BinaryEncoder {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Encode every frame of `animation` in order.
    pub fn encode(&self, animation: &Animation) -> Vec<u8> {
        encode(animation, self.mode)
    }

    /// Length the output will have for `animation`.
    pub fn output_len(&self, animation: &Animation) -> usize {
        match self.mode {
            OutputMode::Variable => {
                let dims = animation.dimensions();
                animation.frame_count() * LayoutStrategy::select(dims).bytes_per_frame(dims)
            }
            OutputMode::FixedCapacity(capacity) => capacity,
        }
    }
}

/// Encode `animation` into a byte image.
///
/// The layout is chosen from the animation's size alone. The result is a
/// pure function of the frames, their size and `mode`.
pub fn encode(animation: &Animation, mode: OutputMode) -> Vec<u8> {
    let dims = animation.dimensions();
    let strategy = LayoutStrategy::select(dims);
    let frame_len = strategy.bytes_per_frame(dims);

    log::debug!(
        "Encoding {} frames of {} with {} layout ({} bytes/frame)",
        animation.frame_count(),
        dims,
        strategy,
        frame_len
    );

    match mode {
        OutputMode::Variable => {
            let mut out = Vec::with_capacity(animation.frame_count() * frame_len);
            for frame in animation.frames() {
                strategy.encode_frame(frame, &mut out);
            }
            out
        }
        OutputMode::FixedCapacity(capacity) => {
            let mut image = vec![0u8; capacity];
            let mut scratch = Vec::with_capacity(frame_len);
            let mut offset = 0;
            let mut written = 0;

            for frame in animation.frames() {
                if offset + frame_len > capacity {
                    break;
                }
                scratch.clear();
                strategy.encode_frame(frame, &mut scratch);
                image[offset..offset + frame_len].copy_from_slice(&scratch);
                offset += frame_len;
                written += 1;
            }

            if written < animation.frame_count() {
                log::warn!(
                    "{} of {} frames do not fit in {} bytes; only {} written",
                    animation.frame_count() - written,
                    animation.frame_count(),
                    capacity,
                    written
                );
            }
            image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Dimensions, Frame, FrameStore, Pixel};

    /// `count` frames of `rows × cols`, frame `i` lighting pixel (0, i % cols).
    fn numbered(rows: i64, cols: i64, count: usize) -> Animation {
        let mut store = FrameStore::create(rows, cols);
        let cols = store.cols();
        for i in 0..count {
            if i > 0 {
                store.insert_frame_after(i - 1).unwrap();
                store.clear_frame(i).unwrap();
            }
            store.set_pixel(i, 0, i % cols, Pixel::On).unwrap();
        }
        store.into_animation()
    }

    fn framewise(animation: &Animation) -> Vec<Vec<u8>> {
        let strategy = LayoutStrategy::select(animation.dimensions());
        animation
            .frames()
            .map(|f| {
                let mut out = Vec::new();
                strategy.encode_frame(f, &mut out);
                out
            })
            .collect()
    }

    #[test]
    fn test_variable_concatenates_in_order() {
        let anim = numbered(8, 8, 3);
        let bytes = encode(&anim, OutputMode::Variable);
        assert_eq!(bytes.len(), 24);
        assert_eq!(bytes, framewise(&anim).concat());
        // Frame i lights column i, row 0 -> byte i of frame i is 0x80.
        assert_eq!(bytes[0], 0x80);
        assert_eq!(bytes[8 + 1], 0x80);
        assert_eq!(bytes[16 + 2], 0x80);
    }

    #[test]
    fn test_variable_length_per_strategy() {
        assert_eq!(encode(&numbered(8, 32, 4), OutputMode::Variable).len(), 4 * 32);
        assert_eq!(encode(&numbered(16, 16, 3), OutputMode::Variable).len(), 3 * 32);
        assert_eq!(encode(&numbered(8, 8, 5), OutputMode::Variable).len(), 5 * 8);
        assert_eq!(encode(&numbered(5, 20, 2), OutputMode::Variable).len(), 2 * 5);
    }

    #[test]
    fn test_fixed_capacity_pads_with_zeros() {
        let anim = numbered(8, 8, 2);
        let bytes = encode(&anim, OutputMode::eeprom());
        assert_eq!(bytes.len(), EEPROM_CAPACITY);
        assert_eq!(&bytes[..16], framewise(&anim).concat().as_slice());
        assert!(bytes[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fixed_capacity_exact_fit() {
        // 300 ribbon frames need 9600 bytes; exactly 256 fit in 8192.
        let anim = numbered(8, 32, 300);
        let bytes = encode(&anim, OutputMode::eeprom());
        assert_eq!(bytes.len(), EEPROM_CAPACITY);

        let expected: Vec<u8> = framewise(&anim)[..256].concat();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_fixed_capacity_drops_overflowing_frame() {
        // 1025 standard frames: 1024 fit exactly, the last is dropped.
        let anim = numbered(8, 8, 1025);
        let bytes = encode(&anim, OutputMode::eeprom());
        assert_eq!(bytes.len(), EEPROM_CAPACITY);
        assert_eq!(bytes, framewise(&anim)[..1024].concat());
    }

    #[test]
    fn test_fixed_capacity_never_writes_partial_frame() {
        // 20 bytes hold two 8-byte frames; the remaining 4 stay zero.
        let mut store = FrameStore::create(8, 8);
        for c in 0..8 {
            for r in 0..8 {
                store.set_pixel(0, r, c, Pixel::On).unwrap();
            }
        }
        store.insert_frame_after(0).unwrap();
        store.insert_frame_after(1).unwrap();

        let bytes = encode(store.animation(), OutputMode::FixedCapacity(20));
        assert_eq!(bytes.len(), 20);
        assert!(bytes[..16].iter().all(|&b| b == 0xFF));
        assert_eq!(&bytes[16..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_fixed_capacity_smaller_than_frame() {
        let anim = numbered(16, 16, 1);
        let bytes = encode(&anim, OutputMode::FixedCapacity(10));
        assert_eq!(bytes, vec![0u8; 10]);
        assert!(encode(&anim, OutputMode::FixedCapacity(0)).is_empty());
    }

    #[test]
    fn test_encoder_struct_matches_free_fn() {
        let anim = numbered(16, 16, 4);
        let encoder = BinaryEncoder::new(OutputMode::Variable);
        assert_eq!(encoder.encode(&anim), encode(&anim, OutputMode::Variable));
        assert_eq!(encoder.output_len(&anim), 128);
        assert_eq!(BinaryEncoder::new(OutputMode::eeprom()).output_len(&anim), 8192);
    }

    #[test]
    fn test_output_mode_serde() {
        let json = serde_json::to_string(&OutputMode::FixedCapacity(8192)).unwrap();
        assert_eq!(json, r#"{"type":"FixedCapacity","capacity":8192}"#);
        let mode: OutputMode = serde_json::from_str(r#"{"type":"Variable"}"#).unwrap();
        assert_eq!(mode, OutputMode::Variable);
    }

    #[test]
    fn test_single_blank_frame() {
        let anim = Animation::new(Dimensions::new(8, 32));
        assert_eq!(encode(&anim, OutputMode::Variable), vec![0u8; 32]);
    }

    #[test]
    fn test_generic_truncation_through_encoder() {
        let with = Animation::from_frames(vec![{
            let mut f = Frame::empty(Dimensions::new(5, 20));
            f.set(2, 9, Pixel::On).unwrap();
            f
        }])
        .unwrap();
        let without = Animation::new(Dimensions::new(5, 20));
        assert_eq!(
            encode(&with, OutputMode::Variable),
            encode(&without, OutputMode::Variable)
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn animation() -> impl Strategy<Value = Animation> {
            let dims = prop_oneof![
                Just((8usize, 32usize)),
                Just((16, 16)),
                Just((8, 8)),
                (1usize..24, 1usize..24),
            ];
            (dims, 1usize..6).prop_flat_map(|((rows, cols), count)| {
                prop::collection::vec(
                    prop::collection::vec(any::<bool>(), rows * cols),
                    count,
                )
                .prop_map(move |grids| {
                    let frames = grids
                        .into_iter()
                        .map(|bits| {
                            let mut frame = Frame::empty(Dimensions::new(rows, cols));
                            for (i, on) in bits.into_iter().enumerate() {
                                frame.set(i / cols, i % cols, Pixel::from(on)).unwrap();
                            }
                            frame
                        })
                        .collect();
                    Animation::from_frames(frames).unwrap()
                })
            })
        }

        proptest! {
            #[test]
            fn test_variable_length(anim in animation()) {
                let dims = anim.dimensions();
                let per_frame = LayoutStrategy::select(dims).bytes_per_frame(dims);
                let bytes = encode(&anim, OutputMode::Variable);
                prop_assert_eq!(bytes.len(), anim.frame_count() * per_frame);
            }

            #[test]
            fn test_fixed_length_and_prefix(anim in animation(), capacity in 0usize..200) {
                let variable = encode(&anim, OutputMode::Variable);
                let fixed = encode(&anim, OutputMode::FixedCapacity(capacity));
                prop_assert_eq!(fixed.len(), capacity);

                let dims = anim.dimensions();
                let per_frame = LayoutStrategy::select(dims).bytes_per_frame(dims);
                let fitting = (capacity / per_frame).min(anim.frame_count()) * per_frame;
                prop_assert_eq!(&fixed[..fitting], &variable[..fitting]);
                prop_assert!(fixed[fitting..].iter().all(|&b| b == 0));
            }

            #[test]
            fn test_deterministic(anim in animation()) {
                prop_assert_eq!(
                    encode(&anim, OutputMode::Variable),
                    encode(&anim.clone(), OutputMode::Variable)
                );
            }

            #[test]
            fn test_generic_ignores_wide_columns(
                rows in 1usize..12,
                cols in 9usize..30,
                seed_cells in prop::collection::vec((0usize..12, 0usize..30), 0..20),
            ) {
                prop_assume!(!(rows == 8 && cols == 32) && !(rows == 16 && cols == 16));
                let dims = Dimensions::new(rows, cols);
                let mut narrow = Frame::empty(dims);
                let mut wide = Frame::empty(dims);
                for (r, c) in seed_cells {
                    let (r, c) = (r % rows, c % cols);
                    wide.set(r, c, Pixel::On).unwrap();
                    if c < 8 {
                        narrow.set(r, c, Pixel::On).unwrap();
                    }
                }
                let a = encode(&Animation::from_frames(vec![narrow]).unwrap(), OutputMode::Variable);
                let b = encode(&Animation::from_frames(vec![wide]).unwrap(), OutputMode::Variable);
                prop_assert_eq!(a, b);
            }
        }
    }
}
