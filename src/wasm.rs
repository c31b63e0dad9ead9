//! WebAssembly bindings for the dot-matrix editor.
//!
//! Provides a thin wrapper around `FrameStore`, `Playback` and the encoder for browser drawing surfaces.

use std::time::Duration;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    animation::{Playback, suggested_file_name},
    encode::{LayoutStrategy, OutputMode, encode},
    schema::{AnimationDocument, EditorConfig},
    store::{FrameStore, Pixel, StoreError},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn js_error(e: StoreError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WebAssembly wrapper for an editing session.
#[wasm_bindgen]
pub struct WasmEditor {
    store: FrameStore,
    playback: Playback,
    output: OutputMode,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Create a new editor with one blank frame. Invalid sizes fall back to 8.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: i32, cols: i32) -> WasmEditor {
        let config = EditorConfig::default();
        WasmEditor {
            store: FrameStore::create(rows as i64, cols as i64),
            playback: Playback::new(config.fps),
            output: config.output,
        }
    }

    /// Create an editor from a JSON `EditorConfig`.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<WasmEditor, JsValue> {
        let config: EditorConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmEditor {
            store: FrameStore::with_dimensions(config.dimensions()),
            playback: Playback::new(config.fps),
            output: config.output,
        })
    }

    /// Replace the animation with one loaded from a JSON `AnimationDocument`.
    #[wasm_bindgen(js_name = loadDocument)]
    pub fn load_document(&mut self, document_json: &str) -> Result<(), JsValue> {
        let animation = AnimationDocument::from_json(document_json)
            .and_then(AnimationDocument::into_animation)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.store = FrameStore::from_animation(animation);
        self.playback.stop();
        Ok(())
    }

    /// Current animation as a JSON `AnimationDocument`.
    #[wasm_bindgen(js_name = toDocument)]
    pub fn to_document(&self) -> Result<String, JsValue> {
        AnimationDocument::from_animation(self.store.animation())
            .to_json_pretty()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setPixel)]
    pub fn set_pixel(&mut self, frame: usize, row: usize, col: usize, on: bool) -> Result<(), JsValue> {
        self.store
            .set_pixel(frame, row, col, Pixel::from(on))
            .map_err(js_error)
    }

    /// Flip a pixel; returns the new state.
    #[wasm_bindgen(js_name = togglePixel)]
    pub fn toggle_pixel(&mut self, frame: usize, row: usize, col: usize) -> Result<bool, JsValue> {
        self.store
            .toggle_pixel(frame, row, col)
            .map(Pixel::is_on)
            .map_err(js_error)
    }

    /// Light a pixel under a drag stroke.
    #[wasm_bindgen(js_name = paintPixel)]
    pub fn paint_pixel(&mut self, frame: usize, row: usize, col: usize) -> Result<(), JsValue> {
        self.store.paint_pixel(frame, row, col).map_err(js_error)
    }

    /// Duplicate a frame after itself; returns the new active index.
    #[wasm_bindgen(js_name = insertFrameAfter)]
    pub fn insert_frame_after(&mut self, frame: usize) -> Result<usize, JsValue> {
        self.store.insert_frame_after(frame).map_err(js_error)
    }

    /// Remove a frame; false when it was the last one.
    #[wasm_bindgen(js_name = deleteFrame)]
    pub fn delete_frame(&mut self, frame: usize) -> Result<bool, JsValue> {
        self.store.delete_frame(frame).map_err(js_error)
    }

    #[wasm_bindgen(js_name = clearFrame)]
    pub fn clear_frame(&mut self, frame: usize) -> Result<(), JsValue> {
        self.store.clear_frame(frame).map_err(js_error)
    }

    /// Resize from the raw text of the size fields. Stops playback.
    #[wasm_bindgen]
    pub fn resize(&mut self, rows: &str, cols: &str) {
        self.store.resize_from_input(rows, cols);
        self.playback.stop();
    }

    /// Discard all frames, keeping the size. Stops playback.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.store.reset();
        self.playback.stop();
    }

    #[wasm_bindgen(js_name = frameCount)]
    pub fn frame_count(&self) -> usize {
        self.store.frame_count()
    }

    #[wasm_bindgen(js_name = getRows)]
    pub fn get_rows(&self) -> usize {
        self.store.rows()
    }

    #[wasm_bindgen(js_name = getCols)]
    pub fn get_cols(&self) -> usize {
        self.store.cols()
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.store.current_index()
    }

    #[wasm_bindgen(js_name = setCurrentIndex)]
    pub fn set_current_index(&mut self, index: usize) -> Result<(), JsValue> {
        self.store.set_current_index(index).map_err(js_error)
    }

    /// Pixel grid of a frame as nested arrays of 0/1.
    #[wasm_bindgen(js_name = getFrame)]
    pub fn get_frame(&self, frame: usize) -> Result<JsValue, JsValue> {
        let frame = self
            .store
            .frame(frame)
            .ok_or_else(|| JsValue::from_str(&format!("Frame {frame} out of range")))?;

        let snapshot = FrameSnapshot {
            rows: frame.rows(),
            cols: frame.cols(),
            pixels: (0..frame.rows())
                .map(|r| {
                    frame
                        .row(r)
                        .map(|row| row.iter().map(|&p| p as u8).collect())
                        .unwrap_or_default()
                })
                .collect(),
        };

        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen]
    pub fn play(&mut self) {
        self.playback.play();
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.playback.pause();
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    #[wasm_bindgen(js_name = setFps)]
    pub fn set_fps(&mut self, fps: u32) {
        self.playback.set_fps(fps);
    }

    /// Feed elapsed milliseconds from `requestAnimationFrame`; returns the displayed frame.
    #[wasm_bindgen]
    pub fn tick(&mut self, elapsed_ms: f64) -> usize {
        let ms = if elapsed_ms.is_finite() { elapsed_ms.clamp(0.0, 60_000.0) } else { 0.0 };
        let steps = self.playback.advance(Duration::from_secs_f64(ms / 1000.0));
        self.store.advance(steps)
    }

    /// Use a zero-padded image of `capacity` bytes on export (0 = variable length).
    #[wasm_bindgen(js_name = setFixedCapacity)]
    pub fn set_fixed_capacity(&mut self, capacity: usize) {
        self.output = if capacity == 0 {
            OutputMode::Variable
        } else {
            OutputMode::FixedCapacity(capacity)
        };
    }

    /// Name of the layout the current size selects.
    #[wasm_bindgen(js_name = layoutName)]
    pub fn layout_name(&self) -> String {
        LayoutStrategy::select(self.store.dimensions()).name().to_string()
    }

    /// Encode the whole animation.
    #[wasm_bindgen]
    pub fn encode(&self) -> js_sys::Uint8Array {
        let bytes = encode(self.store.animation(), self.output);
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    /// Download name for the encoded image.
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> String {
        suggested_file_name(self.store.dimensions())
    }
}

/// Serializable snapshot of one frame.
#[derive(Serialize)]
struct FrameSnapshot {
    rows: usize,
    cols: usize,
    pixels: Vec<Vec<u8>>,
}
