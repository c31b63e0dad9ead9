//! Caller-driven playback clock.

use std::time::Duration;

/// Frames per second when none (or zero) is given.
pub const DEFAULT_FPS: u32 = 5;

/// Highest accepted frame rate; faster requests are clamped to it.
pub const MAX_FPS: u32 = 1000;

/// Turns elapsed wall time into frame steps.
///
/// The clock holds no timer of its own: the caller feeds it elapsed time
/// and applies the returned steps to the active frame position.
///
/// Usage:
/// ```
/// use std::time::Duration;
/// use dotmatrix::animation::Playback;
/// use dotmatrix::store::FrameStore;
///
/// let mut store = FrameStore::create(8, 8);
/// store.insert_frame_after(0).unwrap();
///
/// let mut playback = Playback::new(5);
/// playback.play();
/// let steps = playback.advance(Duration::from_millis(450));
/// assert_eq!(steps, 2);
/// store.advance(steps);
/// ```
#[derive(Debug, Clone)]
pub struct Playback {
    fps: u32,
    playing: bool,
    elapsed: Duration,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl Playback {
    /// Paused clock at `fps`; zero falls back to [`DEFAULT_FPS`], anything
    /// above [`MAX_FPS`] is clamped.
    pub fn new(fps: u32) -> Self {
        Self {
            fps: sanitize_fps(fps),
            playing: false,
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = sanitize_fps(fps);
    }

    /// Time between two frames.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flip between playing and paused; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Pause and forget any partial interval.
    pub fn stop(&mut self) {
        self.playing = false;
        self.elapsed = Duration::ZERO;
    }

    /// Feed elapsed time; returns how many frames to step forward.
    ///
    /// Always 0 while paused. Leftover time carries over to the next call.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.playing {
            return 0;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        let interval_ns = self.interval().as_nanos().max(1);
        let elapsed_ns = self.elapsed.as_nanos();
        // The remainder is below one interval, so it always fits in u64.
        self.elapsed = Duration::from_nanos((elapsed_ns % interval_ns) as u64);
        u64::try_from(elapsed_ns / interval_ns).unwrap_or(u64::MAX)
    }
}

fn sanitize_fps(fps: u32) -> u32 {
    if fps == 0 { DEFAULT_FPS } else { fps.min(MAX_FPS) }
}
