use crate::region::SourceRegion;

/// How a frame clip walks its frames as time accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Forward once, holds the last frame
    Normal,
    /// Backward once, holds the first frame
    Reversed,
    /// Forward, wrapping
    Loop,
    /// Backward, wrapping
    LoopReversed,
    /// Bounces between both ends without doubling the endpoints
    LoopPingPong,
    /// Jumps to a fresh random frame every time the quantized frame changes
    LoopRandom,
}

/// A frame sequence with a fixed per-frame duration.
///
/// Frame selection quantizes the accumulated time by the frame duration and
/// maps the resulting frame number through the play mode. An optional
/// selector function replaces that mapping entirely; it receives the raw
/// time and the frame count and returns a frame index (clamped).
#[derive(Debug, Clone)]
pub struct FrameClip {
    frames: Vec<SourceRegion>,
    frame_duration: f32,
    mode: PlayMode,
    selector: Option<fn(f32, usize) -> usize>,
    // LoopRandom memory: the index stays put until the frame number changes
    last_time: f32,
    last_index: usize,
}

impl FrameClip {
    /// Clip over `frames`, each shown for `frame_duration` seconds.
    pub fn new(frames: Vec<SourceRegion>, frame_duration: f32, mode: PlayMode) -> Self {
        FrameClip {
            frames,
            frame_duration,
            mode,
            selector: None,
            last_time: 0.0,
            last_index: 0,
        }
    }

    /// Clip whose frame is picked by `selector(time, frame_count)` instead
    /// of a play mode.
    pub fn with_selector(frames: Vec<SourceRegion>, selector: fn(f32, usize) -> usize) -> Self {
        FrameClip {
            frames,
            frame_duration: 0.0,
            mode: PlayMode::Normal,
            selector: Some(selector),
            last_time: 0.0,
            last_index: 0,
        }
    }

    /// Number of frames in the clip.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the clip holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Play mode in effect (ignored while a selector is set).
    #[inline]
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Change the play mode without touching anything else.
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
    }

    /// Index of the frame shown at the given accumulated time.
    pub fn frame_index(&mut self, time: f32) -> usize {
        let count = self.frames.len();
        if count <= 1 {
            return 0;
        }
        if let Some(selector) = self.selector {
            return selector(time, count).min(count - 1);
        }
        if self.frame_duration <= 0.0 {
            return 0;
        }

        let number = (time.max(0.0) / self.frame_duration) as usize;
        let index = match self.mode {
            PlayMode::Normal => number.min(count - 1),
            PlayMode::Reversed => (count - 1).saturating_sub(number),
            PlayMode::Loop => number % count,
            PlayMode::LoopReversed => count - number % count - 1,
            PlayMode::LoopPingPong => {
                let cycle = number % (count * 2 - 2);
                if cycle >= count {
                    2 * count - 2 - cycle
                } else {
                    cycle
                }
            }
            PlayMode::LoopRandom => {
                let last_number = (self.last_time.max(0.0) / self.frame_duration) as usize;
                if last_number != number {
                    macroquad::rand::gen_range(0, count)
                } else {
                    self.last_index
                }
            }
        };
        self.last_time = time;
        self.last_index = index;
        index
    }

    /// Region of the frame shown at the given accumulated time, if any.
    pub fn frame_at(&mut self, time: f32) -> Option<SourceRegion> {
        if self.frames.is_empty() {
            return None;
        }
        let index = self.frame_index(time);
        Some(self.frames[index])
    }
}
