//! Simulated-clock frame scheduler

use crate::host::{FrameScheduler, ScrollHost};
use crate::scroll::AnimationContext;

/// Frame interval used when no usable rate or interval is given (~60fps)
const FALLBACK_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Deterministic stand-in for `requestAnimationFrame`
///
/// Time only advances when [`FrameLoop::run_frame`] is called, by a fixed
/// interval. Each frame steps every context requested since the previous
/// frame, in request order, so overlapping animations on one container race
/// and the last one stepped wins the frame.
#[derive(Debug, Clone)]
pub struct FrameLoop<N> {
    now: f64,
    interval: f64,
    frame_count: u64,
    pending: Vec<AnimationContext<N>>,
}

impl<N: Copy> FrameLoop<N> {
    /// Create a loop running at `fps` frames per second
    pub fn new(fps: u32) -> Self {
        let interval = if fps == 0 {
            FALLBACK_INTERVAL_MS
        } else {
            1000.0 / fps as f64
        };
        Self::with_interval(interval)
    }

    /// Create a loop with an explicit frame interval in milliseconds
    ///
    /// Intervals that would not advance the clock fall back to ~60fps.
    pub fn with_interval(interval_ms: f64) -> Self {
        let interval = if interval_ms > 0.0 && interval_ms.is_finite() {
            interval_ms
        } else {
            FALLBACK_INTERVAL_MS
        };
        Self {
            now: 0.0,
            interval,
            frame_count: 0,
            pending: Vec::new(),
        }
    }

    /// Frame interval in milliseconds
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Contexts waiting for the next frame
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the clock one frame and step everything that was due
    ///
    /// Returns how many contexts were stepped.
    pub fn run_frame<H>(&mut self, host: &mut H) -> usize
    where
        H: ScrollHost<Node = N>,
    {
        self.now += self.interval;
        self.frame_count += 1;

        let due = std::mem::take(&mut self.pending);
        let stepped = due.len();
        for context in due {
            context.step(host, self);
        }
        stepped
    }

    /// Run frames until nothing is pending or `max_frames` have run
    ///
    /// Returns the number of frames run.
    pub fn run_until_idle<H>(&mut self, host: &mut H, max_frames: usize) -> usize
    where
        H: ScrollHost<Node = N>,
    {
        let mut frames = 0;
        while !self.is_idle() && frames < max_frames {
            self.run_frame(host);
            frames += 1;
        }
        frames
    }
}

impl<N> FrameScheduler<N> for FrameLoop<N> {
    fn now(&self) -> f64 {
        self.now
    }

    fn request_animation_frame(&mut self, context: AnimationContext<N>) {
        self.pending.push(context);
    }
}
