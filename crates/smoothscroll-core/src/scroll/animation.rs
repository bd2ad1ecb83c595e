//! Manual scroll animation
//!
//! An [`AnimationContext`] is created per scroll operation and handed to the
//! host's [`FrameScheduler`]. Each frame it is stepped once: the elapsed time
//! is eased, the interpolated offset is written, and another frame is
//! requested until the written offset equals the destination exactly.
//!
//! There is no cancellation. Two animations on the same container both keep
//! writing until they finish; whichever steps last in a frame wins that frame.

use crate::geometry::Point;
use crate::host::{FrameScheduler, ScrollContainer, ScrollHost};

use super::easing::ease;
use super::timing::{elapsed_fraction, lerp};

/// Animation state after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Another frame has been requested
    Running,
    /// Destination written; nothing more is scheduled
    Done,
}

/// Ephemeral state of one manual animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationContext<N> {
    pub container: ScrollContainer<N>,
    pub start: Point,
    pub destination: Point,
    /// Host time the animation started, in milliseconds
    pub start_time: f64,
    pub duration_ms: f64,
}

impl<N: Copy> AnimationContext<N> {
    pub fn new(
        container: ScrollContainer<N>,
        start: Point,
        destination: Point,
        start_time: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            container,
            start,
            destination,
            start_time,
            duration_ms,
        }
    }

    /// Interpolated offset at host time `now`
    pub fn position_at(&self, now: f64) -> Point {
        let value = ease(elapsed_fraction(self.start_time, now, self.duration_ms));
        Point::new(
            lerp(self.start.x, self.destination.x, value),
            lerp(self.start.y, self.destination.y, value),
        )
    }

    /// Advance one frame
    ///
    /// Writes the current offset to the host and, unless the destination has
    /// been reached, requests the next frame with this context.
    pub fn step<H, S>(self, host: &mut H, frames: &mut S) -> StepState
    where
        H: ScrollHost<Node = N>,
        S: FrameScheduler<N>,
    {
        let now = frames.now();
        let current = self.position_at(now);

        host.set_scroll_position(self.container, current);

        tracing::trace!(
            x = current.x,
            y = current.y,
            elapsed_ms = now - self.start_time,
            "Scroll animation tick"
        );

        // Exact comparison: at full elapsed time lerp returns the destination itself
        if current.x != self.destination.x || current.y != self.destination.y {
            frames.request_animation_frame(self);
            StepState::Running
        } else {
            StepState::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Document, FrameLoop, NodeId, NodeSpec, Scene};
    use crate::{Overflow, Rect, Size};

    fn scroller_doc() -> (Document, NodeId) {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(
            NodeSpec::new("pane", Rect::new(0.0, 0.0, 300.0, 300.0))
                .overflow(Overflow::Auto, Overflow::Auto)
                .scroll_size(Size::new(3000.0, 3000.0)),
        );
        let doc = Document::new(Scene::new(body));
        let pane = doc.node("pane").unwrap();
        (doc, pane)
    }

    #[test]
    fn test_position_collapses_to_destination() {
        let context = AnimationContext::new(
            ScrollContainer::Element(0usize),
            Point::new(0.1, 7.0),
            Point::new(0.3, 1234.567),
            1000.0,
            468.0,
        );

        assert_eq!(context.position_at(1000.0), Point::new(0.1, 7.0));
        assert_eq!(context.position_at(1468.0), Point::new(0.3, 1234.567));
        assert_eq!(context.position_at(99_999.0), Point::new(0.3, 1234.567));
    }

    #[test]
    fn test_midpoint_is_halfway() {
        let context = AnimationContext::new(
            ScrollContainer::Element(0usize),
            Point::ZERO,
            Point::new(200.0, -100.0),
            0.0,
            468.0,
        );
        let mid = context.position_at(234.0);
        assert!((mid.x - 100.0).abs() < 1e-9);
        assert!((mid.y + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_reschedules_until_done() {
        let (mut doc, pane) = scroller_doc();
        // 4 frames of 117ms cover the 468ms duration exactly
        let mut frames: FrameLoop<NodeId> = FrameLoop::with_interval(117.0);
        let context = AnimationContext::new(
            ScrollContainer::Element(pane),
            Point::ZERO,
            Point::new(0.0, 500.0),
            frames.now(),
            468.0,
        );
        frames.request_animation_frame(context);

        for _ in 0..3 {
            frames.run_frame(&mut doc);
            assert_eq!(frames.pending(), 1);
        }

        frames.run_frame(&mut doc);
        assert_eq!(doc.scroll_position(ScrollContainer::Element(pane)), Point::new(0.0, 500.0));
        assert_eq!(frames.pending(), 0);

        // Nothing left to step
        assert_eq!(frames.run_frame(&mut doc), 0);
        assert_eq!(doc.scroll_writes().len(), 4);
    }

    #[test]
    fn test_step_done_returns_done() {
        let (mut doc, pane) = scroller_doc();
        let mut frames: FrameLoop<NodeId> = FrameLoop::with_interval(16.0);
        let context = AnimationContext::new(
            ScrollContainer::Element(pane),
            Point::ZERO,
            Point::new(10.0, 10.0),
            frames.now() - 1000.0,
            468.0,
        );

        assert_eq!(context.step(&mut doc, &mut frames), StepState::Done);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_zero_duration_lands_on_first_tick() {
        let (mut doc, pane) = scroller_doc();
        let mut frames: FrameLoop<NodeId> = FrameLoop::with_interval(16.0);
        let context = AnimationContext::new(
            ScrollContainer::Element(pane),
            Point::ZERO,
            Point::new(40.0, 80.0),
            frames.now(),
            0.0,
        );

        assert_eq!(context.step(&mut doc, &mut frames), StepState::Done);
        assert_eq!(doc.scroll_position(ScrollContainer::Element(pane)), Point::new(40.0, 80.0));
    }
}
