//! Capability interfaces the scroller consumes from its host environment
//!
//! The scroller never performs layout itself. Everything it knows about the
//! element tree comes through [`ScrollHost`], and all animation timing comes
//! through [`FrameScheduler`], so the engine can run against a real rendering
//! host or the deterministic [`crate::sim`] document.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::platform::HostCapabilities;
use crate::scroll::AnimationContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Computed `overflow-x` / `overflow-y` value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// `auto` and `scroll` are the only values that let the user scroll
    #[inline]
    pub fn can_scroll(self) -> bool {
        matches!(self, Overflow::Auto | Overflow::Scroll)
    }
}

/// The thing whose scroll offset gets written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollContainer<N> {
    /// The page root; offsets go to the window scroll position
    Viewport,
    /// A scrollable element; offsets go to its `scrollLeft`/`scrollTop`
    Element(N),
}

impl<N> ScrollContainer<N> {
    #[inline]
    pub fn is_viewport(&self) -> bool {
        matches!(self, ScrollContainer::Viewport)
    }
}

/// Layout, style and scroll access provided by the host
pub trait ScrollHost {
    type Node: Copy + Eq + Debug;

    /// The document body; the ancestor walk never goes past it
    fn root(&self) -> Self::Node;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Viewport-relative border box, like `getBoundingClientRect()`
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    fn overflow(&self, node: Self::Node, axis: Axis) -> Overflow;

    /// `clientWidth` / `clientHeight`
    fn client_size(&self, node: Self::Node) -> Size;

    /// `scrollWidth` / `scrollHeight`
    fn scroll_size(&self, node: Self::Node) -> Size;

    /// Raw `style` attribute text, not the computed style
    fn inline_style(&self, node: Self::Node) -> Option<String>;

    /// Computed font size of the root element in pixels
    fn root_font_size(&self) -> f64;

    /// `innerWidth` / `innerHeight`
    fn viewport_size(&self) -> Size;

    fn scroll_position(&self, container: ScrollContainer<Self::Node>) -> Point;

    /// Write a scroll offset. The host clamps it to its scrollable range.
    fn set_scroll_position(&mut self, container: ScrollContainer<Self::Node>, position: Point);

    /// Native `scrollTo({ behavior: "smooth" })`
    fn smooth_scroll_to(&mut self, container: ScrollContainer<Self::Node>, destination: Point);

    /// Probe host capabilities. Called once per scroll operation.
    fn capabilities(&self) -> HostCapabilities;
}

/// Per-frame callback facility plus the clock it runs on
///
/// A requested context is stepped exactly once on the next frame. Stepping
/// decides whether to request another frame.
pub trait FrameScheduler<N> {
    /// Current host time in milliseconds
    fn now(&self) -> f64;

    fn request_animation_frame(&mut self, context: AnimationContext<N>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_auto_and_scroll_can_scroll() {
        assert!(Overflow::Auto.can_scroll());
        assert!(Overflow::Scroll.can_scroll());
        assert!(!Overflow::Visible.can_scroll());
        assert!(!Overflow::Hidden.can_scroll());
        assert!(!Overflow::Clip.can_scroll());
    }

    #[test]
    fn test_is_viewport() {
        assert!(ScrollContainer::<u32>::Viewport.is_viewport());
        assert!(!ScrollContainer::Element(7u32).is_viewport());
    }
}
