//! Scroller: the public entry points
//!
//! Both entry points resolve the scrollable ancestor, compute a destination,
//! and then either hand it to the host's native smooth scroll or start a
//! manual [`AnimationContext`]. Calls return as soon as that dispatch is done.

use crate::geometry::{Point, Rect};
use crate::host::{Axis, FrameScheduler, ScrollContainer, ScrollHost};
use crate::platform::HostCapabilities;

use super::ancestor::{find_scrollable_ancestor, ScrollableRules};
use super::animation::AnimationContext;
use super::config::{EntryPoint, RootRect, ScrollConfig, ScrollConfigExt};
use super::offset::resolve_offset;

/// What a scroll call ended up doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch<N> {
    /// Delegated to the host's declarative smooth scroll
    Native {
        container: ScrollContainer<N>,
        destination: Point,
    },
    /// Manual animation scheduled on the frame scheduler
    Animated {
        container: ScrollContainer<N>,
        destination: Point,
    },
    /// Nothing to do
    Skipped,
}

impl<N> Dispatch<N> {
    pub fn destination(&self) -> Option<Point> {
        match self {
            Dispatch::Native { destination, .. } | Dispatch::Animated { destination, .. } => {
                Some(*destination)
            }
            Dispatch::Skipped => None,
        }
    }
}

/// Smooth scroller
///
/// Holds only configuration; every call resolves layout fresh.
#[derive(Debug, Clone, Default)]
pub struct Scroller {
    config: ScrollConfig,
}

impl Scroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Align `target`'s top-left with its scroll container's top-left
    ///
    /// With no target the page is scrolled back to its origin.
    pub fn scroll_to<H, S>(
        &self,
        host: &mut H,
        frames: &mut S,
        target: Option<H::Node>,
    ) -> Dispatch<H::Node>
    where
        H: ScrollHost,
        S: FrameScheduler<H::Node>,
    {
        let capabilities = host.capabilities();

        let Some(target) = target else {
            let start = host.scroll_position(ScrollContainer::Viewport);
            return self.dispatch(host, frames, &capabilities, ScrollContainer::Viewport, start, Point::ZERO);
        };

        let container = self.scroll_container(host, target, &capabilities);
        let parent_rect = self.visible_rect(host, container, EntryPoint::ScrollTo);
        let client_rect = host.bounding_rect(target);
        let start = host.scroll_position(container);
        let offset = self.offsets(host, container);

        let destination = Point::new(
            start.x + client_rect.left - parent_rect.left - offset.x,
            start.y + client_rect.top - parent_rect.top - offset.y,
        );

        self.dispatch(host, frames, &capabilities, container, start, destination)
    }

    /// Bring `target` fully into view inside its scroll container
    ///
    /// With `center` the target's center is aligned with the container's
    /// center. Otherwise an axis only moves when the target sticks out of the
    /// visible rectangle on that axis, and only far enough to bring the
    /// nearer edge flush. Returns [`Dispatch::Skipped`] when there is no
    /// target or nothing needs to move.
    pub fn scroll_into_view<H, S>(
        &self,
        host: &mut H,
        frames: &mut S,
        target: Option<H::Node>,
        center: bool,
    ) -> Dispatch<H::Node>
    where
        H: ScrollHost,
        S: FrameScheduler<H::Node>,
    {
        let Some(target) = target else {
            return Dispatch::Skipped;
        };

        let capabilities = host.capabilities();
        let container = self.scroll_container(host, target, &capabilities);
        let parent_rect = self.visible_rect(host, container, EntryPoint::ScrollIntoView);
        let client_rect = host.bounding_rect(target);
        let start = host.scroll_position(container);
        let offset = self.offsets(host, container);

        let delta = if center {
            center_delta(&client_rect, &parent_rect, offset)
        } else {
            edge_delta(&client_rect, &parent_rect, offset)
        };

        if delta.x == 0.0 && delta.y == 0.0 {
            tracing::debug!(?container, "Target already in view");
            return Dispatch::Skipped;
        }

        let destination = start.translate(delta.x, delta.y);
        self.dispatch(host, frames, &capabilities, container, start, destination)
    }

    fn scroll_container<H: ScrollHost>(
        &self,
        host: &H,
        target: H::Node,
        capabilities: &HostCapabilities,
    ) -> ScrollContainer<H::Node> {
        let rules = ScrollableRules {
            fallback_to_nearest: self.config.fallback_to_nearest,
            rounding_tolerance: capabilities.rounding_tolerance(),
        };
        let container = find_scrollable_ancestor(host, target, &rules);
        tracing::debug!(?target, ?container, "Resolved scroll container");
        container
    }

    fn visible_rect<H: ScrollHost>(
        &self,
        host: &H,
        container: ScrollContainer<H::Node>,
        entry: EntryPoint,
    ) -> Rect {
        match container {
            ScrollContainer::Element(node) => host.bounding_rect(node),
            ScrollContainer::Viewport => match self.config.root_rect(entry) {
                RootRect::Zero => Rect::ZERO,
                RootRect::Viewport => Rect::from_size(host.viewport_size()),
            },
        }
    }

    fn offsets<H: ScrollHost>(&self, host: &H, container: ScrollContainer<H::Node>) -> Point {
        let style_node = match container {
            ScrollContainer::Element(node) => node,
            ScrollContainer::Viewport => host.root(),
        };

        // Only touch the DOM when a configured value doesn't already decide both axes
        let (style, root_font_size) = if self.config.offset_x.is_some() && self.config.offset_y.is_some() {
            (None, 0.0)
        } else {
            (host.inline_style(style_node), host.root_font_size())
        };

        Point::new(
            resolve_offset(self.config.offset_x, style.as_deref(), Axis::X, root_font_size),
            resolve_offset(self.config.offset_y, style.as_deref(), Axis::Y, root_font_size),
        )
    }

    fn dispatch<H, S>(
        &self,
        host: &mut H,
        frames: &mut S,
        capabilities: &HostCapabilities,
        container: ScrollContainer<H::Node>,
        start: Point,
        destination: Point,
    ) -> Dispatch<H::Node>
    where
        H: ScrollHost,
        S: FrameScheduler<H::Node>,
    {
        if capabilities.smooth_scroll {
            tracing::debug!(
                ?container,
                x = destination.x,
                y = destination.y,
                "Delegating to native smooth scroll"
            );
            host.smooth_scroll_to(container, destination);
            return Dispatch::Native {
                container,
                destination,
            };
        }

        tracing::debug!(
            ?container,
            from_x = start.x,
            from_y = start.y,
            x = destination.x,
            y = destination.y,
            duration_ms = self.config.duration_ms,
            "Starting manual scroll animation"
        );
        let context = AnimationContext::new(
            container,
            start,
            destination,
            frames.now(),
            self.config.duration_millis(),
        );
        frames.request_animation_frame(context);

        Dispatch::Animated {
            container,
            destination,
        }
    }
}

/// Minimal per-axis movement that brings the nearer edge flush
fn edge_delta(client: &Rect, parent: &Rect, offset: Point) -> Point {
    let y = if client.top < parent.top {
        client.top - parent.top - offset.y
    } else if client.bottom() > parent.bottom() {
        client.bottom() - parent.bottom() + offset.y
    } else {
        0.0
    };

    let x = if client.left < parent.left {
        client.left - parent.left - offset.x
    } else if client.right() > parent.right() {
        client.right() - parent.right() + offset.x
    } else {
        0.0
    };

    Point::new(x, y)
}

/// Movement that aligns the two centers, less the offset
fn center_delta(client: &Rect, parent: &Rect, offset: Point) -> Point {
    let client_center = client.center();
    let parent_center = parent.center();
    Point::new(
        client_center.x - parent_center.x - offset.x,
        client_center.y - parent_center.y - offset.y,
    )
}
