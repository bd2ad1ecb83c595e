//! Scrollable-ancestor resolution
//!
//! Walks parent links upward from a target element and returns the first
//! ancestor that can receive scroll-offset writes, or the viewport when the
//! walk reaches the document root. The target itself is never tested.
//! Layout can change between calls, so the result is never cached.

use crate::host::{Axis, ScrollContainer, ScrollHost};

/// Rules an ancestor must satisfy to qualify as scrollable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollableRules {
    /// Require content to actually overflow the visible size
    pub fallback_to_nearest: bool,
    /// Slack added to the client size when `fallback_to_nearest` is on
    pub rounding_tolerance: f64,
}

/// `overflow-{axis}` is `auto` or `scroll`
pub fn can_overflow<H: ScrollHost>(host: &H, node: H::Node, axis: Axis) -> bool {
    host.overflow(node, axis).can_scroll()
}

/// Content exceeds the visible size along `axis`
///
/// Always true when `fallback_to_nearest` is off: any overflow-capable
/// element qualifies whether or not it has something to scroll.
pub fn has_scrollable_space<H: ScrollHost>(
    host: &H,
    node: H::Node,
    axis: Axis,
    rules: &ScrollableRules,
) -> bool {
    if !rules.fallback_to_nearest {
        return true;
    }

    let client = host.client_size(node);
    let scroll = host.scroll_size(node);
    match axis {
        Axis::Y => client.height + rules.rounding_tolerance < scroll.height,
        Axis::X => client.width + rules.rounding_tolerance < scroll.width,
    }
}

pub fn is_scrollable<H: ScrollHost>(host: &H, node: H::Node, rules: &ScrollableRules) -> bool {
    let scrollable_y = has_scrollable_space(host, node, Axis::Y, rules) && can_overflow(host, node, Axis::Y);
    let scrollable_x = has_scrollable_space(host, node, Axis::X, rules) && can_overflow(host, node, Axis::X);
    scrollable_y || scrollable_x
}

/// Find the nearest scrollable ancestor of `node`
pub fn find_scrollable_ancestor<H: ScrollHost>(
    host: &H,
    node: H::Node,
    rules: &ScrollableRules,
) -> ScrollContainer<H::Node> {
    let root = host.root();
    let mut current = host.parent(node);

    while let Some(ancestor) = current {
        if ancestor == root {
            break;
        }
        if is_scrollable(host, ancestor, rules) {
            return ScrollContainer::Element(ancestor);
        }
        current = host.parent(ancestor);
    }

    ScrollContainer::Viewport
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Document, NodeSpec, Scene};
    use crate::{Overflow, Rect, Size};

    const LENIENT: ScrollableRules = ScrollableRules {
        fallback_to_nearest: false,
        rounding_tolerance: 0.0,
    };

    const STRICT: ScrollableRules = ScrollableRules {
        fallback_to_nearest: true,
        rounding_tolerance: 0.0,
    };

    fn leaf(id: &str) -> NodeSpec {
        NodeSpec::new(id, Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    /// body > outer(auto) > inner(auto, no overflow) > target
    fn nested() -> Document {
        let inner = NodeSpec::new("inner", Rect::new(0.0, 0.0, 100.0, 100.0))
            .overflow(Overflow::Visible, Overflow::Auto)
            .child(leaf("target"));
        let outer = NodeSpec::new("outer", Rect::new(0.0, 0.0, 200.0, 200.0))
            .overflow(Overflow::Visible, Overflow::Auto)
            .scroll_size(Size::new(200.0, 800.0))
            .child(inner);
        Document::new(Scene::new(NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(outer)))
    }

    #[test]
    fn test_no_scrollable_ancestor_returns_viewport() {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 2000.0))
            .child(NodeSpec::new("wrapper", Rect::new(0.0, 0.0, 800.0, 500.0)).child(leaf("target")));
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &LENIENT), ScrollContainer::Viewport);
        assert_eq!(find_scrollable_ancestor(&doc, target, &STRICT), ScrollContainer::Viewport);
    }

    #[test]
    fn test_overflow_auto_qualifies_without_overflowing_content() {
        let doc = nested();
        let target = doc.node("target").unwrap();
        let inner = doc.node("inner").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &LENIENT), ScrollContainer::Element(inner));
    }

    #[test]
    fn test_fallback_to_nearest_skips_ancestors_without_overflow() {
        let doc = nested();
        let target = doc.node("target").unwrap();
        let outer = doc.node("outer").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &STRICT), ScrollContainer::Element(outer));
    }

    #[test]
    fn test_target_itself_is_never_tested() {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(
            NodeSpec::new("target", Rect::new(0.0, 0.0, 100.0, 100.0))
                .overflow(Overflow::Scroll, Overflow::Scroll)
                .scroll_size(Size::new(500.0, 500.0)),
        );
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &LENIENT), ScrollContainer::Viewport);
    }

    #[test]
    fn test_root_is_never_an_element_container() {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0))
            .overflow(Overflow::Auto, Overflow::Auto)
            .child(leaf("target"));
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &LENIENT), ScrollContainer::Viewport);
    }

    #[test]
    fn test_hidden_overflow_never_qualifies() {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(
            NodeSpec::new("clip", Rect::new(0.0, 0.0, 100.0, 100.0))
                .overflow(Overflow::Hidden, Overflow::Hidden)
                .scroll_size(Size::new(500.0, 500.0))
                .child(leaf("target")),
        );
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &STRICT), ScrollContainer::Viewport);
    }

    #[test]
    fn test_rounding_tolerance_absorbs_one_pixel() {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(
            NodeSpec::new("list", Rect::new(0.0, 0.0, 100.0, 100.0))
                .overflow(Overflow::Visible, Overflow::Auto)
                .scroll_size(Size::new(100.0, 100.5))
                .child(leaf("target")),
        );
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();
        let list = doc.node("list").unwrap();

        assert_eq!(find_scrollable_ancestor(&doc, target, &STRICT), ScrollContainer::Element(list));

        let legacy = ScrollableRules {
            fallback_to_nearest: true,
            rounding_tolerance: 1.0,
        };
        assert_eq!(find_scrollable_ancestor(&doc, target, &legacy), ScrollContainer::Viewport);
    }

    #[test]
    fn test_client_size_excludes_scrollbar() {
        // Horizontal scrollbar eats 15px of the 100px box
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(
            NodeSpec::new("list", Rect::new(0.0, 0.0, 100.0, 100.0))
                .overflow(Overflow::Visible, Overflow::Auto)
                .client_size(Size::new(100.0, 85.0))
                .child(leaf("target")),
        );
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();
        let list = doc.node("list").unwrap();

        assert!(has_scrollable_space(&doc, list, Axis::Y, &STRICT));
        assert!(!has_scrollable_space(&doc, list, Axis::X, &STRICT));
        assert_eq!(find_scrollable_ancestor(&doc, target, &STRICT), ScrollContainer::Element(list));
    }

    #[test]
    fn test_either_axis_is_enough() {
        let body = NodeSpec::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)).child(
            NodeSpec::new("row", Rect::new(0.0, 0.0, 100.0, 100.0))
                .overflow(Overflow::Scroll, Overflow::Hidden)
                .scroll_size(Size::new(400.0, 100.0))
                .child(leaf("target")),
        );
        let doc = Document::new(Scene::new(body));
        let target = doc.node("target").unwrap();
        let row = doc.node("row").unwrap();

        assert!(is_scrollable(&doc, row, &STRICT));
        assert!(has_scrollable_space(&doc, row, Axis::X, &STRICT));
        assert!(!has_scrollable_space(&doc, row, Axis::Y, &STRICT));
        assert_eq!(find_scrollable_ancestor(&doc, target, &STRICT), ScrollContainer::Element(row));
    }
}
