use std::collections::HashMap;
use std::path::Path;

use crate::geometry::{Point, Rect, Size};
use crate::host::{Axis, Overflow, ScrollContainer, ScrollHost};
use crate::platform::HostCapabilities;
use crate::{Error, Result};

use super::scene::{NodeSpec, Scene};

/// Handle to a node in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    id: String,
    parent: Option<NodeId>,
    rect: Rect,
    overflow_x: Overflow,
    overflow_y: Overflow,
    client_size: Size,
    scroll_size: Size,
    scroll: Point,
    style: Option<String>,
}

/// In-memory document with static layout and live scroll offsets
///
/// Bounding rects are derived from document-space layout minus the scroll
/// offsets of every ancestor element and the window, so they move as the
/// scroller writes offsets. Writes are clamped to the scrollable range.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    index: HashMap<String, NodeId>,
    viewport: Size,
    capabilities: HostCapabilities,
    root_font_size: f64,
    window_scroll: Point,
    scroll_writes: Vec<(ScrollContainer<NodeId>, Point)>,
    native_scrolls: Vec<(ScrollContainer<NodeId>, Point)>,
}

impl Document {
    pub fn new(scene: Scene) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            viewport: scene.viewport,
            capabilities: HostCapabilities::new(scene.smooth_scroll, scene.user_agent),
            root_font_size: scene.root_font_size,
            window_scroll: Point::ZERO,
            scroll_writes: Vec::new(),
            native_scrolls: Vec::new(),
        };
        doc.insert(scene.root, None);
        doc.window_scroll = doc.clamp_window(scene.window_scroll);
        doc
    }

    /// Load a scene file and build a document from it
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(Scene::load(path)?))
    }

    fn insert(&mut self, node_spec: NodeSpec, parent: Option<NodeId>) {
        let id = NodeId(self.nodes.len());
        let size = node_spec.rect.size();
        // First node with a given id wins lookups, like getElementById
        self.index.entry(node_spec.id.clone()).or_insert(id);
        self.nodes.push(NodeData {
            id: node_spec.id,
            parent,
            rect: node_spec.rect,
            overflow_x: node_spec.overflow_x,
            overflow_y: node_spec.overflow_y,
            client_size: node_spec.client_size.unwrap_or(size),
            scroll_size: node_spec.scroll_size.unwrap_or(size),
            scroll: Point::ZERO,
            style: node_spec.style,
        });
        let initial = self.clamp_element(id, node_spec.scroll);
        self.nodes[id.0].scroll = initial;

        for child in node_spec.children {
            self.insert(child, Some(id));
        }
    }

    /// Look up a node by its scene id
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Like [`Document::node`], but a missing id is an error
    pub fn require(&self, id: &str) -> Result<NodeId> {
        self.node(id).ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    /// Scene id of a node
    pub fn id_of(&self, node: NodeId) -> &str {
        &self.nodes[node.0].id
    }

    /// Replace a node's content size, e.g. to simulate content shrinking
    pub fn set_scroll_size(&mut self, node: NodeId, size: Size) {
        self.nodes[node.0].scroll_size = size;
        let clamped = self.clamp_element(node, self.nodes[node.0].scroll);
        self.nodes[node.0].scroll = clamped;
    }

    /// Every manual scroll write, in order, before clamping
    pub fn scroll_writes(&self) -> &[(ScrollContainer<NodeId>, Point)] {
        &self.scroll_writes
    }

    /// Every native smooth-scroll request, in order
    pub fn native_scrolls(&self) -> &[(ScrollContainer<NodeId>, Point)] {
        &self.native_scrolls
    }

    /// Human-readable name of a container
    pub fn describe(&self, container: ScrollContainer<NodeId>) -> String {
        match container {
            ScrollContainer::Viewport => "window".to_string(),
            ScrollContainer::Element(node) => format!("#{}", self.id_of(node)),
        }
    }

    fn clamp_element(&self, node: NodeId, offset: Point) -> Point {
        let data = &self.nodes[node.0];
        clamp_offset(offset, data.scroll_size, data.client_size)
    }

    fn clamp_window(&self, offset: Point) -> Point {
        clamp_offset(offset, self.nodes[0].scroll_size, self.viewport)
    }

    fn store(&mut self, container: ScrollContainer<NodeId>, position: Point) {
        match container {
            ScrollContainer::Viewport => self.window_scroll = self.clamp_window(position),
            ScrollContainer::Element(node) => {
                let clamped = self.clamp_element(node, position);
                self.nodes[node.0].scroll = clamped;
            }
        }
    }
}

fn clamp_offset(offset: Point, content: Size, visible: Size) -> Point {
    let max_x = (content.width - visible.width).max(0.0);
    let max_y = (content.height - visible.height).max(0.0);
    Point::new(offset.x.clamp(0.0, max_x), offset.y.clamp(0.0, max_y))
}

impl ScrollHost for Document {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        let mut scrolled = self.window_scroll;
        let mut current = self.nodes[node.0].parent;

        while let Some(ancestor) = current {
            if ancestor == self.root() {
                break;
            }
            let data = &self.nodes[ancestor.0];
            scrolled = scrolled.translate(data.scroll.x, data.scroll.y);
            current = data.parent;
        }

        self.nodes[node.0].rect.shifted_back(scrolled)
    }

    fn overflow(&self, node: NodeId, axis: Axis) -> Overflow {
        let data = &self.nodes[node.0];
        match axis {
            Axis::X => data.overflow_x,
            Axis::Y => data.overflow_y,
        }
    }

    fn client_size(&self, node: NodeId) -> Size {
        self.nodes[node.0].client_size
    }

    fn scroll_size(&self, node: NodeId) -> Size {
        self.nodes[node.0].scroll_size
    }

    fn inline_style(&self, node: NodeId) -> Option<String> {
        self.nodes[node.0].style.clone()
    }

    fn root_font_size(&self) -> f64 {
        self.root_font_size
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_position(&self, container: ScrollContainer<NodeId>) -> Point {
        match container {
            ScrollContainer::Viewport => self.window_scroll,
            ScrollContainer::Element(node) => self.nodes[node.0].scroll,
        }
    }

    fn set_scroll_position(&mut self, container: ScrollContainer<NodeId>, position: Point) {
        self.scroll_writes.push((container, position));
        self.store(container, position);
    }

    fn smooth_scroll_to(&mut self, container: ScrollContainer<NodeId>, destination: Point) {
        self.native_scrolls.push((container, destination));
        self.store(container, destination);
    }

    fn capabilities(&self) -> HostCapabilities {
        self.capabilities.clone()
    }
}
