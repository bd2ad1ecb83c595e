//! Scene description for the simulated document
//!
//! Scenes are plain data and can be written as TOML or JSON:
//!
//! ```toml
//! viewport = { width = 1280, height = 720 }
//! smooth_scroll = false
//!
//! [root]
//! id = "body"
//! rect = { left = 0, top = 0, width = 1280, height = 4000 }
//!
//! [[root.children]]
//! id = "sidebar"
//! rect = { left = 0, top = 0, width = 300, height = 720 }
//! overflow_y = "auto"
//! scroll_size = { width = 300, height = 2400 }
//! style = "--ss-scroll-offset-y: 2rem"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::host::Overflow;
use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Inner window size
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Host supports `scroll-behavior: smooth`
    #[serde(default)]
    pub smooth_scroll: bool,
    /// Computed font size of the root element in pixels
    #[serde(default = "default_root_font_size")]
    pub root_font_size: f64,
    /// Initial window scroll offset
    #[serde(default)]
    pub window_scroll: Point,
    /// Document body
    pub root: NodeSpec,
}

/// One element of the scene tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    /// Border box in document coordinates, before any scrolling
    pub rect: Rect,
    #[serde(default)]
    pub overflow_x: Overflow,
    #[serde(default)]
    pub overflow_y: Overflow,
    /// Defaults to the rect size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_size: Option<Size>,
    /// Defaults to the rect size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_size: Option<Size>,
    /// Initial scroll offset
    #[serde(default)]
    pub scroll: Point,
    /// Inline `style` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_viewport() -> Size {
    Size::new(1024.0, 768.0)
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) smoothscroll-sim".to_string()
}

fn default_root_font_size() -> f64 {
    16.0
}

impl Scene {
    pub fn new(root: NodeSpec) -> Self {
        Self {
            viewport: default_viewport(),
            user_agent: default_user_agent(),
            smooth_scroll: false,
            root_font_size: default_root_font_size(),
            window_scroll: Point::ZERO,
            root,
        }
    }

    pub fn viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn smooth_scroll(mut self, supported: bool) -> Self {
        self.smooth_scroll = supported;
        self
    }

    pub fn root_font_size(mut self, px: f64) -> Self {
        self.root_font_size = px;
        self
    }

    pub fn window_scroll(mut self, offset: Point) -> Self {
        self.window_scroll = offset;
        self
    }

    /// Load a scene file; `.json` is parsed as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Scene(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            client_size: None,
            scroll_size: None,
            scroll: Point::ZERO,
            style: None,
            children: Vec::new(),
        }
    }

    pub fn overflow(mut self, x: Overflow, y: Overflow) -> Self {
        self.overflow_x = x;
        self.overflow_y = y;
        self
    }

    pub fn client_size(mut self, size: Size) -> Self {
        self.client_size = Some(size);
        self
    }

    pub fn scroll_size(mut self, size: Size) -> Self {
        self.scroll_size = Some(size);
        self
    }

    pub fn scroll(mut self, offset: Point) -> Self {
        self.scroll = offset;
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}
