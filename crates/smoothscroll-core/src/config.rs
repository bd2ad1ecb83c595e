use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Which rectangle stands in for the visible area when the page root is the
/// scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootRect {
    /// A zero-sized rectangle at the origin
    Zero,
    /// The viewport rectangle `(0, 0, innerWidth, innerHeight)`
    Viewport,
}

/// Scroller configuration
///
/// Immutable for the lifetime of a [`crate::Scroller`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Require an ancestor to actually overflow, not just allow it
    #[serde(default)]
    pub fallback_to_nearest: bool,
    /// Horizontal offset in pixels. Takes precedence over `--ss-scroll-offset-x`,
    /// including an explicit `0`; leave unset to read the property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    /// Vertical offset in pixels. Takes precedence over `--ss-scroll-offset-y`,
    /// including an explicit `0`; leave unset to read the property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    /// Manual animation duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Default alignment for scroll-into-view callers
    #[serde(default = "default_true")]
    pub center: bool,
    /// Root visible rectangle for `scroll_to`
    #[serde(default = "default_scroll_to_root_rect")]
    pub scroll_to_root_rect: RootRect,
    /// Root visible rectangle for `scroll_into_view`
    #[serde(default = "default_scroll_into_view_root_rect")]
    pub scroll_into_view_root_rect: RootRect,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            fallback_to_nearest: false,
            offset_x: None,
            offset_y: None,
            duration_ms: default_duration_ms(),
            center: default_true(),
            scroll_to_root_rect: default_scroll_to_root_rect(),
            scroll_into_view_root_rect: default_scroll_into_view_root_rect(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    468
}

fn default_scroll_to_root_rect() -> RootRect {
    RootRect::Zero
}

fn default_scroll_into_view_root_rect() -> RootRect {
    RootRect::Viewport
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/smoothscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("smoothscroll")
            .join("config.toml")
    }
}
