//! Scroll configuration accessors
//!
//! Re-exports the serde config types and adds the lookups the scroller needs.

use std::time::Duration;

pub use crate::config::{RootRect, ScrollConfig};

/// Which public entry point is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    ScrollTo,
    ScrollIntoView,
}

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Get animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Animation duration in host milliseconds
    fn duration_millis(&self) -> f64;

    /// Root visible rectangle mode for an entry point
    fn root_rect(&self, entry: EntryPoint) -> RootRect;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn duration_millis(&self) -> f64 {
        self.duration_ms as f64
    }

    #[inline]
    fn root_rect(&self, entry: EntryPoint) -> RootRect {
        match entry {
            EntryPoint::ScrollTo => self.scroll_to_root_rect,
            EntryPoint::ScrollIntoView => self.scroll_into_view_root_rect,
        }
    }
}
