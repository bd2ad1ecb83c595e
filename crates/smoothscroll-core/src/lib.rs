pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod platform;
pub mod scroll;
pub mod sim;

pub use config::{AppConfig, RootRect, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use host::{Axis, FrameScheduler, Overflow, ScrollContainer, ScrollHost};
pub use platform::HostCapabilities;
pub use scroll::{AnimationContext, Dispatch, Scroller, StepState};
