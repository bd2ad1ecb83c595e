//! Smooth scrolling engine
//!
//! Brings an element into view by animating the scroll offset of its nearest
//! scrollable ancestor. Hosts with native smooth scrolling get a single
//! declarative call; everything else gets a cosine-eased manual animation
//! stepped once per display frame.
//!
//! # Layout
//!
//! - `easing` - cosine ease-in-out curve
//! - `timing` - elapsed fraction and interpolation helpers
//! - `config` - configuration accessors
//! - `ancestor` - scrollable-ancestor resolution
//! - `offset` - configured and CSS custom-property offsets
//! - `animation` - per-frame animation stepping
//! - `scroller` - public entry points and native/manual dispatch
//!
//! # Usage
//!
//! ```ignore
//! use smoothscroll_core::{ScrollConfig, Scroller};
//!
//! let scroller = Scroller::new(ScrollConfig {
//!     offset_y: Some(64.0),
//!     ..Default::default()
//! });
//!
//! // host: impl ScrollHost, frames: impl FrameScheduler
//! scroller.scroll_into_view(&mut host, &mut frames, Some(node), true);
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod ancestor;
pub mod animation;
pub mod offset;
pub mod scroller;

pub use animation::{AnimationContext, StepState};
pub use config::{EntryPoint, ScrollConfigExt};
pub use easing::ease;
pub use scroller::{Dispatch, Scroller};
