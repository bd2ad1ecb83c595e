//! Deterministic in-memory host
//!
//! [`Document`] implements [`ScrollHost`](crate::ScrollHost) over a static
//! layout described by a [`Scene`], and [`FrameLoop`] is a
//! [`FrameScheduler`](crate::FrameScheduler) driven by a simulated clock.
//! Together they run the scroller without a rendering engine.

pub mod document;
pub mod frames;
pub mod scene;

pub use document::{Document, NodeId};
pub use frames::FrameLoop;
pub use scene::{NodeSpec, Scene};
