//! plotview-rs: viewport and interaction engine for fixed-canvas series charts.
//!
//! This crate maps ordered samples onto a fixed logical drawing surface,
//! compensates for aspect-ratio letterboxing between that surface and the
//! rendered element, resolves pointer positions to the nearest sample, and
//! drives a clamped horizontal pan/zoom transform from pointer, touch, and
//! wheel gestures. Rendering itself stays with the host; the boundary is
//! event-in / frame-out.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartView, ChartViewConfig};
pub use error::{ViewError, ViewResult};
