pub mod geometry;
pub mod mapper;
pub mod projection;
pub mod series;
pub mod types;
pub mod viewport;

pub use geometry::{MarginProfile, PlotGeometry, PlotRect};
pub use mapper::CoordinateMapper;
pub use projection::{ChannelPolyline, project_channels};
pub use series::{Channel, MAX_CHANNELS, Series, SeriesBuilder};
pub use types::{CanvasSize, LogicalPoint, ScreenBox, ScreenPoint, WidthClass};
pub use viewport::{PanBounds, ScrollTuning, ViewportState, ViewportTransform, ZoomTuning};
