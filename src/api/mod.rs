mod config;
mod frame;
mod input_controller;
mod snapshot;
mod tooltip_resolver;
mod view;

pub use config::{ChartViewConfig, TooltipTuning};
pub use frame::{AxisTick, ViewFrame};
pub use snapshot::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot, ViewSnapshotJsonContractV1};
pub use view::ChartView;
