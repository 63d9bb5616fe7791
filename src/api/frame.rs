use smallvec::SmallVec;

use crate::core::{ChannelPolyline, ViewportState, project_channels};
use crate::interaction::TooltipState;

use super::ChartView;

/// Transformed logical x position for one sample's axis caption.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub x: f64,
}

/// Render output consumed by the presentational layer.
///
/// Channel polylines stay untransformed; the host applies `transform` to
/// the series group only. Axis ticks and the scrubber line come
/// pre-transformed since they follow the samples horizontally, while
/// vertical gridlines and labels never move.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFrame {
    pub transform: ViewportState,
    pub channels: SmallVec<[ChannelPolyline; 2]>,
    pub axis_ticks: Vec<AxisTick>,
    pub scrubber_x: Option<f64>,
    pub tooltip: Option<TooltipState>,
    pub scroll_content_width: f64,
}

impl ChartView {
    #[must_use]
    pub fn frame(&self) -> ViewFrame {
        let axis_ticks = self
            .series
            .labels()
            .iter()
            .enumerate()
            .map(|(index, label)| AxisTick {
                label: label.clone(),
                x: self.transform.apply_x(self.geometry.x_at(index)),
            })
            .collect();

        ViewFrame {
            transform: self.transform.state(),
            channels: project_channels(&self.series, &self.geometry),
            axis_ticks,
            scrubber_x: self
                .tooltip
                .as_ref()
                .map(|tooltip| self.transform.apply_x(self.geometry.x_at(tooltip.index))),
            tooltip: self.tooltip.clone(),
            scroll_content_width: self.transform.scroll_content_width(),
        }
    }
}
