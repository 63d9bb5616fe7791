use smallvec::SmallVec;

use crate::core::geometry::PlotGeometry;
use crate::core::series::Series;
use crate::core::types::LogicalPoint;

/// Untransformed logical polyline for one channel.
///
/// The host applies the horizontal viewport transform to the series group
/// as a whole, so projection stays independent of pan/zoom state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPolyline {
    pub name: String,
    pub points: Vec<LogicalPoint>,
}

/// Projects every channel onto the plot rectangle, in channel order.
#[must_use]
pub fn project_channels(series: &Series, geometry: &PlotGeometry) -> SmallVec<[ChannelPolyline; 2]> {
    series
        .channels()
        .map(|(name, channel)| ChannelPolyline {
            name: name.to_owned(),
            points: channel
                .values()
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    LogicalPoint::new(geometry.x_at(index), geometry.y_for(channel, *value))
                })
                .collect(),
        })
        .collect()
}
