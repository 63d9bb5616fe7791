use ordered_float::OrderedFloat;

use crate::core::{CoordinateMapper, LogicalPoint, ScreenPoint};
use crate::interaction::{ChannelValue, TooltipState};

use super::ChartView;

impl ChartView {
    /// Resolves the tooltip payload for a pointer position.
    ///
    /// Pure with respect to view state; safe to call on every pointer
    /// move. Returns `None` only when no screen mapping is available.
    #[must_use]
    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<TooltipState> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let mapper = self.mapper().ok()?;
        Some(self.resolve_tooltip(mapper, ScreenPoint::new(x, y)))
    }

    pub(super) fn resolve_tooltip(&self, mapper: CoordinateMapper, point: ScreenPoint) -> TooltipState {
        let logical = mapper.screen_to_logical(point);
        let index = self.geometry.nearest_index(self.transform.unapply_x(logical.x));

        let values: Vec<ChannelValue> = self
            .series
            .channels()
            .map(|(name, channel)| ChannelValue {
                name: name.to_owned(),
                value: channel.values()[index],
            })
            .collect();

        // Anchor above the topmost plotted point across channels.
        let top_y = self
            .series
            .channels()
            .map(|(_, channel)| OrderedFloat(self.geometry.y_for(channel, channel.values()[index])))
            .min()
            .map(|y| y.0)
            .unwrap_or(self.geometry.rect().y0);

        let anchor = mapper.logical_to_screen(LogicalPoint::new(
            self.transform.apply_x(self.geometry.x_at(index)),
            top_y - self.config.tooltip.anchor_offset,
        ));

        TooltipState {
            index,
            label: self.series.label(index).unwrap_or_default().to_owned(),
            values,
            anchor_x: anchor.x,
            anchor_y: anchor.y,
        }
    }
}
