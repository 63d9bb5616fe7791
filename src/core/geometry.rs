use serde::{Deserialize, Serialize};

use crate::core::series::{Channel, Series};
use crate::core::types::CanvasSize;
use crate::error::{ViewError, ViewResult};

/// Four insets applied to the logical canvas to produce the plot rectangle.
///
/// `start`/`end` follow the horizontal axis direction; `top`/`bottom` the
/// vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginProfile {
    pub start: f64,
    pub end: f64,
    pub top: f64,
    pub bottom: f64,
}

impl MarginProfile {
    #[must_use]
    pub const fn new(start: f64, end: f64, top: f64, bottom: f64) -> Self {
        Self {
            start,
            end,
            top,
            bottom,
        }
    }

    /// Tight insets for narrow presentations.
    #[must_use]
    pub const fn compact_default() -> Self {
        Self::new(36.0, 18.0, 28.0, 56.0)
    }

    /// Roomier insets for wide presentations.
    #[must_use]
    pub const fn comfortable_default() -> Self {
        Self::new(70.0, 60.0, 40.0, 70.0)
    }

    pub(crate) fn validate(self) -> ViewResult<Self> {
        let insets = [self.start, self.end, self.top, self.bottom];
        if insets.iter().any(|inset| !inset.is_finite() || *inset < 0.0) {
            return Err(ViewError::InvalidData(
                "margin insets must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Logical plot rectangle bounds, `x0 < x1` and `y0 < y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl PlotRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }
}

/// Derived drawing-surface geometry for one series.
///
/// Recomputed whenever the series or the margin profile changes; all
/// methods are pure coordinate math on the fixed logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    canvas: CanvasSize,
    rect: PlotRect,
    step: f64,
    sample_count: usize,
}

impl PlotGeometry {
    pub fn compute(series: &Series, margins: MarginProfile, canvas: CanvasSize) -> ViewResult<Self> {
        let canvas = canvas.validate()?;
        let margins = margins.validate()?;

        let rect = PlotRect {
            x0: margins.start,
            x1: canvas.width - margins.end,
            y0: margins.top,
            y1: canvas.height - margins.bottom,
        };
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(ViewError::InvalidData(
                "margins leave no plot area".to_owned(),
            ));
        }

        // Series construction guarantees at least 2 samples, so the step
        // denominator is never zero.
        let step = rect.width() / (series.len() - 1) as f64;

        Ok(Self {
            canvas,
            rect,
            step,
            sample_count: series.len(),
        })
    }

    #[must_use]
    pub fn canvas(self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn rect(self) -> PlotRect {
        self.rect
    }

    /// Horizontal distance between adjacent samples.
    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn x_at(self, index: usize) -> f64 {
        self.rect.x0 + index as f64 * self.step
    }

    /// Vertical logical coordinate for a channel value, scaled linearly
    /// from 0 at the bottom edge to the channel maximum at the top edge.
    #[must_use]
    pub fn y_for(self, channel: &Channel, value: f64) -> f64 {
        self.rect.y1 - (value / channel.max_value()) * self.rect.height()
    }

    /// Nearest sample index for an untransformed logical x position.
    ///
    /// Rounds half away from zero and clamps into the valid index range,
    /// so positions far outside the plot rectangle resolve to the first or
    /// last sample.
    #[must_use]
    pub fn nearest_index(self, x_logical: f64) -> usize {
        let raw = (x_logical - self.rect.x0) / self.step;
        let last = (self.sample_count - 1) as f64;
        raw.round().clamp(0.0, last) as usize
    }
}
