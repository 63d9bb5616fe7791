use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, MarginProfile, ScrollTuning, WidthClass, ZoomTuning};
use crate::error::{ViewError, ViewResult};

/// Vertical clearance between a sample's topmost plotted point and the
/// tooltip anchor, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipTuning {
    pub anchor_offset: f64,
}

impl Default for TooltipTuning {
    fn default() -> Self {
        Self {
            anchor_offset: 12.0,
        }
    }
}

impl TooltipTuning {
    fn validate(self) -> ViewResult<Self> {
        if !self.anchor_offset.is_finite() || self.anchor_offset < 0.0 {
            return Err(ViewError::InvalidData(
                "tooltip anchor offset must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Per-instance engine configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub canvas: CanvasSize,
    #[serde(default = "MarginProfile::compact_default")]
    pub compact_margins: MarginProfile,
    #[serde(default = "MarginProfile::comfortable_default")]
    pub comfortable_margins: MarginProfile,
    #[serde(default)]
    pub zoom: ZoomTuning,
    #[serde(default)]
    pub scroll: ScrollTuning,
    #[serde(default)]
    pub tooltip: TooltipTuning,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}

impl ChartViewConfig {
    /// Creates a config with default margin profiles and tuning.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            compact_margins: MarginProfile::compact_default(),
            comfortable_margins: MarginProfile::comfortable_default(),
            zoom: ZoomTuning::default(),
            scroll: ScrollTuning::default(),
            tooltip: TooltipTuning::default(),
        }
    }

    #[must_use]
    pub fn with_compact_margins(mut self, margins: MarginProfile) -> Self {
        self.compact_margins = margins;
        self
    }

    #[must_use]
    pub fn with_comfortable_margins(mut self, margins: MarginProfile) -> Self {
        self.comfortable_margins = margins;
        self
    }

    #[must_use]
    pub fn with_zoom_tuning(mut self, zoom: ZoomTuning) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_scroll_tuning(mut self, scroll: ScrollTuning) -> Self {
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub fn with_tooltip_tuning(mut self, tooltip: TooltipTuning) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn margins_for(&self, width_class: WidthClass) -> MarginProfile {
        match width_class {
            WidthClass::Compact => self.compact_margins,
            WidthClass::Comfortable => self.comfortable_margins,
        }
    }

    /// Both margin profiles must leave a positive plot rectangle, so a
    /// later width-class flip can never fail geometry recomputation.
    pub(super) fn validate(&self) -> ViewResult<()> {
        self.canvas.validate()?;
        self.tooltip.validate()?;
        for margins in [self.compact_margins, self.comfortable_margins] {
            let margins = margins.validate()?;
            let plot_width = self.canvas.width - margins.start - margins.end;
            let plot_height = self.canvas.height - margins.top - margins.bottom;
            if plot_width <= 0.0 || plot_height <= 0.0 {
                return Err(ViewError::InvalidData(
                    "margins leave no plot area".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
