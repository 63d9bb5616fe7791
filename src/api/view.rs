use tracing::{debug, warn};

use crate::core::{
    CoordinateMapper, PlotGeometry, ScreenBox, Series, ViewportState, ViewportTransform, WidthClass,
};
use crate::error::{ViewError, ViewResult};
use crate::interaction::{GestureState, TooltipState};

use super::ChartViewConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartView` owns one chart instance's series, derived geometry,
/// viewport transform, and transient gesture/tooltip state. Instances are
/// fully independent; hosts create one per chart and feed it input events.
pub struct ChartView {
    pub(super) config: ChartViewConfig,
    pub(super) series: Series,
    pub(super) width_class: WidthClass,
    pub(super) geometry: PlotGeometry,
    pub(super) transform: ViewportTransform,
    pub(super) gesture: GestureState,
    pub(super) tooltip: Option<TooltipState>,
    pub(super) screen_box: Option<ScreenBox>,
}

impl ChartView {
    pub fn new(series: Series, config: ChartViewConfig, width_class: WidthClass) -> ViewResult<Self> {
        config.validate()?;
        let geometry = PlotGeometry::compute(&series, config.margins_for(width_class), config.canvas)?;
        let transform =
            ViewportTransform::new(geometry.rect(), config.canvas.width, config.zoom, config.scroll)?;

        Ok(Self {
            config,
            series,
            width_class,
            geometry,
            transform,
            gesture: GestureState::Idle,
            tooltip: None,
            screen_box: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartViewConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn width_class(&self) -> WidthClass {
        self.width_class
    }

    #[must_use]
    pub fn geometry(&self) -> PlotGeometry {
        self.geometry
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportTransform {
        self.transform
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.transform.state()
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    /// Content width the host's scrollable container should adopt in
    /// compact presentations.
    #[must_use]
    pub fn scroll_content_width(&self) -> f64 {
        self.transform.scroll_content_width()
    }

    /// Host resize signal: stores the newly measured screen box and
    /// re-evaluates the width class.
    ///
    /// On a width-class change the geometry is recomputed first, then pan
    /// bounds are re-derived and the existing translation re-clamped. A
    /// flip into compact drops the translation entirely, since panning is
    /// delegated to the surrounding scrollable container there. An
    /// in-progress gesture is left untouched.
    pub fn resize(&mut self, screen_box: ScreenBox, width_class: WidthClass) {
        self.screen_box = Some(screen_box);
        if width_class == self.width_class {
            return;
        }

        let margins = self.config.margins_for(width_class);
        match PlotGeometry::compute(&self.series, margins, self.config.canvas) {
            Ok(geometry) => {
                self.geometry = geometry;
                self.transform.set_plot_rect(geometry.rect());
                if width_class.is_compact() {
                    self.transform.reset_translation();
                }
                self.width_class = width_class;
                debug!(?width_class, "width class changed");
            }
            Err(err) => warn!(error = %err, "skipping geometry recompute on resize"),
        }
    }

    pub(super) fn mapper(&self) -> ViewResult<CoordinateMapper> {
        let bounds = self.screen_box.ok_or(ViewError::DegenerateViewport {
            width: 0.0,
            height: 0.0,
        })?;
        CoordinateMapper::new(bounds, self.config.canvas)
    }
}
