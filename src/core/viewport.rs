use serde::{Deserialize, Serialize};

use crate::core::geometry::PlotRect;
use crate::error::{ViewError, ViewResult};

/// Horizontal zoom limits and the per-notch wheel factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTuning {
    pub min_scale: f64,
    pub max_scale: f64,
    pub wheel_step: f64,
}

impl Default for ZoomTuning {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 4.0,
            wheel_step: 1.1,
        }
    }
}

impl ZoomTuning {
    pub(crate) fn validate(self) -> ViewResult<Self> {
        if !self.min_scale.is_finite()
            || !self.max_scale.is_finite()
            || self.min_scale < 1.0
            || self.max_scale < self.min_scale
        {
            return Err(ViewError::InvalidData(
                "zoom limits must satisfy 1 <= min_scale <= max_scale".to_owned(),
            ));
        }
        if !self.wheel_step.is_finite() || self.wheel_step <= 1.0 {
            return Err(ViewError::InvalidData(
                "wheel step must be finite and > 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Scrollable content width recommendation for delegated-pan hosts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTuning {
    pub base_min_width: f64,
    pub growth: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            base_min_width: 900.0,
            growth: 1.05,
        }
    }
}

impl ScrollTuning {
    pub(crate) fn validate(self) -> ViewResult<Self> {
        if !self.base_min_width.is_finite() || self.base_min_width <= 0.0 {
            return Err(ViewError::InvalidData(
                "scroll base width must be finite and > 0".to_owned(),
            ));
        }
        if !self.growth.is_finite() || self.growth < 1.0 {
            return Err(ViewError::InvalidData(
                "scroll growth must be finite and >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Current horizontal zoom factor and translation offset.
///
/// The transform applies `x' = translate_x + scale * x` to the plotted
/// series only; the vertical axis is never scaled or translated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub scale: f64,
    pub translate_x: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
        }
    }
}

/// Pan limits for a given scale, keeping the transformed plot rectangle
/// inside the original one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub min_translate: f64,
    pub max_translate: f64,
}

/// Owns [`ViewportState`] and every mutation applied to it.
///
/// Each mutation re-clamps the translation against the bounds for the
/// resulting scale, except when panning is delegated to an external
/// scrollable container (compact presentations), where translation is
/// pinned at zero instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    state: ViewportState,
    rect: PlotRect,
    canvas_width: f64,
    zoom: ZoomTuning,
    scroll: ScrollTuning,
}

impl ViewportTransform {
    pub fn new(
        rect: PlotRect,
        canvas_width: f64,
        zoom: ZoomTuning,
        scroll: ScrollTuning,
    ) -> ViewResult<Self> {
        let zoom = zoom.validate()?;
        let scroll = scroll.validate()?;
        Ok(Self {
            state: ViewportState::default(),
            rect,
            canvas_width,
            zoom,
            scroll,
        })
    }

    #[must_use]
    pub fn state(self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn zoom_tuning(self) -> ZoomTuning {
        self.zoom
    }

    /// Requiring both transformed plot edges to stay within `[x0, x1]`
    /// gives `translate >= x1*(1-scale)` and `translate <= x0*(1-scale)`.
    #[must_use]
    pub fn bounds_for(self, scale: f64) -> PanBounds {
        PanBounds {
            min_translate: self.rect.x1 * (1.0 - scale),
            max_translate: self.rect.x0 * (1.0 - scale),
        }
    }

    #[must_use]
    pub fn clamp_translate(self, translate: f64, scale: f64) -> f64 {
        let bounds = self.bounds_for(scale);
        translate.clamp(bounds.min_translate, bounds.max_translate)
    }

    /// Applies the transform to a logical x coordinate.
    #[must_use]
    pub fn apply_x(self, x: f64) -> f64 {
        self.state.translate_x + self.state.scale * x
    }

    /// Inverts the transform for a logical x coordinate.
    #[must_use]
    pub fn unapply_x(self, x: f64) -> f64 {
        (x - self.state.translate_x) / self.state.scale
    }

    /// Replaces the translation, clamped for the current scale.
    pub fn pan_to(&mut self, translate: f64) -> ViewResult<ViewportState> {
        if !translate.is_finite() {
            return Err(ViewError::InvalidData(
                "pan translation must be finite".to_owned(),
            ));
        }
        self.state.translate_x = self.clamp_translate(translate, self.state.scale);
        Ok(self.state)
    }

    /// Zooms about a focal logical x, keeping that point visually
    /// stationary: `t' = t + s*focal - s'*focal`.
    ///
    /// With `delegate_pan` the translation is pinned at zero instead and
    /// reachability comes from the host's scrollable container.
    pub fn zoom_about(
        &mut self,
        factor: f64,
        focal_x: f64,
        delegate_pan: bool,
    ) -> ViewResult<ViewportState> {
        self.zoom_from_origin(self.state, factor, focal_x, delegate_pan)
    }

    /// Same as [`Self::zoom_about`], but anchored to an explicitly captured
    /// origin state (pinch gestures rescale from their starting state).
    pub fn zoom_from_origin(
        &mut self,
        origin: ViewportState,
        factor: f64,
        focal_x: f64,
        delegate_pan: bool,
    ) -> ViewResult<ViewportState> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !focal_x.is_finite() {
            return Err(ViewError::InvalidData(
                "zoom focal point must be finite".to_owned(),
            ));
        }

        let scale = (origin.scale * factor).clamp(self.zoom.min_scale, self.zoom.max_scale);
        let translate_x = if delegate_pan {
            0.0
        } else {
            let anchored = origin.translate_x + origin.scale * focal_x - scale * focal_x;
            self.clamp_translate(anchored, scale)
        };

        self.state = ViewportState { scale, translate_x };
        Ok(self.state)
    }

    /// Drops the translation while keeping the zoom factor.
    pub fn reset_translation(&mut self) {
        self.state.translate_x = 0.0;
    }

    /// Restores a persisted state, clamped into the current limits.
    pub fn restore(&mut self, state: ViewportState) -> ViewResult<ViewportState> {
        if !state.scale.is_finite() || !state.translate_x.is_finite() {
            return Err(ViewError::InvalidData(
                "viewport state must be finite".to_owned(),
            ));
        }
        let scale = state.scale.clamp(self.zoom.min_scale, self.zoom.max_scale);
        self.state = ViewportState {
            scale,
            translate_x: self.clamp_translate(state.translate_x, scale),
        };
        Ok(self.state)
    }

    /// Swaps the plot rectangle after a geometry change and re-clamps the
    /// existing translation against the re-derived bounds.
    pub fn set_plot_rect(&mut self, rect: PlotRect) {
        self.rect = rect;
        self.state.translate_x = self.clamp_translate(self.state.translate_x, self.state.scale);
    }

    /// Content width the host should give its scrollable container so the
    /// zoomed canvas remains reachable in delegated-pan mode.
    #[must_use]
    pub fn scroll_content_width(self) -> f64 {
        let grown = self.canvas_width * (self.state.scale * self.scroll.growth).max(1.0);
        self.scroll.base_min_width.max(grown)
    }
}
