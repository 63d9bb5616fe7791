use tracing::{debug, trace};

use crate::core::ScreenPoint;
use crate::interaction::{GestureState, PinchOrigin, TouchPoint};

use super::ChartView;

impl ChartView {
    /// Handles pointer movement: advances an active drag, then refreshes
    /// the tooltip for the hovered sample.
    ///
    /// With no mapping available the previous tooltip and transform are
    /// left untouched.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let mapper = match self.mapper() {
            Ok(mapper) => mapper,
            Err(err) => {
                trace!(error = %err, "pointer move skipped");
                return;
            }
        };

        let logical = mapper.screen_to_logical(ScreenPoint::new(x, y));
        if let GestureState::Dragging {
            origin_logical_x,
            origin_translate_x,
        } = self.gesture
        {
            let delta = logical.x - origin_logical_x;
            if let Err(err) = self.transform.pan_to(origin_translate_x + delta) {
                trace!(error = %err, "drag step skipped");
            }
        }

        self.tooltip = Some(self.resolve_tooltip(mapper, ScreenPoint::new(x, y)));
    }

    /// Begins a drag-to-pan on precision pointers.
    ///
    /// Compact presentations pan through the host's scrollable container,
    /// so the press is ignored there.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.width_class.is_compact() {
            return;
        }
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        match self.mapper() {
            Ok(mapper) => {
                let logical = mapper.screen_to_logical(ScreenPoint::new(x, y));
                self.gesture = GestureState::Dragging {
                    origin_logical_x: logical.x,
                    origin_translate_x: self.transform.state().translate_x,
                };
                debug!(origin_logical_x = logical.x, "drag began");
            }
            Err(err) => trace!(error = %err, "pointer down skipped"),
        }
    }

    pub fn pointer_up(&mut self) {
        self.gesture = GestureState::Idle;
    }

    /// Ends any gesture and clears the tooltip.
    pub fn pointer_leave(&mut self) {
        self.gesture = GestureState::Idle;
        self.tooltip = None;
    }

    /// Handles a wheel notch. Returns whether the event was consumed, so
    /// the host knows to suppress its default scroll handling.
    ///
    /// Without the modifier gate the event is never intercepted; with it,
    /// the zoom is anchored at the pointer's logical position.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64, modifier_pressed: bool) -> bool {
        if !modifier_pressed {
            return false;
        }
        if !x.is_finite() || !y.is_finite() || !delta_y.is_finite() || delta_y == 0.0 {
            return true;
        }
        let mapper = match self.mapper() {
            Ok(mapper) => mapper,
            Err(err) => {
                trace!(error = %err, "wheel zoom skipped");
                return true;
            }
        };

        let logical = mapper.screen_to_logical(ScreenPoint::new(x, y));
        let step = self.transform.zoom_tuning().wheel_step;
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        match self
            .transform
            .zoom_about(factor, logical.x, self.width_class.is_compact())
        {
            Ok(state) => trace!(scale = state.scale, translate_x = state.translate_x, "wheel zoom"),
            Err(err) => trace!(error = %err, "wheel zoom skipped"),
        }
        true
    }

    /// Captures pinch starting conditions when exactly two contacts begin;
    /// any other contact count resets the gesture.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        let [first, second] = match touches {
            [first, second] => [*first, *second],
            _ => {
                self.gesture = GestureState::Idle;
                return;
            }
        };
        if ![first.x, first.y, second.x, second.y]
            .iter()
            .all(|coord| coord.is_finite())
        {
            return;
        }
        match self.mapper() {
            Ok(mapper) => {
                let focal = mapper.screen_to_logical(first.midpoint(second));
                let distance = first.distance(second);
                self.gesture = GestureState::Pinching(PinchOrigin {
                    distance,
                    focal_x: focal.x,
                    viewport: self.transform.state(),
                });
                debug!(distance, "pinch began");
            }
            Err(err) => trace!(error = %err, "touch start skipped"),
        }
    }

    /// Advances an active pinch from its captured origin.
    ///
    /// Compact presentations pin the translation at zero; panning stays
    /// with the host's scrollable container.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        let GestureState::Pinching(origin) = self.gesture else {
            return;
        };
        let [first, second] = match touches {
            [first, second] => [*first, *second],
            _ => {
                self.gesture = GestureState::Idle;
                return;
            }
        };
        if ![first.x, first.y, second.x, second.y]
            .iter()
            .all(|coord| coord.is_finite())
        {
            return;
        }

        // A zero starting distance would blow up the ratio; treat it as 1.
        let ratio = if origin.distance > f64::EPSILON {
            first.distance(second) / origin.distance
        } else {
            1.0
        };
        match self.transform.zoom_from_origin(
            origin.viewport,
            ratio,
            origin.focal_x,
            self.width_class.is_compact(),
        ) {
            Ok(state) => trace!(scale = state.scale, "pinch zoom"),
            Err(err) => trace!(error = %err, "pinch step skipped"),
        }
    }

    /// Losing any contact ends the pinch.
    pub fn touch_end(&mut self, _touches: &[TouchPoint]) {
        self.gesture = GestureState::Idle;
    }
}
