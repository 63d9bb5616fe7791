use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, ViewportState};

/// One active touch contact in host-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two contacts.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> ScreenPoint {
        ScreenPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Captured starting conditions of a two-finger pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchOrigin {
    pub distance: f64,
    pub focal_x: f64,
    pub viewport: ViewportState,
}

/// Transient gesture phase, owned by one chart instance.
///
/// The variants capture their starting conditions, so a move event for a
/// gesture that never began has no state to act on and is ignored by
/// construction. Any end event resets to `Idle` regardless of phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        origin_logical_x: f64,
        origin_translate_x: f64,
    },
    Pinching(PinchOrigin),
}

impl GestureState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_pinching(self) -> bool {
        matches!(self, Self::Pinching(_))
    }
}

/// One named channel value carried in a tooltip payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelValue {
    pub name: String,
    pub value: f64,
}

/// Informational overlay payload for the hovered sample.
///
/// Anchor coordinates are host-screen pixels, positioned just above the
/// topmost plotted point of the sample. Cleared on pointer leave; a
/// degenerate viewport leaves the previous value untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub index: usize,
    pub label: String,
    pub values: Vec<ChannelValue>,
    pub anchor_x: f64,
    pub anchor_y: f64,
}
