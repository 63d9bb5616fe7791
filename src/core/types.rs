use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Fixed logical drawing surface dimensions.
///
/// Chart geometry is defined in this coordinate space regardless of the
/// on-screen rendered size of the host element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub(crate) fn validate(self) -> ViewResult<Self> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ViewError::InvalidData(
                "canvas size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 420.0,
        }
    }
}

/// On-screen bounding box of the rendered element, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenBox {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A box is usable once layout has produced a positive measured size.
    #[must_use]
    pub fn is_measured(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Presentation width class supplied by the host on each resize.
///
/// Compact hosts delegate panning to an external scrollable container,
/// so the transform keeps its translation at zero there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthClass {
    Compact,
    Comfortable,
}

impl WidthClass {
    #[must_use]
    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}
