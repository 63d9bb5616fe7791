use crate::core::types::{CanvasSize, LogicalPoint, ScreenBox, ScreenPoint};
use crate::error::{ViewError, ViewResult};

/// Bidirectional conversion between host-screen pixels and logical canvas
/// coordinates.
///
/// The logical canvas is fit inside the measured screen box preserving its
/// aspect ratio and centered, so a uniform scale plus centering offsets
/// fully describe the mapping. `screen_to_logical` and `logical_to_screen`
/// are exact inverses for any positive fit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: ScreenBox,
    fit_scale: f64,
    x_offset: f64,
    y_offset: f64,
}

impl CoordinateMapper {
    /// Fails with [`ViewError::DegenerateViewport`] when the measured box
    /// has no usable size (not yet laid out, or hidden). Callers must treat
    /// that as "no mapping available" and skip the update.
    pub fn new(bounds: ScreenBox, canvas: CanvasSize) -> ViewResult<Self> {
        if !bounds.is_measured() {
            return Err(ViewError::DegenerateViewport {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let fit_scale = (bounds.width / canvas.width).min(bounds.height / canvas.height);
        let x_offset = (bounds.width - canvas.width * fit_scale) / 2.0;
        let y_offset = (bounds.height - canvas.height * fit_scale) / 2.0;

        Ok(Self {
            bounds,
            fit_scale,
            x_offset,
            y_offset,
        })
    }

    #[must_use]
    pub fn bounds(self) -> ScreenBox {
        self.bounds
    }

    #[must_use]
    pub fn fit_scale(self) -> f64 {
        self.fit_scale
    }

    #[must_use]
    pub fn screen_to_logical(self, point: ScreenPoint) -> LogicalPoint {
        LogicalPoint {
            x: (point.x - self.bounds.left - self.x_offset) / self.fit_scale,
            y: (point.y - self.bounds.top - self.y_offset) / self.fit_scale,
        }
    }

    #[must_use]
    pub fn logical_to_screen(self, point: LogicalPoint) -> ScreenPoint {
        ScreenPoint {
            x: self.bounds.left + self.x_offset + point.x * self.fit_scale,
            y: self.bounds.top + self.y_offset + point.y * self.fit_scale,
        }
    }
}
