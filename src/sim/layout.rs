//! Viewport-derived geometry
//!
//! A `Layout` can only be built from a viewport that leaves room for an
//! obstacle gap, so everything downstream can draw spawn heights without
//! checking the range again.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Host window/canvas size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

/// Bounds derived from the viewport and tuning
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    /// Top of the ground strip; the player dies below it
    pub ground_line: f32,
    /// Where replacement pairs appear, just past the right edge
    pub spawn_x: f32,
    top_min: f32,
    top_max: f32,
}

impl Layout {
    pub fn new(tuning: &Tuning, viewport: Viewport) -> Result<Self, ConfigError> {
        if !viewport.width.is_finite() || viewport.width <= 0.0 {
            return Err(ConfigError::InvalidWidth(viewport.width));
        }

        let ground_line = viewport.height - tuning.ground_height;
        let top_min = tuning.margin_top;
        let top_max = ground_line - tuning.margin_bottom - tuning.gap;

        // Checked on the computed bounds so rounding can never leave an empty range
        if !viewport.height.is_finite() || !top_max.is_finite() || top_max <= top_min {
            return Err(ConfigError::ViewportTooSmall {
                height: viewport.height,
                required: tuning.min_viewport_height(),
            });
        }

        Ok(Self {
            viewport,
            ground_line,
            spawn_x: viewport.width + tuning.pipe_width,
            top_min,
            top_max,
        })
    }

    /// Half-open range `top_height` is drawn from; never empty
    pub fn top_range(&self) -> Range<f32> {
        self.top_min..self.top_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reference_viewport() {
        let layout = Layout::new(&Tuning::default(), Viewport::new(1280.0, 720.0)).unwrap();
        assert_eq!(layout.ground_line, 620.0);
        assert_eq!(layout.spawn_x, 1380.0);
        assert_eq!(layout.top_range(), 100.0..300.0);
    }

    #[test]
    fn test_layout_rejects_small_viewport() {
        let err = Layout::new(&Tuning::default(), Viewport::new(800.0, 520.0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ViewportTooSmall { required, .. } if required == 520.0
        ));

        let err = Layout::new(&Tuning::default(), Viewport::new(0.0, 720.0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWidth(_)));
    }

    #[test]
    fn test_layout_rejects_range_emptied_by_rounding() {
        let tuning = Tuning {
            margin_top: 0.3,
            gap: 0.7,
            margin_bottom: 0.2,
            ground_height: 0.3,
            ..Default::default()
        };
        // One ulp above the summed minimum height
        let height = f32::from_bits(tuning.min_viewport_height().to_bits() + 1);

        match Layout::new(&tuning, Viewport::new(800.0, height)) {
            Ok(layout) => assert!(!layout.top_range().is_empty()),
            Err(e) => assert!(matches!(e, ConfigError::ViewportTooSmall { .. })),
        }
        let err = Layout::new(&tuning, Viewport::new(800.0, 1.4)).unwrap_err();
        assert!(matches!(err, ConfigError::ViewportTooSmall { .. }));
    }
}
