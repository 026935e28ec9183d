//! Mapping between logical pixels and terminal cells.

use serde::{Deserialize, Serialize};

/// Pixel size of a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub column_px: f32,
    pub row_px: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            column_px: 8.0,
            row_px: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn width_px(&self, columns: u16) -> f32 {
        columns as f32 * self.column_px
    }

    /// Column containing the pixel position `px`, which may be negative.
    pub fn column_at(&self, px: f32) -> i32 {
        (px / self.column_px).floor() as i32
    }

    /// Whole columns needed to show `px` pixels, at least one.
    pub fn columns(&self, px: f32) -> u16 {
        (px / self.column_px).round().clamp(1.0, u16::MAX as f32) as u16
    }

    /// Whole rows needed to show `px` pixels, at least one.
    pub fn rows(&self, px: f32) -> u16 {
        (px / self.row_px).round().clamp(1.0, u16::MAX as f32) as u16
    }

    /// Like [`rows`](Self::rows) but allows zero, for gaps and padding.
    pub fn gap_rows(&self, px: f32) -> u16 {
        (px / self.row_px).round().clamp(0.0, u16::MAX as f32) as u16
    }

    pub fn gap_columns(&self, px: f32) -> u16 {
        (px / self.column_px).round().clamp(0.0, u16::MAX as f32) as u16
    }
}
