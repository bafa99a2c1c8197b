//! Tiling layout configuration types.

use mosaic_common::Corner;
use serde::{Deserialize, Serialize};

/// Tiling layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between tiles in pixels (valid range: 0-20).
    pub gap: u32,
    /// Screen-edge padding in pixels (valid range: 0-40).
    pub outer_padding: u32,
    /// Corner new windows open at.
    pub default_corner: Corner,
    /// Share given to a tile when it is expanded (valid range: 50-100).
    pub expand_percentage: f64,
    /// Percentage points moved per resize step (valid range: 1-25).
    pub resize_step: u32,
    /// Lower bound for a resized split (valid range: 0-100).
    pub min_split_percentage: f64,
    /// Upper bound for a resized split (valid range: 0-100).
    pub max_split_percentage: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 6,
            outer_padding: 0,
            default_corner: Corner::TopRight,
            expand_percentage: 70.0,
            resize_step: 5,
            min_split_percentage: 10.0,
            max_split_percentage: 90.0,
        }
    }
}
