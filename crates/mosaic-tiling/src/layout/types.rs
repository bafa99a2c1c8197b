//! Layout engine types and configuration.

use mosaic_config::LayoutConfig;

/// Configuration for the layout engine that computes tile positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between tiles.
    pub gap: u32,
    /// Outer padding in pixels around the entire tiling area.
    pub outer_padding: u32,
}

impl LayoutEngine {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            gap: config.gap,
            outer_padding: config.outer_padding,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
