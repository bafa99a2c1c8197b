//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;

pub use layout::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicConfig {
    pub layout: LayoutConfig,
}
