pub mod errors;
pub mod types;

pub use errors::{ConfigError, MosaicError};
pub use types::{Corner, Rect, WindowId, WindowKind};
