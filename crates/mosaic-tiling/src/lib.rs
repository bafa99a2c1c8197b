pub mod commands;
pub mod corner;
pub mod engine;
pub mod error;
pub mod events;
pub mod layout;
pub mod patch;
pub mod path;
pub mod store;
pub mod tree;
pub mod window;

pub use commands::LayoutCommand;
pub use corner::Corner;
pub use engine::{build, from_json, insert_at_corner, locate, path_to_corner, remove, to_json};
pub use error::{LayoutError, PatchError};
pub use events::{EventBus, LayoutEvent};
pub use layout::LayoutEngine;
pub use patch::{apply_patch, apply_patch_strict, Patch, PatchOp, PatchOutcome, RejectedPatch};
pub use path::{Branch, LayoutPath};
pub use store::LayoutStore;
pub use tree::{Direction, DropPosition, MosaicNode, MosaicTree};
pub use window::Window;
