mod builder;
mod operations;
mod traversal;
mod types;

pub use builder::build_balanced;
pub use types::*;
