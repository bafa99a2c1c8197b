use mosaic_common::{MosaicError, WindowId};

use crate::path::LayoutPath;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("the root path has no parent")]
    EmptyPath,

    #[error("no node at path {0}")]
    PathNotFound(LayoutPath),

    #[error("id is already present in the tree")]
    DuplicateId,

    #[error("operation requires a non-empty tree")]
    EmptyTree,

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("split percentage {0} is outside [0, 100]")]
    InvalidPercentage(f64),

    #[error("{0} is not a registered window")]
    UnknownWindow(WindowId),

    #[error("window ids are exhausted")]
    IdsExhausted,

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchError {
    #[error("no node at path {0}")]
    PathNotFound(LayoutPath),

    #[error("node at path {0} is not a split")]
    NotASplit(LayoutPath),

    #[error("split percentage {0} is outside [0, 100]")]
    InvalidPercentage(f64),

    #[error("instruction at path {0} is shadowed by an ancestor instruction in the same batch")]
    Shadowed(LayoutPath),

    #[error("cannot patch an empty tree")]
    EmptyTree,

    #[error("split at path {0} lost a child to a removal in the same batch")]
    Collapsed(LayoutPath),
}

impl From<LayoutError> for MosaicError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Serialization(msg) => MosaicError::Serialization(msg),
            other => MosaicError::Layout(other.to_string()),
        }
    }
}

impl From<PatchError> for MosaicError {
    fn from(err: PatchError) -> Self {
        MosaicError::Layout(err.to_string())
    }
}
