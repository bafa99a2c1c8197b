use mosaic_common::{WindowId, WindowKind};

/// A registered tile. Its content host is owned by the rendering layer and
/// keyed by the same id as the tree leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
}

impl Window {
    pub fn new(id: WindowId, kind: WindowKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
        }
    }
}
