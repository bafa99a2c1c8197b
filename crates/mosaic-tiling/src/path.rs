//! Path addressing: a location in the tree as a walk of binary choices from the root.
//!
//! Paths carry no identity of their own. They are only meaningful against the
//! tree snapshot they were derived from and must be re-derived after a mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    First,
    Second,
}

impl Branch {
    pub fn other(self) -> Self {
        match self {
            Branch::First => Branch::Second,
            Branch::Second => Branch::First,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::First => f.write_str("first"),
            Branch::Second => f.write_str("second"),
        }
    }
}

/// An ordered sequence of branches. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutPath(Vec<Branch>);

impl LayoutPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Branch> + '_ {
        self.0.iter().copied()
    }

    pub fn last(&self) -> Option<Branch> {
        self.0.last().copied()
    }

    pub fn push(&mut self, branch: Branch) {
        self.0.push(branch);
    }

    /// The path one step further down.
    pub fn child(&self, branch: Branch) -> Self {
        let mut path = self.clone();
        path.push(branch);
        path
    }

    /// Path to the parent of the node this path identifies.
    pub fn parent(&self) -> Result<Self, LayoutError> {
        match self.0.split_last() {
            Some((_, init)) => Ok(Self(init.to_vec())),
            None => Err(LayoutError::EmptyPath),
        }
    }

    /// Path to the other child of this node's parent.
    pub fn sibling(&self) -> Result<Self, LayoutError> {
        let last = self.last().ok_or(LayoutError::EmptyPath)?;
        Ok(self.parent()?.child(last.other()))
    }

    /// True when `prefix` is this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &LayoutPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<Vec<Branch>> for LayoutPath {
    fn from(branches: Vec<Branch>) -> Self {
        Self(branches)
    }
}

impl FromIterator<Branch> for LayoutPath {
    fn from_iter<I: IntoIterator<Item = Branch>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for LayoutPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        f.write_str("[")?;
        for (i, branch) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{branch}")?;
        }
        f.write_str("]")
    }
}
