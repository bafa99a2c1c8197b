//! Batch patch application for live resize and reparent operations.
//!
//! Every instruction in a batch is resolved against the tree it was given,
//! never against the partial result of earlier instructions. The tree is
//! rebuilt bottom-up: edits below a node land before that node's own edits,
//! so a resize of a parent and a change to one of its children in the same
//! batch both take effect. A split that loses a child to a removal in the
//! same batch no longer exists, so field edits aimed at it are rejected.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PatchError;
use crate::path::{Branch, LayoutPath};
use crate::tree::{Direction, MosaicNode, MosaicTree};

/// What to do with the node at a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatchOp<T> {
    /// Swap in a whole new subtree.
    Replace(MosaicNode<T>),
    /// Change a split's share of its first child. `None` resets to even.
    SetSplitPercentage(Option<f64>),
    SetDirection(Direction),
    /// Prune the node and promote its sibling.
    Remove,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch<T> {
    pub path: LayoutPath,
    pub op: PatchOp<T>,
}

impl<T> Patch<T> {
    pub fn new(path: LayoutPath, op: PatchOp<T>) -> Self {
        Self { path, op }
    }

    pub fn set_split_percentage(path: LayoutPath, percentage: f64) -> Self {
        Self::new(path, PatchOp::SetSplitPercentage(Some(percentage)))
    }

    fn discards_subtree(&self) -> bool {
        matches!(self.op, PatchOp::Replace(_) | PatchOp::Remove)
    }
}

/// An instruction that did not apply, by its index in the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedPatch {
    pub index: usize,
    pub error: PatchError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome<T> {
    pub tree: MosaicTree<T>,
    pub applied: usize,
    pub rejected: Vec<RejectedPatch>,
}

impl<T> PatchOutcome<T> {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Apply `patches` to `tree`, collecting instructions that cannot apply
/// instead of aborting the batch.
pub fn apply_patch<T: Clone + PartialEq>(tree: &MosaicTree<T>, patches: &[Patch<T>]) -> PatchOutcome<T> {
    let mut rejected = Vec::new();
    let accepted = triage(tree, patches, &mut rejected);

    let patched = match tree {
        Some(root) => {
            let mut builder = Rebuild {
                patches,
                accepted: &accepted,
                rejected: &mut rejected,
            };
            let mut branches = Vec::new();
            builder.rebuild(root, &mut branches)
        }
        None => apply_to_empty(patches, &accepted),
    };

    for rejection in &rejected {
        warn!(
            "patch instruction {} rejected: {}",
            rejection.index, rejection.error
        );
    }
    rejected.sort_by_key(|r| r.index);

    PatchOutcome {
        tree: patched,
        applied: patches.len() - rejected.len(),
        rejected,
    }
}

/// All-or-nothing variant: the first rejected instruction is returned and
/// no change is made.
pub fn apply_patch_strict<T: Clone + PartialEq>(
    tree: &MosaicTree<T>,
    patches: &[Patch<T>],
) -> Result<MosaicTree<T>, PatchError> {
    let outcome = apply_patch(tree, patches);
    match outcome.rejected.into_iter().next() {
        Some(rejection) => Err(rejection.error),
        None => Ok(outcome.tree),
    }
}

/// Check every instruction against the input snapshot. Returns the indices
/// of instructions that may apply.
fn triage<T: Clone + PartialEq>(
    tree: &MosaicTree<T>,
    patches: &[Patch<T>],
    rejected: &mut Vec<RejectedPatch>,
) -> Vec<usize> {
    let mut valid = Vec::new();
    for (index, patch) in patches.iter().enumerate() {
        match validate(tree, patch) {
            Ok(()) => valid.push(index),
            Err(error) => rejected.push(RejectedPatch { index, error }),
        }
    }

    valid
        .iter()
        .copied()
        .filter(|&index| {
            let patch = &patches[index];
            let shadowed = valid.iter().any(|&other| {
                let ancestor = &patches[other];
                other != index
                    && ancestor.discards_subtree()
                    && patch.path.starts_with(&ancestor.path)
                    && (patch.path != ancestor.path
                        || (matches!(ancestor.op, PatchOp::Remove) && other < index))
            });
            if shadowed {
                rejected.push(RejectedPatch {
                    index,
                    error: PatchError::Shadowed(patch.path.clone()),
                });
            }
            !shadowed
        })
        .collect()
}

fn validate<T>(tree: &MosaicTree<T>, patch: &Patch<T>) -> Result<(), PatchError> {
    if let PatchOp::Replace(replacement) = &patch.op {
        if let Some(p) = replacement.invalid_percentage() {
            return Err(PatchError::InvalidPercentage(p));
        }
    }
    let root = match tree {
        Some(root) => root,
        None if patch.path.is_root() && matches!(patch.op, PatchOp::Replace(_)) => return Ok(()),
        None => return Err(PatchError::EmptyTree),
    };
    let node = root
        .node_at_path(&patch.path)
        .ok_or_else(|| PatchError::PathNotFound(patch.path.clone()))?;
    match &patch.op {
        PatchOp::SetSplitPercentage(percentage) => {
            if !node.is_split() {
                return Err(PatchError::NotASplit(patch.path.clone()));
            }
            match percentage {
                Some(p) if !(0.0..=100.0).contains(p) => Err(PatchError::InvalidPercentage(*p)),
                _ => Ok(()),
            }
        }
        PatchOp::SetDirection(_) if !node.is_split() => {
            Err(PatchError::NotASplit(patch.path.clone()))
        }
        _ => Ok(()),
    }
}

fn apply_to_empty<T: Clone>(patches: &[Patch<T>], accepted: &[usize]) -> MosaicTree<T> {
    accepted
        .iter()
        .filter_map(|&index| match &patches[index].op {
            PatchOp::Replace(node) => Some(node.clone()),
            _ => None,
        })
        .last()
}

struct Rebuild<'a, T> {
    patches: &'a [Patch<T>],
    accepted: &'a [usize],
    rejected: &'a mut Vec<RejectedPatch>,
}

impl<T: Clone + PartialEq> Rebuild<'_, T> {
    /// Rebuild `node`, found at `branches` in the input snapshot. `None`
    /// means the node was removed.
    fn rebuild(&mut self, node: &MosaicNode<T>, branches: &mut Vec<Branch>) -> Option<MosaicNode<T>> {
        let patches = self.patches;
        let (mut current, collapsed) = match node {
            MosaicNode::Split {
                direction,
                first,
                second,
                split_percentage,
            } if self.has_edits_below(branches) => {
                branches.push(Branch::First);
                let first = self.rebuild(first, branches);
                branches.pop();
                branches.push(Branch::Second);
                let second = self.rebuild(second, branches);
                branches.pop();
                match (first, second) {
                    (Some(first), Some(second)) => (
                        MosaicNode::Split {
                            direction: *direction,
                            first: Box::new(first),
                            second: Box::new(second),
                            split_percentage: *split_percentage,
                        },
                        false,
                    ),
                    (Some(kept), None) | (None, Some(kept)) => (kept, true),
                    (None, None) => {
                        for index in self.accepted_at(branches) {
                            self.reject(index, PatchError::Collapsed(patches[index].path.clone()));
                        }
                        return None;
                    }
                }
            }
            _ => (node.clone(), false),
        };

        for index in self.accepted_at(branches) {
            let patch = &patches[index];
            match &patch.op {
                PatchOp::Remove => return None,
                PatchOp::Replace(replacement) => current = replacement.clone(),
                // The split this edit addressed is gone; `current` is a
                // promoted child and must keep its own fields.
                PatchOp::SetSplitPercentage(_) | PatchOp::SetDirection(_) if collapsed => {
                    self.reject(index, PatchError::Collapsed(patch.path.clone()))
                }
                PatchOp::SetSplitPercentage(percentage) => match &mut current {
                    MosaicNode::Split {
                        split_percentage, ..
                    } => *split_percentage = *percentage,
                    MosaicNode::Leaf(_) => self.reject(index, PatchError::NotASplit(patch.path.clone())),
                },
                PatchOp::SetDirection(new_direction) => match &mut current {
                    MosaicNode::Split { direction, .. } => *direction = *new_direction,
                    MosaicNode::Leaf(_) => self.reject(index, PatchError::NotASplit(patch.path.clone())),
                },
            }
        }
        Some(current)
    }

    /// Accepted instructions addressed exactly at `branches`, in batch order.
    fn accepted_at(&self, branches: &[Branch]) -> Vec<usize> {
        self.accepted
            .iter()
            .copied()
            .filter(|&index| self.patches[index].path.branches() == branches)
            .collect()
    }

    fn has_edits_below(&self, branches: &[Branch]) -> bool {
        self.accepted.iter().any(|&index| {
            let path = self.patches[index].path.branches();
            path.len() > branches.len() && path.starts_with(branches)
        })
    }

    fn reject(&mut self, index: usize, error: PatchError) {
        self.rejected.push(RejectedPatch { index, error });
    }
}
