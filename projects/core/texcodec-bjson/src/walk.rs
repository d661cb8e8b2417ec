//! Limits for walking container trees that skipped validation.
//!
//! Buffers imported with [`Validation::BypassValidation`](crate::Validation)
//! may point many cells at one subtree, or nest without end. Walks that copy
//! or convert a tree charge every byte they read against a [`Walk`], and
//! stop descending past [`MAX_NESTING_DEPTH`]. Whatever does not fit reads
//! as null.

use crate::container::ContainerRef;
use crate::layout::{MAX_NESTING_DEPTH, MAX_SIZE};

/// Byte budget for one walk, starting at the root container's size.
///
/// Items of a validated container own disjoint bytes, so a walk over a
/// validated tree never runs out.
pub(crate) struct Walk {
    remaining: usize,
}

impl Walk {
    pub(crate) fn new(root: ContainerRef<'_>) -> Self {
        Self {
            remaining: (root.size() as usize).min(MAX_SIZE),
        }
    }

    /// Takes `bytes` from the budget. Returns `false`, taking nothing, if
    /// fewer remain.
    #[inline]
    pub(crate) fn charge(&mut self, bytes: usize) -> bool {
        match self.remaining.checked_sub(bytes) {
            Some(remaining) => {
                self.remaining = remaining;
                true
            }
            None => false,
        }
    }
}

/// Whether a container at `depth` may have its nested containers read.
#[inline]
pub(crate) fn can_descend(depth: usize) -> bool {
    depth < MAX_NESTING_DEPTH
}
