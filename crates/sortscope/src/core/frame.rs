//! What a driver sees after each advance

use super::snapshot::Snapshot;

/// Borrowed view of the state exposed by one step
///
/// Frames borrow from the sorter that produced them, so a driver has to be
/// done with a frame before it can ask for the next one.
#[derive(Debug)]
pub enum Frame<'a, T = u32> {
    /// One snapshot, mutated in place between steps
    Single(&'a Snapshot<T>),
    /// The merge phase of a split-list merge sort
    Merge {
        /// What is left of the lower half
        left: &'a Snapshot<T>,
        /// What is left of the upper half
        right: &'a Snapshot<T>,
        /// Elements merged so far
        merged: &'a Snapshot<T>,
    },
}

impl<'a, T> Frame<'a, T> {
    /// The snapshot that stands for the whole run at this step
    pub fn primary(&self) -> &'a Snapshot<T> {
        match *self {
            Frame::Single(snapshot) => snapshot,
            Frame::Merge { merged, .. } => merged,
        }
    }

    /// Every snapshot in the frame, in display order
    pub fn snapshots(&self) -> Vec<&'a Snapshot<T>> {
        match *self {
            Frame::Single(snapshot) => vec![snapshot],
            Frame::Merge {
                left,
                right,
                merged,
            } => vec![left, right, merged],
        }
    }

    /// Returns true if the primary snapshot is certified sorted
    pub fn is_sorted(&self) -> bool {
        self.primary().sorted
    }

    /// Returns true if this is a merge triple
    pub fn is_merge(&self) -> bool {
        matches!(self, Frame::Merge { .. })
    }
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Frame<'_, T> {}
