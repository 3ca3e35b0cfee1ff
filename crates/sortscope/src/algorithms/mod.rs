//! Sorting algorithms written as step sequences
//!
//! Each algorithm is a state machine over a shared [`Snapshot`] that pauses
//! after every meaningful change and certifies the list exactly once at the
//! end. [`Sorter`] wraps any of them behind one driver-facing interface, and
//! the registry maps display names to algorithms.
//!
//! [`Snapshot`]: crate::core::Snapshot

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod registry;
pub mod selection;
pub mod sorter;
pub mod split_merge;

pub use bubble::*;
pub use insertion::*;
pub use merge::*;
pub use quick::*;
pub use registry::*;
pub use selection::*;
pub use sorter::*;
pub use split_merge::*;

#[cfg(test)]
pub(crate) mod testing {
    //! Trace recording shared by the per-algorithm tests

    use crate::core::{Snapshot, Step, StepSequence};

    /// Owned copy of a snapshot as seen at one pause
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Observed {
        pub list: Vec<u32>,
        pub selection: Vec<usize>,
        pub swapped: Vec<usize>,
        pub special: Vec<usize>,
        pub sorted: bool,
    }

    impl Observed {
        pub fn new(list: &[u32]) -> Self {
            Self {
                list: list.to_vec(),
                selection: Vec::new(),
                swapped: Vec::new(),
                special: Vec::new(),
                sorted: false,
            }
        }

        pub fn selection(mut self, indices: &[usize]) -> Self {
            self.selection = indices.to_vec();
            self
        }

        pub fn swapped(mut self, indices: &[usize]) -> Self {
            self.swapped = indices.to_vec();
            self
        }

        pub fn special(mut self, indices: &[usize]) -> Self {
            self.special = indices.to_vec();
            self
        }

        pub fn sorted(mut self) -> Self {
            self.sorted = true;
            self
        }
    }

    impl From<&Snapshot<u32>> for Observed {
        fn from(snapshot: &Snapshot<u32>) -> Self {
            Self {
                list: snapshot.list.as_slice().to_vec(),
                selection: snapshot.selection.as_slice().to_vec(),
                swapped: snapshot.swapped.as_slice().to_vec(),
                special: snapshot.special.as_slice().to_vec(),
                sorted: snapshot.sorted,
            }
        }
    }

    /// Run `machine` over `values`, recording the snapshot at every pause
    pub fn record<M>(mut machine: M, values: Vec<u32>) -> Vec<Observed>
    where
        M: StepSequence<Snapshot<u32>, Yield = (), Output = ()>,
    {
        let mut snapshot = Snapshot::new(values);
        let mut trace = Vec::new();
        while let Step::Yielded(()) = machine.resume(&mut snapshot) {
            trace.push(Observed::from(&snapshot));
        }
        trace
    }

    /// Number of pauses whose list differs from the one before
    pub fn exchanges(trace: &[Observed]) -> usize {
        trace
            .windows(2)
            .filter(|pair| pair[0].list != pair[1].list)
            .count()
    }
}
