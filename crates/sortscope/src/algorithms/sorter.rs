//! Driver-facing wrapper around every algorithm

use tracing::{debug, trace};

use super::bubble::BubbleSort;
use super::insertion::InsertionSort;
use super::merge::MergeSort;
use super::quick::QuickSort;
use super::registry::Algorithm;
use super::selection::SelectionSort;
use super::split_merge::SplitMergeSort;
use crate::core::{Element, Frame, Snapshot, Step, StepSequence};

#[derive(Debug)]
enum Machine<T> {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Selection(SelectionSort),
    Merge(MergeSort<T>),
    Quick(QuickSort<T>),
    SplitMerge(SplitMergeSort<T>),
}

impl<T: Element> Machine<T> {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bubble => Machine::Bubble(BubbleSort::new()),
            Algorithm::OptimizedBubble => Machine::Bubble(BubbleSort::optimized()),
            Algorithm::Insertion => Machine::Insertion(InsertionSort::new()),
            Algorithm::Selection => Machine::Selection(SelectionSort::new()),
            Algorithm::Merge => Machine::Merge(MergeSort::new()),
            Algorithm::Quick => Machine::Quick(QuickSort::new()),
            Algorithm::SplitMerge => Machine::SplitMerge(SplitMergeSort::new()),
        }
    }

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        match self {
            Machine::Bubble(m) => m.resume(snapshot),
            Machine::Insertion(m) => m.resume(snapshot),
            Machine::Selection(m) => m.resume(snapshot),
            Machine::Merge(m) => m.resume(snapshot),
            Machine::Quick(m) => m.resume(snapshot),
            Machine::SplitMerge(m) => m.resume(snapshot),
        }
    }
}

/// One sorting run: an algorithm, its state and the snapshot it works on
///
/// Call [`Sorter::advance`] until it returns [`Step::Done`]. Each
/// [`Step::Yielded`] carries a [`Frame`] borrowed from the sorter, which
/// has to be dropped before advancing again. The last frame before `Done`
/// is always certified sorted and carries no marks, and `advance` keeps
/// returning `Done` once the run is over.
///
/// # Example
/// ```rust
/// use sortscope::algorithms::{Algorithm, Sorter};
/// use sortscope::core::Step;
///
/// let mut sorter = Sorter::new(Algorithm::OptimizedBubble, vec![2u32, 1]);
/// let mut frames = 0;
/// while let Step::Yielded(frame) = sorter.advance() {
///     frames += 1;
///     if frame.is_sorted() {
///         assert_eq!(frame.primary().list.as_slice(), &[1, 2]);
///     }
/// }
/// assert_eq!(frames, 4);
/// assert!(sorter.advance().is_done());
/// ```
#[derive(Debug)]
pub struct Sorter<T = u32> {
    algorithm: Algorithm,
    snapshot: Snapshot<T>,
    machine: Machine<T>,
    steps: usize,
    finished: bool,
}

impl<T: Element> Sorter<T> {
    /// Start a run over a list or a prepared snapshot
    ///
    /// Any marks or completion flag already on the snapshot are dropped.
    pub fn new(algorithm: Algorithm, values: impl Into<Snapshot<T>>) -> Self {
        let mut snapshot = values.into();
        snapshot.clear_marks();
        snapshot.sorted = false;
        debug!(%algorithm, len = snapshot.len(), "Created sorter");
        Self {
            algorithm,
            snapshot,
            machine: Machine::new(algorithm),
            steps: 0,
            finished: false,
        }
    }

    /// Run to the next pause and show it, or report completion
    pub fn advance(&mut self) -> Step<Frame<'_, T>, ()> {
        if self.finished {
            return Step::Done(());
        }
        match self.machine.resume(&mut self.snapshot) {
            Step::Yielded(()) => {
                self.steps += 1;
                trace!(algorithm = %self.algorithm, step = self.steps, "Step");
                Step::Yielded(self.frame())
            }
            Step::Done(()) => {
                self.finished = true;
                debug!(algorithm = %self.algorithm, steps = self.steps, "Sort finished");
                Step::Done(())
            }
        }
    }

    /// Advance until done and return the number of steps taken by this call
    pub fn run_to_end(&mut self) -> usize {
        let before = self.steps;
        while self.advance().is_yielded() {}
        self.steps - before
    }

    /// Consume the sorter and keep its snapshot
    pub fn into_snapshot(self) -> Snapshot<T> {
        self.snapshot
    }
}

impl<T> Sorter<T> {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// What the last step exposed
    ///
    /// Before the first step this is the initial snapshot.
    pub fn frame(&self) -> Frame<'_, T> {
        match &self.machine {
            Machine::SplitMerge(m) => m.frame(&self.snapshot),
            _ => Frame::Single(&self.snapshot),
        }
    }

    /// The snapshot that stands for the whole run right now
    ///
    /// For a split-list merge in progress this is the output of the merge
    /// currently running.
    pub fn snapshot(&self) -> &Snapshot<T> {
        self.frame().primary()
    }

    /// Number of pauses so far, including the certified one
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns true once `advance` has reported `Done`
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns true once the run has certified its list
    pub fn is_sorted(&self) -> bool {
        self.snapshot().sorted
    }
}
