//! Quicksort with Hoare partitioning
//!
//! The pivot is the value at the midpoint of the range. On adversarial
//! inputs this degrades to quadratic time like any fixed-pivot quicksort.

use tracing::debug;

use crate::core::{Element, Snapshot, Step, StepSequence};
use crate::delegate;

/// Index whose value is used as the pivot for `first..=last`
pub fn pivot_index(first: usize, last: usize) -> usize {
    first + (last - first) / 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Begin,
    ProbeLower,
    CheckLower,
    ProbeUpper,
    CheckUpper,
    Exchange,
    Settle,
}

/// One Hoare partition of `first..=last`
///
/// The range is selected for the whole partition. Both scan pointers are
/// marked `special` and every move of either pointer pauses once. Out of
/// place pairs are marked `swapped` and shown before and after the exchange.
/// Completes with the split index `j`: every value in `first..=j` is no
/// greater than every value in `j + 1..=last`.
#[derive(Debug, Clone)]
pub struct HoarePartition<T> {
    first: usize,
    last: usize,
    pivot: T,
    i: usize,
    j: usize,
    upper_moved: bool,
    phase: Phase,
}

impl<T: Clone> HoarePartition<T> {
    /// Partition `first..=last` of `snapshot` around its midpoint value
    pub fn new(snapshot: &Snapshot<T>, first: usize, last: usize) -> Self {
        Self {
            first,
            last,
            pivot: snapshot.list[pivot_index(first, last)].clone(),
            i: first,
            j: last,
            upper_moved: false,
            phase: Phase::Begin,
        }
    }
}

impl<T> HoarePartition<T> {
    fn mark_pointers(&self, snapshot: &mut Snapshot<T>) {
        snapshot.special.clear();
        snapshot.special.add(self.i);
        if self.upper_moved && self.j != self.i {
            snapshot.special.add(self.j);
        }
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for HoarePartition<T> {
    type Yield = ();
    type Output = usize;

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), usize> {
        loop {
            match self.phase {
                Phase::Begin => {
                    debug!(
                        first = self.first,
                        last = self.last,
                        pivot = pivot_index(self.first, self.last),
                        "Partitioning"
                    );
                    snapshot.selection.clear();
                    snapshot.special.clear();
                    snapshot.select(self.first, self.last);
                    self.phase = Phase::ProbeLower;
                }
                Phase::ProbeLower => {
                    self.mark_pointers(snapshot);
                    self.phase = Phase::CheckLower;
                    return Step::Yielded(());
                }
                Phase::CheckLower => {
                    if snapshot.list[self.i] < self.pivot {
                        self.i += 1;
                        self.phase = Phase::ProbeLower;
                    } else {
                        self.phase = Phase::ProbeUpper;
                    }
                }
                Phase::ProbeUpper => {
                    self.upper_moved = true;
                    self.mark_pointers(snapshot);
                    self.phase = Phase::CheckUpper;
                    return Step::Yielded(());
                }
                Phase::CheckUpper => {
                    if snapshot.list[self.j] > self.pivot {
                        self.j -= 1;
                        self.phase = Phase::ProbeUpper;
                        continue;
                    }
                    if self.i >= self.j {
                        return Step::Done(self.j);
                    }
                    snapshot.swapped.add(self.i);
                    snapshot.swapped.add(self.j);
                    self.phase = Phase::Exchange;
                    return Step::Yielded(());
                }
                Phase::Exchange => {
                    snapshot.list.swap(self.i, self.j);
                    self.phase = Phase::Settle;
                    return Step::Yielded(());
                }
                Phase::Settle => {
                    snapshot.swapped.clear();
                    self.i += 1;
                    self.j -= 1;
                    self.phase = Phase::ProbeLower;
                }
            }
        }
    }
}

#[derive(Debug)]
enum RangeState<T> {
    Begin,
    Partitioning(HoarePartition<T>),
    Lower(usize, Box<QuickRange<T>>),
    Upper(Box<QuickRange<T>>),
    Finished,
}

/// Sorts `first..=last` by partitioning and recursing on both sides
#[derive(Debug)]
pub struct QuickRange<T> {
    first: usize,
    last: usize,
    state: RangeState<T>,
}

impl<T> QuickRange<T> {
    pub fn new(first: usize, last: usize) -> Self {
        Self {
            first,
            last,
            state: RangeState::Begin,
        }
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for QuickRange<T> {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match &mut self.state {
                RangeState::Begin => {
                    self.state = if self.first < self.last {
                        let partition = HoarePartition::new(snapshot, self.first, self.last);
                        RangeState::Partitioning(partition)
                    } else {
                        RangeState::Finished
                    };
                }
                RangeState::Partitioning(partition) => {
                    let split = delegate!(*partition, snapshot);
                    let lower = QuickRange::new(self.first, split);
                    self.state = RangeState::Lower(split, Box::new(lower));
                }
                RangeState::Lower(split, lower) => {
                    let split = *split;
                    delegate!(**lower, snapshot);
                    let upper = QuickRange::new(split + 1, self.last);
                    self.state = RangeState::Upper(Box::new(upper));
                }
                RangeState::Upper(upper) => {
                    delegate!(**upper, snapshot);
                    self.state = RangeState::Finished;
                }
                RangeState::Finished => return Step::Done(()),
            }
        }
    }
}

#[derive(Debug)]
enum State<T> {
    Begin,
    Sorting(QuickRange<T>),
    Certify,
    Finished,
}

/// Quicksort on the shared list; only the outermost call certifies
#[derive(Debug)]
pub struct QuickSort<T> {
    state: State<T>,
}

impl<T> QuickSort<T> {
    pub fn new() -> Self {
        Self {
            state: State::Begin,
        }
    }
}

impl<T> Default for QuickSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for QuickSort<T> {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match &mut self.state {
                State::Begin => {
                    self.state = match snapshot.len() {
                        0 => State::Certify,
                        len => State::Sorting(QuickRange::new(0, len - 1)),
                    };
                }
                State::Sorting(range) => {
                    delegate!(*range, snapshot);
                    self.state = State::Certify;
                }
                State::Certify => {
                    snapshot.certify();
                    self.state = State::Finished;
                    return Step::Yielded(());
                }
                State::Finished => return Step::Done(()),
            }
        }
    }
}
