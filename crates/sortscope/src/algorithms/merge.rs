//! Merge Sort over index ranges of one shared list
//!
//! Recursion happens on `first..=last` ranges. Each merge collects the two
//! sorted halves into a scratch buffer while the list is left untouched,
//! then copies the buffer back one position per step. Until the copy back
//! of a range ends, a value of that range can briefly appear twice.

use tracing::debug;

use crate::core::{Element, List, Snapshot, Step, StepSequence};
use crate::delegate;

/// Mark a merge cursor, skipping positions past the end of the list
fn mark_cursor<T>(snapshot: &mut Snapshot<T>, cursor: usize) {
    if cursor < snapshot.len() {
        snapshot.special.add(cursor);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergePhase {
    Begin,
    Compare,
    Drain,
}

/// Merges the sorted ranges `a..=a_end` and `a_end + 1..=b_end`
///
/// Both cursors are marked `special`. One pause after marking them, and one
/// after every element taken. Completes with the merged values; ties go to
/// the lower range.
#[derive(Debug, Clone)]
pub struct RangeMerge<T> {
    a: usize,
    a_end: usize,
    b: usize,
    b_end: usize,
    merged: List<T>,
    phase: MergePhase,
}

impl<T> RangeMerge<T> {
    pub fn new(first: usize, middle: usize, last: usize) -> Self {
        Self {
            a: first,
            a_end: middle,
            b: middle + 1,
            b_end: last,
            merged: List::with_capacity(last + 1 - first),
            phase: MergePhase::Begin,
        }
    }

    fn take(&mut self, snapshot: &mut Snapshot<T>, from_lower: bool)
    where
        T: Clone,
    {
        let cursor = if from_lower { &mut self.a } else { &mut self.b };
        self.merged.add(snapshot.list[*cursor].clone());
        *cursor += 1;
        let cursor = *cursor;
        snapshot.special.clear();
        mark_cursor(snapshot, cursor);
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for RangeMerge<T> {
    type Yield = ();
    type Output = List<T>;

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), List<T>> {
        loop {
            match self.phase {
                MergePhase::Begin => {
                    mark_cursor(snapshot, self.a);
                    mark_cursor(snapshot, self.b);
                    self.phase = MergePhase::Compare;
                    return Step::Yielded(());
                }
                MergePhase::Compare => {
                    if self.a > self.a_end || self.b > self.b_end {
                        self.phase = MergePhase::Drain;
                        continue;
                    }
                    let from_lower = snapshot.list[self.a] <= snapshot.list[self.b];
                    self.take(snapshot, from_lower);
                    return Step::Yielded(());
                }
                MergePhase::Drain => {
                    if self.a <= self.a_end {
                        self.take(snapshot, true);
                    } else if self.b <= self.b_end {
                        self.take(snapshot, false);
                    } else {
                        return Step::Done(std::mem::take(&mut self.merged));
                    }
                    return Step::Yielded(());
                }
            }
        }
    }
}

#[derive(Debug)]
enum RangeState<T> {
    Begin,
    Lower(Box<MergeRange<T>>),
    Upper(Box<MergeRange<T>>),
    Merging(RangeMerge<T>),
    CopyBack { merged: List<T>, next: usize },
    Finished,
}

/// Sorts `first..=last` by sorting both halves and merging them
///
/// A single-element range marks itself `selection` and pauses once. Larger
/// ranges select their whole extent before merging.
#[derive(Debug)]
pub struct MergeRange<T> {
    first: usize,
    last: usize,
    state: RangeState<T>,
}

impl<T> MergeRange<T> {
    pub fn new(first: usize, last: usize) -> Self {
        Self {
            first,
            last,
            state: RangeState::Begin,
        }
    }

    fn middle(&self) -> usize {
        self.first + (self.last - self.first) / 2
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for MergeRange<T> {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match &mut self.state {
                RangeState::Begin => {
                    if self.first > self.last {
                        self.state = RangeState::Finished;
                    } else if self.first == self.last {
                        snapshot.selection.add(self.first);
                        self.state = RangeState::Finished;
                        return Step::Yielded(());
                    } else {
                        let lower = MergeRange::new(self.first, self.middle());
                        self.state = RangeState::Lower(Box::new(lower));
                    }
                }
                RangeState::Lower(lower) => {
                    delegate!(**lower, snapshot);
                    let upper = MergeRange::new(self.middle() + 1, self.last);
                    self.state = RangeState::Upper(Box::new(upper));
                }
                RangeState::Upper(upper) => {
                    delegate!(**upper, snapshot);
                    snapshot.special.clear();
                    snapshot.selection.clear();
                    snapshot.select(self.first, self.last);
                    debug!(first = self.first, last = self.last, "Merging range");
                    self.state =
                        RangeState::Merging(RangeMerge::new(self.first, self.middle(), self.last));
                }
                RangeState::Merging(merge) => {
                    let merged = delegate!(*merge, snapshot);
                    self.state = RangeState::CopyBack { merged, next: 0 };
                }
                RangeState::CopyBack { merged, next } => {
                    let Some(value) = merged.get(*next) else {
                        self.state = RangeState::Finished;
                        continue;
                    };
                    snapshot.list.set(self.first + *next, value.clone());
                    *next += 1;
                    return Step::Yielded(());
                }
                RangeState::Finished => return Step::Done(()),
            }
        }
    }
}

#[derive(Debug)]
enum State<T> {
    Begin,
    Sorting(MergeRange<T>),
    Certify,
    Finished,
}

/// Top-down Merge Sort on the shared list
#[derive(Debug)]
pub struct MergeSort<T> {
    state: State<T>,
}

impl<T> MergeSort<T> {
    pub fn new() -> Self {
        Self {
            state: State::Begin,
        }
    }
}

impl<T> Default for MergeSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for MergeSort<T> {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match &mut self.state {
                State::Begin => {
                    self.state = match snapshot.len() {
                        0 | 1 => State::Certify,
                        len => State::Sorting(MergeRange::new(0, len - 1)),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{record, Observed};
    use crate::core::drive;

    #[test]
    fn test_two_elements() {
        let trace = record(MergeSort::new(), vec![2, 1]);
        assert_eq!(
            trace,
            vec![
                // Each half is a single element.
                Observed::new(&[2, 1]).selection(&[0]),
                Observed::new(&[2, 1]).selection(&[0, 1]),
                // Merge: both cursors, then one per element taken.
                Observed::new(&[2, 1]).selection(&[0, 1]).special(&[0, 1]),
                // Upper cursor moved past the end: nothing to mark.
                Observed::new(&[2, 1]).selection(&[0, 1]),
                Observed::new(&[2, 1]).selection(&[0, 1]).special(&[1]),
                // Copy back.
                Observed::new(&[1, 1]).selection(&[0, 1]).special(&[1]),
                Observed::new(&[1, 2]).selection(&[0, 1]).special(&[1]),
                Observed::new(&[1, 2]).sorted(),
            ]
        );
    }

    #[test]
    fn test_cursor_past_end_is_not_marked() {
        let mut snapshot = Snapshot::new(vec![1u32, 2]);
        let mut merge = RangeMerge::new(0, 0, 1);
        let mut stale = false;
        let (merged, _) = drive(&mut merge, &mut snapshot, |s, _| {
            stale |= s.has_stale_marks();
        });
        assert!(!stale);
        assert_eq!(merged.as_slice(), &[1, 2]);
    }

    /// Orders on the number only, so the tag shows which copy came first.
    #[derive(Debug, Clone, PartialEq)]
    struct Tagged(u8, char);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn test_range_merge_prefers_lower_on_ties() {
        let mut snapshot = Snapshot::new(vec![
            Tagged(1, 'a'),
            Tagged(2, 'b'),
            Tagged(1, 'c'),
            Tagged(2, 'd'),
        ]);
        let (merged, _) = drive(&mut RangeMerge::new(0, 1, 3), &mut snapshot, |_, _| {});
        let tags: String = merged.iter().map(|t| t.1).collect();
        assert_eq!(tags, "acbd");
    }

    #[test]
    fn test_merge_leaves_list_alone_until_copy_back() {
        let mut snapshot = Snapshot::new(vec![4u32, 9, 1, 5]);
        let (merged, pauses) = drive(&mut RangeMerge::new(0, 1, 3), &mut snapshot, |s, _| {
            assert_eq!(s.list.as_slice(), &[4, 9, 1, 5]);
        });
        assert_eq!(merged.as_slice(), &[1, 4, 5, 9]);
        // Initial cursors plus one pause per element.
        assert_eq!(pauses, 5);
    }

    #[test]
    fn test_sorts_with_duplicates() {
        let trace = record(MergeSort::new(), vec![5, 3, 9, 1, 3, 7, 2]);
        assert_eq!(
            trace.last().unwrap(),
            &Observed::new(&[1, 2, 3, 3, 5, 7, 9]).sorted()
        );
        assert_eq!(trace.iter().filter(|o| o.sorted).count(), 1);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(record(MergeSort::new(), vec![]), vec![Observed::new(&[]).sorted()]);
        assert_eq!(
            record(MergeSort::new(), vec![4]),
            vec![Observed::new(&[4]).sorted()]
        );
    }
}
