//! Merge Sort that splits the list into owned halves
//!
//! Each level of recursion owns its half of the list as a separate
//! snapshot. Only merges pause, and every pause exposes three snapshots: the
//! remaining lower half, the remaining upper half and the merged output so
//! far. The shared snapshot is replaced by the fully merged result at the
//! end.

use tracing::debug;

use crate::core::{Element, Frame, List, Snapshot, Step, StepSequence};
use crate::delegate;

/// Split `list` into a lower half of `len / 2` elements and the rest
pub fn split_list<T>(list: List<T>) -> (List<T>, List<T>) {
    let mut lower = list.into_vec();
    let upper = lower.split_off(lower.len() / 2);
    (lower.into(), upper.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergePhase {
    Compare,
    Take,
    Drain,
    DrainTake,
    Complete,
    Finished,
}

/// Stable merge of two owned sorted lists
///
/// While both sides have values, the two fronts are marked `selection` in
/// their own snapshots and shown before one of them moves to the output.
/// The rest of whichever side remains is then moved one value per pause.
/// A last pause shows the completed output with both sides emptied of marks.
#[derive(Debug, Clone)]
pub struct ListMerge<T> {
    lower: Snapshot<T>,
    upper: Snapshot<T>,
    merged: Snapshot<T>,
    a: usize,
    b: usize,
    phase: MergePhase,
}

impl<T> ListMerge<T> {
    pub fn new(lower: List<T>, upper: List<T>) -> Self {
        let capacity = lower.len() + upper.len();
        Self {
            lower: Snapshot::new(lower),
            upper: Snapshot::new(upper),
            merged: Snapshot::new(List::with_capacity(capacity)),
            a: 0,
            b: 0,
            phase: MergePhase::Compare,
        }
    }

    /// The lower, upper and merged snapshots as a frame
    pub fn frame(&self) -> Frame<'_, T> {
        Frame::Merge {
            left: &self.lower,
            right: &self.upper,
            merged: &self.merged,
        }
    }

    fn clear_fronts(&mut self) {
        self.lower.selection.clear();
        self.upper.selection.clear();
    }
}

impl<T: Element> StepSequence for ListMerge<T> {
    type Yield = ();
    type Output = Snapshot<T>;

    fn resume(&mut self, _: &mut ()) -> Step<(), Snapshot<T>> {
        loop {
            match self.phase {
                MergePhase::Compare => {
                    self.clear_fronts();
                    if self.a < self.lower.len() && self.b < self.upper.len() {
                        self.lower.selection.add(self.a);
                        self.upper.selection.add(self.b);
                        self.phase = MergePhase::Take;
                        return Step::Yielded(());
                    }
                    self.phase = MergePhase::Drain;
                }
                MergePhase::Take => {
                    let lower = &self.lower.list[self.a];
                    let upper = &self.upper.list[self.b];
                    if lower <= upper {
                        self.merged.list.add(lower.clone());
                        self.a += 1;
                    } else {
                        self.merged.list.add(upper.clone());
                        self.b += 1;
                    }
                    self.phase = MergePhase::Compare;
                }
                MergePhase::Drain => {
                    self.clear_fronts();
                    if self.a < self.lower.len() {
                        self.lower.selection.add(self.a);
                    } else if self.b < self.upper.len() {
                        self.upper.selection.add(self.b);
                    } else {
                        self.phase = MergePhase::Complete;
                        continue;
                    }
                    self.phase = MergePhase::DrainTake;
                    return Step::Yielded(());
                }
                MergePhase::DrainTake => {
                    let value = if self.a < self.lower.len() {
                        self.a += 1;
                        &self.lower.list[self.a - 1]
                    } else {
                        self.b += 1;
                        &self.upper.list[self.b - 1]
                    };
                    self.merged.list.add(value.clone());
                    self.phase = MergePhase::Drain;
                }
                MergePhase::Complete => {
                    self.clear_fronts();
                    self.phase = MergePhase::Finished;
                    return Step::Yielded(());
                }
                MergePhase::Finished => return Step::Done(std::mem::take(&mut self.merged)),
            }
        }
    }
}

#[derive(Debug)]
enum NodeState<T> {
    Begin,
    Lower {
        lower: Box<SplitMergeNode<T>>,
        upper: List<T>,
    },
    Upper {
        lower: Snapshot<T>,
        upper: Box<SplitMergeNode<T>>,
    },
    Merging(ListMerge<T>),
    Finished,
}

/// One level of the recursion, owning its part of the list
///
/// Lists of length one or less complete at once without pausing and hand
/// back their snapshot unchanged.
#[derive(Debug)]
pub struct SplitMergeNode<T> {
    snapshot: Snapshot<T>,
    state: NodeState<T>,
}

impl<T> SplitMergeNode<T> {
    pub fn new(list: List<T>) -> Self {
        Self {
            snapshot: Snapshot::new(list),
            state: NodeState::Begin,
        }
    }

    /// The frame of whichever merge is currently running below this node
    pub fn frame(&self) -> Frame<'_, T> {
        match &self.state {
            NodeState::Lower { lower, .. } => lower.frame(),
            NodeState::Upper { upper, .. } => upper.frame(),
            NodeState::Merging(merge) => merge.frame(),
            NodeState::Begin | NodeState::Finished => Frame::Single(&self.snapshot),
        }
    }
}

impl<T: Element> StepSequence for SplitMergeNode<T> {
    type Yield = ();
    type Output = Snapshot<T>;

    fn resume(&mut self, cx: &mut ()) -> Step<(), Snapshot<T>> {
        loop {
            match &mut self.state {
                NodeState::Begin => {
                    if self.snapshot.len() <= 1 {
                        self.state = NodeState::Finished;
                        continue;
                    }
                    let (lower, upper) = split_list(std::mem::take(&mut self.snapshot.list));
                    self.state = NodeState::Lower {
                        lower: Box::new(SplitMergeNode::new(lower)),
                        upper,
                    };
                }
                NodeState::Lower { lower, upper } => {
                    let sorted = delegate!(**lower, cx);
                    let upper = std::mem::take(upper);
                    self.state = NodeState::Upper {
                        lower: sorted,
                        upper: Box::new(SplitMergeNode::new(upper)),
                    };
                }
                NodeState::Upper { lower, upper } => {
                    let sorted = delegate!(**upper, cx);
                    let lower = std::mem::take(&mut lower.list);
                    debug!(
                        lower = lower.len(),
                        upper = sorted.len(),
                        "Merging halves"
                    );
                    self.state = NodeState::Merging(ListMerge::new(lower, sorted.list));
                }
                NodeState::Merging(merge) => {
                    self.snapshot = delegate!(*merge, cx);
                    self.state = NodeState::Finished;
                }
                NodeState::Finished => {
                    return Step::Done(std::mem::take(&mut self.snapshot));
                }
            }
        }
    }
}

#[derive(Debug)]
enum State<T> {
    Begin,
    Sorting(Box<SplitMergeNode<T>>),
    Certify,
    Finished,
}

/// Split-list Merge Sort driven against the shared snapshot
///
/// The list is moved out of the shared snapshot when sorting starts and the
/// merged result is moved back in before certification. In between, the
/// observable state is [`SplitMergeSort::frame`], not the shared snapshot.
#[derive(Debug)]
pub struct SplitMergeSort<T> {
    state: State<T>,
}

impl<T> SplitMergeSort<T> {
    pub fn new() -> Self {
        Self {
            state: State::Begin,
        }
    }

    /// What a driver should show for the last pause
    pub fn frame<'a>(&'a self, snapshot: &'a Snapshot<T>) -> Frame<'a, T> {
        match &self.state {
            State::Sorting(root) => root.frame(),
            _ => Frame::Single(snapshot),
        }
    }
}

impl<T> Default for SplitMergeSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for SplitMergeSort<T> {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match &mut self.state {
                State::Begin => {
                    snapshot.clear_marks();
                    let list = std::mem::take(&mut snapshot.list);
                    self.state = State::Sorting(Box::new(SplitMergeNode::new(list)));
                }
                State::Sorting(root) => {
                    *snapshot = delegate!(**root, &mut ());
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
    use crate::core::drive;

    fn values<T: Clone>(snapshot: &Snapshot<T>) -> Vec<T> {
        snapshot.list.as_slice().to_vec()
    }

    #[test]
    fn test_split_list() {
        let (lower, upper) = split_list(List::from(vec![1, 2, 3, 4, 5]));
        assert_eq!(lower.as_slice(), &[1, 2]);
        assert_eq!(upper.as_slice(), &[3, 4, 5]);

        let (lower, upper) = split_list(List::from(vec![7]));
        assert!(lower.is_empty());
        assert_eq!(upper.as_slice(), &[7]);
    }

    #[test]
    fn test_list_merge_frames() {
        let mut merge = ListMerge::new(List::from(vec![1u32, 4]), List::from(vec![2u32, 3]));
        let mut frames = Vec::new();
        loop {
            match merge.resume(&mut ()) {
                Step::Yielded(()) => {
                    let Frame::Merge {
                        left,
                        right,
                        merged,
                    } = merge.frame()
                    else {
                        panic!("merge frame expected");
                    };
                    frames.push((
                        left.selection.as_slice().to_vec(),
                        right.selection.as_slice().to_vec(),
                        values(merged),
                    ));
                }
                Step::Done(result) => {
                    assert_eq!(values(&result), vec![1, 2, 3, 4]);
                    break;
                }
            }
        }
        assert_eq!(
            frames,
            vec![
                (vec![0], vec![0], vec![]),
                (vec![1], vec![0], vec![1]),
                (vec![1], vec![1], vec![1, 2]),
                // Only the lower side is left.
                (vec![1], vec![], vec![1, 2, 3]),
                (vec![], vec![], vec![1, 2, 3, 4]),
            ]
        );
    }

    #[test]
    fn test_short_lists_finish_without_pausing() {
        for list in [vec![], vec![5u32]] {
            let mut node = SplitMergeNode::new(List::from(list.clone()));
            let (snapshot, pauses) = drive(&mut node, &mut (), |_, _| {});
            assert_eq!(pauses, 0);
            assert_eq!(values(&snapshot), list);
        }
    }

    #[test]
    fn test_every_pause_is_a_merge_frame() {
        let mut sort = SplitMergeSort::new();
        let mut snapshot = Snapshot::new(vec![6u32, 2, 9, 1, 5]);
        let mut triples = 0;
        loop {
            match sort.resume(&mut snapshot) {
                Step::Yielded(()) => {
                    let frame = sort.frame(&snapshot);
                    if frame.is_sorted() {
                        assert!(!frame.is_merge());
                        assert_eq!(values(frame.primary()), vec![1, 2, 5, 6, 9]);
                    } else {
                        assert!(frame.is_merge());
                        triples += 1;
                    }
                }
                Step::Done(()) => break,
            }
        }
        assert!(triples > 0);
        assert!(snapshot.sorted);
    }

    #[test]
    fn test_single_element_pauses_once() {
        let mut sort = SplitMergeSort::new();
        let mut snapshot = Snapshot::new(vec![3u32]);
        let (_, pauses) = drive(&mut sort, &mut snapshot, |_, _| {});
        assert_eq!(pauses, 1);
        assert!(snapshot.sorted);
        assert_eq!(values(&snapshot), vec![3]);
    }
}
