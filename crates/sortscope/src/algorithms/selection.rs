//! Selection Sort

use tracing::debug;

use crate::core::{Element, Snapshot, Step, StepSequence};
use crate::delegate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanPhase {
    Probe,
    Compare,
}

/// Finds the index of the smallest value in `first..=last`
///
/// Every probe is shown with the current minimum marked `special` and the
/// probed index marked `selection`. A new minimum gets one more pause with
/// the `special` mark moved onto it. Completes with the minimum's index.
#[derive(Debug, Clone)]
pub struct MinimumScan {
    last: usize,
    probe: usize,
    minimum: usize,
    phase: ScanPhase,
}

impl MinimumScan {
    pub fn new(first: usize, last: usize) -> Self {
        Self {
            last,
            probe: first + 1,
            minimum: first,
            phase: ScanPhase::Probe,
        }
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for MinimumScan {
    type Yield = ();
    type Output = usize;

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), usize> {
        loop {
            match self.phase {
                ScanPhase::Probe => {
                    if self.probe > self.last {
                        return Step::Done(self.minimum);
                    }
                    snapshot.selection.clear();
                    snapshot.special.clear();
                    snapshot.special.add(self.minimum);
                    snapshot.selection.add(self.probe);
                    self.phase = ScanPhase::Compare;
                    return Step::Yielded(());
                }
                ScanPhase::Compare => {
                    let probe = self.probe;
                    self.probe += 1;
                    self.phase = ScanPhase::Probe;
                    if snapshot.list[probe] < snapshot.list[self.minimum] {
                        snapshot.special.clear();
                        snapshot.special.add(probe);
                        self.minimum = probe;
                        return Step::Yielded(());
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Begin,
    Scanning(MinimumScan),
    Exchange(usize),
    Settle,
    Certify,
    Finished,
}

/// Grows a sorted prefix by moving the minimum of the rest to its end
#[derive(Debug, Clone)]
pub struct SelectionSort {
    start: usize,
    state: State,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self {
            start: 0,
            state: State::Begin,
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for SelectionSort {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match &mut self.state {
                State::Begin => {
                    self.state = if self.start < snapshot.len() {
                        State::Scanning(MinimumScan::new(self.start, snapshot.len() - 1))
                    } else {
                        State::Certify
                    };
                }
                State::Scanning(scan) => {
                    let minimum = delegate!(*scan, snapshot);
                    debug!(start = self.start, minimum, "Minimum found");
                    if minimum != self.start {
                        snapshot.swapped.add(minimum);
                        snapshot.swapped.add(self.start);
                        self.state = State::Exchange(minimum);
                        return Step::Yielded(());
                    }
                    self.state = State::Settle;
                }
                State::Exchange(minimum) => {
                    snapshot.list.swap(self.start, *minimum);
                    self.state = State::Settle;
                    return Step::Yielded(());
                }
                State::Settle => {
                    snapshot.swapped.clear();
                    snapshot.special.clear();
                    self.start += 1;
                    self.state = State::Begin;
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
    fn test_minimum_scan_reports_index() {
        let mut snapshot = Snapshot::new(vec![4u32, 2, 5, 1, 3]);
        let mut scan = MinimumScan::new(0, 4);
        let (minimum, pauses) = drive(&mut scan, &mut snapshot, |_, _| {});
        assert_eq!(minimum, 3);
        // Four probes, two of which found a new minimum.
        assert_eq!(pauses, 6);
        assert_eq!(snapshot.list.as_slice(), &[4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_minimum_scan_keeps_first_of_equals() {
        let mut snapshot = Snapshot::new(vec![1u32, 1, 1]);
        let (minimum, _) = drive(&mut MinimumScan::new(0, 2), &mut snapshot, |_, _| {});
        assert_eq!(minimum, 0);
    }

    #[test]
    fn test_single_scan_range_has_no_probes() {
        let mut snapshot = Snapshot::new(vec![9u32]);
        let (minimum, pauses) = drive(&mut MinimumScan::new(0, 0), &mut snapshot, |_, _| {});
        assert_eq!((minimum, pauses), (0, 0));
    }

    #[test]
    fn test_two_elements() {
        let trace = record(SelectionSort::new(), vec![2, 1]);
        assert_eq!(
            trace,
            vec![
                Observed::new(&[2, 1]).special(&[0]).selection(&[1]),
                Observed::new(&[2, 1]).special(&[1]).selection(&[1]),
                Observed::new(&[2, 1])
                    .special(&[1])
                    .selection(&[1])
                    .swapped(&[1, 0]),
                Observed::new(&[1, 2])
                    .special(&[1])
                    .selection(&[1])
                    .swapped(&[1, 0]),
                Observed::new(&[1, 2]).sorted(),
            ]
        );
    }

    #[test]
    fn test_no_exchange_when_minimum_in_place() {
        let trace = record(SelectionSort::new(), vec![1, 2, 3]);
        assert!(trace.iter().all(|o| o.swapped.is_empty()));
        assert_eq!(trace.last().unwrap(), &Observed::new(&[1, 2, 3]).sorted());
    }

    #[test]
    fn test_sorts_duplicates() {
        let trace = record(SelectionSort::new(), vec![3, 1, 3, 2, 1]);
        assert_eq!(trace.last().unwrap(), &Observed::new(&[1, 1, 2, 3, 3]).sorted());
        assert_eq!(trace.iter().filter(|o| o.sorted).count(), 1);
    }
}
