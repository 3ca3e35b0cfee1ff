//! Insertion Sort

use tracing::trace;

use crate::core::{Element, Snapshot, Step, StepSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pick,
    Sift,
    Mark,
    Exchange,
    Settle,
    Certify,
    Finished,
}

/// Sinks each element leftwards into the sorted prefix
///
/// The element being inserted keeps its original position marked `special`
/// while it moves. Each move shows the pair as `selection`, then as
/// `swapped`, then the exchanged result.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    index: usize,
    cursor: usize,
    phase: Phase,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self {
            index: 0,
            cursor: 0,
            phase: Phase::Pick,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for InsertionSort {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match self.phase {
                Phase::Pick => {
                    if self.index >= snapshot.len() || snapshot.len() < 2 {
                        self.phase = Phase::Certify;
                        continue;
                    }
                    trace!(index = self.index, "Inserting");
                    snapshot.special.clear();
                    snapshot.special.add(self.index);
                    self.cursor = self.index;
                    self.phase = Phase::Sift;
                    return Step::Yielded(());
                }
                Phase::Sift => {
                    let j = self.cursor;
                    if j > 0 && snapshot.list[j] < snapshot.list[j - 1] {
                        snapshot.selection.clear();
                        snapshot.selection.add(j);
                        snapshot.selection.add(j - 1);
                        self.phase = Phase::Mark;
                        return Step::Yielded(());
                    }
                    self.index += 1;
                    self.phase = Phase::Pick;
                }
                Phase::Mark => {
                    let j = self.cursor;
                    snapshot.selection.clear();
                    snapshot.swapped.add(j);
                    snapshot.swapped.add(j - 1);
                    self.phase = Phase::Exchange;
                    return Step::Yielded(());
                }
                Phase::Exchange => {
                    let j = self.cursor;
                    snapshot.list.swap(j, j - 1);
                    self.phase = Phase::Settle;
                    return Step::Yielded(());
                }
                Phase::Settle => {
                    snapshot.swapped.clear();
                    self.cursor -= 1;
                    self.phase = Phase::Sift;
                }
                Phase::Certify => {
                    snapshot.certify();
                    self.phase = Phase::Finished;
                    return Step::Yielded(());
                }
                Phase::Finished => return Step::Done(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{exchanges, record, Observed};

    #[test]
    fn test_two_elements() {
        let trace = record(InsertionSort::new(), vec![2, 1]);
        assert_eq!(
            trace,
            vec![
                Observed::new(&[2, 1]).special(&[0]),
                Observed::new(&[2, 1]).special(&[1]),
                Observed::new(&[2, 1]).special(&[1]).selection(&[1, 0]),
                Observed::new(&[2, 1]).special(&[1]).swapped(&[1, 0]),
                Observed::new(&[1, 2]).special(&[1]).swapped(&[1, 0]),
                Observed::new(&[1, 2]).sorted(),
            ]
        );
    }

    #[test]
    fn test_sorted_input_never_exchanges() {
        let trace = record(InsertionSort::new(), vec![1, 2, 2, 5]);
        assert_eq!(exchanges(&trace), 0);
        // One pick per element plus the certification.
        assert_eq!(trace.len(), 5);
    }

    #[test]
    fn test_exchange_count_matches_inversions() {
        // Inversions: (4,1) (4,3) (4,2) (3,2)
        let trace = record(InsertionSort::new(), vec![4, 1, 3, 2]);
        assert_eq!(exchanges(&trace), 4);
        assert_eq!(trace.last().unwrap(), &Observed::new(&[1, 2, 3, 4]).sorted());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(record(InsertionSort::new(), vec![]), vec![Observed::new(&[]).sorted()]);
        assert_eq!(record(InsertionSort::new(), vec![5]), vec![Observed::new(&[5]).sorted()]);
    }
}
