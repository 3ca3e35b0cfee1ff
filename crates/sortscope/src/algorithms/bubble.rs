//! Bubble Sort and its shrinking-bound variant

use tracing::debug;

use crate::core::{Element, Snapshot, Step, StepSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Scan,
    Compare,
    Exchange,
    Certify,
    Finished,
}

/// Repeated adjacent-pair passes until a pass makes no exchange
///
/// Each pair is marked `selection` and shown before the comparison. An
/// out-of-order pair is then marked `swapped` and shown twice: once before
/// and once after the exchange. With `shrinking` set, every finished pass
/// drops the last scanned position from the next pass, since it already
/// holds its final value.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    shrinking: bool,
    bound: usize,
    index: usize,
    exchanged: bool,
    passes: usize,
    phase: Phase,
}

impl BubbleSort {
    /// Plain Bubble Sort: every pass scans the whole list
    pub fn new() -> Self {
        Self::with_shrinking(false)
    }

    /// Optimized Bubble Sort: the scanned bound shrinks after each pass
    pub fn optimized() -> Self {
        Self::with_shrinking(true)
    }

    fn with_shrinking(shrinking: bool) -> Self {
        Self {
            shrinking,
            bound: 0,
            index: 0,
            exchanged: false,
            passes: 0,
            phase: Phase::Start,
        }
    }

    /// Number of passes started so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    fn begin_pass(&mut self) {
        self.index = 0;
        self.exchanged = false;
        self.passes += 1;
        self.phase = Phase::Scan;
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StepSequence<Snapshot<T>> for BubbleSort {
    type Yield = ();
    type Output = ();

    fn resume(&mut self, snapshot: &mut Snapshot<T>) -> Step<(), ()> {
        loop {
            match self.phase {
                Phase::Start => {
                    self.bound = snapshot.len();
                    self.begin_pass();
                }
                Phase::Scan => {
                    let i = self.index;
                    if i + 1 >= self.bound {
                        debug!(
                            pass = self.passes,
                            bound = self.bound,
                            exchanged = self.exchanged,
                            "Bubble pass finished"
                        );
                        if !self.exchanged {
                            self.phase = Phase::Certify;
                            continue;
                        }
                        if self.shrinking {
                            self.bound -= 1;
                        }
                        self.begin_pass();
                        continue;
                    }

                    snapshot.selection.clear();
                    snapshot.swapped.clear();
                    snapshot.selection.add(i);
                    snapshot.selection.add(i + 1);
                    self.phase = Phase::Compare;
                    return Step::Yielded(());
                }
                Phase::Compare => {
                    let i = self.index;
                    if snapshot.list[i] > snapshot.list[i + 1] {
                        self.exchanged = true;
                        snapshot.swapped.add(i);
                        snapshot.swapped.add(i + 1);
                        self.phase = Phase::Exchange;
                        return Step::Yielded(());
                    }
                    self.index += 1;
                    self.phase = Phase::Scan;
                }
                Phase::Exchange => {
                    let i = self.index;
                    snapshot.list.swap(i, i + 1);
                    self.index += 1;
                    self.phase = Phase::Scan;
                    return Step::Yielded(());
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
    fn test_two_elements_optimized() {
        let trace = record(BubbleSort::optimized(), vec![2, 1]);
        assert_eq!(
            trace,
            vec![
                Observed::new(&[2, 1]).selection(&[0, 1]),
                Observed::new(&[2, 1]).selection(&[0, 1]).swapped(&[0, 1]),
                Observed::new(&[1, 2]).selection(&[0, 1]).swapped(&[0, 1]),
                Observed::new(&[1, 2]).sorted(),
            ]
        );
    }

    #[test]
    fn test_two_elements_plain_needs_clean_pass() {
        let trace = record(BubbleSort::new(), vec![2, 1]);
        assert_eq!(trace.len(), 5);
        assert_eq!(trace[0], Observed::new(&[2, 1]).selection(&[0, 1]));
        assert_eq!(
            trace[1],
            Observed::new(&[2, 1]).selection(&[0, 1]).swapped(&[0, 1])
        );
        assert_eq!(
            trace[2],
            Observed::new(&[1, 2]).selection(&[0, 1]).swapped(&[0, 1])
        );
        // Verification pass: compare once, nothing to exchange.
        assert_eq!(trace[3], Observed::new(&[1, 2]).selection(&[0, 1]));
        assert_eq!(trace[4], Observed::new(&[1, 2]).sorted());
    }

    #[test]
    fn test_sorted_input_takes_one_clean_pass() {
        for machine in [BubbleSort::new(), BubbleSort::optimized()] {
            let trace = record(machine, vec![1, 2, 3, 4]);
            // Three comparisons and the certification.
            assert_eq!(trace.len(), 4);
            assert!(trace.iter().all(|o| o.swapped.is_empty()));
            assert_eq!(trace.last().unwrap(), &Observed::new(&[1, 2, 3, 4]).sorted());
        }
    }

    #[test]
    fn test_reversed_input_exchange_count() {
        for n in 0..9u32 {
            let values: Vec<u32> = (1..=n).rev().collect();
            let expected = (n * n.saturating_sub(1) / 2) as usize;
            assert_eq!(exchanges(&record(BubbleSort::new(), values.clone())), expected);
            assert_eq!(exchanges(&record(BubbleSort::optimized(), values)), expected);
        }
    }

    #[test]
    fn test_optimized_scans_less() {
        let values = vec![5, 4, 3, 2, 1, 6, 7];
        let plain = record(BubbleSort::new(), values.clone()).len();
        let optimized = record(BubbleSort::optimized(), values).len();
        assert!(optimized < plain);
    }

    #[test]
    fn test_pass_count() {
        let mut machine = BubbleSort::new();
        let mut snapshot = Snapshot::new(vec![3u32, 2, 1]);
        while StepSequence::resume(&mut machine, &mut snapshot).is_yielded() {}
        // Two passes with exchanges plus the clean one.
        assert_eq!(machine.passes(), 3);
    }

    #[test]
    fn test_degenerate_inputs_certify_immediately() {
        assert_eq!(record(BubbleSort::new(), vec![]), vec![Observed::new(&[]).sorted()]);
        assert_eq!(
            record(BubbleSort::optimized(), vec![7]),
            vec![Observed::new(&[7]).sorted()]
        );
    }
}
