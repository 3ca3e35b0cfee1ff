//! Worked scenarios for the sorting engine
//!
//! Concrete inputs with known step-by-step behavior, driven through the
//! public factory and sorter API.

use sortscope::algorithms::{create_sorter, pivot_index, Algorithm, Sorter};
use sortscope::{Snapshot, Step};

fn pauses<T: sortscope::Element>(algorithm: Algorithm, values: Vec<T>) -> Vec<Snapshot<T>> {
    let mut sorter = Sorter::new(algorithm, values);
    let mut seen = Vec::new();
    while let Step::Yielded(frame) = sorter.advance() {
        seen.push(frame.primary().clone());
    }
    seen
}

/// Number of pauses whose list differs from the one before
fn list_changes(seen: &[Snapshot<u32>], start: &[u32]) -> usize {
    let mut previous = start.to_vec();
    let mut changes = 0;
    for snapshot in seen {
        if snapshot.list.as_slice() != previous.as_slice() {
            changes += 1;
            previous = snapshot.list.as_slice().to_vec();
        }
    }
    changes
}

// =============================================================================
// Two-element walkthrough
// =============================================================================

mod two_elements {
    use super::*;

    #[test]
    fn test_optimized_bubble_walkthrough() {
        let seen = pauses(Algorithm::OptimizedBubble, vec![2u32, 1]);
        assert_eq!(seen.len(), 4);

        assert_eq!(seen[0].list.as_slice(), &[2, 1]);
        assert_eq!(seen[0].selection.as_slice(), &[0, 1]);
        assert!(seen[0].swapped.is_empty());

        assert_eq!(seen[1].list.as_slice(), &[2, 1]);
        assert_eq!(seen[1].swapped.as_slice(), &[0, 1]);

        assert_eq!(seen[2].list.as_slice(), &[1, 2]);
        assert!(!seen[2].sorted);

        assert_eq!(seen[3].list.as_slice(), &[1, 2]);
        assert!(seen[3].sorted);
        assert!(!seen[3].has_stale_marks());
    }

    #[test]
    fn test_plain_bubble_walkthrough() {
        let seen = pauses(Algorithm::Bubble, vec![2u32, 1]);
        assert_eq!(seen.len(), 5);

        assert_eq!(seen[0].selection.as_slice(), &[0, 1]);
        assert_eq!(seen[1].swapped.as_slice(), &[0, 1]);
        assert_eq!(seen[2].list.as_slice(), &[1, 2]);

        // A second full pass finds nothing to exchange before certifying.
        assert_eq!(seen[3].list.as_slice(), &[1, 2]);
        assert_eq!(seen[3].selection.as_slice(), &[0, 1]);
        assert!(seen[3].swapped.is_empty());
        assert!(!seen[3].sorted);

        assert!(seen[4].sorted);
    }

    #[test]
    fn test_every_algorithm_finishes() {
        for algorithm in Algorithm::ALL {
            let seen = pauses(algorithm, vec![2u32, 1]);
            let last = seen.last().unwrap();
            assert_eq!(last.list.as_slice(), &[1, 2], "{}", algorithm);
            assert!(last.sorted, "{}", algorithm);
        }
    }
}

// =============================================================================
// Duplicates and ordering
// =============================================================================

mod ordering {
    use super::*;

    #[test]
    fn test_duplicates_are_kept() {
        for algorithm in Algorithm::ALL {
            let seen = pauses(algorithm, vec![3u32, 1, 3, 2, 1]);
            assert_eq!(
                seen.last().unwrap().list.as_slice(),
                &[1, 1, 2, 3, 3],
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn test_sorted_input_is_left_alone_by_bubble() {
        let values = vec![1u32, 2, 3, 4, 5, 6];
        for algorithm in [Algorithm::Bubble, Algorithm::OptimizedBubble] {
            let seen = pauses(algorithm, values.clone());
            assert_eq!(list_changes(&seen, &values), 0, "{}", algorithm);
            assert!(seen.iter().all(|s| s.swapped.is_empty()), "{}", algorithm);
            // One comparison per adjacent pair, then the certification.
            assert_eq!(seen.len(), values.len(), "{}", algorithm);
        }
    }

    #[test]
    fn test_sorted_input_ends_unchanged_everywhere() {
        let values = vec![1u32, 2, 2, 5, 9];
        for algorithm in Algorithm::ALL {
            let seen = pauses(algorithm, values.clone());
            assert_eq!(seen.last().unwrap().list.as_slice(), values.as_slice());
        }
    }

    #[test]
    fn test_reversed_input_bubble_exchanges() {
        for n in [2usize, 5, 9] {
            let values: Vec<u32> = (1..=n as u32).rev().collect();
            for algorithm in [Algorithm::Bubble, Algorithm::OptimizedBubble] {
                let seen = pauses(algorithm, values.clone());
                assert_eq!(
                    list_changes(&seen, &values),
                    n * (n - 1) / 2,
                    "{} on {} values",
                    algorithm,
                    n
                );
            }
        }
    }

    #[test]
    fn test_optimized_bubble_is_never_longer() {
        let values = vec![9u32, 4, 7, 1, 8, 2, 6];
        let plain = pauses(Algorithm::Bubble, values.clone()).len();
        let optimized = pauses(Algorithm::OptimizedBubble, values).len();
        assert!(optimized < plain);
    }
}

// =============================================================================
// Quicksort partitioning
// =============================================================================

mod quicksort {
    use super::*;

    #[test]
    fn test_first_pivot_is_the_midpoint() {
        let values = vec![5u32, 3, 8, 1, 9, 2];
        assert_eq!(pivot_index(0, values.len() - 1), 2);

        let seen = pauses(Algorithm::Quick, values);
        // The whole range is selected while the first partition runs.
        assert_eq!(seen[0].selection.as_slice(), &[0, 1, 2, 3, 4, 5]);

        // 5 and 3 are below the pivot 8, so the lower pointer stops on it
        // and it is exchanged with the 2 at the end.
        let first_exchange = seen.iter().find(|s| !s.swapped.is_empty()).unwrap();
        assert_eq!(first_exchange.swapped.as_slice(), &[2, 5]);
        assert_eq!(first_exchange.list[2], 8);
    }

    #[test]
    fn test_pointer_marks_stay_paired() {
        let seen = pauses(Algorithm::Quick, vec![7u32, 2, 9, 4, 4, 1, 8, 3]);
        assert!(seen.iter().all(|s| s.special.len() <= 2));
        assert!(seen.iter().all(|s| s.swapped.len() <= 2));
    }
}

// =============================================================================
// Merge stability
// =============================================================================

mod stability {
    use super::*;

    /// Compares by `key` only, so `tag` reveals how equal keys moved
    #[derive(Debug, Clone)]
    struct Tagged {
        key: u32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    fn tagged(pairs: &[(u32, char)]) -> Vec<Tagged> {
        pairs.iter().map(|&(key, tag)| Tagged { key, tag }).collect()
    }

    #[test]
    fn test_stable_algorithms_keep_tag_order() {
        let input = tagged(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e'), (0, 'f')]);
        for algorithm in Algorithm::ALL.into_iter().filter(Algorithm::is_stable) {
            let seen = pauses(algorithm, input.clone());
            let tags: String = seen.last().unwrap().list.iter().map(|t| t.tag).collect();
            assert_eq!(tags, "fbdace", "{}", algorithm);
        }
    }

    #[test]
    fn test_both_merge_forms_agree() {
        let input = tagged(&[(3, 'a'), (3, 'b'), (1, 'c'), (3, 'd'), (1, 'e')]);
        let in_place = pauses(Algorithm::Merge, input.clone());
        let split = pauses(Algorithm::SplitMerge, input);
        let tags = |seen: &[Snapshot<Tagged>]| -> String {
            seen.last().unwrap().list.iter().map(|t| t.tag).collect()
        };
        assert_eq!(tags(&in_place), "ceabd");
        assert_eq!(tags(&split), "ceabd");
    }
}

// =============================================================================
// Split-list merge frames
// =============================================================================

mod split_merge {
    use super::*;

    #[test]
    fn test_merge_frames_show_both_halves() {
        let mut sorter = Sorter::new(Algorithm::SplitMerge, vec![4u32, 3, 2, 1]);
        let mut merge_frames = 0;
        let mut final_sizes = None;
        while let Step::Yielded(frame) = sorter.advance() {
            if let [left, right, merged] = frame.snapshots()[..] {
                merge_frames += 1;
                assert!(merged.len() <= left.len() + right.len());
                final_sizes = Some((left.len(), right.len(), merged.len()));
            } else {
                assert!(frame.is_sorted());
            }
        }
        assert!(merge_frames > 0);
        // The last merge joins two pairs into all four values.
        assert_eq!(final_sizes, Some((2, 2, 4)));
        assert_eq!(sorter.snapshot().list.as_slice(), &[1, 2, 3, 4]);
    }
}

// =============================================================================
// Degenerate inputs
// =============================================================================

mod degenerate {
    use super::*;

    #[test]
    fn test_empty_and_single_pause_once() {
        for algorithm in Algorithm::ALL {
            for values in [vec![], vec![7u32]] {
                let seen = pauses(algorithm, values.clone());
                assert_eq!(seen.len(), 1, "{} on {:?}", algorithm, values);
                assert!(seen[0].sorted);
                assert_eq!(seen[0].list.as_slice(), values.as_slice());
            }
        }
    }

    #[test]
    fn test_factory_rejects_unknown_names() {
        let err = create_sorter(vec![1u32], "Bogo Sort").err().unwrap();
        assert!(err.to_string().contains("Bogo Sort"));
        assert!(create_sorter(vec![1u32], "QUICKSORT").is_ok());
        assert!(create_sorter(vec![1u32], "split-merge").is_ok());
    }

    #[test]
    fn test_prepared_snapshot_marks_are_dropped() {
        let mut snapshot = Snapshot::new(vec![2u32, 1]);
        snapshot.swapped.add(0);
        snapshot.sorted = true;
        let sorter = Sorter::new(Algorithm::Insertion, snapshot);
        assert!(!sorter.is_sorted());
        assert!(!sorter.snapshot().has_stale_marks());
    }
}
