//! Algorithm identifiers and the sorter factory

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::sorter::Sorter;
use crate::core::{Element, Snapshot, SortError};

/// Every algorithm a [`Sorter`] can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    OptimizedBubble,
    Insertion,
    Selection,
    /// Top-down merge on index ranges of the shared list
    Merge,
    Quick,
    /// Top-down merge on owned halves, showing three panes per step
    SplitMerge,
}

impl Algorithm {
    /// All algorithms in menu order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::OptimizedBubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::SplitMerge,
    ];

    /// Display name, also accepted by [`create_sorter`]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::OptimizedBubble => "Optimized Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quicksort",
            Algorithm::SplitMerge => "Split Merge Sort",
        }
    }

    /// Short command-line form
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::OptimizedBubble => "optimized-bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::SplitMerge => "split-merge",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Adjacent exchanges, full passes until one pass is clean",
            Algorithm::OptimizedBubble => "Bubble Sort that skips the settled tail",
            Algorithm::Insertion => "Sinks each value into the sorted prefix",
            Algorithm::Selection => "Moves the minimum of the rest to the sorted prefix",
            Algorithm::Merge => "Merges sorted ranges through a buffer, copying back in place",
            Algorithm::Quick => "Hoare partitioning around the midpoint value",
            Algorithm::SplitMerge => "Merges owned halves, showing both inputs and the output",
        }
    }

    /// Returns true if equal values keep their relative order
    pub fn is_stable(&self) -> bool {
        !matches!(self, Algorithm::Selection | Algorithm::Quick)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts display names in any case, or slugs
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted) || a.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SortError::unknown_algorithm(s))
    }
}

/// Display names of every algorithm, in menu order
pub fn algorithm_names() -> Vec<&'static str> {
    Algorithm::ALL.iter().map(Algorithm::name).collect()
}

/// Create a sorter for `values` from an algorithm name or slug
///
/// # Example
/// ```rust
/// use sortscope::algorithms::create_sorter;
///
/// let mut sorter = create_sorter(vec![3u32, 1, 2], "Insertion Sort").unwrap();
/// sorter.run_to_end();
/// assert_eq!(sorter.snapshot().list.as_slice(), &[1, 2, 3]);
///
/// assert!(create_sorter(vec![1u32], "Bogo Sort").is_err());
/// ```
pub fn create_sorter<T: Element>(
    values: impl Into<Snapshot<T>>,
    id: &str,
) -> Result<Sorter<T>, SortError> {
    let algorithm: Algorithm = id.parse()?;
    debug!(id, %algorithm, "Resolved algorithm");
    Ok(Sorter::new(algorithm, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_menu_order() {
        assert_eq!(
            algorithm_names(),
            vec![
                "Bubble Sort",
                "Optimized Bubble Sort",
                "Insertion Sort",
                "Selection Sort",
                "Merge Sort",
                "Quicksort",
                "Split Merge Sort",
            ]
        );
    }

    #[test]
    fn test_parse_names_and_slugs() {
        assert_eq!("Quicksort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!("merge sort".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert_eq!(
            "optimized-bubble".parse::<Algorithm>().unwrap(),
            Algorithm::OptimizedBubble
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.slug().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_identifier() {
        let err = "Bogo Sort".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, SortError::UnknownAlgorithm { ref name } if name == "Bogo Sort"));

        let err = create_sorter(vec![1u32], "").unwrap_err();
        assert!(matches!(err, SortError::UnknownAlgorithm { .. }));
    }

    #[test]
    fn test_create_sorter_accepts_snapshot() {
        let mut snapshot = Snapshot::new(vec![2u32, 1]);
        snapshot.sorted = true;
        snapshot.special.add(0);
        let sorter = create_sorter(snapshot, "bubble").unwrap();
        assert_eq!(sorter.algorithm(), Algorithm::Bubble);
        assert!(!sorter.snapshot().sorted);
        assert!(sorter.snapshot().special.is_empty());
    }

    #[test]
    fn test_stability_flags() {
        assert!(Algorithm::Merge.is_stable());
        assert!(Algorithm::SplitMerge.is_stable());
        assert!(!Algorithm::Selection.is_stable());
        assert!(!Algorithm::Quick.is_stable());
    }
}
