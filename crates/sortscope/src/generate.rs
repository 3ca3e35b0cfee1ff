//! Input lists for sorting runs

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::core::SortError;

/// Default list length
pub const DEFAULT_LIST_SIZE: usize = 10;
/// Smallest list length offered to users
pub const MIN_LIST_SIZE: usize = 1;
/// Largest list length offered to users
pub const MAX_LIST_SIZE: usize = 2500;

/// Shape of a generated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListKind {
    /// `1..=n` in uniformly random order
    #[default]
    Shuffled,
    /// `1..=n` ascending
    Ascending,
    /// `n..=1` descending
    Descending,
    /// `n` independent values in `1..=max`
    Random,
}

impl ListKind {
    /// All kinds in menu order; the first is the default
    pub const ALL: [ListKind; 4] = [
        ListKind::Shuffled,
        ListKind::Ascending,
        ListKind::Descending,
        ListKind::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ListKind::Shuffled => "Shuffled Range",
            ListKind::Ascending => "Ascending Range",
            ListKind::Descending => "Descending Range",
            ListKind::Random => "Random",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ListKind::Shuffled => "shuffled",
            ListKind::Ascending => "ascending",
            ListKind::Descending => "descending",
            ListKind::Random => "random",
        }
    }

    /// Build a list of `size` values
    ///
    /// `max` only applies to [`ListKind::Random`] and is raised to at least 1.
    pub fn generate<R: Rng>(&self, size: usize, max: u32, rng: &mut R) -> Vec<u32> {
        let ascending = || (1..=size as u32).collect::<Vec<_>>();
        match self {
            ListKind::Ascending => ascending(),
            ListKind::Descending => (1..=size as u32).rev().collect(),
            ListKind::Shuffled => {
                let mut values = ascending();
                values.shuffle(rng);
                values
            }
            ListKind::Random => {
                let max = max.max(1);
                (0..size).map(|_| rng.random_range(1..=max)).collect()
            }
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ListKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted) || k.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SortError::unknown_list_kind(s))
    }
}

/// Display names of every list kind, in menu order
pub fn list_kind_names() -> Vec<&'static str> {
    ListKind::ALL.iter().map(ListKind::name).collect()
}

/// Everything needed to reproduce an input list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSpec {
    pub kind: ListKind,
    pub size: usize,
    /// Upper bound for random values; defaults to `size`
    pub max: Option<u32>,
    /// Fixed seed for repeatable lists
    pub seed: Option<u64>,
}

impl ListSpec {
    pub fn new(kind: ListKind, size: usize) -> Self {
        Self {
            kind,
            size,
            max: None,
            seed: None,
        }
    }

    pub fn with_max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the list, seeded if a seed was given
    pub fn generate(&self) -> Vec<u32> {
        let max = self
            .max
            .unwrap_or_else(|| u32::try_from(self.size).unwrap_or(u32::MAX));
        debug!(kind = %self.kind, size = self.size, max, seed = ?self.seed, "Generating list");
        match self.seed {
            Some(seed) => self
                .kind
                .generate(self.size, max, &mut StdRng::seed_from_u64(seed)),
            None => self.kind.generate(self.size, max, &mut rand::rng()),
        }
    }
}

impl Default for ListSpec {
    fn default() -> Self {
        Self::new(ListKind::default(), DEFAULT_LIST_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(ListSpec::new(ListKind::Ascending, 4).generate(), vec![1, 2, 3, 4]);
        assert_eq!(ListSpec::new(ListKind::Descending, 3).generate(), vec![3, 2, 1]);
        assert!(ListSpec::new(ListKind::Shuffled, 0).generate().is_empty());
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut values = ListSpec::new(ListKind::Shuffled, 50).generate();
        values.sort();
        assert_eq!(values, (1..=50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_seed_repeats() {
        let spec = ListSpec::new(ListKind::Random, 20).with_max(7).with_seed(42);
        let first = spec.generate();
        assert_eq!(first, spec.generate());
        assert!(first.iter().all(|v| (1..=7).contains(v)));
    }

    #[test]
    fn test_random_max_floor() {
        let values = ListSpec::new(ListKind::Random, 5).with_max(0).with_seed(1).generate();
        assert_eq!(values, vec![1; 5]);
    }

    #[test]
    fn test_parse_kinds() {
        assert_eq!("shuffled".parse::<ListKind>().unwrap(), ListKind::Shuffled);
        assert_eq!("Descending Range".parse::<ListKind>().unwrap(), ListKind::Descending);
        let err = "zigzag".parse::<ListKind>().unwrap_err();
        assert!(matches!(err, SortError::UnknownListKind { .. }));
        assert_eq!(list_kind_names()[0], "Shuffled Range");
    }

    #[test]
    fn test_default_spec() {
        let spec = ListSpec::default();
        assert_eq!(spec.kind, ListKind::Shuffled);
        assert_eq!(spec.size, DEFAULT_LIST_SIZE);
    }
}
