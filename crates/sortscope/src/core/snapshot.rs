//! The observable state of a sort at one instant
//!
//! A [`Snapshot`] is "the list, annotated with what is happening to it right
//! now". Algorithms mutate one snapshot in place and pause after each
//! meaningful change; drivers read it between steps.

use std::fmt;

use super::container::List;

/// Anything a sorter can arrange
///
/// Blanket-implemented for every `PartialOrd + Clone` type, so plain numbers
/// and tagged records both work.
pub trait Element: PartialOrd + Clone {}

impl<T: PartialOrd + Clone> Element for T {}

/// Role of a single index, as seen by a renderer
///
/// When an index carries several marks the highest-priority role wins:
/// `Swapped`, then `Special`, then `Selected`, then `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarRole {
    /// Not involved in the current step
    #[default]
    Idle,
    /// Being compared or examined
    Selected,
    /// Algorithm-specific role: minimum candidate, scan pointer, merge cursor
    Special,
    /// About to be, or just, exchanged
    Swapped,
}

impl BarRole {
    /// Color a renderer should use for this role
    pub fn color_name(&self) -> &'static str {
        match self {
            BarRole::Swapped => "green",
            BarRole::Special => "yellow",
            BarRole::Selected => "red",
            BarRole::Idle => "blue",
        }
    }
}

impl fmt::Display for BarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarRole::Idle => write!(f, "idle"),
            BarRole::Selected => write!(f, "selected"),
            BarRole::Special => write!(f, "special"),
            BarRole::Swapped => write!(f, "swapped"),
        }
    }
}

/// List plus role-tagged index sets and a completion flag
///
/// Index sets are never cleared implicitly: each algorithm clears them at
/// phase boundaries. Once `sorted` is set it stays set for the run, and the
/// list is non-decreasing from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T = u32> {
    /// The values being arranged
    pub list: List<T>,
    /// Indices being compared or examined
    pub selection: List<usize>,
    /// Indices being exchanged
    pub swapped: List<usize>,
    /// Indices holding an algorithm-specific role
    pub special: List<usize>,
    /// True once the algorithm has certified full ordering
    pub sorted: bool,
}

impl<T> Snapshot<T> {
    /// Create an unsorted snapshot over `list` with empty index sets
    pub fn new(list: impl Into<List<T>>) -> Self {
        Self {
            list: list.into(),
            selection: List::new(),
            swapped: List::new(),
            special: List::new(),
            sorted: false,
        }
    }

    /// Number of values in the list
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Mark every index in `first..=last` as selected
    pub fn select(&mut self, first: usize, last: usize) {
        for index in first..=last {
            self.selection.add(index);
        }
    }

    /// Empty all three index sets
    pub fn clear_marks(&mut self) {
        self.selection.clear();
        self.swapped.clear();
        self.special.clear();
    }

    /// Mark the run as finished and drop all index marks
    pub fn certify(&mut self) {
        self.sorted = true;
        self.clear_marks();
    }

    /// Role of `index` under the swapped > special > selected priority
    pub fn role_of(&self, index: usize) -> BarRole {
        if self.swapped.contains(&index) {
            BarRole::Swapped
        } else if self.special.contains(&index) {
            BarRole::Special
        } else if self.selection.contains(&index) {
            BarRole::Selected
        } else {
            BarRole::Idle
        }
    }

    /// Roles for every index of the list, in order
    pub fn roles(&self) -> Vec<BarRole> {
        (0..self.list.len()).map(|i| self.role_of(i)).collect()
    }

    /// Returns true if any index set holds an index past the end of the list
    pub fn has_stale_marks(&self) -> bool {
        let len = self.list.len();
        self.selection
            .iter()
            .chain(self.swapped.iter())
            .chain(self.special.iter())
            .any(|&i| i >= len)
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(List::new())
    }
}

impl<T: PartialOrd> Snapshot<T> {
    /// Returns true if the list is non-decreasing end to end
    pub fn is_in_order(&self) -> bool {
        self.list.is_non_decreasing()
    }
}

impl<T: fmt::Display> fmt::Display for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sel={} swp={} spc={}",
            self.list, self.selection, self.swapped, self.special
        )?;
        if self.sorted {
            write!(f, " sorted")?;
        }
        Ok(())
    }
}

impl<T> From<List<T>> for Snapshot<T> {
    fn from(list: List<T>) -> Self {
        Self::new(list)
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}
