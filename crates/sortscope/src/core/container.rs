//! Ordered container used for values and index sets
//!
//! A thin dynamic array with exactly the operations the algorithms and the
//! renderer need. Index sets (`selection`, `swapped`, `special`) are stored in
//! the same container, so duplicates are allowed and membership is a linear
//! scan, which is fine for the handful of indices a snapshot ever marks.

use std::fmt;
use std::ops::Index;

/// Ordered, growable sequence of elements
///
/// Insertion order is significant and duplicates are allowed. `len()` is the
/// number of `add` calls since the last `clear`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> List<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty list with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Append an element
    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Element at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Replace the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, element: T) {
        self.elements[index] = element;
    }

    /// Exchange the elements at `i` and `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.elements.swap(i, j);
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// View the elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consume the list, returning the backing vector
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> List<T> {
    /// Returns true if `element` occurs anywhere in the list
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }
}

impl<T: PartialOrd> List<T> {
    /// Returns true if the list is non-decreasing end to end
    pub fn is_non_decreasing(&self) -> bool {
        self.elements.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "]")
    }
}
