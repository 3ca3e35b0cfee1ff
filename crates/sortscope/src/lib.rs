//! Sortscope - Watch sorting algorithms work, one step at a time
//!
//! A library of classic sorting algorithms written as resumable step
//! sequences. Every step exposes the list together with the indices the
//! algorithm is comparing, exchanging or tracking, so a driver can render
//! the run as an animated bar chart.
//!
//! # Quick Start
//!
//! ```rust
//! use sortscope::trace;
//!
//! let steps = trace("Optimized Bubble Sort", vec![2u32, 1]).unwrap();
//! assert_eq!(steps.len(), 4);
//! assert!(steps.last().unwrap().sorted);
//! ```
//!
//! # Driving a Sorter
//!
//! For animation, advance a [`Sorter`](algorithms::Sorter) yourself and
//! render each frame before asking for the next:
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let mut sorter = Sorter::new(Algorithm::Quick, vec![5u32, 3, 8, 1, 9, 2]);
//! let renderer = BarRenderer::new(RenderConfig::new(CharacterSet::Ascii, 12, 4));
//!
//! while let Step::Yielded(frame) = sorter.advance() {
//!     let picture = renderer.render(&frame);
//!     assert_eq!(picture.lines().count(), 4);
//! }
//! assert_eq!(sorter.snapshot().list.as_slice(), &[1, 2, 3, 5, 8, 9]);
//! ```

pub mod algorithms;
pub mod core;
pub mod generate;
pub mod race;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::{algorithm_names, create_sorter, Algorithm, Sorter};
    pub use crate::core::{
        AnimationConfig, BarRole, CharacterSet, Element, Frame, List, Partition, RenderConfig,
        Snapshot, SortError, SplitDirection, Step, StepSequence,
    };
    pub use crate::generate::{ListKind, ListSpec};
    pub use crate::race::{Outcome, Race, Side};
    pub use crate::render::{BarRenderer, BarValue};
}

use anyhow::Context;

use crate::algorithms::create_sorter;
use crate::render::{BarRenderer, BarValue};

/// Sort `values` with the named algorithm and keep the snapshot of every step
///
/// For the split-list merge sort each entry is the merged output so far.
///
/// # Example
/// ```rust
/// use sortscope::trace;
///
/// let steps = trace("Merge Sort", vec![3u32, 1, 2]).unwrap();
/// assert_eq!(steps.last().unwrap().list.as_slice(), &[1, 2, 3]);
/// assert!(trace("Bogo Sort", vec![1u32]).is_err());
/// ```
pub fn trace<T: Element>(algorithm: &str, values: Vec<T>) -> anyhow::Result<Vec<Snapshot<T>>> {
    let mut sorter = create_sorter(values, algorithm)
        .with_context(|| format!("Failed to start {algorithm:?}"))?;
    let mut steps = Vec::new();
    while let Step::Yielded(frame) = sorter.advance() {
        steps.push(frame.primary().clone());
    }
    Ok(steps)
}

/// Sort `values` with the named algorithm and render every step
///
/// # Example
/// ```rust
/// use sortscope::{render_steps, CharacterSet, RenderConfig};
///
/// let config = RenderConfig::new(CharacterSet::Ascii, 2, 2);
/// let pictures = render_steps("Insertion Sort", vec![1u32, 2], config).unwrap();
/// assert_eq!(pictures.last().unwrap(), " #\n##");
/// ```
pub fn render_steps<T: Element + BarValue>(
    algorithm: &str,
    values: Vec<T>,
    config: RenderConfig,
) -> anyhow::Result<Vec<String>> {
    let mut sorter = create_sorter(values, algorithm)
        .with_context(|| format!("Failed to start {algorithm:?}"))?;
    let renderer = BarRenderer::new(config);
    let mut pictures = Vec::new();
    while let Step::Yielded(frame) = sorter.advance() {
        pictures.push(renderer.render(&frame));
    }
    Ok(pictures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_every_algorithm() {
        for name in algorithms::algorithm_names() {
            let steps = trace(name, vec![3u32, 1, 3, 2, 1]).unwrap();
            let last = steps.last().unwrap();
            assert!(last.sorted, "{}", name);
            assert_eq!(last.list.as_slice(), &[1, 1, 2, 3, 3], "{}", name);
        }
    }

    #[test]
    fn test_trace_unknown_algorithm() {
        let err = trace("Sleep Sort", vec![1u32]).unwrap_err();
        assert!(err.to_string().contains("Sleep Sort"));
        assert!(err.downcast_ref::<SortError>().is_some());
    }

    #[test]
    fn test_render_steps_sizes() {
        let config = RenderConfig::new(CharacterSet::Unicode, 8, 3);
        let pictures = render_steps("Split Merge Sort", vec![4u32, 3, 2, 1], config).unwrap();
        assert!(!pictures.is_empty());
        assert!(pictures.iter().all(|p| p.lines().count() <= 3));
    }
}
