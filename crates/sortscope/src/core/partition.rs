//! Rectangular regions of a drawing surface
//!
//! Used to give each algorithm in a race its own slice of the canvas, and to
//! lay out the three panes of a merge frame. Coordinates are fractional so
//! repeated splitting never accumulates rounding; renderers round at the end.

use std::fmt;
use std::str::FromStr;

/// Direction in which a region is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SplitDirection {
    /// Side by side: the width is divided
    #[default]
    Vertical,
    /// Stacked: the height is divided
    Horizontal,
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitDirection::Vertical => write!(f, "vertical"),
            SplitDirection::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl FromStr for SplitDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vertical" | "v" => Ok(SplitDirection::Vertical),
            "horizontal" | "h" => Ok(SplitDirection::Horizontal),
            _ => Err(format!("Unknown split direction: {}", s)),
        }
    }
}

/// A rectangle on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Partition {
    pub width: f64,
    pub height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Partition {
    /// A region covering a whole `width` x `height` surface
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// A region at an explicit origin
    pub fn with_origin(width: f64, height: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
        }
    }

    /// Origin as an `(x, y)` pair
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Divide into `count` equal side-by-side columns, left to right
    pub fn split_vertically(&self, count: usize) -> Vec<Partition> {
        if count == 0 {
            return Vec::new();
        }
        let width = self.width / count as f64;
        (0..count)
            .map(|i| Partition {
                width,
                height: self.height,
                origin_x: self.origin_x + i as f64 * width,
                origin_y: self.origin_y,
            })
            .collect()
    }

    /// Divide into `count` equal stacked rows, top to bottom
    pub fn split_horizontally(&self, count: usize) -> Vec<Partition> {
        if count == 0 {
            return Vec::new();
        }
        let height = self.height / count as f64;
        (0..count)
            .map(|i| Partition {
                width: self.width,
                height,
                origin_x: self.origin_x,
                origin_y: self.origin_y + i as f64 * height,
            })
            .collect()
    }

    /// Divide in the given direction
    pub fn split(&self, direction: SplitDirection, count: usize) -> Vec<Partition> {
        match direction {
            SplitDirection::Vertical => self.split_vertically(count),
            SplitDirection::Horizontal => self.split_horizontally(count),
        }
    }
}
