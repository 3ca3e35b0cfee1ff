//! Bar-chart rendering of snapshots and frames
//!
//! Each value becomes one vertical bar whose height is proportional to the
//! largest value on screen. The glyph a bar is drawn with encodes its
//! [`BarRole`], so the output stays readable without color and a terminal
//! colorizer can recover the role from the character alone.

use tracing::trace;

use crate::core::{AsciiCanvas, BarRole, CharacterSet, Frame, Partition, RenderConfig, Snapshot};

/// Values that can be drawn as bars
pub trait BarValue {
    /// Bar height before scaling; negative magnitudes draw as empty bars
    fn magnitude(&self) -> f64;
}

macro_rules! impl_bar_value {
    ($($t:ty),*) => {
        $(
            impl BarValue for $t {
                fn magnitude(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_bar_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Integer cell bounds of a partition: `(x, y, width, height)`
fn cells(area: &Partition) -> (usize, usize, usize, usize) {
    let x0 = area.origin_x.max(0.0).round() as usize;
    let y0 = area.origin_y.max(0.0).round() as usize;
    let x1 = (area.origin_x + area.width).max(0.0).round() as usize;
    let y1 = (area.origin_y + area.height).max(0.0).round() as usize;
    (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
}

fn largest<T: BarValue>(snapshots: &[&Snapshot<T>]) -> f64 {
    snapshots
        .iter()
        .flat_map(|s| s.list.iter())
        .map(BarValue::magnitude)
        .fold(0.0, f64::max)
}

/// Draws snapshots and frames onto an [`AsciiCanvas`]
#[derive(Debug, Clone, Default)]
pub struct BarRenderer {
    config: RenderConfig,
}

impl BarRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Default size with a specific character set
    pub fn with_charset(charset: CharacterSet) -> Self {
        Self::new(RenderConfig::default().with_charset(charset))
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one frame to a string the size of the configured canvas
    ///
    /// # Example
    /// ```rust
    /// use sortscope::core::{CharacterSet, Frame, RenderConfig, Snapshot};
    /// use sortscope::render::BarRenderer;
    ///
    /// let snapshot = Snapshot::new(vec![1u32, 2]);
    /// let renderer = BarRenderer::new(RenderConfig::new(CharacterSet::Ascii, 2, 2));
    /// assert_eq!(renderer.render(&Frame::Single(&snapshot)), " #\n##");
    /// ```
    pub fn render<T: BarValue>(&self, frame: &Frame<'_, T>) -> String {
        let mut canvas = AsciiCanvas::new(self.config.width, self.config.height);
        let area = Partition::new(self.config.width as f64, self.config.height as f64);
        self.draw_frame(&mut canvas, &area, frame);
        canvas.to_string()
    }

    /// Draw a frame inside `area`
    ///
    /// A merge frame puts the two halves side by side on top and the merged
    /// output below, all on one shared scale.
    pub fn draw_frame<T: BarValue>(
        &self,
        canvas: &mut AsciiCanvas,
        area: &Partition,
        frame: &Frame<'_, T>,
    ) {
        let scale = largest(&frame.snapshots());
        match *frame {
            Frame::Single(snapshot) => {
                self.draw_snapshot(canvas, area, snapshot, snapshot.len(), scale)
            }
            Frame::Merge {
                left,
                right,
                merged,
            } => {
                let rows = area.split_horizontally(2);
                let halves = rows[0].split_vertically(2);
                let total = left.len() + right.len();
                self.draw_snapshot(canvas, &halves[0], left, left.len(), scale);
                self.draw_snapshot(canvas, &halves[1], right, right.len(), scale);
                self.draw_snapshot(canvas, &rows[1], merged, total, scale);
            }
        }
    }

    /// Draw `snapshot` as bars in `area`, leaving room for `slots` bars
    ///
    /// Bars are scaled so a value of `scale` fills the area's height. A
    /// positive value always gets at least one cell.
    pub fn draw_snapshot<T: BarValue>(
        &self,
        canvas: &mut AsciiCanvas,
        area: &Partition,
        snapshot: &Snapshot<T>,
        slots: usize,
        scale: f64,
    ) {
        let (x0, y0, width, height) = cells(area);
        let slots = slots.max(snapshot.len());
        if slots == 0 || width == 0 || height == 0 {
            return;
        }
        trace!(bars = snapshot.len(), slots, width, height, "Drawing bars");

        for (index, value) in snapshot.list.iter().enumerate() {
            let left = index * width / slots;
            let right = ((index + 1) * width / slots).max(left + 1);
            let mut bar_width = right - left;
            if bar_width >= 3 {
                bar_width -= 1;
            }

            let bar_height = self.bar_height(value.magnitude(), scale, height);
            let glyph = self.config.charset.glyph(snapshot.role_of(index));
            canvas.fill_rect(
                x0 + left,
                y0 + height - bar_height,
                bar_width,
                bar_height,
                glyph,
            );
        }
    }

    fn bar_height(&self, value: f64, scale: f64, height: usize) -> usize {
        if value <= 0.0 || scale <= 0.0 {
            return 0;
        }
        let cells = (value / scale * height as f64).round() as usize;
        cells.clamp(1, height)
    }

    /// Role shown at a canvas cell, if it holds a bar
    pub fn role_at(&self, canvas: &AsciiCanvas, x: usize, y: usize) -> Option<BarRole> {
        self.config.charset.role_of_glyph(canvas.get_char(x, y))
    }
}
