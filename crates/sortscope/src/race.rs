//! Two sorters run side by side, one step each per tick
//!
//! Each side gets its own region of the drawing surface. A side stops being
//! advanced as soon as it has certified its list, while the other keeps
//! going.

use std::fmt;

use tracing::{debug, info, span, trace, Level};

use crate::algorithms::Sorter;
use crate::core::{AsciiCanvas, Element, Partition, SplitDirection, Step};
use crate::render::{BarRenderer, BarValue};

/// One of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// How a finished race ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// This side certified its list on an earlier tick
    Winner(Side),
    /// Both sides finished on the same tick
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(Side::First) => write!(f, "first"),
            Outcome::Winner(Side::Second) => write!(f, "second"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStatus {
    /// 1-based tick number
    pub tick: usize,
    /// Whether each side was advanced on this tick
    pub advanced: [bool; 2],
    /// Whether each side has certified its list
    pub finished: [bool; 2],
    /// Steps taken so far by each side
    pub steps: [usize; 2],
}

impl TickStatus {
    /// Returns true once both sides have finished
    pub fn is_over(&self) -> bool {
        self.finished.iter().all(|&f| f)
    }
}

struct Lane<T> {
    sorter: Sorter<T>,
    finished_at: Option<usize>,
}

impl<T: Element> Lane<T> {
    fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

/// Two sorters sharing one surface
pub struct Race<T = u32> {
    lanes: [Lane<T>; 2],
    direction: SplitDirection,
    ticks: usize,
}

impl<T: Element> Race<T> {
    /// Race `first` against `second`, splitting the surface in `direction`
    pub fn new(first: Sorter<T>, second: Sorter<T>, direction: SplitDirection) -> Self {
        info!(
            first = %first.algorithm(),
            second = %second.algorithm(),
            %direction,
            "Starting race"
        );
        let lane = |sorter| Lane {
            sorter,
            finished_at: None,
        };
        Self {
            lanes: [lane(first), lane(second)],
            direction,
            ticks: 0,
        }
    }

    /// Advance every unfinished side by one step
    pub fn tick(&mut self) -> TickStatus {
        let mut advanced = [false; 2];
        if !self.is_over() {
            self.ticks += 1;
            let tick = self.ticks;
            for (index, lane) in self.lanes.iter_mut().enumerate() {
                if lane.is_finished() {
                    continue;
                }
                advanced[index] = true;
                let done = match lane.sorter.advance() {
                    Step::Yielded(frame) => frame.is_sorted(),
                    Step::Done(()) => true,
                };
                trace!(tick, lane = index, steps = lane.sorter.steps(), "Race step");
                if done {
                    debug!(
                        tick,
                        algorithm = %lane.sorter.algorithm(),
                        steps = lane.sorter.steps(),
                        "Lane finished"
                    );
                    lane.finished_at = Some(tick);
                }
            }
        }
        self.status(advanced)
    }

    fn status(&self, advanced: [bool; 2]) -> TickStatus {
        TickStatus {
            tick: self.ticks,
            advanced,
            finished: [self.lanes[0].is_finished(), self.lanes[1].is_finished()],
            steps: [self.lanes[0].sorter.steps(), self.lanes[1].sorter.steps()],
        }
    }

    /// Tick until both sides have finished
    pub fn run_to_end(&mut self) -> Outcome {
        let race_span = span!(Level::INFO, "race", direction = %self.direction);
        let _enter = race_span.enter();

        while !self.tick().is_over() {}
        let outcome = self.outcome().unwrap_or(Outcome::Tie);
        info!(ticks = self.ticks, %outcome, "Race finished");
        outcome
    }

    /// Returns true once both sides have finished
    pub fn is_over(&self) -> bool {
        self.lanes.iter().all(Lane::is_finished)
    }

    /// Result of the race, once both sides have finished
    pub fn outcome(&self) -> Option<Outcome> {
        let first = self.lanes[0].finished_at?;
        let second = self.lanes[1].finished_at?;
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Less => Outcome::Winner(Side::First),
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Second),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    pub fn sorter(&self, side: Side) -> &Sorter<T> {
        &self.lanes[side.index()].sorter
    }

    /// Tick on which `side` certified its list
    pub fn finished_at(&self, side: Side) -> Option<usize> {
        self.lanes[side.index()].finished_at
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    /// Regions of `surface` assigned to the first and second side
    pub fn regions(&self, surface: &Partition) -> Vec<Partition> {
        surface.split(self.direction, 2)
    }
}

impl<T: Element + BarValue> Race<T> {
    /// Draw both sides onto `canvas`, each inside its own region of `surface`
    ///
    /// The top row of each region holds the algorithm name and step count.
    pub fn draw(&self, renderer: &BarRenderer, canvas: &mut AsciiCanvas, surface: &Partition) {
        for (lane, region) in self.lanes.iter().zip(self.regions(surface)) {
            let label = format!(
                "{} ({} steps)",
                lane.sorter.algorithm(),
                lane.sorter.steps()
            );
            canvas.draw_text(
                region.origin_x.round() as usize,
                region.origin_y.round() as usize,
                &label,
            );
            let bars = Partition::with_origin(
                region.width,
                (region.height - 1.0).max(0.0),
                region.origin_x,
                region.origin_y + 1.0,
            );
            renderer.draw_frame(canvas, &bars, &lane.sorter.frame());
        }
    }

    /// Render both sides on a canvas the size of the renderer's config
    pub fn render(&self, renderer: &BarRenderer) -> String {
        let config = renderer.config();
        let mut canvas = AsciiCanvas::new(config.width, config.height);
        let surface = Partition::new(config.width as f64, config.height as f64);
        self.draw(renderer, &mut canvas, &surface);
        canvas.to_string()
    }
}
