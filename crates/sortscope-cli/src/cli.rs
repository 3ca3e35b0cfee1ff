//! Command-line interface for the sortscope utility
//!
//! Animates sorting algorithms as bar charts in the terminal, races two of
//! them against each other, and dumps step-by-step traces as JSON lines.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{info, warn};

use crate::colorizer::Colorizer;
use sortscope::algorithms::{Algorithm, Sorter};
use sortscope::generate::{ListKind, ListSpec, MAX_LIST_SIZE, MIN_LIST_SIZE};
use sortscope::race::{Outcome, Race, Side};
use sortscope::render::BarRenderer;
use sortscope::{
    AnimationConfig, CharacterSet, Frame, RenderConfig, Snapshot, SortError, SplitDirection,
    Step,
};

/// Sortscope - Watch sorting algorithms work, one step at a time
#[derive(Parser)]
#[command(name = "sortscope")]
#[command(about = "Animate sorting algorithms as terminal bar charts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (falls back to SORTSCOPE_LOG_LEVEL, then RUST_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (falls back to SORTSCOPE_LOG_FORMAT)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Animate one algorithm sorting a list
    Run {
        /// Algorithm name or slug (see `sortscope algorithms`)
        #[arg(short, long, default_value = "bubble")]
        algorithm: Algorithm,

        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        display: DisplayArgs,

        #[command(flatten)]
        timing: TimingArgs,
    },

    /// Run two algorithms side by side on the same list
    Race {
        /// First algorithm
        first: Algorithm,

        /// Second algorithm
        second: Algorithm,

        /// How the screen is divided between the two
        #[arg(long, value_enum, default_value_t = DirectionChoice::Vertical)]
        direction: DirectionChoice,

        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        display: DisplayArgs,

        #[command(flatten)]
        timing: TimingArgs,
    },

    /// Print every step of a run as one JSON object per line
    Trace {
        /// Algorithm name or slug
        #[arg(short, long, default_value = "bubble")]
        algorithm: Algorithm,

        #[command(flatten)]
        list: ListArgs,

        /// Output file for the trace (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the available algorithms
    Algorithms {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show the available list kinds
    Lists,
}

/// Where the values to sort come from
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Number of values to generate
    #[arg(short = 'n', long, default_value_t = sortscope::generate::DEFAULT_LIST_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Shape of the generated list (see `sortscope lists`)
    #[arg(short, long, default_value = "shuffled")]
    pub kind: ListKind,

    /// Largest value for random lists (defaults to the size)
    #[arg(long)]
    pub max: Option<u32>,

    /// Seed for a repeatable list
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read values from a file instead (whitespace or comma separated, - for stdin)
    #[arg(short, long, conflicts_with_all = ["size", "kind", "max", "seed"])]
    pub input: Option<PathBuf>,
}

/// How frames are drawn
#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    /// Glyphs used for bars
    #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
    pub style: StyleChoice,

    /// Canvas width in columns
    #[arg(long, default_value_t = RenderConfig::DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in rows
    #[arg(long, default_value_t = RenderConfig::DEFAULT_HEIGHT)]
    pub height: usize,

    /// When to use colors in output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print only the final frame instead of animating
    #[arg(long)]
    pub no_animate: bool,
}

/// Animation pacing
#[derive(Args, Debug, Clone)]
pub struct TimingArgs {
    /// Pause between steps in milliseconds
    #[arg(
        short,
        long,
        default_value_t = AnimationConfig::DEFAULT_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(10..=500)
    )]
    pub delay: u64,

    /// Stop after this many steps
    #[arg(long)]
    pub max_steps: Option<usize>,
}

impl TimingArgs {
    fn config(&self) -> AnimationConfig {
        let config = AnimationConfig::with_delay_ms(self.delay);
        match self.max_steps {
            Some(max) => config.with_max_steps(max),
            None => config,
        }
    }
}

fn parse_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (MIN_LIST_SIZE..=MAX_LIST_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "list size must be between {MIN_LIST_SIZE} and {MAX_LIST_SIZE}"
        ))
    }
}

/// Supported bar character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
    Blocks,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
            StyleChoice::Blocks => CharacterSet::Blocks,
        }
    }
}

/// Race layouts
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DirectionChoice {
    /// Side by side
    #[default]
    Vertical,
    /// One above the other
    Horizontal,
}

impl From<DirectionChoice> for SplitDirection {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Vertical => SplitDirection::Vertical,
            DirectionChoice::Horizontal => SplitDirection::Horizontal,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// One line of `sortscope trace` output
#[derive(Debug, Serialize)]
pub struct TraceRecord<'a> {
    pub step: usize,
    /// True while a split-list merge shows its two halves
    pub merge: bool,
    pub list: &'a [u32],
    pub selection: &'a [usize],
    pub swapped: &'a [usize],
    pub special: &'a [usize],
    pub sorted: bool,
}

impl<'a> TraceRecord<'a> {
    pub fn new(step: usize, frame: &Frame<'a, u32>) -> Self {
        let snapshot: &'a Snapshot<u32> = frame.primary();
        Self {
            step,
            merge: frame.is_merge(),
            list: snapshot.list.as_slice(),
            selection: snapshot.selection.as_slice(),
            swapped: snapshot.swapped.as_slice(),
            special: snapshot.special.as_slice(),
            sorted: snapshot.sorted,
        }
    }
}

/// Renders frames, in color when a colorizer is attached
struct Screen {
    renderer: BarRenderer,
    colorizer: Option<Colorizer>,
}

impl Screen {
    fn new(display: &DisplayArgs, colorize: bool) -> Self {
        let charset: CharacterSet = display.style.into();
        if colorize {
            // Render with distinct ASCII glyphs, then repaint.
            Self {
                renderer: BarRenderer::new(RenderConfig::new(
                    CharacterSet::Ascii,
                    display.width,
                    display.height,
                )),
                colorizer: Some(Colorizer::new(charset)),
            }
        } else {
            Self {
                renderer: BarRenderer::new(RenderConfig::new(charset, display.width, display.height)),
                colorizer: None,
            }
        }
    }

    fn finish(&self, picture: String) -> String {
        match &self.colorizer {
            Some(colorizer) => colorizer.paint(&picture),
            None => picture,
        }
    }

    fn frame(&self, frame: &Frame<'_, u32>) -> String {
        self.finish(self.renderer.render(frame))
    }

    fn race(&self, race: &Race<u32>) -> String {
        self.finish(race.render(&self.renderer))
    }
}

/// Main CLI application
pub struct SortscopeApp<W: Write> {
    out: W,
    /// Whether `out` is an interactive terminal
    terminal: bool,
}

impl SortscopeApp<io::Stdout> {
    /// Create an application writing to stdout
    pub fn new() -> Self {
        let out = io::stdout();
        let terminal = crossterm::tty::IsTty::is_tty(&out);
        Self { out, terminal }
    }
}

impl Default for SortscopeApp<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> SortscopeApp<W> {
    /// Create an application writing to `out`, which is never treated as a terminal
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            terminal: false,
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("Sortscope v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Run {
                algorithm,
                list,
                display,
                timing,
            } => self.run_command(algorithm, &list, &display, &timing, cli.verbose),
            Commands::Race {
                first,
                second,
                direction,
                list,
                display,
                timing,
            } => self.race_command(
                [first, second],
                direction.into(),
                &list,
                &display,
                &timing,
                cli.verbose,
            ),
            Commands::Trace {
                algorithm,
                list,
                output,
            } => self.trace_command(algorithm, &list, output),
            Commands::Algorithms { json } => self.algorithms_command(json),
            Commands::Lists => self.lists_command(),
        }
    }

    /// Handle the run command
    fn run_command(
        &mut self,
        algorithm: Algorithm,
        list: &ListArgs,
        display: &DisplayArgs,
        timing: &TimingArgs,
        verbose: bool,
    ) -> Result<()> {
        let values = self.load_values(list)?;
        if verbose {
            eprintln!("Sorting {} values with {}", values.len(), algorithm);
        }

        let screen = Screen::new(display, self.should_colorize(display.color));
        let animation = timing.config();
        let live = self.terminal && !display.no_animate;
        let count = values.len();
        let mut sorter = Sorter::new(algorithm, values);

        loop {
            if animation.limit_reached(sorter.steps()) {
                warn!(steps = sorter.steps(), "Step limit reached");
                break;
            }
            let picture = match sorter.advance() {
                Step::Yielded(frame) if live => screen.frame(&frame),
                Step::Yielded(_) => continue,
                Step::Done(()) => break,
            };
            self.show(&picture)?;
            thread::sleep(animation.delay);
        }

        if !live {
            let picture = screen.frame(&sorter.frame());
            writeln!(self.out, "{picture}")?;
        }
        let status = if sorter.is_sorted() {
            "sorted"
        } else {
            "stopped"
        };
        writeln!(
            self.out,
            "{}: {} {} values in {} steps",
            algorithm,
            status,
            count,
            sorter.steps()
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Handle the race command
    fn race_command(
        &mut self,
        algorithms: [Algorithm; 2],
        direction: SplitDirection,
        list: &ListArgs,
        display: &DisplayArgs,
        timing: &TimingArgs,
        verbose: bool,
    ) -> Result<()> {
        let values = self.load_values(list)?;
        if verbose {
            eprintln!(
                "Racing {} against {} on {} values",
                algorithms[0],
                algorithms[1],
                values.len()
            );
        }

        let screen = Screen::new(display, self.should_colorize(display.color));
        let animation = timing.config();
        let live = self.terminal && !display.no_animate;
        let mut race = Race::new(
            Sorter::new(algorithms[0], values.clone()),
            Sorter::new(algorithms[1], values),
            direction,
        );

        while !race.is_over() {
            if animation.limit_reached(race.ticks()) {
                warn!(ticks = race.ticks(), "Step limit reached");
                break;
            }
            race.tick();
            if live {
                let picture = screen.race(&race);
                self.show(&picture)?;
                thread::sleep(animation.delay);
            }
        }

        if !live {
            let picture = screen.race(&race);
            writeln!(self.out, "{picture}")?;
        }
        match race.outcome() {
            Some(Outcome::Winner(side)) => {
                let sorter = race.sorter(side);
                writeln!(
                    self.out,
                    "Winner: {} ({} steps)",
                    sorter.algorithm(),
                    sorter.steps()
                )?;
                let loser = match side {
                    Side::First => Side::Second,
                    Side::Second => Side::First,
                };
                writeln!(
                    self.out,
                    "Runner-up: {} ({} steps)",
                    race.sorter(loser).algorithm(),
                    race.sorter(loser).steps()
                )?;
            }
            Some(Outcome::Tie) => {
                writeln!(self.out, "Tie after {} steps", race.ticks())?;
            }
            None => {
                writeln!(self.out, "Stopped after {} steps", race.ticks())?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Handle the trace command
    pub fn trace_command(
        &mut self,
        algorithm: Algorithm,
        list: &ListArgs,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let values = self.load_values(list)?;
        let mut sorter = Sorter::new(algorithm, values);
        let mut lines = String::new();

        let mut step = 0;
        while let Step::Yielded(frame) = sorter.advance() {
            step += 1;
            let record = TraceRecord::new(step, &frame);
            lines.push_str(&serde_json::to_string(&record)?);
            lines.push('\n');
        }
        info!(%algorithm, steps = step, "Trace complete");

        self.write_output(output, &lines)
    }

    /// Handle the algorithms command
    pub fn algorithms_command(&mut self, json: bool) -> Result<()> {
        if json {
            let algorithms: Vec<_> = Algorithm::ALL
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name(),
                        "slug": a.slug(),
                        "description": a.description(),
                        "stable": a.is_stable(),
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "algorithms": algorithms,
                "total": Algorithm::ALL.len(),
            });
            writeln!(self.out, "{}", serde_json::to_string_pretty(&listing)?)?;
        } else {
            writeln!(self.out, "Available algorithms:")?;
            for algorithm in Algorithm::ALL {
                writeln!(
                    self.out,
                    "  {:<18} {:<16} - {}",
                    algorithm.slug(),
                    algorithm.name(),
                    algorithm.description()
                )?;
            }
        }
        Ok(())
    }

    /// Handle the lists command
    pub fn lists_command(&mut self) -> Result<()> {
        writeln!(self.out, "Available list kinds:")?;
        for kind in ListKind::ALL {
            writeln!(self.out, "  {:<12} {}", kind.slug(), kind.name())?;
        }
        Ok(())
    }

    /// Determine if we should colorize the output based on color choice and output destination
    fn should_colorize(&self, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && self.terminal,
        }
    }

    /// Replace the screen contents with `picture`
    fn show(&mut self, picture: &str) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        write!(self.out, "{picture}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Values from the input file, or a generated list
    pub fn load_values(&self, list: &ListArgs) -> Result<Vec<u32>> {
        match &list.input {
            Some(path) => {
                let content = read_input(path)?;
                parse_values(&content)
                    .with_context(|| format!("Invalid values in '{}'", path.display()))
            }
            None => {
                let mut spec = ListSpec::new(list.kind, list.size);
                if let Some(max) = list.max {
                    spec = spec.with_max(max);
                }
                if let Some(seed) = list.seed {
                    spec = spec.with_seed(seed);
                }
                Ok(spec.generate())
            }
        }
    }

    /// Write output to file or our writer
    pub fn write_output(&mut self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content)
                    .map_err(SortError::from)
                    .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            }
            _ => {
                write!(self.out, "{content}")?;
                self.out.flush()?;
            }
        }
        Ok(())
    }

    /// Consume the app and return its writer
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out
    }
}

/// Read input from file or stdin
pub fn read_input(path: &Path) -> Result<String> {
    if path.to_string_lossy() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        let content = fs::read_to_string(path)
            .map_err(SortError::from)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
        Ok(content)
    }
}

/// Parse whitespace- or comma-separated unsigned integers
pub fn parse_values(content: &str) -> Result<Vec<u32>> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .with_context(|| format!("'{token}' is not a non-negative integer"))
        })
        .collect()
}
