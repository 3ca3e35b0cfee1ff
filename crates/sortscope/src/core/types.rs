//! Core type definitions for rendering and animation
//!
//! Character sets that decide how each bar role is drawn, and the explicit
//! configuration records handed to renderers and drivers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::snapshot::BarRole;

/// Character set for rendering output
///
/// Every set uses a distinct glyph per [`BarRole`], so roles stay readable
/// without color and a colorizer can map glyphs back to roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII: `#` idle, `+` selected, `*` special, `@` swapped
    Ascii,
    /// Unicode shades: `█` idle, `▓` selected, `▒` special, `░` swapped
    #[default]
    Unicode,
    /// Full blocks for every role; relies entirely on color
    Blocks,
}

impl CharacterSet {
    /// Glyph used to fill a bar with the given role
    pub fn glyph(&self, role: BarRole) -> char {
        match self {
            CharacterSet::Ascii => match role {
                BarRole::Idle => '#',
                BarRole::Selected => '+',
                BarRole::Special => '*',
                BarRole::Swapped => '@',
            },
            CharacterSet::Unicode => match role {
                BarRole::Idle => '█',
                BarRole::Selected => '▓',
                BarRole::Special => '▒',
                BarRole::Swapped => '░',
            },
            CharacterSet::Blocks => '█',
        }
    }

    /// Role drawn with `glyph`, if the glyph belongs to this set
    ///
    /// `Blocks` uses one glyph for everything, so it always answers `Idle`.
    pub fn role_of_glyph(&self, glyph: char) -> Option<BarRole> {
        [
            BarRole::Idle,
            BarRole::Selected,
            BarRole::Special,
            BarRole::Swapped,
        ]
        .into_iter()
        .find(|&role| self.glyph(role) == glyph)
    }

    /// Get all valid set names
    pub fn variants() -> &'static [&'static str] {
        &["ascii", "unicode", "blocks"]
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
            CharacterSet::Blocks => write!(f, "blocks"),
        }
    }
}

impl FromStr for CharacterSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(CharacterSet::Ascii),
            "unicode" => Ok(CharacterSet::Unicode),
            "blocks" => Ok(CharacterSet::Blocks),
            _ => Err(format!("Unknown character set: {}", s)),
        }
    }
}

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Glyphs used for bars
    pub charset: CharacterSet,
    /// Canvas width in cells
    pub width: usize,
    /// Canvas height in cells
    pub height: usize,
}

impl RenderConfig {
    pub const DEFAULT_WIDTH: usize = 60;
    pub const DEFAULT_HEIGHT: usize = 16;

    /// Create a config with an explicit character set and size
    pub fn new(charset: CharacterSet, width: usize, height: usize) -> Self {
        Self {
            charset,
            width,
            height,
        }
    }

    /// Same config with a different character set
    pub fn with_charset(mut self, charset: CharacterSet) -> Self {
        self.charset = charset;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            CharacterSet::default(),
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
        )
    }
}

/// Driver configuration for animated runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationConfig {
    /// Pause between two rendered steps
    pub delay: Duration,
    /// Stop after this many steps even if the run has not finished
    pub max_steps: Option<usize>,
}

impl AnimationConfig {
    pub const DEFAULT_DELAY_MS: u64 = 50;
    pub const MIN_DELAY_MS: u64 = 10;
    pub const MAX_DELAY_MS: u64 = 500;

    /// Create a config with the given delay in milliseconds
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            max_steps: None,
        }
    }

    /// Same config with a step limit
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Returns true once `steps` has reached the step limit
    pub fn limit_reached(&self, steps: usize) -> bool {
        self.max_steps.is_some_and(|max| steps >= max)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::with_delay_ms(Self::DEFAULT_DELAY_MS)
    }
}
