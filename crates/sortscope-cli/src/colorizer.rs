//! Terminal colorization for rendered bar charts
//!
//! Frames are rendered with the ASCII glyph set, where every role has its
//! own character. The colorizer swaps each glyph for the chosen set's glyph
//! and paints it in the role's color with crossterm.

use crossterm::style::{Color, Stylize};
use sortscope::{BarRole, CharacterSet};

/// Terminal color for a bar role
pub fn role_color(role: BarRole) -> Color {
    match role.color_name() {
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        _ => Color::Blue,
    }
}

/// Repaints ASCII-rendered output in color
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    charset: CharacterSet,
}

impl Colorizer {
    /// Paint bars with the glyphs of `charset`
    pub fn new(charset: CharacterSet) -> Self {
        Self { charset }
    }

    /// Colorize a picture rendered with [`CharacterSet::Ascii`]
    ///
    /// Characters that are not bar glyphs (labels, blanks) pass through.
    pub fn paint(&self, picture: &str) -> String {
        let mut result = String::with_capacity(picture.len() * 4);

        for (row, line) in picture.split('\n').enumerate() {
            if row > 0 {
                result.push('\n');
            }
            let mut chars = line.chars().peekable();
            while let Some(c) = chars.next() {
                let Some(role) = CharacterSet::Ascii.role_of_glyph(c) else {
                    result.push(c);
                    continue;
                };
                // Paint a whole run of equal glyphs with one escape sequence.
                let mut run = 1;
                while chars.next_if_eq(&c).is_some() {
                    run += 1;
                }
                let glyphs: String = std::iter::repeat(self.charset.glyph(role))
                    .take(run)
                    .collect();
                result.push_str(&format!("{}", glyphs.with(role_color(role))));
            }
        }

        result
    }
}
