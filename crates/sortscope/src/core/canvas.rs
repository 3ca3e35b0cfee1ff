//! Character canvas the bar renderer draws on
//!
//! Unlike a diagram canvas this one has a fixed size: animation frames must
//! line up row for row, so drawing outside the grid is clipped rather than
//! growing it, and blank rows are kept when printing.

/// Fixed-size character grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCanvas {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<char>>,
}

impl AsciiCanvas {
    /// Create a blank canvas with the specified dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![' '; width]; height],
        }
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    /// Set a character at the specified position; out-of-bounds writes are dropped
    pub fn set_char(&mut self, x: usize, y: usize, c: char) {
        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = c;
        }
    }

    /// Get the character at the specified position
    pub fn get_char(&self, x: usize, y: usize) -> char {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(' ')
    }

    /// Fill the rectangle with top-left corner `(x, y)`
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, c: char) {
        for row in y..y.saturating_add(height).min(self.height) {
            for col in x..x.saturating_add(width).min(self.width) {
                self.grid[row][col] = c;
            }
        }
    }

    /// Draw text at the specified position (left-aligned, clipped)
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.set_char(x + i, y, c);
        }
    }

    /// Number of cells holding `c`
    pub fn count(&self, c: char) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == c).count())
            .sum()
    }
}

impl std::fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .grid
            .iter()
            .map(|row| {
                let s: String = row.iter().collect();
                s.trim_end().to_string()
            })
            .collect();

        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = AsciiCanvas::new(10, 5);
        assert_eq!(canvas.width, 10);
        assert_eq!(canvas.height, 5);
        assert_eq!(canvas.count(' '), 50);
    }

    #[test]
    fn test_set_and_get_char() {
        let mut canvas = AsciiCanvas::new(10, 10);
        canvas.set_char(5, 3, 'X');
        assert_eq!(canvas.get_char(5, 3), 'X');
        assert_eq!(canvas.get_char(0, 0), ' ');
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut canvas = AsciiCanvas::new(5, 5);
        canvas.set_char(10, 10, 'X');
        assert_eq!(canvas.width, 5);
        assert_eq!(canvas.height, 5);
        assert_eq!(canvas.get_char(10, 10), ' ');
        assert_eq!(canvas.count('X'), 0);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = AsciiCanvas::new(4, 3);
        canvas.fill_rect(2, 1, 5, 5, '#');
        assert_eq!(canvas.count('#'), 4);
        assert_eq!(canvas.get_char(3, 2), '#');
        assert_eq!(canvas.get_char(1, 1), ' ');
    }

    #[test]
    fn test_display_keeps_blank_rows() {
        let mut canvas = AsciiCanvas::new(6, 3);
        canvas.draw_text(1, 2, "ab");
        assert_eq!(canvas.to_string(), "\n\n ab");
    }

    #[test]
    fn test_clear() {
        let mut canvas = AsciiCanvas::new(3, 3);
        canvas.fill_rect(0, 0, 3, 3, '#');
        canvas.clear();
        assert_eq!(canvas.count('#'), 0);
    }
}
