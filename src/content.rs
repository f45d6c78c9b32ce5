use crate::{
    colors::{RgbColor, CGA_BLACK, CGA_LIGHT_GRAY, CGA_PALETTE},
    error::{Error, Result},
};

/// Number of rows in a DOS text mode screen.
pub const ANSI_ROWS: usize = 25;
/// Number of columns in a DOS text mode screen.
pub const ANSI_COLS: usize = 80;

/// A single terminal cell: one character with foreground and background
/// colors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct AnsiCell {
    /// The character displayed in this cell.
    pub text: char,
    pub fg: RgbColor,
    pub bg: RgbColor,
}

/// A space, light gray on black.
impl Default for AnsiCell {
    fn default() -> Self {
        Self {
            text: ' ',
            fg: CGA_PALETTE[CGA_LIGHT_GRAY as usize],
            bg: CGA_PALETTE[CGA_BLACK as usize],
        }
    }
}

impl AnsiCell {
    pub fn new(text: char, fg: RgbColor, bg: RgbColor) -> Self {
        Self { text, fg, bg }
    }

    /// Creates a cell with colors taken from the CGA palette by index.
    /// Indices wrap modulo 16.
    pub fn cga(text: char, fg: u8, bg: u8) -> Self {
        Self {
            text,
            fg: CGA_PALETTE[(fg & 0x0F) as usize],
            bg: CGA_PALETTE[(bg & 0x0F) as usize],
        }
    }

    /// Creates a cell from a grapheme as handed over by an editor.
    /// Anything but a single character (empty strings, emoji sequences)
    /// becomes a space.
    pub fn from_grapheme(grapheme: &str, fg: RgbColor, bg: RgbColor) -> Self {
        let mut chars = grapheme.chars();
        let text = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => ' ',
        };
        Self { text, fg, bg }
    }
}

/// A fixed size `ANSI_ROWS` x `ANSI_COLS` grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiGrid {
    pub(crate) rows: Vec<Vec<AnsiCell>>,
}

impl Default for AnsiGrid {
    fn default() -> Self {
        Self::new(AnsiCell::default())
    }
}

impl AnsiGrid {
    /// Creates a new grid filled with `fill`.
    pub fn new(fill: AnsiCell) -> Self {
        Self {
            rows: vec![vec![fill; ANSI_COLS]; ANSI_ROWS],
        }
    }

    /// Builds a grid from rows of cells.
    /// Returns an error unless there are exactly `ANSI_ROWS` rows of
    /// `ANSI_COLS` cells each.
    pub fn from_rows(rows: Vec<Vec<AnsiCell>>) -> Result<Self> {
        if rows.len() != ANSI_ROWS {
            return Err(Error::HeightMismatch {
                expected: ANSI_ROWS,
                got: rows.len(),
            });
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != ANSI_COLS {
                return Err(Error::WidthMismatch {
                    row: idx,
                    expected: ANSI_COLS,
                    got: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        ANSI_COLS
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        ANSI_ROWS
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[Vec<AnsiCell>] {
        &self.rows
    }

    /// Sets the cell at (column, row) to `new`. Out of bounds writes are
    /// ignored.
    pub fn set(&mut self, column: usize, row: usize, new: AnsiCell) {
        if column < self.width() && row < self.height() {
            self.rows[row][column] = new;
        }
    }

    /// Gets the cell at (column, row), returning `default` if out of bounds.
    pub fn get(&self, column: usize, row: usize, default: AnsiCell) -> AnsiCell {
        if column < self.width() && row < self.height() {
            self.rows[row][column]
        } else {
            default
        }
    }

    /// Fills the entire grid with the given cell.
    pub fn fill(&mut self, fill: AnsiCell) {
        for row in &mut self.rows {
            for cell in row {
                *cell = fill
            }
        }
    }

    /// Fills a rectangular area defined by column and row iterators with `new` cell.
    pub fn fill_area<C, R>(&mut self, columns: C, rows: R, new: AnsiCell)
    where
        C: IntoIterator<Item = usize>,
        R: IntoIterator<Item = usize>,
    {
        let rows_vec: Vec<usize> = rows.into_iter().collect();
        for column in columns {
            for &row in &rows_vec {
                self.set(column, row, new);
            }
        }
    }

    /// Prints text starting at (col, row), clipping at the right edge.
    /// With `colors` set to `Some((fg, bg))` the printed cells are recolored,
    /// otherwise they keep their current colors.
    pub fn print(
        &mut self,
        col: usize,
        row: usize,
        line: &str,
        colors: Option<(RgbColor, RgbColor)>,
    ) {
        for (col, ch) in (col..self.width()).zip(line.chars()) {
            let mut cell = self.get(col, row, AnsiCell::default());
            cell.text = ch;
            if let Some((fg, bg)) = colors {
                cell.fg = fg;
                cell.bg = bg;
            }
            self.set(col, row, cell);
        }
    }
}
