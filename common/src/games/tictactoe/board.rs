use std::fmt;

use super::error::GridError;
use super::types::{Mark, Symbols};

/// Rectangular board of marks stored row-major.
///
/// Reads outside the board return [`Mark::Empty`] instead of failing, so scanners can
/// probe past the edges without their own bounds checks. Use [`GridBoard::contains`]
/// when "off board" and "empty" must be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    cells: Vec<Mark>,
    width: usize,
    height: usize,
    win_run_length: usize,
    symbols: Symbols,
}

impl GridBoard {
    pub fn new(
        width: usize,
        height: usize,
        win_run_length: usize,
        symbols: Symbols,
    ) -> Result<Self, GridError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        check_dimension("win_run_length", win_run_length)?;
        let cell_count = cell_count(width, height)?;

        crate::log!(
            "Created {}x{} board, {} in a row to win",
            width,
            height,
            win_run_length
        );

        Ok(Self {
            cells: vec![Mark::Empty; cell_count],
            width,
            height,
            win_run_length,
            symbols,
        })
    }

    pub fn from_rows(
        rows: Vec<Vec<Mark>>,
        win_run_length: usize,
        symbols: Symbols,
    ) -> Result<Self, GridError> {
        check_dimension("win_run_length", win_run_length)?;

        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            width,
            height,
            win_run_length,
            symbols,
        })
    }

    /// Parses the output of [`GridBoard::render`] back into a board.
    pub fn from_text(
        text: &str,
        win_run_length: usize,
        symbols: Symbols,
    ) -> Result<Self, GridError> {
        let rows = text
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, symbol)| {
                        symbols
                            .mark_for(symbol)
                            .ok_or(GridError::UnknownSymbol { symbol, x, y })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows, win_run_length, symbols)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn win_run_length(&self) -> usize {
        self.win_run_length
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        self.index_of(x, y).is_some()
    }

    pub fn get(&self, x: isize, y: isize) -> Mark {
        match self.index_of(x, y) {
            Some(index) => self.cells[index],
            None => Mark::Empty,
        }
    }

    pub fn set(&mut self, x: isize, y: isize, mark: Mark) -> Result<(), GridError> {
        let index = self.index_of(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;

        if !self.cells[index].is_empty() {
            return Err(GridError::CellOccupied {
                x: x as usize,
                y: y as usize,
            });
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Grows or truncates at the high-index end, keeping every cell that stays in range.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), GridError> {
        check_dimension("width", new_width)?;
        check_dimension("height", new_height)?;

        let mut cells = vec![Mark::Empty; cell_count(new_width, new_height)?];
        let kept_width = self.width.min(new_width);
        for y in 0..self.height.min(new_height) {
            let from = y * self.width;
            let to = y * new_width;
            cells[to..to + kept_width].copy_from_slice(&self.cells[from..from + kept_width]);
        }

        crate::log!(
            "Resized board from {}x{} to {}x{}",
            self.width,
            self.height,
            new_width,
            new_height
        );

        self.cells = cells;
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.width)
    }

    pub fn symbol_for(&self, mark: Mark) -> char {
        self.symbols.symbol_for(mark)
    }

    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|&mark| self.symbol_for(mark)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn check_dimension(name: &'static str, value: usize) -> Result<(), GridError> {
    if value < 1 {
        return Err(GridError::InvalidDimension { name, value });
    }
    Ok(())
}

/// Number of cells, capped so that every coordinate also fits in an `isize`.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .filter(|&count| count <= isize::MAX as usize)
        .ok_or(GridError::BoardTooLarge { width, height })
}
