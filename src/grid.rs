use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("grid structure is empty")]
    EmptyGrid,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{width}x{height} grid needs {expected} cells, got {found}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },
}

/// The crossword structure: which cells may hold a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Result<Grid, StructureError> {
        if width == 0 || height == 0 {
            return Err(StructureError::EmptyGrid);
        }
        if cells.len() != width * height {
            return Err(StructureError::DimensionMismatch {
                width,
                height,
                expected: width * height,
                found: cells.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Parse a structure file. `_` marks a fillable cell; any other
    /// character is blocked. Rows must all be the same width; only
    /// leading and trailing blank lines are ignored, so a blank line
    /// between rows is a ragged row, not a silently dropped one.
    pub fn parse(input: &str) -> Result<Grid, StructureError> {
        let mut lines: Vec<&str> = input.lines().collect();
        while matches!(lines.first(), Some(line) if line.is_empty()) {
            lines.remove(0);
        }
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        let first = match lines.first() {
            Some(first) => first,
            None => return Err(StructureError::EmptyGrid),
        };

        let width = first.chars().count();
        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(StructureError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars().map(|c| c == '_'));
        }

        Grid::new(width, lines.len(), cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_fillable(row, col) {
                    write!(f, "_")?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
