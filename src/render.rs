use crate::puzzle::Puzzle;
use crate::search::Assignment;

/// Map each assigned word back onto grid coordinates.
pub fn letter_grid(puzzle: &Puzzle, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let grid = puzzle.grid();
    let mut letters = vec![vec![None; grid.width()]; grid.height()];
    for (&id, word) in assignment {
        let slot = puzzle.slot(id);
        for (offset, c) in word.chars().enumerate() {
            let (row, col) = slot.cell(offset);
            letters[row][col] = Some(c);
        }
    }
    letters
}

/// Render a filled grid as text. Blocked cells are `█`; fillable cells
/// not covered by any slot stay blank.
pub fn render(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let grid = puzzle.grid();
    let letters = letter_grid(puzzle, assignment);
    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_fillable(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}
