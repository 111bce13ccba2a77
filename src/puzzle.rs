use crate::grid::Grid;
use rustc_hash::FxHashMap;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of fillable cells; the unit one word is assigned to.
/// Identity is the full (row, col, direction, length) tuple.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// Grid coordinates of the cell holding character `offset` of this
    /// slot's word.
    pub fn cell(&self, offset: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + offset),
            Direction::Down => (self.row + offset, self.col),
        }
    }
}

/// The fixed structure of one puzzle: the grid, its slots, and where the
/// slots cross. Never mutated after construction; slots are addressed by
/// index into `slots()`.
#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(usize, usize), (usize, usize)>,
    neighbors: Vec<Vec<usize>>,
}

impl Puzzle {
    pub fn new(grid: Grid) -> Puzzle {
        let slots = derive_slots(&grid);

        let mut by_cell: FxHashMap<(usize, usize), Vec<(usize, usize)>> = FxHashMap::default();
        for (id, slot) in slots.iter().enumerate() {
            for offset in 0..slot.length {
                by_cell.entry(slot.cell(offset)).or_default().push((id, offset));
            }
        }

        // A cell is covered by at most one slot per direction, so each
        // shared cell contributes one arc in each order.
        let mut overlaps = FxHashMap::default();
        for sharers in by_cell.values() {
            for &(x, ix) in sharers {
                for &(y, iy) in sharers {
                    if x != y {
                        overlaps.insert((x, y), (ix, iy));
                    }
                }
            }
        }

        let mut neighbors = vec![Vec::new(); slots.len()];
        for &(x, y) in overlaps.keys() {
            neighbors[x].push(y);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Puzzle {
            grid,
            slots,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: usize) -> &Slot {
        &self.slots[id]
    }

    /// Character offsets `(ix, iy)` where slots `x` and `y` share a cell,
    /// or `None` if they don't cross.
    pub fn overlap(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.neighbors[id]
    }

    /// Every ordered pair of crossing slots.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        let mut arcs: Vec<(usize, usize)> = self.overlaps.keys().copied().collect();
        arcs.sort_unstable();
        arcs
    }
}

fn derive_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..grid.height() {
        let mut start = None;
        let mut length = 0;
        for col in 0..grid.width() {
            if grid.is_fillable(row, col) {
                if start.is_none() {
                    start = Some(col);
                }
                length += 1;
            } else {
                flush_across(&mut result, row, start.take(), length);
                length = 0;
            }
        }
        flush_across(&mut result, row, start, length);
    }

    for col in 0..grid.width() {
        let mut start = None;
        let mut length = 0;
        for row in 0..grid.height() {
            if grid.is_fillable(row, col) {
                if start.is_none() {
                    start = Some(row);
                }
                length += 1;
            } else {
                flush_down(&mut result, col, start.take(), length);
                length = 0;
            }
        }
        flush_down(&mut result, col, start, length);
    }

    result
}

// Single fillable cells belong to no slot; a run only counts at length 2.
fn flush_across(result: &mut Vec<Slot>, row: usize, start: Option<usize>, length: usize) {
    if let Some(col) = start {
        if length >= 2 {
            result.push(Slot {
                row,
                col,
                direction: Direction::Across,
                length,
            });
        }
    }
}

fn flush_down(result: &mut Vec<Slot>, col: usize, start: Option<usize>, length: usize) {
    if let Some(row) = start {
        if length >= 2 {
            result.push(Slot {
                row,
                col,
                direction: Direction::Down,
                length,
            });
        }
    }
}
