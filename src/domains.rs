use crate::puzzle::Puzzle;
use rustc_hash::FxHashSet;

/// Per-slot candidate words. Pruning is destructive; narrowing during
/// search is recorded on a LIFO trail so backtracking can restore the
/// exact prior state.
#[derive(Debug, Clone)]
pub struct Domains {
    candidates: Vec<FxHashSet<String>>,
    trail: Vec<(usize, FxHashSet<String>)>,
}

impl Domains {
    /// Every slot starts with its own copy of the full vocabulary.
    pub fn new(puzzle: &Puzzle, vocabulary: &FxHashSet<String>) -> Domains {
        Domains {
            candidates: vec![vocabulary.clone(); puzzle.slots().len()],
            trail: Vec::new(),
        }
    }

    pub fn words(&self, slot: usize) -> &FxHashSet<String> {
        &self.candidates[slot]
    }

    pub fn len(&self, slot: usize) -> usize {
        self.candidates[slot].len()
    }

    pub fn is_empty(&self, slot: usize) -> bool {
        self.candidates[slot].is_empty()
    }

    /// Drop every candidate failing `keep`. Returns whether anything was
    /// removed. Irreversible; not recorded on the trail.
    pub fn prune<F>(&mut self, slot: usize, keep: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        let before = self.candidates[slot].len();
        self.candidates[slot].retain(|word| keep(word));
        self.candidates[slot].len() != before
    }

    /// Provisionally collapse a slot's domain to a single word, saving the
    /// displaced candidates. Must be paired with `undo_narrow`.
    pub fn narrow_to(&mut self, slot: usize, word: &str) {
        let mut displaced = std::mem::take(&mut self.candidates[slot]);
        displaced.remove(word);
        self.candidates[slot].insert(word.to_string());
        self.trail.push((slot, displaced));
    }

    /// Restore the domain collapsed by the most recent `narrow_to`.
    pub fn undo_narrow(&mut self) {
        if let Some((slot, displaced)) = self.trail.pop() {
            self.candidates[slot].extend(displaced);
        }
    }
}
