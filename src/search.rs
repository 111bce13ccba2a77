use crate::consistency::{ac3, enforce_node_consistency};
use crate::domains::Domains;
use crate::puzzle::Puzzle;
use crate::words::char_at;
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Slot id → assigned word. Complete when every slot has an entry.
pub type Assignment = FxHashMap<usize, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Every branch of the search was exhausted, or propagation proved
    /// the puzzle unsolvable before search began. A normal outcome.
    #[error("no assignment satisfies the puzzle")]
    NoSolution,
    /// The configured node budget ran out before the search finished.
    #[error("search node budget exhausted")]
    Timeout,
}

/// Backtracking search over one puzzle. Owns the domain store for the
/// duration of the solve; every provisional narrowing is undone on
/// backtrack, so a failed solve leaves the post-propagation domains
/// intact.
pub struct Solver {
    puzzle: Puzzle,
    domains: Domains,
    node_budget: Option<u64>,
    nodes: u64,
}

impl Solver {
    pub fn new(puzzle: Puzzle, vocabulary: &FxHashSet<String>) -> Solver {
        let domains = Domains::new(&puzzle, vocabulary);
        Solver {
            puzzle,
            domains,
            node_budget: None,
            nodes: 0,
        }
    }

    /// Cap the number of search nodes; exceeding it yields
    /// `SolveError::Timeout` instead of `NoSolution`.
    pub fn with_node_budget(mut self, budget: u64) -> Solver {
        self.node_budget = Some(budget);
        self
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Search nodes expanded by the last `solve` call.
    pub fn nodes_explored(&self) -> u64 {
        self.nodes
    }

    pub fn solve(&mut self) -> Result<Assignment, SolveError> {
        self.nodes = 0;
        enforce_node_consistency(&self.puzzle, &mut self.domains);
        if !ac3(&self.puzzle, &mut self.domains, None) {
            debug!(target: "search", "propagation proved the puzzle unsolvable before search");
            return Err(SolveError::NoSolution);
        }
        // A slot with no neighbors has no arcs, so an empty domain can
        // survive propagation; catch it before search.
        if (0..self.puzzle.slots().len()).any(|id| self.domains.is_empty(id)) {
            debug!(target: "search", "a slot has no candidates of the right length");
            return Err(SolveError::NoSolution);
        }

        let mut assignment = Assignment::default();
        if self.backtrack(&mut assignment)? {
            debug!(
                target: "search",
                "solved after {} nodes",
                self.nodes
            );
            Ok(assignment)
        } else {
            debug!(
                target: "search",
                "search exhausted after {} nodes",
                self.nodes
            );
            Err(SolveError::NoSolution)
        }
    }

    fn backtrack(&mut self, assignment: &mut Assignment) -> Result<bool, SolveError> {
        let slot = match self.select_unassigned(assignment) {
            Some(slot) => slot,
            None => return Ok(true),
        };

        self.nodes += 1;
        if let Some(budget) = self.node_budget {
            if self.nodes > budget {
                return Err(SolveError::Timeout);
            }
        }

        for word in self.order_domain_values(slot) {
            if !self.consistent(slot, &word, assignment) {
                continue;
            }
            trace!(target: "search", "trying {:?} := {word}", self.puzzle.slot(slot));
            assignment.insert(slot, word.clone());
            self.domains.narrow_to(slot, &word);
            if self.backtrack(assignment)? {
                return Ok(true);
            }
            self.domains.undo_narrow();
            assignment.remove(&slot);
        }
        Ok(false)
    }

    /// Minimum-remaining-values, ties broken by highest neighbor count,
    /// remaining ties by whichever comes first. `None` when every slot is
    /// assigned.
    fn select_unassigned(&self, assignment: &Assignment) -> Option<usize> {
        let mut best: Option<usize> = None;
        for id in 0..self.puzzle.slots().len() {
            if assignment.contains_key(&id) {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    let (remaining, degree) =
                        (self.domains.len(id), self.puzzle.neighbors(id).len());
                    let (best_remaining, best_degree) = (
                        self.domains.len(current),
                        self.puzzle.neighbors(current).len(),
                    );
                    remaining < best_remaining
                        || (remaining == best_remaining && degree > best_degree)
                }
            };
            if better {
                best = Some(id);
            }
        }
        best
    }

    /// Least-constraining-value ordering: cost of a candidate is the
    /// number of words it would rule out, summed over every neighbor's
    /// domain. Ascending.
    fn order_domain_values(&self, slot: usize) -> Vec<String> {
        let mut scored: Vec<(usize, String)> = self
            .domains
            .words(slot)
            .iter()
            .map(|word| (0, word.clone()))
            .collect();

        for &n in self.puzzle.neighbors(slot) {
            let (ix, iy) = match self.puzzle.overlap(slot, n) {
                Some(overlap) => overlap,
                None => continue,
            };
            // Accumulate across neighbors; each one adds to the running
            // total.
            for (cost, word) in &mut scored {
                let shared = char_at(word, ix);
                *cost += self
                    .domains
                    .words(n)
                    .iter()
                    .filter(|other| char_at(other.as_str(), iy) != shared)
                    .count();
            }
        }

        scored.sort_by_key(|(cost, _)| *cost);
        scored.into_iter().map(|(_, word)| word).collect()
    }

    /// Whether `slot := word` fits the partial assignment: the word is not
    /// already used elsewhere, and every assigned neighbor agrees on the
    /// shared character.
    fn consistent(&self, slot: usize, word: &str, assignment: &Assignment) -> bool {
        for (&other, assigned) in assignment {
            if other != slot && assigned == word {
                return false;
            }
        }
        for &n in self.puzzle.neighbors(slot) {
            let assigned = match assignment.get(&n) {
                Some(assigned) => assigned,
                None => continue,
            };
            if let Some((ix, iy)) = self.puzzle.overlap(slot, n) {
                if char_at(word, ix) != char_at(assigned, iy) {
                    return false;
                }
            }
        }
        true
    }
}
