use crate::domains::Domains;
use crate::puzzle::Puzzle;
use crate::words::char_at;
use log::{debug, trace};
use std::collections::VecDeque;

/// Keep only words whose length matches each slot. Runs once, before
/// arc consistency; never needs revisiting.
pub fn enforce_node_consistency(puzzle: &Puzzle, domains: &mut Domains) {
    for (id, slot) in puzzle.slots().iter().enumerate() {
        let length = slot.length;
        if domains.prune(id, |word| word.chars().count() == length) {
            trace!(
                target: "consistency",
                "node consistency pruned slot {:?} to {} candidates",
                slot,
                domains.len(id)
            );
        }
    }
}

/// Make `x` arc-consistent with `y`: drop every candidate of `x` with no
/// partner in `y`'s domain that agrees on the shared character and is a
/// different word. No-op when the slots don't cross. Returns whether
/// `x`'s domain changed.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: usize, y: usize) -> bool {
    let (ix, iy) = match puzzle.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };

    let partners: Vec<String> = domains.words(y).iter().cloned().collect();
    domains.prune(x, |word| match char_at(word, ix) {
        Some(shared) => partners
            .iter()
            .any(|partner| char_at(partner, iy) == Some(shared) && partner != word),
        None => false,
    })
}

/// AC-3 propagation. Starts from `arcs` when supplied, otherwise from
/// every ordered pair of crossing slots. Returns `false` as soon as a
/// domain empties; `true` once the worklist drains. Dequeue order is
/// irrelevant to the result.
pub fn ac3(puzzle: &Puzzle, domains: &mut Domains, arcs: Option<Vec<(usize, usize)>>) -> bool {
    let mut queue: VecDeque<(usize, usize)> = match arcs {
        Some(arcs) => arcs.into(),
        None => puzzle.arcs().into(),
    };

    while let Some((x, y)) = queue.pop_front() {
        if !revise(puzzle, domains, x, y) {
            continue;
        }
        trace!(
            target: "consistency",
            "revise({x}, {y}) left {} candidates for slot {x}",
            domains.len(x)
        );
        if domains.is_empty(x) {
            debug!(
                target: "consistency",
                "slot {:?} has no candidates left; puzzle unsolvable as configured",
                puzzle.slot(x)
            );
            return false;
        }
        // x shrank, so earlier inferences about its neighbors may no
        // longer hold.
        for &n in puzzle.neighbors(x) {
            if n != y {
                queue.push_back((n, x));
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{ac3, enforce_node_consistency, revise};
    use crate::domains::Domains;
    use crate::grid::Grid;
    use crate::puzzle::Puzzle;
    use rustc_hash::FxHashSet;

    fn vocab(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // One across slot of length 3 crossing one down slot of length 3 at
    // offset 1 of each.
    fn plus_puzzle() -> Puzzle {
        Puzzle::new(Grid::parse("#_#\n___\n#_#").unwrap())
    }

    #[test]
    fn node_consistency_filters_by_length() {
        let puzzle = plus_puzzle();
        let mut domains = Domains::new(&puzzle, &vocab(&["CAT", "HORSE", "OX", "DOG"]));

        enforce_node_consistency(&puzzle, &mut domains);

        for id in 0..puzzle.slots().len() {
            assert_eq!(domains.words(id), &vocab(&["CAT", "DOG"]));
        }
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let puzzle = plus_puzzle();
        let mut domains = Domains::new(&puzzle, &vocab(&["CAT", "CAR", "ART", "TAR", "BED"]));
        let (across, down) = (0, 1);
        assert_eq!(puzzle.overlap(across, down), Some((1, 1)));

        // "BED" has no partner agreeing on the middle letter.
        assert!(revise(&puzzle, &mut domains, across, down));
        assert!(!domains.words(across).contains("BED"));
        assert!(domains.words(across).contains("CAT"));
    }

    #[test]
    fn revise_requires_a_distinct_partner() {
        let puzzle = plus_puzzle();
        // Both words self-match on the shared letter but a slot may not
        // reuse its neighbor's word, so each needs the other to differ.
        let mut domains = Domains::new(&puzzle, &vocab(&["ABA", "CBC"]));

        assert!(!revise(&puzzle, &mut domains, 0, 1));
        assert_eq!(domains.len(0), 2);

        // With a single shared candidate there is no distinct partner at
        // all and the domain collapses.
        let mut domains = Domains::new(&puzzle, &vocab(&["ABA"]));
        assert!(revise(&puzzle, &mut domains, 0, 1));
        assert!(domains.is_empty(0));
    }

    #[test]
    fn revise_compares_characters_not_bytes() {
        let puzzle = plus_puzzle();
        // Both middle letters encode to two bytes sharing a lead byte,
        // but the characters differ, so neither word has a partner.
        let mut domains = Domains::new(&puzzle, &vocab(&["AÉB", "AÖB"]));

        assert!(revise(&puzzle, &mut domains, 0, 1));
        assert!(domains.is_empty(0));
    }

    #[test]
    fn revise_is_a_noop_without_overlap() {
        let puzzle = Puzzle::new(Grid::parse("___\n###\n___").unwrap());
        let mut domains = Domains::new(&puzzle, &vocab(&["CAT", "DOG"]));

        assert!(!revise(&puzzle, &mut domains, 0, 1));
        assert_eq!(domains.len(0), 2);
    }

    #[test]
    fn ac3_detects_unsolvable_crossing() {
        // Across length 4, down length 3, crossing at across offset 1 /
        // down offset 0. The only candidates of each length disagree on
        // the shared letter.
        let puzzle = Puzzle::new(Grid::parse("____\n#_##\n#_##").unwrap());
        let mut domains = Domains::new(&puzzle, &vocab(&["ABCD", "XYZ"]));
        assert_eq!(puzzle.overlap(0, 1), Some((1, 0)));

        enforce_node_consistency(&puzzle, &mut domains);
        assert!(!ac3(&puzzle, &mut domains, None));
    }

    #[test]
    fn ac3_is_idempotent() {
        let puzzle = plus_puzzle();
        let mut domains = Domains::new(&puzzle, &vocab(&["CAT", "CAR", "ART", "TAR", "BED"]));

        enforce_node_consistency(&puzzle, &mut domains);
        assert!(ac3(&puzzle, &mut domains, None));
        let snapshot: Vec<_> = (0..puzzle.slots().len())
            .map(|id| domains.words(id).clone())
            .collect();

        assert!(ac3(&puzzle, &mut domains, None));
        for (id, before) in snapshot.iter().enumerate() {
            assert_eq!(domains.words(id), before);
        }
    }

    #[test]
    fn ac3_accepts_a_caller_supplied_worklist() {
        let puzzle = plus_puzzle();
        let mut domains = Domains::new(&puzzle, &vocab(&["CAT", "CAR", "ART", "TAR", "BED"]));
        enforce_node_consistency(&puzzle, &mut domains);

        // Only the (across, down) arc: the down domain is never revised.
        assert!(ac3(&puzzle, &mut domains, Some(vec![(0, 1)])));
        assert!(!domains.words(0).contains("BED"));
        assert!(domains.words(1).contains("BED"));
    }
}
