use criterion::{criterion_group, criterion_main, Criterion};
use crossfill::{words::parse_word_list, Grid, Puzzle, Solver};

const STRUCTURE: &str = "___\n___\n___";
const WORDS: &str = "CAT\nORE\nWED\nCOW\nARE\nTED\nDOG\nPIG\nRAT\nTEN";

pub fn criterion_benchmark(c: &mut Criterion) {
    let vocabulary = parse_word_list(WORDS);

    c.bench_function("solve_3x3_word_square", |b| {
        b.iter(|| {
            let grid = Grid::parse(STRUCTURE).unwrap();
            let mut solver = Solver::new(Puzzle::new(grid), &vocabulary);
            solver.solve()
        })
    });

    c.bench_function("propagate_then_fail", |b| {
        let vocabulary = parse_word_list("ABCD\nXYZ");
        b.iter(|| {
            let grid = Grid::parse("____\n#_##\n#_##").unwrap();
            let mut solver = Solver::new(Puzzle::new(grid), &vocabulary);
            solver.solve()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
