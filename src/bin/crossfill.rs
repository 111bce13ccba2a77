use clap::{value_parser, Arg, Command};
use crossfill::{render, words, Grid, Puzzle, SolveError, Solver};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("crossfill")
        .arg(
            Arg::new("structure")
                .short('s')
                .long("structure")
                .value_name("FILE")
                .help("Grid structure file; `_` marks a fillable cell")
                .required(true),
        )
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .value_name("FILE")
                .help("Word list, one word per line")
                .required(true),
        )
        .arg(
            Arg::new("max-nodes")
                .long("max-nodes")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Give up after expanding N search nodes"),
        )
        .get_matches();

    let structure_path = matches.get_one::<String>("structure").expect("required");
    let words_path = matches.get_one::<String>("words").expect("required");

    let structure = match std::fs::read_to_string(structure_path) {
        Ok(structure) => structure,
        Err(err) => {
            eprintln!("failed to read {structure_path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let word_list = match std::fs::read_to_string(words_path) {
        Ok(word_list) => word_list,
        Err(err) => {
            eprintln!("failed to read {words_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let grid = match Grid::parse(&structure) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("bad structure: {err}");
            return ExitCode::FAILURE;
        }
    };
    let vocabulary = words::parse_word_list(&word_list);

    let mut solver = Solver::new(Puzzle::new(grid), &vocabulary);
    if let Some(&budget) = matches.get_one::<u64>("max-nodes") {
        solver = solver.with_node_budget(budget);
    }

    match solver.solve() {
        Ok(assignment) => {
            print!("{}", render::render(solver.puzzle(), &assignment));
            ExitCode::SUCCESS
        }
        Err(SolveError::NoSolution) => {
            println!("No solution.");
            ExitCode::SUCCESS
        }
        Err(err @ SolveError::Timeout) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
