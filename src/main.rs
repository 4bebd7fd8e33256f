//! Letterboxed CLI
//!
//! Prints every two-word solution for one or more Letter Boxed puzzles.

use anyhow::Result;
use clap::Parser;
use letterboxed::{load_dictionary, Dictionary, LetterboxedSolver, Puzzle, Solution};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Find two-word solutions to Letter Boxed puzzles.
#[derive(Debug, Parser)]
#[command(version, about, after_help = USAGE_TEXT)]
struct Opts {
    /// Puzzle in the format ABC,DEF,GHI,JKL
    #[arg(required = true, value_name = "PUZZLE")]
    puzzles: Vec<String>,

    /// Newline-delimited word list to use instead of the bundled one
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Print how long loading and solving took
    #[arg(short, long)]
    timing: bool,
}

fn parse_puzzles(specs: &[String]) -> Vec<Puzzle> {
    let mut puzzles = Vec::with_capacity(specs.len());
    for spec in specs {
        match Puzzle::parse(spec) {
            Ok(puzzle) => puzzles.push(puzzle),
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("{}", USAGE_TEXT);
                std::process::exit(1);
            }
        }
    }
    puzzles
}

fn load(path: Option<&PathBuf>) -> Result<Dictionary> {
    Ok(match path {
        Some(path) => Dictionary::open(path)?,
        None => load_dictionary(),
    })
}

fn print_solutions(solutions: &[Solution]) {
    for solution in solutions {
        println!("{}", solution);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();
    log::debug!("Command line options: {:?}", opts);

    let puzzles = parse_puzzles(&opts.puzzles);

    let start = Instant::now();
    let dictionary = load(opts.dictionary.as_ref())?;
    log::debug!("Loaded {} words", dictionary.len());
    if opts.timing {
        eprintln!("load took: {}ms", start.elapsed().as_millis());
    }

    let start = Instant::now();
    let results: Vec<(Puzzle, Vec<Solution>)> = puzzles
        .into_par_iter()
        .map(|puzzle| {
            let solver = LetterboxedSolver::new(puzzle, &dictionary);
            let solutions = solver.solve();
            (solver.puzzle().clone(), solutions)
        })
        .collect();
    let elapsed = start.elapsed();

    let headed = results.len() > 1;
    for (puzzle, solutions) in &results {
        if headed {
            println!("# {}", puzzle);
        }
        print_solutions(solutions);
    }

    if opts.timing {
        eprintln!("calc took: {}ms", elapsed.as_millis());
    }
    Ok(())
}
