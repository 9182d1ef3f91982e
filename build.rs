//! Build script to generate the embedded word list
//!
//! Concatenates the solution and extra-guess files into one ordered list and
//! records where the solutions end.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SOLUTIONS_PATH: &str = "data/solutions.txt";
const GUESSES_PATH: &str = "data/guesses.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("words.rs");

    let solutions = read_words(SOLUTIONS_PATH);
    let guesses = read_words(GUESSES_PATH);

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Every playable word: {} solutions followed by {} extra guesses",
        solutions.len(),
        guesses.len()
    )
    .unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();

    for word in solutions.iter().chain(&guesses) {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of leading entries of `WORDS` that can be drawn as targets").unwrap();
    writeln!(output, "pub const SOLUTION_COUNT: usize = {};", solutions.len()).unwrap();

    println!("cargo:rerun-if-changed={SOLUTIONS_PATH}");
    println!("cargo:rerun-if-changed={GUESSES_PATH}");
}

fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}
