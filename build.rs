//! Build script to generate the embedded lexicon
//!
//! Reads the corpus and the word score table and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate answer corpus
    generate_word_list(
        "data/corpus.txt",
        &Path::new(&out_dir).join("corpus.rs"),
        "CORPUS",
        "Valid answer words",
    );

    // Generate utility scores
    generate_score_table(
        "data/word_scores.txt",
        &Path::new(&out_dir).join("scores.rs"),
        "WORD_SCORES",
        "Frequency-derived utility score per word",
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/corpus.txt");
    println!("cargo:rerun-if-changed=data/word_scores.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_score_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated score table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (word, score) = line
            .split_once(':')
            .unwrap_or_else(|| panic!("{input_path}:{}: missing ':'", line_no + 1));
        let score: f64 = score
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad score: {e}", line_no + 1));
        assert!(score.is_finite(), "{input_path}:{}: score must be finite", line_no + 1);
        writeln!(output, "    (\"{}\", {score:?}),", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
}
