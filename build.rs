//! Build script to generate the embedded word dataset
//!
//! Reads one word list per category and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/who.txt",
        &Path::new(&out_dir).join("who.rs"),
        "WHO",
        "Built-in words answering \"Who?\"",
    );

    generate_word_list(
        "data/what.txt",
        &Path::new(&out_dir).join("what.rs"),
        "WHAT",
        "Built-in words answering \"What?\"",
    );

    generate_word_list(
        "data/where.txt",
        &Path::new(&out_dir).join("where.rs"),
        "WHERE",
        "Built-in words answering \"Where?\"",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/who.txt");
    println!("cargo:rerun-if-changed=data/what.txt");
    println!("cargo:rerun-if-changed=data/where.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines and `#` comments are not words
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
