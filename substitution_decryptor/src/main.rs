use std::fs::File;
use std::io::{BufRead, BufReader};

use clap::Parser;
use freq_analysis::{analyze_file, DecryptionGuess, FrequencyTable};

/// Command-line arguments for the substitution decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path of the reference distribution file
    #[arg(
        short,
        long,
        default_value = "results.json",
        help = "Path of the reference distribution file"
    )]
    reference: String,

    /// Path of the encrypted text file
    #[arg(
        short,
        long,
        default_value = "encrypted.txt",
        help = "Path of the encrypted text file"
    )]
    file: String,
}

/// Main entry point for the substitution decryptor.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Load the reference distribution produced by the corpus analyzer
    let reference = FrequencyTable::load(&cli.reference)
        .expect("Failed to load the reference distribution file");

    // Measure the ciphertext's own letter frequencies
    let observed = analyze_file(&cli.file)
        .expect("Failed to analyze the encrypted file")
        .table;

    // Match each ciphertext letter to the nearest reference frequency
    let guess = DecryptionGuess::infer(&reference, &observed);

    // Apply the guessed mapping and emit the plaintext on standard output
    let file = File::open(&cli.file).expect("Failed to open the encrypted file");
    for line in BufReader::new(file).lines() {
        let line = line.expect("Failed to read the encrypted file");
        println!("{}", guess.apply(&line));
    }
}
