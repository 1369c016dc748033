use std::fs::File;
use std::io::{BufRead, BufReader};

use clap::Parser;
use freq_analysis::SubstitutionCipher;

/// Command-line arguments for the substitution encryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the plaintext file to encrypt
    #[arg(help = "Path to the plaintext file to encrypt")]
    file: String,
}

/// Main entry point for the substitution encryptor.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Draw a fresh random cipher; the mapping lives only for this run and
    // is never persisted, so the ciphertext can only be decrypted by
    // guessing the mapping.
    let cipher = SubstitutionCipher::random(&mut rand::rng());

    // Open the plaintext file for line-by-line streaming
    let file = File::open(&cli.file).expect("Failed to open the plaintext file");
    let reader = BufReader::new(file);

    // Substitute each line and emit the ciphertext on standard output
    for line in reader.lines() {
        let line = line.expect("Failed to read the plaintext file");
        println!("{}", cipher.apply(&line));
    }
}
