use clap::Parser;
use freq_analysis::{aggregate, analyze_file, CorpusStats, FrequencyTable};

/// Command-line arguments for the corpus analyzer program.
#[derive(Parser, Debug)]
struct Cli {
    /// Paths of the corpus files to analyze
    #[arg(
        short,
        long,
        num_args = 1..,
        default_values_t = [
            String::from("1342-0.txt"),
            String::from("11-0.txt"),
            String::from("pg1661.txt"),
        ],
        help = "Paths of the corpus files to analyze"
    )]
    corpora: Vec<String>,

    /// Path of the reference distribution file to write
    #[arg(
        short,
        long,
        default_value = "results.json",
        help = "Path of the reference distribution file to write"
    )]
    output: String,
}

/// Main entry point for the corpus analyzer.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Analyze every corpus independently
    let corpora: Vec<CorpusStats> = cli
        .corpora
        .iter()
        .map(|path| {
            let stats = analyze_file(path).expect("Failed to analyze the corpus file");
            println!("Analyzed {}: {} letters", path, stats.letter_count);
            stats
        })
        .collect();

    // Combine the per-corpus tables, weighting by letter count
    let reference: FrequencyTable =
        aggregate(&corpora).expect("Failed to aggregate the corpus statistics");

    // Persist the reference distribution for the decryptor
    reference
        .save(&cli.output)
        .expect("Failed to write the reference distribution file");

    println!("Reference distribution saved to: {}", cli.output);
}
