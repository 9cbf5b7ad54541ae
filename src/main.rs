use clap::Parser;
use log::{error, info};
use std::io::{self, Read, Write};
use text_statistics::{Error, TextAnalyzer, TextAnalyzerConfig, DEFAULT_TEXT_ANALYZER_CONFIG};

/// Prints word statistics for text read from stdin.
#[derive(Parser, Debug)]
#[command(name = "text-statistics-cli", version, about)]
struct Args {
    /// Number of most frequent words to list
    #[arg(short = 'n', long = "top", default_value_t = 6)]
    top: usize,

    /// Occurrence count whose share of distinct words is reported
    #[arg(short = 'k', long = "occurrences", default_value_t = 1)]
    occurrences: usize,

    /// Characters which separate words
    #[arg(short = 'd', long = "delimiters", default_value = " .")]
    delimiters: String,

    /// Treat empty input as zero words instead of one empty word
    #[arg(long = "no-empty-word")]
    no_empty_word: bool,
}

fn build_config<'a>(args: &Args, word_delimiters: &'a [char]) -> TextAnalyzerConfig<'a> {
    TextAnalyzerConfig {
        word_delimiters,
        count_empty_text_as_word: !args.no_empty_word
            && DEFAULT_TEXT_ANALYZER_CONFIG.count_empty_text_as_word,
    }
}

/// Analyzes `input` according to `args` and writes the three statistics to `out`.
fn report(args: &Args, input: &str, out: &mut impl Write) -> Result<(), Error> {
    let word_delimiters: Vec<char> = args.delimiters.chars().collect();
    let text_analyzer = TextAnalyzer::new(&build_config(args, &word_delimiters))?;

    info!("Analyzing {} bytes of input", input.len());

    let frequency_tally = text_analyzer.frequency_tally(input);

    writeln!(out, "Total words count: {}", frequency_tally.total_count())?;
    writeln!(
        out,
        "Top {} most frequent words: {:?}",
        args.top,
        frequency_tally.most_frequent(args.top)
    )?;
    writeln!(
        out,
        "Total percentage of words occurring {} time(s): {}%",
        args.occurrences,
        frequency_tally.frequency_percentage(args.occurrences)
    )?;

    Ok(())
}

fn run(args: Args) -> Result<(), Error> {
    // Read the input text from stdin
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    report(&args, &input, &mut io::stdout().lock())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("Failed to analyze text: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
