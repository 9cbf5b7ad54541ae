pub mod constants;

use csv::Reader;
use std::error::Error;
use std::fs;
use std::path::Path;
use text_statistics::{frequency_percentage, most_frequent_words, word_count};

/// A single row of the scenario table: one input text and the statistics expected for it.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub text: String,
    pub word_count: usize,
    pub top_n: usize,
    pub most_frequent_words: Vec<String>,
    pub occurrences: usize,
    pub frequency_percentage: usize,
}

/// Utility to load scenarios from a CSV file for testing and benchmarking.
///
/// `most_frequent_words` is a space-separated list, which is unambiguous because words never
/// contain the default delimiters.
pub fn load_scenarios_from_file(file_path: &Path) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut scenarios = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 6 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        scenarios.push(Scenario {
            text: record[0].to_string(),
            word_count: record[1].parse()?,
            top_n: record[2].parse()?,
            most_frequent_words: record[3]
                .split_whitespace()
                .map(|word| word.to_string())
                .collect(),
            occurrences: record[4].parse()?,
            frequency_percentage: record[5].parse()?,
        });
    }

    Ok(scenarios)
}

// Helper function to get the value of a `PREFIX:` header line from a test file
pub fn get_expected_value(file_path: &Path, prefix: &str) -> Option<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");
    let prefix = format!("{}:", prefix);

    content.lines().find_map(|line| {
        let line = line.trim();
        line.strip_prefix(&prefix).map(|value| value.trim().to_string())
    })
}

/// Reads a test file, dropping `EXPECTED_*:` and `COMMENT:` header lines.
pub fn read_filtered_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with("EXPECTED_") && !line.starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Asserts every expectation declared in the header of a test file.
///
/// Recognized headers:
/// - `EXPECTED_WORD_COUNT: <count>`
/// - `EXPECTED_MOST_FREQUENT_WORDS: <word> <word> ...`
/// - `EXPECTED_FREQUENCY_PERCENTAGE: <k> <percentage>`
pub fn run_test_for_file(test_file_path: &Path) {
    let text = read_filtered_text(test_file_path);

    eprintln!("Testing file: {:?}", test_file_path);

    if let Some(expected) = get_expected_value(test_file_path, "EXPECTED_WORD_COUNT") {
        let expected: usize = expected.parse().expect("Invalid EXPECTED_WORD_COUNT");

        assert_eq!(
            word_count(&text),
            expected,
            "{:?} - Word count mismatch",
            test_file_path
        );
    }

    if let Some(expected) = get_expected_value(test_file_path, "EXPECTED_MOST_FREQUENT_WORDS") {
        let expected: Vec<&str> = expected.split_whitespace().collect();

        assert_eq!(
            most_frequent_words(expected.len(), &text),
            expected,
            "{:?} - Most frequent words mismatch",
            test_file_path
        );
    }

    if let Some(expected) = get_expected_value(test_file_path, "EXPECTED_FREQUENCY_PERCENTAGE") {
        let values: Vec<usize> = expected
            .split_whitespace()
            .map(|value| value.parse().expect("Invalid EXPECTED_FREQUENCY_PERCENTAGE"))
            .collect();
        assert_eq!(
            values.len(),
            2,
            "{:?} - EXPECTED_FREQUENCY_PERCENTAGE takes `<k> <percentage>`",
            test_file_path
        );

        assert_eq!(
            frequency_percentage(values[0], &text),
            values[1],
            "{:?} - Frequency percentage mismatch for k = {}",
            test_file_path,
            values[0]
        );
    }
}
