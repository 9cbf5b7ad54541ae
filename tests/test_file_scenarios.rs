use std::fs::read_dir;
use test_utils::constants::{TEST_FILES_DIRECTORY, TEST_SCENARIOS_CSV_PATH};
use test_utils::{load_scenarios_from_file, run_test_for_file};
use text_statistics::{frequency_percentage, most_frequent_words, word_count};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios_from_csv() {
        let scenarios = load_scenarios_from_file(&TEST_SCENARIOS_CSV_PATH)
            .expect("Failed to load scenarios from CSV");

        assert!(!scenarios.is_empty(), "No scenarios were loaded");

        for scenario in &scenarios {
            let text = scenario.text.as_str();

            assert_eq!(word_count(text), scenario.word_count, "{:?}", text);
            assert_eq!(
                most_frequent_words(scenario.top_n, text),
                scenario.most_frequent_words,
                "{:?} with n = {}",
                text,
                scenario.top_n
            );
            assert_eq!(
                frequency_percentage(scenario.occurrences, text),
                scenario.frequency_percentage,
                "{:?} with k = {}",
                text,
                scenario.occurrences
            );
        }
    }

    #[test]
    fn test_statistics_from_multiple_files() {
        // Read all files in the directory
        let files = read_dir(&*TEST_FILES_DIRECTORY)
            .expect("Failed to read test files directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect directory entries");

        assert!(!files.is_empty(), "No test files found");

        let total_files = files.len();

        for (file_idx, file) in files.iter().enumerate() {
            let file_path = file.path();

            println!(
                "   -- {:?} ({} of {})",
                file_path,
                file_idx + 1,
                total_files
            );

            if file_path.is_file() {
                run_test_for_file(&file_path);
            }
        }
    }
}
