use log::info;
use text_statistics::{frequency_percentage, most_frequent_words, word_count};

const TEXT: &str = include_str!("lorem_ipsum.txt");

fn main() {
    env_logger::init();

    info!("Running text statistics demo");

    // 1. How many words are there in the text (including duplicates)?
    let words_count = word_count(TEXT);
    println!("Total words count: {}", words_count);

    // 2. Which six words occur the most in the text?
    let most_frequent = most_frequent_words(6, TEXT);
    println!("Top 6 most frequent words: {:?}", most_frequent);

    // 3. What percentage of the words only occur once?
    let percentage = frequency_percentage(1, TEXT);
    println!("Total percentage of words occurring once: {}%", percentage);
}
