pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod frequency_tally;
pub use frequency_tally::FrequencyTally;

pub mod text_analyzer;
pub use text_analyzer::{TextAnalyzer, TextAnalyzerConfig};
