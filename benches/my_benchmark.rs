use criterion::{black_box, criterion_group, criterion_main, Criterion};
use text_statistics::{frequency_percentage, most_frequent_words, word_count};

const LOREM_IPSUM: &str = include_str!("../dev/src/lorem_ipsum.txt");

fn benchmark_word_count(c: &mut Criterion) {
    c.bench_function("word_count", |b| {
        b.iter(|| word_count(black_box(LOREM_IPSUM)))
    });
}

fn benchmark_most_frequent_words(c: &mut Criterion) {
    c.bench_function("most_frequent_words", |b| {
        b.iter(|| most_frequent_words(black_box(6), black_box(LOREM_IPSUM)))
    });
}

fn benchmark_frequency_percentage(c: &mut Criterion) {
    // Repeat the paragraph to get a longer document with the same vocabulary
    let text = vec![LOREM_IPSUM; 100].join(" ");

    c.bench_function("frequency_percentage_long", |b| {
        b.iter(|| frequency_percentage(black_box(1), black_box(&text)))
    });
}

criterion_group!(
    benches,
    benchmark_word_count,
    benchmark_most_frequent_words,
    benchmark_frequency_percentage
);
criterion_main!(benches);
