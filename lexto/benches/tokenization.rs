//! 単語分割と行区切り導出のベンチマーク
//!
//! 同梱の単語リストとコーパスを使用して、ワーカーを再利用した分割速度を計測します。

use std::sync::Arc;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lexto::{Dictionary, Tokenizer};

const WORDS: &str = include_str!("./resources/words.txt");
const CORPUS: &str = include_str!("./resources/thai.txt");

fn benchmark_tokenization(c: &mut Criterion) {
    let dict = Arc::new(Dictionary::from_reader(WORDS.as_bytes()).unwrap());
    let lines: Vec<&str> = CORPUS.lines().collect();

    let mut group = c.benchmark_group("Tokenization Speed");
    group.throughput(Throughput::Bytes(CORPUS.len() as u64));
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));

    group.bench_function(BenchmarkId::new("Words", "Corpus"), |b| {
        b.iter_with_setup(
            || Tokenizer::from_shared_dictionary(dict.clone()).new_worker(),
            |mut worker| {
                for line in &lines {
                    worker.reset_sentence(line);
                    worker.tokenize();
                }
            },
        );
    });

    group.bench_function(BenchmarkId::new("Lines", "Corpus"), |b| {
        b.iter_with_setup(
            || Tokenizer::from_shared_dictionary(dict.clone()).new_worker(),
            |mut worker| {
                for line in &lines {
                    worker.reset_sentence(line);
                    worker.tokenize_lines();
                }
            },
        );
    });

    group.finish();
}

fn benchmark_dictionary_load(c: &mut Criterion) {
    let dict = Dictionary::from_reader(WORDS.as_bytes()).unwrap();
    let mut compiled = vec![];
    dict.write(&mut compiled).unwrap();

    let mut group = c.benchmark_group("Dictionary Load");
    group.bench_function("word list", |b| {
        b.iter(|| Dictionary::from_reader(WORDS.as_bytes()).unwrap());
    });
    group.bench_function("compiled", |b| {
        b.iter(|| Dictionary::read(compiled.as_slice()).unwrap());
    });
    group.finish();
}

criterion_group!(benches, benchmark_tokenization, benchmark_dictionary_load);
criterion_main!(benches);
