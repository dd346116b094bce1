use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use parser_framework::{ElementParser, Parsable, ParsableBuffer, Parser, ParserState};

fn generate_input(words: usize) -> String {
    let mut input = String::new();
    for i in 0..words {
        if i % 7 == 0 {
            input.push_str("select ");
        } else {
            input.push_str("word ");
        }
    }
    input
}

fn bench_parsable(c: &mut Criterion) {
    let input = generate_input(10_000);
    let text = ParsableBuffer::from(input.as_str());

    let mut group = c.benchmark_group("parsable");
    group.throughput(Throughput::Elements(text.len() as u64));

    group.bench_function("is_at_seq_scan", |b| {
        b.iter(|| {
            let mut hits = 0;
            for position in 0..text.len() as isize {
                if text.is_at_seq(position, "select".chars()) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.bench_function("parser_word_walk", |b| {
        b.iter(|| {
            let mut parser = Parser::<_, ParserState>::new(text.clone());
            let mut words = 0;
            while !parser.is_eof() {
                if parser.is_next(' ').unwrap_or(false) {
                    words += 1;
                }
                parser.advance_by(1);
            }
            black_box(words)
        })
    });

    group.bench_function("substring_collect", |b| {
        b.iter(|| {
            let collected: String = text.substring(0, 1024).unwrap().collect();
            black_box(collected)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsable);
criterion_main!(benches);
