use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use silo_engine::InventoryEngine;

fn make_batch(tokens: usize) -> String {
    (0..tokens)
        .map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            format!("{}{}", letter, i % 10)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn bench_batch_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_ingest");

    for tokens in [16usize, 256, 4096] {
        let batch = make_batch(tokens);
        group.throughput(Throughput::Elements(tokens as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tokens), &batch, |b, batch| {
            b.iter(|| {
                let mut engine = InventoryEngine::default();
                engine
                    .process_batch(black_box(batch))
                    .expect("bench batch is well formed");
                black_box(engine.stock().total_items())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch_ingest);
criterion_main!(benches);
