use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::OsRng, seq::SliceRandom};

use geneflow::{DnaBase, DnaSequence};

pub fn criterion_benchmark(c: &mut Criterion) {
    const SEQ_LEN: usize = 30_000;
    let template = DnaSequence::new(
        (0..SEQ_LEN)
            .map(|_| *DnaBase::ALL.choose(&mut OsRng).unwrap())
            .collect(),
    );

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(SEQ_LEN as u64));
    group.bench_function("complement", |b| {
        b.iter(|| black_box(template.complement()))
    });
    group.bench_function("translate_full", |b| {
        b.iter(|| black_box(template.translate_full()))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
