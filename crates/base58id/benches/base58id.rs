use criterion::{black_box, criterion_group, criterion_main, Criterion};

use base58id::Base58Id;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("encode_base58", |b| {
        let id = black_box(Base58Id(0x0123_4567_89ab_cdef));

        b.iter(|| id.encode());
    });

    c.bench_function("decode_base58", |b| {
        let text = black_box(Base58Id(0x0123_4567_89ab_cdef).encode());

        b.iter(|| Base58Id::parse(&text));
    });

    c.bench_function("decode_base58_padded_zero", |b| {
        let text = black_box(Base58Id::ZERO.encode());

        b.iter(|| Base58Id::parse(&text));
    });

    c.bench_function("hash64", |b| {
        let id = black_box(Base58Id(0x0123_4567_89ab_cdef));

        b.iter(|| id.hash64());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
