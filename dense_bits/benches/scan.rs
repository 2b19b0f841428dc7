// benches/scan.rs

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dense_bits::BitVec;

const NBITS: usize = 1 << 16;

fn bench_trailing_zeros(c: &mut Criterion) {
    let mut bv = BitVec::new(NBITS).unwrap();
    bv.set(NBITS - 2).unwrap();

    c.bench_function("trailing_zeros/64k_sparse", |b| {
        b.iter(|| black_box(&bv).trailing_zeros())
    });
}

fn bench_first_zero(c: &mut Criterion) {
    let mut bv = BitVec::new(NBITS).unwrap();
    bv.set_range(0, NBITS - 2).unwrap();

    c.bench_function("first_zero/64k_saturated", |b| {
        b.iter(|| black_box(&bv).first_zero())
    });
}

fn bench_set_range(c: &mut Criterion) {
    let mut bv = BitVec::new(NBITS).unwrap();

    c.bench_function("set_range/64k_span", |b| {
        b.iter(|| {
            bv.set_range(black_box(100), black_box(NBITS - 100)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_trailing_zeros,
    bench_first_zero,
    bench_set_range
);
criterion_main!(benches);
