use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use packed_bit_array::BitArray;
use rand::rngs::ThreadRng;
use rand::Rng;

fn build_bit_array(rng: &mut ThreadRng, len: usize) -> BitArray {
    (0..len).map(|_| rng.gen_bool(0.5)).collect()
}

#[inline]
fn bench_get(rng: &mut ThreadRng, bits: &BitArray) -> usize {
    bits.get(rng.gen_range(0..bits.len())).unwrap() as usize
}

#[inline]
fn bench_rank(rng: &mut ThreadRng, bits: &BitArray) -> usize {
    bits.rank(true, rng.gen_range(0..bits.len())).unwrap()
}

#[inline]
fn bench_select(rng: &mut ThreadRng, bits: &BitArray, value: bool, n: usize) -> usize {
    bits.select(value, rng.gen_range(0..n)).unwrap()
}

#[inline]
fn bench_sub_array(rng: &mut ThreadRng, bits: &BitArray) -> usize {
    let from = rng.gen_range(0..bits.len());
    let to = rng.gen_range(from..=bits.len());
    bits.sub_array(from, to).unwrap().len()
}

fn bench_bit_arrays(c: &mut Criterion) {
    let lengths = vec![
        1_000,     //
        10_000,    //
        100_000,   //
        1_000_000, //
    ];

    let mut rng = rand::thread_rng();

    let mut group = c.benchmark_group("BitArray");
    for len in lengths.iter().copied() {
        let bits = build_bit_array(&mut rng, len);
        let num_ones = bits.count_ones();
        let num_zeros = bits.count_zeros();
        let mut ret = 0;
        group.bench_function(BenchmarkId::new("Get", len), |b| {
            b.iter(|| ret += bench_get(&mut rng, &bits))
        });
        group.bench_function(BenchmarkId::new("Rank1", len), |b| {
            b.iter(|| ret += bench_rank(&mut rng, &bits))
        });
        group.bench_function(BenchmarkId::new("Select1", len), |b| {
            b.iter(|| ret += bench_select(&mut rng, &bits, true, num_ones))
        });
        group.bench_function(BenchmarkId::new("Select0", len), |b| {
            b.iter(|| ret += bench_select(&mut rng, &bits, false, num_zeros))
        });
        group.bench_function(BenchmarkId::new("SubArray", len), |b| {
            b.iter(|| ret += bench_sub_array(&mut rng, &bits))
        });
        assert!(ret > 0);
    }
    group.finish();
}

criterion_group!(benches, bench_bit_arrays);
criterion_main!(benches);
