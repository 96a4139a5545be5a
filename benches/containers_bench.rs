//! Criterion benchmarks for the sequence containers

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

use seqbuf::{DynVec, FifoQueue, FixedVec};

fn bench_push_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growth");

    group.bench_function("dynvec_push_10k", |b| {
        b.iter(|| {
            let mut vec = DynVec::new().unwrap();
            for i in 0..10_000u64 {
                vec.push(black_box(i)).unwrap();
            }
            black_box(vec.len())
        })
    });

    group.bench_function("std_vec_push_10k", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..10_000u64 {
                vec.push(black_box(i));
            }
            black_box(vec.len())
        })
    });

    group.bench_function("dynvec_push_preallocated_10k", |b| {
        b.iter(|| {
            let mut vec = DynVec::with_capacity(10_000).unwrap();
            for i in 0..10_000u64 {
                vec.push(black_box(i)).unwrap();
            }
            black_box(vec.len())
        })
    });

    group.finish();
}

fn bench_fixedvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixedvec");

    group.bench_function("push_to_full_1k", |b| {
        b.iter(|| {
            let mut vec: FixedVec<u64, 1024> = FixedVec::new().unwrap();
            for i in 0..1024u64 {
                vec.push(black_box(i)).unwrap();
            }
            black_box(vec.len())
        })
    });

    group.bench_function("swap_remove_drain_1k", |b| {
        b.iter(|| {
            let mut vec: FixedVec<u64, 1024> = FixedVec::new().unwrap();
            for i in 0..1024u64 {
                vec.push(i).unwrap();
            }
            while !vec.is_empty() {
                black_box(vec.swap_remove(0).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    // The shift-down pop makes the drain quadratic; the VecDeque baseline
    // shows what the simplicity trade-off costs.
    group.bench_function("fifo_round_trip_1k", |b| {
        b.iter(|| {
            let mut queue = FifoQueue::new().unwrap();
            for i in 0..1_000u64 {
                queue.push(black_box(i)).unwrap();
            }
            while let Ok(v) = queue.pop() {
                black_box(v);
            }
        })
    });

    group.bench_function("vecdeque_round_trip_1k", |b| {
        b.iter(|| {
            let mut queue = VecDeque::new();
            for i in 0..1_000u64 {
                queue.push_back(black_box(i));
            }
            while let Some(v) = queue.pop_front() {
                black_box(v);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_push_growth, bench_fixedvec, bench_queue);
criterion_main!(benches);
