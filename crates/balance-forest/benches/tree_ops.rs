use balance_forest::{AvlTree, SplayTree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const N: u32 = 10_000;

fn shuffled_keys() -> Vec<u32> {
    let mut keys: Vec<u32> = (0..N).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(7));
    keys
}

fn bench_insert(c: &mut Criterion) {
    let keys = shuffled_keys();
    let mut group = c.benchmark_group("insert_10k_shuffled");

    group.bench_function("avl", |b| {
        b.iter(|| {
            let mut tree = AvlTree::<u32, u32>::new();
            for &k in &keys {
                tree.set(black_box(k), k);
            }
            tree
        })
    });
    group.bench_function("splay", |b| {
        b.iter(|| {
            let mut tree = SplayTree::<u32, u32>::new();
            for &k in &keys {
                tree.set(black_box(k), k);
            }
            tree
        })
    });
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let keys = shuffled_keys();
    let mut avl = AvlTree::<u32, u32>::new();
    let mut splay = SplayTree::<u32, u32>::new();
    for &k in &keys {
        avl.set(k, k);
        splay.set(k, k);
    }
    let mut group = c.benchmark_group("find_10k");

    group.bench_function("avl", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(avl.get(&k));
            }
        })
    });
    group.bench_function("splay", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(splay.get(&k));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find);
criterion_main!(benches);
