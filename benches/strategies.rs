use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kurai::{Coordinator, FullScan, HeapShortlist, IncrementWalk, SortedShortlist, TreeShortlist};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn seed_window(rng_seed: u64, k: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    (0..k).map(|_| rng.random_range(0..10)).collect()
}

fn walk_stream(rng_seed: u64, start: i64, n: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut walk = IncrementWalk::new(start);
    (0..n).map(|_| walk.step_with_rng(&mut rng)).collect()
}

fn bench_bounded_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded");

    let sizes = [1_000, 10_000];
    let ks = [100, 1_000];

    for &n in &sizes {
        for &k in &ks {
            let seed = seed_window(7, k);
            let stream = walk_stream(11, seed[k - 1], n);

            group.bench_function(format!("sorted_n{}_k{}", n, k), |b| {
                b.iter(|| {
                    let Ok(mut s) = SortedShortlist::with_seed(k, &seed) else {
                        return;
                    };
                    for &x in &stream {
                        black_box(s.add(black_box(x)));
                    }
                })
            });

            group.bench_function(format!("tree_n{}_k{}", n, k), |b| {
                b.iter(|| {
                    let Ok(mut s) = TreeShortlist::with_seed(k, &seed) else {
                        return;
                    };
                    for &x in &stream {
                        black_box(s.add(black_box(x)));
                    }
                })
            });

            group.bench_function(format!("heap_n{}_k{}", n, k), |b| {
                b.iter(|| {
                    let Ok(mut s) = HeapShortlist::with_seed(k, &seed) else {
                        return;
                    };
                    for &x in &stream {
                        black_box(s.add(black_box(x)));
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");

    // Per-call cost grows with stream length, so keep N modest here; the
    // point is the shape, not the absolute numbers.
    let sizes = [200, 1_000, 5_000];
    let k = 100;

    for &n in &sizes {
        let seed = seed_window(7, k);
        let stream = walk_stream(11, seed[k - 1], n);

        group.bench_function(format!("scan_n{}_k{}", n, k), |b| {
            b.iter(|| {
                let Ok(mut s) = FullScan::with_seed(k, &seed) else {
                    return;
                };
                for &x in &stream {
                    black_box(s.add(black_box(x)));
                }
            })
        });
    }
    group.finish();
}

fn bench_coordinator(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinator");

    let n = 2_000;
    let k = 100;
    let seed = seed_window(7, k);
    let stream = walk_stream(11, seed[k - 1], n);

    group.bench_function(format!("process_n{}_k{}", n, k), |b| {
        b.iter(|| {
            let Ok(mut coordinator) = Coordinator::with_seed(k, &seed) else {
                return;
            };
            for &x in &stream {
                if coordinator.process(black_box(x)).is_err() {
                    return;
                }
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_bounded_strategies,
    bench_full_scan,
    bench_coordinator
);
criterion_main!(benches);
