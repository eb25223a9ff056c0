//! Comparative latency run: four k-th largest strategies on one stream.
//!
//! Seeds every strategy with the same batch of small uniform values,
//! then drives the coordinator over an upward-drifting random walk,
//! recording per-call latency per strategy. The printed report is the
//! comparison the crate exists for: the full-scan baseline degrades
//! with stream length while the bounded strategies stay flat.

use kurai::{Coordinator, IncrementWalk, LatencyReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let k = 500;
    let n = 20_000;

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let seed: Vec<i64> = (0..k).map(|_| rng.random_range(0..10)).collect();

    let mut walk = IncrementWalk::new(seed[k - 1]);
    let mut coordinator = Coordinator::with_seed(k, &seed)?;
    let mut report = LatencyReport::new();

    let mut kth = coordinator.kth_largest();
    for _ in 0..n {
        let x = walk.step_with_rng(&mut rng);
        kth = coordinator.process_recording(x, &mut report)?;
    }

    println!(
        "k={k} observations={} final k-th largest={kth}",
        coordinator.seen()
    );
    println!();
    print!("{report}");

    Ok(())
}
