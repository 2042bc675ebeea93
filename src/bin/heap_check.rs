//! Random-workload driver for the heap and the priority queue
//!
//! Inserts `--count` random values, polls them all back out and fails if the
//! polled sequence is not ordered by the configured comparator.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --bin heap-check -- --count 10000000
//!
//! # Max-first order through the PriorityQueue facade, checking the heap
//! # property every 1000 operations
//! RUST_LOG=debug cargo run --release --bin heap-check -- \
//!     --count 1000000 --order max --facade queue --check-every 1000 --seed 7
//! ```

use std::cmp::Ordering;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use compare::{natural, Compare};
use log::{debug, info};
use min_heap_queue::{MinHeap, PriorityQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Extraction order to verify
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Non-decreasing (natural order)
    Min,
    /// Non-increasing (reversed natural order)
    Max,
}

/// Which API drives the workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Facade {
    /// `MinHeap::add` / `MinHeap::poll`
    Heap,
    /// `PriorityQueue::offer` / `PriorityQueue::poll`
    Queue,
}

#[derive(Debug, Parser)]
#[command(name = "heap-check", version, about = "Fill a heap with random values and verify extraction order")]
struct Args {
    /// Number of values to insert and then poll
    #[arg(short = 'n', long, default_value_t = 10_000_000, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Seed for the value generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Extraction order
    #[arg(long, value_enum, default_value_t = Order::Min)]
    order: Order,

    /// API used to drive the workload
    #[arg(long, value_enum, default_value_t = Facade::Heap)]
    facade: Facade,

    /// Verify the whole heap property after every K operations
    #[arg(long, value_name = "K", value_parser = clap::value_parser!(u64).range(1..))]
    check_every: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let capacity =
        usize::try_from(args.count).context("count does not fit in this platform's usize")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = Instant::now();
    match args.order {
        Order::Min => run(&args, capacity, &mut rng, natural::<u64>())?,
        Order::Max => run(&args, capacity, &mut rng, natural::<u64>().rev())?,
    }

    info!(
        "{:?} order via {:?} is fine for {} values and executed in {}ms",
        args.order,
        args.facade,
        args.count,
        start.elapsed().as_millis()
    );
    Ok(())
}

fn run<C: Compare<u64>>(args: &Args, capacity: usize, rng: &mut StdRng, cmp: C) -> Result<()> {
    match args.facade {
        Facade::Heap => {
            let mut heap = MinHeap::with_capacity_and_comparator(capacity, cmp);
            let polled = drive_heap(&mut heap, args, rng)?;
            check_order(&polled, heap.comparator())
        }
        Facade::Queue => {
            let mut queue = PriorityQueue::with_capacity_and_comparator(capacity, cmp);
            let polled = drive_queue(&mut queue, args, rng)?;
            check_order(&polled, queue.heap().comparator())
        }
    }
}

fn drive_heap<C: Compare<u64>>(
    heap: &mut MinHeap<u64, C>,
    args: &Args,
    rng: &mut StdRng,
) -> Result<Vec<u64>> {
    let mut ops = 0u64;
    for _ in 0..args.count {
        heap.add(rng.gen_range(0..args.count));
        ops += 1;
        spot_check(heap, ops, args.check_every)?;
    }
    debug!("inserted {} values", heap.len());

    let mut polled = Vec::with_capacity(heap.len());
    for _ in 0..args.count {
        let value = heap
            .poll()
            .context("heap ran empty before every value was polled")?;
        polled.push(value);
        ops += 1;
        spot_check(heap, ops, args.check_every)?;
    }
    Ok(polled)
}

fn drive_queue<C: Compare<u64>>(
    queue: &mut PriorityQueue<u64, C>,
    args: &Args,
    rng: &mut StdRng,
) -> Result<Vec<u64>> {
    let mut ops = 0u64;
    for _ in 0..args.count {
        if !queue.offer(rng.gen_range(0..args.count)) {
            bail!("queue rejected a value after {} operations", ops);
        }
        ops += 1;
        spot_check(queue.heap(), ops, args.check_every)?;
    }
    debug!("offered {} values", queue.size());

    let mut polled = Vec::with_capacity(queue.size());
    for _ in 0..args.count {
        let value = queue
            .poll()
            .context("queue ran empty before every value was polled")?;
        polled.push(value);
        ops += 1;
        spot_check(queue.heap(), ops, args.check_every)?;
    }
    Ok(polled)
}

fn spot_check<C: Compare<u64>>(heap: &MinHeap<u64, C>, ops: u64, every: Option<u64>) -> Result<()> {
    if every.is_some_and(|k| ops % k == 0) && !heap.is_heap() {
        bail!("heap property violated after {} operations", ops);
    }
    Ok(())
}

fn check_order<C: Compare<u64>>(polled: &[u64], cmp: &C) -> Result<()> {
    let misplaced = polled
        .windows(2)
        .position(|pair| cmp.compare(&pair[0], &pair[1]) == Ordering::Greater);
    if let Some(index) = misplaced {
        bail!(
            "polled values out of order at index {}: {} came before {}",
            index + 1,
            polled[index],
            polled[index + 1]
        );
    }
    Ok(())
}
