//! Benchmarks for the limit book.
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run one group
//! cargo bench -- order_operations
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use limit_book::{BookConfig, Order, Orderbook, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

const BASE_PRICE: u64 = 1_000_000;

fn make_buy_order(id: u64, price: u64, quantity: u64) -> Order {
    Order::new(id, Side::Buy, price, quantity, 1)
}

fn make_sell_order(id: u64, price: u64, quantity: u64) -> Order {
    Order::new(id, Side::Sell, price, quantity, 1)
}

/// Rest `count` asks from `base_price` upwards, ids starting at `first_id`.
fn populate_asks(
    book: &mut Orderbook,
    first_id: u64,
    count: usize,
    base_price: u64,
    step: u64,
    quantity: u64,
) {
    for i in 0..count as u64 {
        book.insert(make_sell_order(first_id + i, base_price + i * step, quantity))
            .unwrap();
    }
}

/// Rest `count` bids from `base_price` downwards, ids starting at `first_id`.
fn populate_bids(
    book: &mut Orderbook,
    first_id: u64,
    count: usize,
    base_price: u64,
    step: u64,
    quantity: u64,
) {
    for i in 0..count as u64 {
        book.insert(make_buy_order(first_id + i, base_price - i * step, quantity))
            .unwrap();
    }
}

/// Random flow of buys and sells within 500 ticks of `BASE_PRICE`.
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let price = rng.gen_range(BASE_PRICE - 500..=BASE_PRICE + 500);
            let quantity = rng.gen_range(1..=100);
            if rng.gen_bool(0.5) {
                make_buy_order(i as u64 + 1, price, quantity)
            } else {
                make_sell_order(i as u64 + 1, price, quantity)
            }
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Crossing
// ============================================================================

fn bench_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("single_fill_1k_levels", |b| {
        b.iter_batched(
            || {
                let config = BookConfig::default().with_order_capacity(2_000);
                let mut book = Orderbook::with_config(config);
                populate_asks(&mut book, 1, 1_000, BASE_PRICE, 1, 100);
                (book, make_buy_order(999_999, BASE_PRICE, 100))
            },
            |(mut book, buy)| black_box(book.insert(buy).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sweep_10_levels", |b| {
        b.iter_batched(
            || {
                let mut book = Orderbook::new();
                populate_asks(&mut book, 1, 100, BASE_PRICE, 1, 10);
                (book, make_buy_order(999_999, BASE_PRICE + 9, 100))
            },
            |(mut book, buy)| black_box(book.insert(buy).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("no_match_rest_on_book", |b| {
        b.iter_batched(
            || {
                let mut book = Orderbook::new();
                populate_asks(&mut book, 1, 1_000, BASE_PRICE, 1, 100);
                (book, make_buy_order(999_999, BASE_PRICE - 1, 100))
            },
            |(mut book, buy)| black_box(book.insert(buy).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Order Operations
// ============================================================================

fn bench_order_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_operations");
    group.measurement_time(Duration::from_secs(5));

    let populated = || {
        let mut book = Orderbook::with_config(BookConfig::default().with_order_capacity(2_000));
        populate_asks(&mut book, 1, 500, BASE_PRICE, 1, 100);
        populate_bids(&mut book, 501, 500, BASE_PRICE - 1, 1, 100);
        book
    };

    group.bench_function("insert_into_1k_book", |b| {
        b.iter_batched(
            populated,
            |mut book| {
                let order = make_buy_order(5_000, BASE_PRICE - 100, 100);
                black_box(book.insert(order).unwrap())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cancel_middle", |b| {
        b.iter_batched(
            populated,
            |mut book| black_box(book.remove(250).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("modify_quantity", |b| {
        b.iter_batched(
            populated,
            |mut book| {
                let order = make_sell_order(250, BASE_PRICE + 249, 50);
                black_box(book.modify(order).unwrap())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("modify_price", |b| {
        b.iter_batched(
            populated,
            |mut book| {
                let order = make_sell_order(250, BASE_PRICE + 1_000, 100);
                black_box(book.modify(order).unwrap())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(BenchmarkId::new("orders", batch_size), &batch_size, |b, &size| {
            let orders = generate_order_batch(size, 42);

            b.iter_batched(
                || {
                    let config = BookConfig::default().with_order_capacity(size);
                    let book = Orderbook::with_config(config);
                    (book, orders.clone())
                },
                |(mut book, orders)| {
                    for order in orders {
                        black_box(book.insert(order).unwrap());
                    }
                    book.size()
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cross, bench_order_operations, bench_throughput);
criterion_main!(benches);
