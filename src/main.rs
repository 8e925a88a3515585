//! limit-book demo binary.
//!
//! Replays a short order sequence against a fresh book and logs the trades.
//! Set `RUST_LOG=limit_book=debug` to see the book's own events and
//! `LIMIT_BOOK_CAPACITY` to change pre-allocation.

use tracing::info;
use tracing_subscriber::EnvFilter;

use limit_book::types::price::{from_fixed, to_fixed};
use limit_book::{BookConfig, BookError, Order, Orderbook, Side};

fn price(s: &str) -> Result<u64, BookError> {
    to_fixed(s).ok_or_else(|| BookError::InvalidConfig(format!("bad price literal {s:?}")))
}

fn main() -> Result<(), BookError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = BookConfig::from_env()?;
    info!(capacity = config.order_capacity, "starting book");
    let mut book = Orderbook::with_config(config);

    let script = [
        Order::new(1, Side::Sell, price("100")?, 10, 1),
        Order::new(2, Side::Sell, price("100")?, 5, 1),
        Order::new(3, Side::Sell, price("101")?, 8, 1),
        Order::new(4, Side::Buy, price("99.5")?, 4, 2),
        Order::new(5, Side::Buy, price("101")?, 12, 2),
    ];

    for order in script {
        let id = order.id();
        for trade in book.insert(order)? {
            info!(
                aggressor = trade.aggressor_id(),
                resting = trade.resting_id(),
                quantity = trade.quantity(),
                price = %from_fixed(trade.price()),
                "trade"
            );
        }
        info!(order_id = id, resting = book.contains(id), "order processed");
    }

    book.modify(Order::new(2, Side::Sell, price("105")?, 3, 1))?;
    if let Err(e) = book.remove(42) {
        info!(error = %e, "cancel of unknown order rejected");
    }

    let bid = book.best_bid().map(from_fixed).ok();
    let ask = book.best_ask().map(from_fixed).ok();
    info!(?bid, ?ask, size = book.size(), digest = %book.state_digest_hex(), "final book");
    print!("{book}");
    Ok(())
}
