//! Matching engine: the two-sided [`Orderbook`].
//!
//! ## Matching Rules
//!
//! - **Buy orders** cross the asks (lowest price first)
//! - **Sell orders** cross the bids (highest price first)
//! - Within a level, oldest order first
//! - Trades execute at the resting order's price
//! - **Unfilled quantity** rests on the book
//!
//! ## Concurrency
//!
//! Every operation runs to completion on `&mut self`. Matching must be
//! strictly ordered per instrument, so callers that share a book across
//! threads serialize access themselves (one writer per instrument, or a lock
//! around the `Orderbook`).
//!
//! ## Example
//!
//! ```
//! use limit_book::engine::Orderbook;
//! use limit_book::types::{Order, Side, Trade};
//!
//! let mut book = Orderbook::new();
//! book.insert(Order::new(1, Side::Sell, 100, 10, 0)).unwrap();
//! book.insert(Order::new(2, Side::Sell, 100, 5, 0)).unwrap();
//!
//! let trades = book.insert(Order::new(3, Side::Buy, 101, 12, 0)).unwrap();
//! assert_eq!(trades, vec![Trade::new(3, 1, 10, 100), Trade::new(3, 2, 2, 100)]);
//! assert_eq!(book.find(2).unwrap().quantity(), 3);
//! ```

pub mod matcher;

pub use matcher::Orderbook;
