//! Single-sided price-level index and its building blocks.
//!
//! ## Components
//!
//! - [`OrderNode`]: `Order` plus slab-key links for its level queue
//! - [`PriceLevel`]: FIFO queue metadata for one price
//! - [`PriceOrdering`]: which end of the price axis is best
//! - [`PriceLevelBook`]: levels + id index + crossing
//!
//! ## Example
//!
//! ```
//! use limit_book::orderbook::{PriceLevelBook, PriceOrdering};
//! use limit_book::types::{Order, Side};
//!
//! let mut bids = PriceLevelBook::new(PriceOrdering::Descending);
//! bids.insert(Order::new(1, Side::Buy, 100, 10, 0)).unwrap();
//! bids.insert(Order::new(2, Side::Buy, 102, 10, 0)).unwrap();
//!
//! assert_eq!(bids.best_price(), Ok(102));
//! ```

pub mod level;
pub mod node;
pub mod ordering;
pub mod price_level_book;

pub use level::{LevelOrders, PriceLevel};
pub use node::OrderNode;
pub use ordering::PriceOrdering;
pub use price_level_book::{LevelView, PriceLevelBook};
