//! Core value types for the limit book.
//!
//! All scalars are plain unsigned 64-bit integers. Prices and quantities are
//! treated as opaque fixed-point values by the engine; see [`price`] for the
//! conversion helpers used at the edges.
//!
//! ## Types
//!
//! - [`Order`]: A resting or incoming limit order
//! - [`Side`]: Buy or Sell
//! - [`OrderType`]: Type of order (Limit only)
//! - [`Trade`]: An execution between an aggressor and a resting order

mod order;
mod trade;
pub mod price;

pub use order::{Order, OrderType, Side};
pub use trade::Trade;

/// Unique order identifier. Never reused while an order is resting.
pub type OrderId = u64;

/// Limit price in fixed-point units.
pub type Price = u64;

/// Order or fill quantity in fixed-point units.
pub type Quantity = u64;

/// Opaque venue identifier carried through untouched.
pub type ExchangeId = u64;
