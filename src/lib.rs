//! # limit-book
//!
//! In-memory limit-order matching under price-time priority.
//!
//! ## Architecture
//!
//! - **Types**: `Order`, `Trade` and the scalar aliases
//! - **OrderBook**: single-sided price-level index with slab-backed FIFO
//!   queues and an id index
//! - **Engine**: the two-sided `Orderbook` that routes, crosses and rests
//!
//! ## Design Principles
//!
//! 1. **Price-time priority**: better price first, then arrival order
//! 2. **Stable handles**: resting orders are addressed by slab keys, never
//!    by pointers
//! 3. **Explicit failures**: unknown ids and empty sides are errors, and a
//!    failed call leaves the book untouched
//! 4. **Synchronous**: no internal threads, no I/O, no global state

// ============================================================================
// Module declarations
// ============================================================================

/// Value types: Order, Trade, scalars
pub mod types;

/// Single-sided price-level index and crossing
pub mod orderbook;

/// Two-sided order book
pub mod engine;

/// Error taxonomy
pub mod error;

/// Pre-allocation settings
pub mod config;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::BookConfig;
pub use engine::Orderbook;
pub use error::{BookError, Result};
pub use orderbook::{LevelView, PriceLevelBook, PriceOrdering};
pub use types::{ExchangeId, Order, OrderId, OrderType, Price, Quantity, Side, Trade};
