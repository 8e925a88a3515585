//! Error types for book operations.

use thiserror::Error;

use crate::types::OrderId;

/// Errors returned by [`PriceLevelBook`](crate::orderbook::PriceLevelBook) and
/// [`Orderbook`](crate::engine::Orderbook) operations.
///
/// Every error is detected before the book is mutated, so a failed call leaves
/// the book exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// The identifier is not resting in the book.
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// Best price requested on a side with no resting levels.
    #[error("book side is empty")]
    EmptyBook,

    /// An order with zero quantity was submitted.
    #[error("order {0} has zero quantity")]
    InvalidQuantity(OrderId),

    /// The identifier is already resting on one of the sides.
    #[error("order {0} is already resting")]
    DuplicateOrderId(OrderId),

    /// A modify tried to move an order to the other side.
    #[error("order {0} cannot change side")]
    SideMismatch(OrderId),

    /// Configuration could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The id index and the level queues disagree. Never expected in a
    /// correct build.
    #[error("book invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BookError>;
