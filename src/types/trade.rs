//! Trade type representing a fill between an incoming and a resting order.

use std::fmt;

use super::{OrderId, Price, Quantity};

/// A single execution produced by crossing.
///
/// ## Terminology
///
/// - **Aggressor**: The incoming order that triggered the match
/// - **Resting**: The order that was already in the book
///
/// The trade always executes at the resting order's price.
///
/// ## Example
///
/// ```
/// use limit_book::types::Trade;
///
/// let trade = Trade::new(2, 1, 10, 100);
/// assert_eq!(trade.aggressor_id(), 2);
/// assert_eq!(trade.resting_id(), 1);
/// assert_eq!(trade.notional(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trade {
    aggressor_id: OrderId,
    resting_id: OrderId,
    quantity: Quantity,
    price: Price,
}

impl Trade {
    pub fn new(
        aggressor_id: OrderId,
        resting_id: OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        Self {
            aggressor_id,
            resting_id,
            quantity,
            price,
        }
    }

    #[inline]
    pub fn aggressor_id(&self) -> OrderId {
        self.aggressor_id
    }

    #[inline]
    pub fn resting_id(&self) -> OrderId {
        self.resting_id
    }

    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Notional value (price * quantity), widened so it cannot overflow
    pub fn notional(&self) -> u128 {
        (self.price as u128) * (self.quantity as u128)
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {}: {}@{}",
            self.aggressor_id, self.resting_id, self.quantity, self.price
        )
    }
}
