//! Order value type.
//!
//! An `Order` is a plain attribute bag. The engine mutates only its quantity
//! (fills, same-price modifies) and, when a modify relocates it, its price.
//! Identity, side, exchange and type never change once constructed.

use std::fmt;

use super::{ExchangeId, OrderId, Price, Quantity};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Stable byte tag, used when hashing book state
    pub(crate) fn tag(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("buy"),
            Side::Sell => f.write_str("sell"),
        }
    }
}

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type enumeration
///
/// Only limit behaviour is implemented by the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Limit order - executes at specified price or better
    #[default]
    Limit,
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// ## Example
///
/// ```
/// use limit_book::types::{Order, Side};
///
/// let order = Order::new(1, Side::Buy, 100, 10, 7);
/// assert!(order.is_buy());
/// assert_eq!(order.quantity(), 10);
/// assert_eq!(order.exchange_id(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    side: Side,
    price: Price,
    /// Remaining quantity. Zero means the order is dead.
    quantity: Quantity,
    exchange_id: ExchangeId,
    order_type: OrderType,
}

impl Order {
    /// Create a new limit order
    ///
    /// # Arguments
    ///
    /// * `id` - Unique order identifier
    /// * `side` - Buy or Sell
    /// * `price` - Limit price (fixed-point)
    /// * `quantity` - Quantity (fixed-point)
    /// * `exchange_id` - Opaque venue identifier
    pub fn new(
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        exchange_id: ExchangeId,
    ) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            exchange_id,
            order_type: OrderType::Limit,
        }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Remaining quantity
    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[inline]
    pub fn exchange_id(&self) -> ExchangeId {
        self.exchange_id
    }

    #[inline]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Overwrite the remaining quantity
    #[inline]
    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Move the order to a new price. Only the book does this, on relocation.
    #[inline]
    pub(crate) fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (may be less if order doesn't have enough remaining)
    pub fn fill(&mut self, fill_qty: Quantity) -> Quantity {
        let actual_fill = fill_qty.min(self.quantity);
        self.quantity -= actual_fill;
        actual_fill
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {}@{} (exch {})",
            self.id, self.side, self.quantity, self.price, self.exchange_id
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_order_new() {
        let order = Order::new(1, Side::Sell, 5_000_000_000_000, 100_000_000, 42);

        assert_eq!(order.id(), 1);
        assert_eq!(order.side(), Side::Sell);
        assert!(!order.is_buy());
        assert_eq!(order.price(), 5_000_000_000_000);
        assert_eq!(order.quantity(), 100_000_000);
        assert_eq!(order.exchange_id(), 42);
        assert_eq!(order.order_type(), OrderType::Limit);
        assert!(!order.is_filled());
    }

    #[test]
    fn test_order_fill() {
        let mut order = Order::new(1, Side::Buy, 100, 10, 0);

        assert_eq!(order.fill(3), 3);
        assert_eq!(order.quantity(), 7);
        assert!(!order.is_filled());

        assert_eq!(order.fill(7), 7);
        assert!(order.is_filled());
    }

    #[test]
    fn test_order_overfill() {
        let mut order = Order::new(1, Side::Buy, 100, 10, 0);

        // Only fills what's available
        assert_eq!(order.fill(25), 10);
        assert_eq!(order.quantity(), 0);
    }

    #[test]
    fn test_order_wide_values_not_narrowed() {
        let order = Order::new(u64::MAX, Side::Buy, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(order.id(), u64::MAX);
        assert_eq!(order.price(), u64::MAX);
        assert_eq!(order.quantity(), u64::MAX);
    }

    #[test]
    fn test_order_display() {
        let order = Order::new(9, Side::Buy, 101, 12, 3);
        assert_eq!(order.to_string(), "#9 buy 12@101 (exch 3)");
    }
}
