//! Two-sided order book for one instrument.
//!
//! Incoming orders cross the opposite side first; whatever is left rests on
//! their own side. Modify and cancel are routed to whichever side holds the
//! id.

use std::fmt;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::BookConfig;
use crate::error::{BookError, Result};
use crate::orderbook::{PriceLevelBook, PriceOrdering};
use crate::types::{Order, OrderId, Price, Side, Trade};

/// Bid and ask books for a single instrument.
#[derive(Debug)]
pub struct Orderbook {
    /// Highest price first
    bids: PriceLevelBook,
    /// Lowest price first
    asks: PriceLevelBook,
}

impl Default for Orderbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Orderbook {
    /// Create an empty book with default capacity
    pub fn new() -> Self {
        Self {
            bids: PriceLevelBook::new(PriceOrdering::for_side(Side::Buy)),
            asks: PriceLevelBook::new(PriceOrdering::for_side(Side::Sell)),
        }
    }

    /// Create a book whose sides are each pre-sized from `config`
    pub fn with_config(config: BookConfig) -> Self {
        Self {
            bids: PriceLevelBook::with_config(PriceOrdering::for_side(Side::Buy), config),
            asks: PriceLevelBook::with_config(PriceOrdering::for_side(Side::Sell), config),
        }
    }

    // ========================================================================
    // Order entry
    // ========================================================================

    /// Submit an order: cross it, then rest any remainder.
    ///
    /// Returns the trades in execution order. A fully filled order is not
    /// rested.
    ///
    /// ```
    /// use limit_book::{Order, Orderbook, Side};
    ///
    /// let mut book = Orderbook::new();
    /// book.insert(Order::new(1, Side::Sell, 100, 10, 0)).unwrap();
    ///
    /// let trades = book.insert(Order::new(2, Side::Buy, 100, 4, 0)).unwrap();
    /// assert_eq!(trades.len(), 1);
    /// assert_eq!(book.find(1).unwrap().quantity(), 6);
    /// assert!(!book.contains(2));
    /// ```
    pub fn insert(&mut self, mut order: Order) -> Result<Vec<Trade>> {
        let id = order.id();
        if order.quantity() == 0 {
            return Err(BookError::InvalidQuantity(id));
        }
        if self.contains(id) {
            return Err(BookError::DuplicateOrderId(id));
        }

        let (opposite, own) = match order.side() {
            Side::Buy => (&mut self.asks, &mut self.bids),
            Side::Sell => (&mut self.bids, &mut self.asks),
        };

        let trades = opposite.cross(&mut order)?;
        if order.quantity() > 0 {
            debug!(
                order_id = id,
                side = %order.side(),
                price = order.price(),
                quantity = order.quantity(),
                fills = trades.len(),
                "order rested"
            );
            own.insert(order)?;
        } else {
            debug!(order_id = id, fills = trades.len(), "order filled on entry");
        }
        Ok(trades)
    }

    /// Change the price and/or quantity of a resting order.
    ///
    /// A new price does not cross; the order is relocated on its own side.
    /// Changing side is rejected with `SideMismatch`.
    pub fn modify(&mut self, order: Order) -> Result<()> {
        let id = order.id();
        let book = self.holder_mut(id)?;
        let resting_side = book.find(id)?.side();
        if resting_side != order.side() {
            warn!(
                order_id = id,
                resting = %resting_side,
                requested = %order.side(),
                "side change rejected"
            );
            return Err(BookError::SideMismatch(id));
        }
        book.modify(order)
    }

    /// Cancel a resting order, returning it
    pub fn remove(&mut self, id: OrderId) -> Result<Order> {
        self.holder_mut(id)?.remove(id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Highest resting buy price, or `EmptyBook`
    pub fn best_bid(&self) -> Result<Price> {
        self.bids.best_price()
    }

    /// Lowest resting sell price, or `EmptyBook`
    pub fn best_ask(&self) -> Result<Price> {
        self.asks.best_price()
    }

    /// best ask - best bid, when both sides are populated and not crossed
    ///
    /// ## Example
    ///
    /// ```
    /// use limit_book::{Order, Orderbook, Side};
    ///
    /// let mut book = Orderbook::new();
    /// assert_eq!(book.spread(), None);
    ///
    /// book.insert(Order::new(1, Side::Buy, 99, 5, 0)).unwrap();
    /// book.insert(Order::new(2, Side::Sell, 102, 5, 0)).unwrap();
    /// assert_eq!(book.spread(), Some(3));
    /// ```
    pub fn spread(&self) -> Option<Price> {
        let bid = self.best_bid().ok()?;
        let ask = self.best_ask().ok()?;
        ask.checked_sub(bid)
    }

    /// Resting orders on both sides
    pub fn size(&self) -> usize {
        self.bids.size() + self.asks.size()
    }

    /// True when neither side holds an order
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Check if an order id is resting on either side
    pub fn contains(&self, id: OrderId) -> bool {
        self.bids.contains(id) || self.asks.contains(id)
    }

    /// Look up a resting order on either side.
    ///
    /// # Arguments
    ///
    /// * `id` - Order to look up
    ///
    /// # Returns
    ///
    /// The resting order with its remaining quantity, or `NotFound`
    pub fn find(&self, id: OrderId) -> Result<&Order> {
        if self.bids.contains(id) {
            self.bids.find(id)
        } else {
            self.asks.find(id)
        }
    }

    /// Read access to the bid side, best (highest) price first
    pub fn bids(&self) -> &PriceLevelBook {
        &self.bids
    }

    /// Read access to the ask side, best (lowest) price first
    pub fn asks(&self) -> &PriceLevelBook {
        &self.asks
    }

    /// Check both sides, and that no id rests on both.
    pub fn check_invariants(&self) -> Result<()> {
        self.bids.check_invariants()?;
        self.asks.check_invariants()?;

        let (smaller, larger) = if self.bids.size() <= self.asks.size() {
            (&self.bids, &self.asks)
        } else {
            (&self.asks, &self.bids)
        };
        for level in smaller.levels() {
            for order in smaller.orders_at(level.price) {
                if larger.contains(order.id()) {
                    return Err(BookError::InvariantViolation(format!(
                        "order {} rests on both sides",
                        order.id()
                    )));
                }
            }
        }
        Ok(())
    }

    /// SHA-256 over both sides' digests
    pub fn state_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.bids.state_digest());
        hasher.update(self.asks.state_digest());

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Hex form of [`state_digest`](Self::state_digest), for logs
    pub fn state_digest_hex(&self) -> String {
        hex::encode(self.state_digest())
    }

    fn holder_mut(&mut self, id: OrderId) -> Result<&mut PriceLevelBook> {
        if self.bids.contains(id) {
            Ok(&mut self.bids)
        } else if self.asks.contains(id) {
            Ok(&mut self.asks)
        } else {
            warn!(order_id = id, "unknown order");
            Err(BookError::NotFound(id))
        }
    }
}

impl fmt::Display for Orderbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "asks:")?;
        write!(f, "{}", self.asks)?;
        writeln!(f, "bids:")?;
        write!(f, "{}", self.bids)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
