//! Single-sided price-level book.
//!
//! ## Architecture
//!
//! - **Slab**: arena of [`OrderNode`]s; keys are the stable handles
//! - **BTreeMap**: price levels keyed by raw price; the [`PriceOrdering`]
//!   decides whether the first or last key is best
//! - **HashMap**: order id to slab key, for O(1) find/cancel/modify
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | insert | O(log L) |
//! | remove / modify (same price) | O(1), O(log L) if a level empties |
//! | modify (new price) | O(log L) |
//! | find / contains | O(1) |
//! | best price | O(log L) |
//! | cross | O(k log L) for k fills |
//!
//! ## Example
//!
//! ```
//! use limit_book::orderbook::{PriceLevelBook, PriceOrdering};
//! use limit_book::types::{Order, Side};
//!
//! let mut asks = PriceLevelBook::new(PriceOrdering::Ascending);
//! asks.insert(Order::new(1, Side::Sell, 101, 5, 0)).unwrap();
//! asks.insert(Order::new(2, Side::Sell, 100, 5, 0)).unwrap();
//! assert_eq!(asks.best_price(), Ok(100));
//!
//! let mut buy = Order::new(3, Side::Buy, 101, 7, 0);
//! let trades = asks.cross(&mut buy).unwrap();
//! assert_eq!(trades.len(), 2);
//! assert_eq!(buy.quantity(), 0);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::{debug, trace};

use crate::config::BookConfig;
use crate::error::{BookError, Result};
use crate::orderbook::level::{node, node_mut};
use crate::orderbook::{OrderNode, PriceLevel, PriceOrdering};
use crate::types::{Order, OrderId, Price, Trade};

fn invariant(msg: String) -> BookError {
    BookError::InvariantViolation(msg)
}

/// Aggregated view of one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelView {
    pub price: Price,
    pub order_count: usize,
    pub total_quantity: u128,
}

/// One side of an order book: ordered price levels of FIFO queues plus an
/// id index.
#[derive(Debug)]
pub struct PriceLevelBook {
    ordering: PriceOrdering,

    /// Order storage; slab keys are the handles held by levels and the index
    orders: Slab<OrderNode>,

    levels: BTreeMap<Price, PriceLevel>,

    /// Order id to slab key
    index: HashMap<OrderId, usize>,
}

impl PriceLevelBook {
    /// Create an empty book with the given ordering
    pub fn new(ordering: PriceOrdering) -> Self {
        Self {
            ordering,
            orders: Slab::new(),
            levels: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty book pre-sized from `config`
    pub fn with_config(ordering: PriceOrdering, config: BookConfig) -> Self {
        Self {
            ordering,
            orders: Slab::with_capacity(config.order_capacity),
            levels: BTreeMap::new(),
            index: HashMap::with_capacity(config.order_capacity),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Which end of the price axis this book treats as best
    #[inline]
    pub fn ordering(&self) -> PriceOrdering {
        self.ordering
    }

    /// Number of resting orders
    #[inline]
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// True when no order rests on this side
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct price levels
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Check if an order id is resting here
    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Best resting price, or `EmptyBook`
    pub fn best_price(&self) -> Result<Price> {
        self.best_level()
            .map(|level| level.price)
            .ok_or(BookError::EmptyBook)
    }

    /// Resting order by id, or `NotFound`
    pub fn find(&self, id: OrderId) -> Result<&Order> {
        let key = *self.index.get(&id).ok_or(BookError::NotFound(id))?;
        Ok(&node(&self.orders, key)?.order)
    }

    /// Levels best-first
    pub fn levels(&self) -> impl Iterator<Item = LevelView> + '_ {
        self.iter_levels().map(|level| LevelView {
            price: level.price,
            order_count: level.order_count,
            total_quantity: level.total_quantity,
        })
    }

    /// Orders resting at `price`, oldest first. Empty if no such level.
    pub fn orders_at(&self, price: Price) -> impl Iterator<Item = &Order> + '_ {
        self.levels
            .get(&price)
            .into_iter()
            .flat_map(move |level| level.orders(&self.orders))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Rest an order at the back of its price level, creating the level if
    /// needed.
    ///
    /// Fails with `InvalidQuantity` for a zero-quantity order and
    /// `DuplicateOrderId` if the id is already resting.
    pub fn insert(&mut self, order: Order) -> Result<()> {
        if order.quantity() == 0 {
            return Err(BookError::InvalidQuantity(order.id()));
        }
        if self.contains(order.id()) {
            return Err(BookError::DuplicateOrderId(order.id()));
        }
        self.link(order)
    }

    /// Cancel a resting order, returning it.
    pub fn remove(&mut self, id: OrderId) -> Result<Order> {
        let key = *self.index.get(&id).ok_or(BookError::NotFound(id))?;
        let order = self.unlink(key)?;
        debug!(order_id = id, price = order.price(), "order removed");
        Ok(order)
    }

    /// Apply a modify request for a resting order.
    ///
    /// - quantity 0: the order is removed
    /// - same price: quantity updated in place, queue position kept
    /// - new price: the order moves to the back of the new level
    ///
    /// Only price and quantity are taken from `order`; side, exchange and
    /// type of the resting order are kept.
    pub fn modify(&mut self, order: Order) -> Result<()> {
        let id = order.id();
        let key = *self.index.get(&id).ok_or(BookError::NotFound(id))?;

        if order.quantity() == 0 {
            let removed = self.unlink(key)?;
            debug!(order_id = id, price = removed.price(), "order cancelled by modify");
            return Ok(());
        }

        let (resting_price, old_quantity) = {
            let resting = node(&self.orders, key)?;
            (resting.price(), resting.remaining())
        };

        if resting_price == order.price() {
            let level = self
                .levels
                .get_mut(&resting_price)
                .ok_or_else(|| invariant(format!("order {id} has no level at {resting_price}")))?;
            node_mut(&mut self.orders, key)?
                .order
                .set_quantity(order.quantity());
            level.replace_quantity(old_quantity, order.quantity());
            debug!(order_id = id, quantity = order.quantity(), "order resized");
            return Ok(());
        }

        let mut moved = self.unlink(key)?;
        moved.set_price(order.price());
        moved.set_quantity(order.quantity());
        debug!(
            order_id = id,
            from = resting_price,
            to = order.price(),
            "order relocated"
        );
        self.link(moved)
    }

    /// Fill `incoming` against this book's liquidity.
    ///
    /// Marketable levels are consumed best-first and each level head-first.
    /// `incoming`'s quantity is decremented in place; fully filled resting
    /// orders are removed, partially filled ones keep their queue position.
    ///
    /// # Arguments
    ///
    /// * `incoming` - Aggressing order from the opposite side; its limit
    ///   price bounds which levels are marketable
    ///
    /// # Returns
    ///
    /// Trades in execution order, each priced at the resting level
    pub fn cross(&mut self, incoming: &mut Order) -> Result<Vec<Trade>> {
        let mut trades = Vec::new();

        while incoming.quantity() > 0 {
            // Re-acquired every pass: the previous fill may have removed the
            // head or the whole level.
            let level = match self.ordering {
                PriceOrdering::Ascending => self.levels.values_mut().next(),
                PriceOrdering::Descending => self.levels.values_mut().next_back(),
            };
            let Some(level) = level else {
                break;
            };
            let level_price = level.price;
            if !self.ordering.is_marketable(level_price, incoming.price()) {
                break;
            }

            let head = level
                .peek_head()
                .ok_or_else(|| invariant(format!("empty level at {level_price}")))?;
            let resting = node_mut(&mut self.orders, head)?;
            let filled = resting.fill(incoming.quantity());
            let resting_id = resting.order_id();
            let exhausted = resting.is_filled();
            incoming.fill(filled);
            level.reduce_quantity(filled);

            trace!(
                aggressor = incoming.id(),
                resting = resting_id,
                quantity = filled,
                price = level_price,
                "fill"
            );
            trades.push(Trade::new(incoming.id(), resting_id, filled, level_price));

            if exhausted {
                level.remove(head, &mut self.orders)?;
                if level.is_empty() {
                    self.levels.remove(&level_price);
                }
                self.orders.try_remove(head);
                self.index.remove(&resting_id);
            }
        }

        Ok(trades)
    }

    /// Drop every resting order
    pub fn clear(&mut self) {
        self.orders.clear();
        self.levels.clear();
        self.index.clear();
    }

    // ========================================================================
    // Verification
    // ========================================================================

    /// Walk every level and check it against the index and counters.
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = 0usize;
        let mut previous: Option<Price> = None;

        for level in self.iter_levels() {
            let price = level.price;
            if level.is_empty() {
                return Err(invariant(format!("empty level at {price}")));
            }
            if let Some(prev) = previous {
                if !self.ordering.is_better(prev, price) {
                    return Err(invariant(format!("level {price} out of order after {prev}")));
                }
            }
            previous = Some(price);

            let mut cursor = level.head;
            let mut prev_key = None;
            let mut count = 0usize;
            let mut total: u128 = 0;
            while let Some(key) = cursor {
                let resting = node(&self.orders, key)?;
                let id = resting.order_id();
                if resting.prev != prev_key {
                    return Err(invariant(format!("order {id} has a broken back link")));
                }
                if resting.price() != price {
                    return Err(invariant(format!(
                        "order {id} priced {} in level {price}",
                        resting.price()
                    )));
                }
                if resting.is_filled() {
                    return Err(invariant(format!("order {id} rests with zero quantity")));
                }
                if self.index.get(&id) != Some(&key) {
                    return Err(invariant(format!("order {id} missing from index")));
                }
                count += 1;
                if count > self.orders.len() {
                    return Err(invariant(format!("cycle in level {price}")));
                }
                total += u128::from(resting.remaining());
                prev_key = Some(key);
                cursor = resting.next;
            }

            if level.tail != prev_key {
                return Err(invariant(format!("level {price} tail mismatch")));
            }
            if count != level.order_count {
                return Err(invariant(format!(
                    "level {price} counts {} orders, holds {count}",
                    level.order_count
                )));
            }
            if total != level.total_quantity {
                return Err(invariant(format!(
                    "level {price} totals {}, holds {total}",
                    level.total_quantity
                )));
            }
            seen += count;
        }

        if seen != self.index.len() || seen != self.orders.len() {
            return Err(invariant(format!(
                "{seen} queued orders, {} indexed, {} stored",
                self.index.len(),
                self.orders.len()
            )));
        }
        Ok(())
    }

    /// SHA-256 over the book contents in priority order.
    ///
    /// Two books with the same levels, queues and quantities hash equal
    /// regardless of how their slabs were populated.
    pub fn state_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update([self.ordering.tag()]);
        for level in self.iter_levels() {
            hasher.update(level.price.to_le_bytes());
            for order in level.orders(&self.orders) {
                hasher.update(order.id().to_le_bytes());
                hasher.update(order.quantity().to_le_bytes());
                hasher.update([order.side().tag()]);
                hasher.update(order.exchange_id().to_le_bytes());
            }
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// [`state_digest`](Self::state_digest) as lowercase hex
    pub fn state_digest_hex(&self) -> String {
        hex::encode(self.state_digest())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn best_level(&self) -> Option<&PriceLevel> {
        match self.ordering {
            PriceOrdering::Ascending => self.levels.values().next(),
            PriceOrdering::Descending => self.levels.values().next_back(),
        }
    }

    fn iter_levels(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.ordering {
            PriceOrdering::Ascending => Box::new(self.levels.values()),
            PriceOrdering::Descending => Box::new(self.levels.values().rev()),
        }
    }

    /// Store and enqueue an already validated order.
    fn link(&mut self, order: Order) -> Result<()> {
        let id = order.id();
        let price = order.price();

        let key = self.orders.insert(OrderNode::new(order));
        let level = self
            .levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price));
        level.push_back(key, &mut self.orders)?;
        self.index.insert(id, key);
        Ok(())
    }

    /// Dequeue and free the node at `key`, dropping its level if emptied.
    fn unlink(&mut self, key: usize) -> Result<Order> {
        let price = node(&self.orders, key)?.price();
        let level = self
            .levels
            .get_mut(&price)
            .ok_or_else(|| invariant(format!("no level at {price} for slab key {key}")))?;
        level.remove(key, &mut self.orders)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }

        let freed = self
            .orders
            .try_remove(key)
            .ok_or_else(|| invariant(format!("dangling slab key {key}")))?;
        self.index.remove(&freed.order_id());
        Ok(freed.order)
    }
}

impl fmt::Display for PriceLevelBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.iter_levels() {
            write!(f, "{}:", level.price)?;
            for order in level.orders(&self.orders) {
                write!(f, " [{order}]")?;
            }
            writeln!(f, " (total {})", level.total_quantity)?;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
