//! Price level: the FIFO queue of orders resting at one price.
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Crossing consumes orders from the head
//! - Any order can be unlinked in O(1) using its slab key
//!
//! The node data lives in the book's slab; a level only holds queue metadata.

use slab::Slab;

use crate::error::{BookError, Result};
use crate::orderbook::OrderNode;
use crate::types::{Order, Price, Quantity};

/// Look up a node, treating a dangling key as a broken book.
#[inline]
pub(crate) fn node(slab: &Slab<OrderNode>, key: usize) -> Result<&OrderNode> {
    slab.get(key)
        .ok_or_else(|| BookError::InvariantViolation(format!("dangling slab key {key}")))
}

#[inline]
pub(crate) fn node_mut(slab: &mut Slab<OrderNode>, key: usize) -> Result<&mut OrderNode> {
    slab.get_mut(key)
        .ok_or_else(|| BookError::InvariantViolation(format!("dangling slab key {key}")))
}

/// Orders resting at a single price.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price shared by every order in the queue
    pub price: Price,

    /// Sum of remaining quantity across the queue; wider than `Quantity`
    pub total_quantity: u128,

    /// Oldest order, matched first
    pub head: Option<usize>,

    /// Newest order
    pub tail: Option<usize>,

    pub order_count: usize,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Append an order at the tail of the queue
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> Result<()> {
        let quantity = node(slab, key)?.remaining();

        if let Some(tail_key) = self.tail {
            node_mut(slab, tail_key)?.next = Some(key);
        }

        let node = node_mut(slab, key)?;
        node.prev = self.tail;
        node.next = None;

        if self.head.is_none() {
            self.head = Some(key);
        }
        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity += u128::from(quantity);
        Ok(())
    }

    /// Unlink an order from anywhere in the queue.
    ///
    /// The node stays in the slab with cleared pointers; the caller owns
    /// removing it. Returns the unlinked order's remaining quantity.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> Result<Quantity> {
        let (prev_key, next_key, quantity) = {
            let node = node(slab, key)?;
            (node.prev, node.next, node.remaining())
        };

        match prev_key {
            Some(prev) => node_mut(slab, prev)?.next = next_key,
            None => self.head = next_key,
        }
        match next_key {
            Some(next) => node_mut(slab, next)?.prev = prev_key,
            None => self.tail = prev_key,
        }

        let node = node_mut(slab, key)?;
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_quantity -= u128::from(quantity);
        Ok(quantity)
    }

    /// Slab key of the oldest order
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Account for a partial fill of one of the level's orders
    #[inline]
    pub fn reduce_quantity(&mut self, filled: Quantity) {
        self.total_quantity -= u128::from(filled);
    }

    /// Account for an in-place quantity change of one of the level's orders
    #[inline]
    pub fn replace_quantity(&mut self, old: Quantity, new: Quantity) {
        self.total_quantity = self.total_quantity - u128::from(old) + u128::from(new);
    }

    /// Walk the queue oldest-first
    pub fn orders<'a>(&self, slab: &'a Slab<OrderNode>) -> LevelOrders<'a> {
        LevelOrders {
            slab,
            cursor: self.head,
        }
    }
}

/// Iterator over the orders of one level in arrival order.
pub struct LevelOrders<'a> {
    slab: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for LevelOrders<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slab.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.order)
    }
}
