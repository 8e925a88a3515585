//! Order node for slab-based storage.
//!
//! `OrderNode` wraps an `Order` with doubly-linked list pointers so a resting
//! order can be unlinked from its price level in O(1) given its slab key.
//!
//! Pointers are slab keys (`usize`), never references. A key stays valid while
//! other nodes come and go; it is only invalidated when its own node is
//! removed from the slab, at which point the id index drops it as well.
//!
//! ```text
//! prev (older) <- node -> next (newer)
//! ```

use crate::types::{Order, OrderId, Price, Quantity};

/// Order node stored in the slab.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The resting order
    pub order: Order,

    /// Next (newer) order in the price level queue, None at the tail
    pub next: Option<usize>,

    /// Previous (older) order in the price level queue, None at the head
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    #[inline]
    pub fn order_id(&self) -> OrderId {
        self.order.id()
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.order.price()
    }

    #[inline]
    pub fn remaining(&self) -> Quantity {
        self.order.quantity()
    }

    /// Fill a portion of this order, returning the quantity actually filled
    #[inline]
    pub fn fill(&mut self, quantity: Quantity) -> Quantity {
        self.order.fill(quantity)
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.order.is_filled()
    }
}
