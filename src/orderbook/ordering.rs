//! Price ordering policy for one side of the book.
//!
//! Bids and asks differ only in which end of the price axis is "best". The
//! book takes a `PriceOrdering` value instead of being specialised per side,
//! so there is a single crossing loop for both.

use std::cmp::Ordering;

use crate::types::{Price, Side};

/// Which prices a book considers best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceOrdering {
    /// Lowest price first (ask side)
    Ascending,
    /// Highest price first (bid side)
    Descending,
}

impl PriceOrdering {
    /// Ordering of the book that rests orders of `side`
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Buy => PriceOrdering::Descending,
            Side::Sell => PriceOrdering::Ascending,
        }
    }

    /// Compare two prices best-first: `Less` means `a` ranks ahead of `b`.
    #[inline]
    pub fn compare(self, a: Price, b: Price) -> Ordering {
        match self {
            PriceOrdering::Ascending => a.cmp(&b),
            PriceOrdering::Descending => b.cmp(&a),
        }
    }

    /// `a` is strictly better than `b`
    #[inline]
    pub fn is_better(self, a: Price, b: Price) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// A resting level at `level_price` can trade with an incoming order
    /// limited at `limit`: equal price, or better for the incoming side.
    #[inline]
    pub fn is_marketable(self, level_price: Price, limit: Price) -> bool {
        self.compare(level_price, limit) != Ordering::Greater
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            PriceOrdering::Ascending => 0,
            PriceOrdering::Descending => 1,
        }
    }
}
