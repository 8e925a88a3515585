//! Book sizing configuration.
//!
//! The only tunable is how many orders the arena and id index pre-allocate
//! per side. Books still grow past the capacity; it only avoids early
//! reallocation.

use std::env;

use crate::error::{BookError, Result};

/// Environment variable read by [`BookConfig::from_env`].
pub const CAPACITY_ENV: &str = "LIMIT_BOOK_CAPACITY";

const DEFAULT_ORDER_CAPACITY: usize = 1024;

/// Pre-allocation settings for a book.
///
/// ```
/// use limit_book::BookConfig;
///
/// let config = BookConfig::default().with_order_capacity(10_000);
/// assert_eq!(config.order_capacity, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookConfig {
    /// Orders to pre-allocate per side
    pub order_capacity: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            order_capacity: DEFAULT_ORDER_CAPACITY,
        }
    }
}

impl BookConfig {
    pub fn with_order_capacity(mut self, order_capacity: usize) -> Self {
        self.order_capacity = order_capacity;
        self
    }

    /// Build from the environment, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self> {
        match env::var(CAPACITY_ENV) {
            Ok(raw) => Self::default().with_capacity_str(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(BookError::InvalidConfig(format!("{CAPACITY_ENV}: {e}"))),
        }
    }

    fn with_capacity_str(self, raw: &str) -> Result<Self> {
        let capacity = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| BookError::InvalidConfig(format!("{CAPACITY_ENV}={raw:?}: {e}")))?;
        Ok(self.with_order_capacity(capacity))
    }
}
