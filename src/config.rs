// lob_engine/src/config.rs
//
// Sizing knobs for a `MatchingEngine`: how many resting orders it can hold,
// how wide the price axis is, and the range of valid order ids. These are
// fixed at construction time — the dense arrays they size never grow.

use thiserror::Error;

/// Construction-time parameters for a `MatchingEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of preallocated order slots in the arena.
    pub arena_capacity: usize,
    /// Highest valid price tick, inclusive. Prices run `1..=max_price`.
    pub max_price: i32,
    /// Highest valid order id, inclusive. Ids run `0..=max_id`.
    pub max_id: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arena_capacity: 1_000_000,
            max_price: 100_000,
            max_id: 10_000_000,
        }
    }
}

/// Why an `EngineConfig` was rejected by [`EngineConfig::validated`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("arena_capacity must be greater than zero")]
    ZeroArenaCapacity,
    #[error("max_price must be greater than zero")]
    ZeroMaxPrice,
}

impl EngineConfig {
    /// Validate and return `self`, or describe why it is unusable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.arena_capacity == 0 {
            return Err(ConfigError::ZeroArenaCapacity);
        }
        if self.max_price <= 0 {
            return Err(ConfigError::ZeroMaxPrice);
        }
        Ok(self)
    }
}
