//! Engine configuration
//!
//! One engine, parameterized by a color strategy, replaces the historical
//! pattern of two forked flat/zoned implementations drifting apart. The
//! configuration is plain data handed to the composition root; nothing in
//! this crate reads it from a hidden global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown color strategy
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color strategy: {0}")]
pub struct UnknownStrategy(pub String);

/// How two-participant avatars are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorStrategy {
    /// Each participant is colored independently by its label digest;
    /// pairs may collide.
    Flat,
    /// Both colors come from one curated palette zone and are forced apart
    /// on collision.
    #[default]
    ZonedPair,
}

impl std::fmt::Display for ColorStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorStrategy::Flat => write!(f, "flat"),
            ColorStrategy::ZonedPair => write!(f, "zoned_pair"),
        }
    }
}

impl std::str::FromStr for ColorStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(ColorStrategy::Flat),
            "zoned_pair" | "zoned" => Ok(ColorStrategy::ZonedPair),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Avatar engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarConfig {
    /// Color strategy for two-participant avatars
    pub strategy: ColorStrategy,
    /// Maximum number of conversations kept in the color cache
    pub cache_capacity: usize,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            strategy: ColorStrategy::ZonedPair,
            cache_capacity: 256,
        }
    }
}

impl AvatarConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color strategy
    pub fn strategy(mut self, strategy: ColorStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}
