//! Search configuration for the fare engine.

use chrono::Duration;

/// Configuration parameters for fare search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How many candidate hubs to probe concurrently. Each batch is fully
    /// resolved before the next one starts.
    pub hub_batch_size: usize,

    /// Minimum hub connection time (minutes).
    /// Tighter connections are rejected as too risky.
    pub min_connection_mins: i64,

    /// Maximum hub connection time (minutes).
    /// Longer waits are rejected as too wasteful.
    pub max_connection_mins: i64,

    /// Maximum (date, origin, destination) combinations searched
    /// concurrently across one request.
    pub max_concurrent_searches: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        hub_batch_size: usize,
        min_connection_mins: i64,
        max_connection_mins: i64,
        max_concurrent_searches: usize,
    ) -> Self {
        Self {
            hub_batch_size,
            min_connection_mins,
            max_connection_mins,
            max_concurrent_searches,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the maximum connection time as a Duration.
    pub fn max_connection(&self) -> Duration {
        Duration::minutes(self.max_connection_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hub_batch_size: 5,
            min_connection_mins: 120, // 2 hours
            max_connection_mins: 720, // 12 hours
            max_concurrent_searches: 8,
        }
    }
}
