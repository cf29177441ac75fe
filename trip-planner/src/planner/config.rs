//! Search configuration for the planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop as soon as the destination is settled.
    /// When false, every reachable city is settled before the result is
    /// read; the reported route is the same either way.
    pub stop_at_destination: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stop_at_destination: bool) -> Self {
        Self {
            stop_at_destination,
        }
    }

    /// Configuration that settles the whole reachable network.
    pub fn exhaustive() -> Self {
        Self {
            stop_at_destination: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_at_destination: true,
        }
    }
}
