//! Search configuration for the planner.

/// Hard cap on cities in a multi-city search (5! = 120 visiting orders).
pub const MAX_DESTINATIONS: usize = 5;

/// Configuration parameters for flight searches.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of legs a depth-first route search may use.
    pub max_legs: usize,

    /// Maximum number of cities in a multi-city itinerary.
    /// Values above [`MAX_DESTINATIONS`] are capped.
    pub max_destinations: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_legs: usize, max_destinations: usize) -> Self {
        Self {
            max_legs,
            max_destinations,
        }
    }

    /// The destination limit actually enforced.
    pub fn destination_limit(&self) -> usize {
        self.max_destinations.min(MAX_DESTINATIONS)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_legs: 5,
            max_destinations: MAX_DESTINATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_legs, 5);
        assert_eq!(config.max_destinations, 5);
        assert_eq!(config.destination_limit(), 5);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(3, 2);

        assert_eq!(config.max_legs, 3);
        assert_eq!(config.max_destinations, 2);
        assert_eq!(config.destination_limit(), 2);
    }

    #[test]
    fn destination_limit_is_capped() {
        let config = SearchConfig::new(5, 9);
        assert_eq!(config.destination_limit(), MAX_DESTINATIONS);
    }
}
