//! Search configuration parameters.

/// Default recursion bound for the evaluators.
///
/// Each recursive frame holds a handful of machine words, so 4096 levels stay
/// far below the 8 MiB stack Rust gives the main thread.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Configuration for minimax / alpha-beta search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum recursion depth (edges below the starting node).
    /// Deeper trees fail with `SearchError::DepthLimitExceeded`.
    pub max_depth: usize,

    /// Record the order in which nodes are visited.
    /// Useful for observing which subtrees were pruned.
    pub record_trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            record_trace: false,
        }
    }
}

impl SearchConfig {
    /// Config with visit tracing enabled.
    pub fn traced() -> Self {
        Self {
            record_trace: true,
            ..Self::default()
        }
    }

    /// Override the recursion bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.record_trace);
    }

    #[test]
    fn test_traced_keeps_depth() {
        let config = SearchConfig::traced().with_max_depth(8);
        assert!(config.record_trace);
        assert_eq!(config.max_depth, 8);
    }
}
