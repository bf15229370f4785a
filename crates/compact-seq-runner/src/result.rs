//! Output types for runner operations.

use std::time::Duration;

/// Value produced by a runner operation, with execution statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutput<T> {
    /// The operation's result.
    pub value: T,
    /// Execution statistics.
    pub stats: RunStats,
}

impl<T> RunOutput<T> {
    /// Creates a new output.
    pub fn new(value: T, stats: RunStats) -> Self {
        Self { value, stats }
    }

    /// Discards the statistics.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Statistics from one runner operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Total execution duration.
    pub duration: Duration,
    /// Number of tokens parsed from the input.
    pub tokens: usize,
    /// Number of elements in the result.
    pub produced: usize,
}

impl RunStats {
    /// Creates new run stats.
    pub fn new(duration: Duration, tokens: usize, produced: usize) -> Self {
        Self {
            duration,
            tokens,
            produced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_output() {
        let output = RunOutput::new(vec![1u64, 2], RunStats::new(Duration::ZERO, 1, 2));
        assert_eq!(output.stats.tokens, 1);
        assert_eq!(output.stats.produced, 2);
        assert_eq!(output.into_value(), vec![1, 2]);
    }

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.duration, Duration::ZERO);
        assert_eq!(stats.tokens, 0);
        assert_eq!(stats.produced, 0);
    }
}
