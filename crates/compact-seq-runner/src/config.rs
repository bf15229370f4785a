//! Configuration types for the runner.

/// Default cap on the number of values one call may produce.
pub const DEFAULT_MAX_OUTPUT: usize = 10_000_000;

/// Configuration for the [`Runner`](crate::Runner).
///
/// # Example
///
/// ```rust
/// use compact_seq_runner::RunnerConfig;
///
/// let config = RunnerConfig::builder()
///     .with_list_delimiter(';')
///     .with_max_output(100_000)
///     .with_parallel(true)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunnerConfig {
    /// Separator between range tokens and run values.
    pub list_delimiter: char,
    /// Separator between hands.
    pub record_delimiter: char,
    /// Separator between cards inside a hand.
    pub card_delimiter: char,
    /// Separator between cut intervals.
    pub interval_delimiter: char,
    /// Trim whitespace around every token. Cards are always trimmed.
    pub trim_tokens: bool,
    /// Maximum number of values an expansion may produce (None = unlimited).
    ///
    /// Defaults to [`DEFAULT_MAX_OUTPUT`]. Without a limit, a short input
    /// such as `A99999999999` asks for more memory than the process has.
    pub max_output: Option<usize>,
    /// Classify hands in parallel (requires `parallel` feature).
    pub parallel: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            list_delimiter: ',',
            record_delimiter: ';',
            card_delimiter: ' ',
            interval_delimiter: ';',
            trim_tokens: true,
            max_output: Some(DEFAULT_MAX_OUTPUT),
            parallel: false,
        }
    }
}

impl RunnerConfig {
    /// Creates a new builder for RunnerConfig.
    pub fn builder() -> RunnerConfigBuilder {
        RunnerConfigBuilder::default()
    }
}

/// Builder for RunnerConfig.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfigBuilder {
    config: RunnerConfig,
}

impl RunnerConfigBuilder {
    /// Sets the list delimiter.
    pub fn with_list_delimiter(mut self, delimiter: char) -> Self {
        self.config.list_delimiter = delimiter;
        self
    }

    /// Sets the delimiter between hands.
    pub fn with_record_delimiter(mut self, delimiter: char) -> Self {
        self.config.record_delimiter = delimiter;
        self
    }

    /// Sets the delimiter between cards.
    pub fn with_card_delimiter(mut self, delimiter: char) -> Self {
        self.config.card_delimiter = delimiter;
        self
    }

    /// Sets the delimiter between cut intervals.
    pub fn with_interval_delimiter(mut self, delimiter: char) -> Self {
        self.config.interval_delimiter = delimiter;
        self
    }

    /// Enables or disables token trimming.
    pub fn with_trim_tokens(mut self, trim: bool) -> Self {
        self.config.trim_tokens = trim;
        self
    }

    /// Sets the maximum output size.
    pub fn with_max_output(mut self, max_output: usize) -> Self {
        self.config.max_output = Some(max_output);
        self
    }

    /// Removes the output limit.
    pub fn without_max_output(mut self) -> Self {
        self.config.max_output = None;
        self
    }

    /// Enables or disables parallel hand classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Builds the RunnerConfig.
    pub fn build(self) -> RunnerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_config_default() {
        let config = RunnerConfig::default();
        assert_eq!(config.list_delimiter, ',');
        assert_eq!(config.record_delimiter, ';');
        assert_eq!(config.card_delimiter, ' ');
        assert_eq!(config.interval_delimiter, ';');
        assert!(config.trim_tokens);
        assert_eq!(config.max_output, Some(DEFAULT_MAX_OUTPUT));
        assert!(!config.parallel);
    }

    #[test]
    fn test_runner_config_builder() {
        let config = RunnerConfig::builder()
            .with_list_delimiter(' ')
            .with_record_delimiter('|')
            .with_card_delimiter(',')
            .with_interval_delimiter(',')
            .with_trim_tokens(false)
            .with_max_output(50_000)
            .with_parallel(true)
            .build();

        assert_eq!(config.list_delimiter, ' ');
        assert_eq!(config.record_delimiter, '|');
        assert_eq!(config.card_delimiter, ',');
        assert_eq!(config.interval_delimiter, ',');
        assert!(!config.trim_tokens);
        assert_eq!(config.max_output, Some(50_000));
        assert!(config.parallel);
    }

    #[test]
    fn test_without_max_output() {
        let config = RunnerConfig::builder()
            .with_max_output(10)
            .without_max_output()
            .build();
        assert!(config.max_output.is_none());
    }

    #[test]
    fn test_builder_starts_from_defaults() {
        let config = RunnerConfig::builder().with_max_output(10).build();
        assert_eq!(
            config,
            RunnerConfig {
                max_output: Some(10),
                ..RunnerConfig::default()
            }
        );
    }
}
