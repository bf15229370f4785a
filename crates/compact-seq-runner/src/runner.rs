//! Runner implementation.

use std::time::Instant;

use compact_seq::{
    complement, decode_tokens, decoded_len, expanded_len, filter_by_shape, longest_run,
    parse_hand, parse_integer, parse_interval, parse_ranges, parse_run_length, GroupShape, Hand,
    TimeInterval,
};
use tracing::{debug, instrument, warn};

use crate::config::RunnerConfig;
use crate::error::{RunnerError, RunnerResult};
use crate::result::{RunOutput, RunStats};
use crate::tokenizer::split_tokens;

/// Runs compact-seq operations on raw delimited strings.
///
/// The runner owns only its configuration, so one instance can be shared
/// across threads. Expansion and decoding are capped at
/// [`DEFAULT_MAX_OUTPUT`](crate::DEFAULT_MAX_OUTPUT) values unless the config
/// says otherwise.
///
/// # Example
///
/// ```rust
/// use compact_seq_runner::Runner;
///
/// let runner = Runner::new();
///
/// let values = runner.expand_ranges("2,5,7-10,11,17-18").unwrap();
/// assert_eq!(values.value, vec![2, 5, 7, 8, 9, 10, 11, 17, 18]);
///
/// let kept = runner
///     .keep_intervals("0:00:00-2:00:00", "0:00:00-0:00:05;0:55:12-1:05:02;1:37:47-1:37:51")
///     .unwrap();
/// assert_eq!(kept.value.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Creates a runner with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner with custom configuration.
    pub fn with_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Expands a compact range list such as `"2,5,7-10"`.
    ///
    /// The output size is checked against `max_output` before any value is
    /// materialised.
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn expand_ranges(&self, input: &str) -> RunnerResult<RunOutput<Vec<u64>>> {
        let start = Instant::now();
        let tokens = self.split(input, self.config.list_delimiter);
        debug!(tokens = tokens.len(), "expanding ranges");

        let ranges = parse_ranges(tokens.iter().copied()).map_err(|e| self.fail(e.into()))?;
        self.check_output(expanded_len(&ranges))?;

        let values: Vec<u64> = ranges.into_iter().flatten().collect();
        Ok(self.finish(values, tokens.len(), start, Vec::len))
    }

    /// Decodes a run-length string such as `"A5B10CD3"`.
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn decode_run_length(&self, input: &str) -> RunnerResult<RunOutput<String>> {
        let start = Instant::now();
        let input = if self.config.trim_tokens {
            input.trim()
        } else {
            input
        };

        let tokens = parse_run_length(input).map_err(|e| self.fail(e.into()))?;
        debug!(tokens = tokens.len(), "decoding run-length string");
        self.check_output(decoded_len(&tokens) as u64)?;

        let decoded = decode_tokens(&tokens);
        Ok(self.finish(decoded, tokens.len(), start, |s: &String| s.chars().count()))
    }

    /// Length of the longest run of list values matching `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use compact_seq_runner::Runner;
    ///
    /// let sales = "1,2,1,1,0,3,1,0,0,2,4,1,0,0,0,0,2,1,0,3,1,0,0,0,6,1,3,0,0,0";
    /// let days = Runner::new().longest_run(sales, |&n| n == 0).unwrap();
    /// assert_eq!(days.value, 4);
    /// ```
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn longest_run<P>(&self, input: &str, predicate: P) -> RunnerResult<RunOutput<usize>>
    where
        P: FnMut(&i64) -> bool,
    {
        let start = Instant::now();
        let tokens = self.split(input, self.config.list_delimiter);
        debug!(tokens = tokens.len(), "scanning for longest run");

        let values = tokens
            .iter()
            .map(|t| parse_integer(t))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.fail(e.into()))?;

        let run = longest_run(values, predicate);
        Ok(self.finish(run, tokens.len(), start, |&run| run))
    }

    /// Removes `cuts` from `bound` and returns what is kept.
    ///
    /// `bound` is one `H:MM:SS-H:MM:SS` interval; `cuts` is a list of them,
    /// sorted and non-overlapping.
    #[instrument(skip_all)]
    pub fn keep_intervals(
        &self,
        bound: &str,
        cuts: &str,
    ) -> RunnerResult<RunOutput<Vec<TimeInterval>>> {
        let start = Instant::now();
        let bound = if self.config.trim_tokens {
            bound.trim()
        } else {
            bound
        };
        let tokens = self.split(cuts, self.config.interval_delimiter);
        debug!(%bound, cuts = tokens.len(), "computing kept intervals");

        let bound = parse_interval(bound).map_err(|e| self.fail(e.into()))?;
        let cuts = tokens
            .iter()
            .map(|t| parse_interval(t))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.fail(e.into()))?;

        let kept = complement(bound, &cuts).map_err(|e| self.fail(e.into()))?;
        Ok(self.finish(kept, tokens.len() + 1, start, Vec::len))
    }

    /// Keeps the hands whose rank-group shape equals `target`.
    ///
    /// Hands are separated by the record delimiter, cards by the card
    /// delimiter. A bad card fails with [`RunnerError::Record`] naming the
    /// hand it belongs to.
    #[instrument(skip_all, fields(len = input.len(), target = %target))]
    pub fn hands_matching(
        &self,
        input: &str,
        target: &GroupShape,
    ) -> RunnerResult<RunOutput<Vec<Hand>>> {
        let start = Instant::now();
        let records = self.split(input, self.config.record_delimiter);
        debug!(records = records.len(), parallel = self.config.parallel, "classifying hands");

        let matched = if self.config.parallel {
            self.match_parallel(&records, target)
        } else {
            self.match_sequential(&records, target)
        };
        let matched = matched.map_err(|e| self.fail(e))?;

        Ok(self.finish(matched, records.len(), start, Vec::len))
    }

    /// Keeps the full-house hands (`{3, 2}`).
    pub fn full_houses(&self, input: &str) -> RunnerResult<RunOutput<Vec<Hand>>> {
        self.hands_matching(input, &GroupShape::full_house())
    }

    fn parse_record(&self, index: usize, record: &str) -> RunnerResult<Hand> {
        parse_hand(record, self.config.card_delimiter)
            .map_err(|source| RunnerError::Record { index, source })
    }

    fn match_sequential(&self, records: &[&str], target: &GroupShape) -> RunnerResult<Vec<Hand>> {
        let hands = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.parse_record(index, record))
            .collect::<RunnerResult<Vec<_>>>()?;

        Ok(filter_by_shape(&hands, target).into_iter().cloned().collect())
    }

    #[cfg(feature = "parallel")]
    fn match_parallel(&self, records: &[&str], target: &GroupShape) -> RunnerResult<Vec<Hand>> {
        use rayon::prelude::*;

        let classified = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| -> RunnerResult<Option<Hand>> {
                let hand = self.parse_record(index, record)?;
                Ok(hand.matches(target).then_some(hand))
            })
            .collect::<RunnerResult<Vec<_>>>()?;

        Ok(classified.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "parallel"))]
    fn match_parallel(&self, records: &[&str], target: &GroupShape) -> RunnerResult<Vec<Hand>> {
        debug!("parallel feature disabled, classifying sequentially");
        self.match_sequential(records, target)
    }

    fn split<'a>(&self, input: &'a str, delimiter: char) -> Vec<&'a str> {
        split_tokens(input, delimiter, self.config.trim_tokens)
    }

    fn check_output(&self, count: u64) -> RunnerResult<()> {
        match self.config.max_output {
            Some(limit) if count > limit as u64 => Err(self.fail(RunnerError::OutputTooLarge {
                count,
                limit,
            })),
            _ => Ok(()),
        }
    }

    fn fail(&self, err: RunnerError) -> RunnerError {
        warn!(error = %err, "operation failed");
        err
    }

    fn finish<T>(
        &self,
        value: T,
        tokens: usize,
        start: Instant,
        produced: impl FnOnce(&T) -> usize,
    ) -> RunOutput<T> {
        let stats = RunStats::new(start.elapsed(), tokens, produced(&value));
        debug!(
            tokens = stats.tokens,
            produced = stats.produced,
            elapsed_us = stats.duration.as_micros() as u64,
            "operation complete"
        );
        RunOutput::new(value, stats)
    }
}
