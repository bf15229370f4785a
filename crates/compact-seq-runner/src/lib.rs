//! # compact-seq-runner
//!
//! Runs [`compact-seq`](compact_seq) operations directly on raw delimited
//! strings.
//!
//! The core crate works on already-split tokens. This crate does the
//! splitting and trimming, enforces an optional output limit, reports
//! execution statistics, and logs each operation through `tracing`.
//!
//! ## Quick Start
//!
//! ```rust
//! use compact_seq_runner::Runner;
//!
//! let runner = Runner::new();
//!
//! let decoded = runner.decode_run_length("A5B10CD3").unwrap();
//! assert_eq!(decoded.value, "AAAAABBBBBBBBBBCDDD");
//!
//! let hands = "4♣ 5♦ 6♦ 7♠ 10♥;10♣ Q♥ 10♠ Q♠ 10♦;6♣ 6♥ 6♠ A♠ 6♦";
//! let full_houses = runner.full_houses(hands).unwrap();
//! assert_eq!(full_houses.value.len(), 1);
//! println!("classified {} hands in {:?}", full_houses.stats.tokens, full_houses.stats.duration);
//! ```
//!
//! ## With Configuration
//!
//! ```rust
//! use compact_seq_runner::{Runner, RunnerConfig, RunnerError};
//!
//! let config = RunnerConfig::builder()
//!     .with_list_delimiter(' ')
//!     .with_max_output(1_000)
//!     .build();
//!
//! let runner = Runner::with_config(config);
//! assert_eq!(runner.expand_ranges("1-3 7").unwrap().value, vec![1, 2, 3, 7]);
//! assert!(matches!(
//!     runner.expand_ranges("1-5000"),
//!     Err(RunnerError::OutputTooLarge { .. })
//! ));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Classifies hands in parallel using rayon
//! - `serde` - Serialize/Deserialize for config, outputs and compact-seq types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod result;
mod runner;
mod tokenizer;

// Public re-exports
pub use config::{RunnerConfig, RunnerConfigBuilder, DEFAULT_MAX_OUTPUT};
pub use error::{RunnerError, RunnerResult};
pub use result::{RunOutput, RunStats};
pub use runner::Runner;

// Re-export commonly used types from compact-seq for convenience
pub use compact_seq::{GroupShape, Hand, SeqError, TimeInterval};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        let _: Option<RunnerConfig> = None;
        let _: Option<RunOutput<Vec<u64>>> = None;
        let _: Option<RunStats> = None;
        let _: Option<RunnerResult<()>> = None;
    }

    #[test]
    fn test_re_exports() {
        let shape = GroupShape::full_house();
        assert_eq!(shape.total(), 5);
        let _ = compact_seq::parse_range("7-10");
    }
}
