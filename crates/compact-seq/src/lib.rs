//! # compact-seq
//!
//! Parsers and sequence algorithms for compact textual encodings.
//!
//! This crate provides five independent, pure components:
//! - **Range expansion**: `2,5,7-10` → `[2, 5, 7, 8, 9, 10]`
//! - **Run-length decoding**: `A5B10CD3` → `AAAAABBBBBBBBBBCDDD`
//! - **Longest run**: longest stretch of elements matching a predicate
//! - **Interval complement**: what remains of a bounding interval after cuts
//! - **Hand classification**: filter card hands by their rank-group shape
//!
//! Callers split raw input on its delimiter; every function here takes
//! already-split tokens and returns in-memory values. Nothing performs I/O
//! and nothing keeps state between calls.
//!
//! ## Usage
//!
//! ```rust
//! use compact_seq::{
//!     complement, decode_run_length, expand_ranges, longest_run, parse_interval,
//! };
//!
//! let values = expand_ranges("2,5,7-10".split(',')).unwrap();
//! assert_eq!(values, vec![2, 5, 7, 8, 9, 10]);
//!
//! assert_eq!(decode_run_length("A5B10CD3").unwrap().len(), 19);
//!
//! assert_eq!(longest_run([1, 0, 0, 2, 0], |&n| n == 0), 2);
//!
//! let bound = parse_interval("0:00:00-2:00:00").unwrap();
//! let cuts = "0:00:00-0:00:05;0:55:12-1:05:02"
//!     .split(';')
//!     .map(parse_interval)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let kept: Vec<String> = complement(bound, &cuts)
//!     .unwrap()
//!     .iter()
//!     .map(|i| i.to_string())
//!     .collect();
//! assert_eq!(kept, ["0:00:05-0:55:12", "1:05:02-2:00:00"]);
//! ```
//!
//! ## Token Grammar Quick Reference
//!
//! | Token | Grammar | Example |
//! |-------|---------|---------|
//! | Range | `N` or `N-N` | `7-10` |
//! | Run-length | `([A-Z][0-9]*)+` | `A5B10CD3` |
//! | Timestamp | `H:MM:SS` | `1:05:02` |
//! | Interval | `H:MM:SS-H:MM:SS` | `0:55:12-1:05:02` |
//! | Card | rank (`2`-`10`, `J`, `Q`, `K`, `A`) + suit char | `10♣` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod grouping;
mod hand;
mod interval;
mod parser;
mod range;
mod run_length;
mod runs;
mod types;

pub use error::{SeqError, SeqResult};
pub use grouping::{group_by_key, Groups};
pub use hand::{filter_by_shape, HandPattern};
pub use interval::{complement, format_timestamp};
pub use parser::{
    parse_card, parse_hand, parse_integer, parse_interval, parse_range, parse_run_length,
    parse_timestamp,
};
pub use range::{expand_ranges, expanded_len, parse_ranges};
pub use run_length::{
    canonicalize_run_length, decode_run_length, decode_tokens, decoded_len, encode_run_length,
};
pub use runs::{longest_run, longest_run_span, Run};
pub use types::{Card, GroupShape, Hand, IntRange, Rank, RunLengthToken, TimeInterval};
