//! Interval complement: the parts of a bounding interval left after cuts.
//!
//! All endpoints are whole seconds. Textual `H:MM:SS` values are converted
//! by [`parse_timestamp`](crate::parse_timestamp) before any comparison.

use crate::error::{SeqError, SeqResult};
use crate::types::TimeInterval;

/// Returns the sub-intervals of `bound` not covered by `cuts`.
///
/// `cuts` must be sorted, pairwise disjoint and contained in `bound`. Each
/// cut is checked against the sweep cursor, so an overlapping, out-of-order
/// or out-of-bounds cut fails with [`SeqError::InvariantViolation`] instead
/// of producing corrupted output. Zero-length gaps are never emitted.
///
/// # Examples
///
/// ```rust
/// use compact_seq::{complement, TimeInterval};
///
/// let bound = TimeInterval::new(0, 7200).unwrap();
/// let cuts = [
///     TimeInterval::new(0, 5).unwrap(),
///     TimeInterval::new(3312, 3902).unwrap(),
///     TimeInterval::new(5867, 5871).unwrap(),
/// ];
///
/// let kept = complement(bound, &cuts).unwrap();
/// assert_eq!(
///     kept,
///     vec![
///         TimeInterval::new(5, 3312).unwrap(),
///         TimeInterval::new(3902, 5867).unwrap(),
///         TimeInterval::new(5871, 7200).unwrap(),
///     ]
/// );
/// ```
pub fn complement(bound: TimeInterval, cuts: &[TimeInterval]) -> SeqResult<Vec<TimeInterval>> {
    let mut kept = Vec::with_capacity(cuts.len() + 1);
    let mut cursor = bound.start();

    for (index, cut) in cuts.iter().enumerate() {
        if cut.start() < cursor {
            return Err(SeqError::invariant(if index == 0 {
                format!("cut {} starts before bound {}", cut, bound)
            } else {
                format!(
                    "cut {} ({}) overlaps or precedes cut {} ({})",
                    index,
                    cut,
                    index - 1,
                    cuts[index - 1]
                )
            }));
        }
        if cut.end() > bound.end() {
            return Err(SeqError::invariant(format!(
                "cut {} ({}) ends after bound {}",
                index, cut, bound
            )));
        }

        if cut.start() > cursor {
            kept.push(TimeInterval::from_ordered(cursor, cut.start()));
        }
        cursor = cut.end();
    }

    if cursor < bound.end() {
        kept.push(TimeInterval::from_ordered(cursor, bound.end()));
    }

    Ok(kept)
}

/// Formats whole seconds as `H:MM:SS`. Hours are not padded.
pub fn format_timestamp(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u64, end: u64) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    mod sweep {
        use super::*;

        #[test]
        fn test_video_edit_example() {
            let kept = complement(iv(0, 7200), &[iv(0, 5), iv(3312, 3902), iv(5867, 5871)]).unwrap();
            assert_eq!(kept, vec![iv(5, 3312), iv(3902, 5867), iv(5871, 7200)]);
        }

        #[test]
        fn test_no_cuts_returns_bound() {
            assert_eq!(complement(iv(10, 20), &[]).unwrap(), vec![iv(10, 20)]);
        }

        #[test]
        fn test_cut_at_start_and_end() {
            let kept = complement(iv(0, 100), &[iv(0, 10), iv(90, 100)]).unwrap();
            assert_eq!(kept, vec![iv(10, 90)]);
        }

        #[test]
        fn test_abutting_cuts_emit_no_gap() {
            let kept = complement(iv(0, 100), &[iv(10, 20), iv(20, 30)]).unwrap();
            assert_eq!(kept, vec![iv(0, 10), iv(30, 100)]);
        }

        #[test]
        fn test_cut_covering_bound() {
            assert!(complement(iv(0, 100), &[iv(0, 100)]).unwrap().is_empty());
        }

        #[test]
        fn test_bound_not_starting_at_zero() {
            let kept = complement(iv(100, 200), &[iv(150, 160)]).unwrap();
            assert_eq!(kept, vec![iv(100, 150), iv(160, 200)]);
        }

        #[test]
        fn test_idempotent() {
            let cuts = [iv(1, 2), iv(5, 8)];
            assert_eq!(
                complement(iv(0, 10), &cuts).unwrap(),
                complement(iv(0, 10), &cuts).unwrap()
            );
        }
    }

    mod preconditions {
        use super::*;

        #[test]
        fn test_overlapping_cuts() {
            let err = complement(iv(0, 100), &[iv(10, 30), iv(20, 40)]).unwrap_err();
            match err {
                SeqError::InvariantViolation { message } => {
                    assert!(message.contains("cut 1"));
                }
                _ => panic!("Expected InvariantViolation"),
            }
        }

        #[test]
        fn test_unsorted_cuts() {
            let err = complement(iv(0, 100), &[iv(50, 60), iv(10, 20)]).unwrap_err();
            assert!(matches!(err, SeqError::InvariantViolation { .. }));
        }

        #[test]
        fn test_cut_before_bound() {
            let err = complement(iv(100, 200), &[iv(50, 150)]).unwrap_err();
            assert!(matches!(err, SeqError::InvariantViolation { .. }));
        }

        #[test]
        fn test_inverted_cut_cannot_be_built() {
            assert!(matches!(
                TimeInterval::new(50, 10),
                Err(SeqError::InvariantViolation { .. })
            ));
            assert!(matches!(
                crate::parse_interval("0:00:50-0:00:10"),
                Err(SeqError::Parse { .. })
            ));
        }

        #[cfg(feature = "serde")]
        #[test]
        fn test_inverted_cut_cannot_be_deserialized() {
            let cuts: Result<Vec<TimeInterval>, _> =
                serde_json::from_str(r#"[{"start":0,"end":5},{"start":50,"end":10}]"#);
            assert!(cuts.is_err());

            let bound: Result<TimeInterval, _> = serde_json::from_str(r#"{"start":100,"end":0}"#);
            assert!(bound.is_err());
        }

        #[test]
        fn test_cut_after_bound() {
            let err = complement(iv(0, 100), &[iv(90, 110)]).unwrap_err();
            assert!(matches!(err, SeqError::InvariantViolation { .. }));
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00:00");
        assert_eq!(format_timestamp(5), "0:00:05");
        assert_eq!(format_timestamp(3902), "1:05:02");
        assert_eq!(format_timestamp(7200), "2:00:00");
        assert_eq!(format_timestamp(36_000), "10:00:00");
    }
}
