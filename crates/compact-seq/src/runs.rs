//! Longest contiguous run of elements matching a predicate.

/// Position and length of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Index of the first element of the run.
    pub start: usize,
    /// Number of elements in the run.
    pub len: usize,
}

/// Length of the longest contiguous run where `predicate` holds.
///
/// Returns 0 if no element matches and the full length if all do.
///
/// # Examples
///
/// ```rust
/// use compact_seq::longest_run;
///
/// let sales = [1, 2, 1, 1, 0, 3, 1, 0, 0, 2, 4, 1, 0, 0, 0, 0, 2, 1, 0, 3];
/// assert_eq!(longest_run(sales, |&n| n == 0), 4);
/// ```
pub fn longest_run<I, P>(items: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut current = 0usize;
    let mut max = 0usize;
    for item in items {
        if predicate(&item) {
            current += 1;
            max = max.max(current);
        } else {
            current = 0;
        }
    }
    max
}

/// Like [`longest_run`], but also reports where the run starts.
///
/// Ties go to the earliest run. Returns `None` if no element matches.
pub fn longest_run_span<I, P>(items: I, mut predicate: P) -> Option<Run>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut best: Option<Run> = None;
    let mut current = 0usize;
    for (index, item) in items.into_iter().enumerate() {
        if !predicate(&item) {
            current = 0;
            continue;
        }
        current += 1;
        if best.map_or(true, |run| current > run.len) {
            best = Some(Run {
                start: index + 1 - current,
                len: current,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALES: [i64; 30] = [
        1, 2, 1, 1, 0, 3, 1, 0, 0, 2, 4, 1, 0, 0, 0, 0, 2, 1, 0, 3, 1, 0, 0, 0, 6, 1, 3, 0, 0, 0,
    ];

    #[test]
    fn test_days_without_sale() {
        assert_eq!(longest_run(SALES, |&n| n == 0), 4);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(longest_run([1, 2, 3], |&n| n == 0), 0);
        assert_eq!(longest_run(Vec::<i64>::new(), |_| true), 0);
    }

    #[test]
    fn test_all_match() {
        assert_eq!(longest_run([0, 0, 0], |&n| n == 0), 3);
    }

    #[test]
    fn test_borrowed_items() {
        let words = vec!["a".to_string(), "bb".to_string(), "cc".to_string()];
        assert_eq!(longest_run(&words, |w| w.len() == 2), 2);
    }

    #[test]
    fn test_span() {
        assert_eq!(
            longest_run_span(SALES, |&n| n == 0),
            Some(Run { start: 12, len: 4 })
        );
    }

    #[test]
    fn test_span_ties_go_to_first_run() {
        assert_eq!(
            longest_run_span([0, 0, 1, 0, 0], |&n| n == 0),
            Some(Run { start: 0, len: 2 })
        );
    }

    #[test]
    fn test_span_none() {
        assert_eq!(longest_run_span([1, 2], |&n| n == 0), None);
    }

    #[test]
    fn test_span_agrees_with_length() {
        let len = longest_run(SALES, |&n| n > 0);
        let span = longest_run_span(SALES, |&n| n > 0).unwrap();
        assert_eq!(span.len, len);
    }
}
