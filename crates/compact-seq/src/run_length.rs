//! Run-length strings: `A5B10CD3` ⇄ `AAAAABBBBBBBBBBCDDD`.

use crate::error::{SeqError, SeqResult};
use crate::parser::parse_run_length;
use crate::types::RunLengthToken;

/// Decodes a run-length string.
///
/// Each uppercase letter is repeated by the count that follows it. A letter
/// without a count is emitted once; a letter followed by `0` is not emitted.
///
/// # Examples
///
/// ```rust
/// use compact_seq::decode_run_length;
///
/// assert_eq!(decode_run_length("A5B10CD3").unwrap(), "AAAAABBBBBBBBBBCDDD");
/// assert_eq!(decode_run_length("A0B").unwrap(), "B");
/// ```
pub fn decode_run_length(input: &str) -> SeqResult<String> {
    let tokens = parse_run_length(input)?;
    Ok(decode_tokens(&tokens))
}

/// Expands already-parsed tokens.
pub fn decode_tokens(tokens: &[RunLengthToken]) -> String {
    tokens
        .iter()
        .flat_map(|token| std::iter::repeat(token.letter).take(token.count))
        .collect()
}

/// Number of characters the tokens decode to (saturating).
pub fn decoded_len(tokens: &[RunLengthToken]) -> usize {
    tokens
        .iter()
        .fold(0usize, |total, token| total.saturating_add(token.count))
}

/// Compresses a string of uppercase letters into its canonical run-length
/// form: maximal runs of one letter, count omitted when it is 1.
pub fn encode_run_length(input: &str) -> SeqResult<String> {
    let mut tokens: Vec<RunLengthToken> = Vec::new();
    for (offset, c) in input.char_indices() {
        if !c.is_ascii_uppercase() {
            return Err(SeqError::parse_at(
                input,
                offset,
                format!("expected an uppercase letter, found '{}'", c),
            ));
        }
        match tokens.last_mut() {
            Some(last) if last.letter == c => last.count += 1,
            _ => tokens.push(RunLengthToken::new(c, 1)),
        }
    }
    Ok(tokens_to_string(&tokens))
}

/// Rewrites a run-length string into its canonical form without expanding
/// it: zero counts dropped, adjacent groups of the same letter merged.
pub fn canonicalize_run_length(input: &str) -> SeqResult<String> {
    let mut merged: Vec<RunLengthToken> = Vec::new();
    for token in parse_run_length(input)? {
        if token.count == 0 {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.letter == token.letter => {
                last.count = last.count.saturating_add(token.count)
            }
            _ => merged.push(token),
        }
    }
    Ok(tokens_to_string(&merged))
}

fn tokens_to_string(tokens: &[RunLengthToken]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod decode {
        use super::*;

        #[test]
        fn test_example() {
            let out = decode_run_length("A5B10CD3").unwrap();
            assert_eq!(out, "AAAAABBBBBBBBBBCDDD");
            assert_eq!(out.len(), 19);
        }

        #[test]
        fn test_absent_count_is_one() {
            assert_eq!(decode_run_length("ABC").unwrap(), "ABC");
        }

        #[test]
        fn test_explicit_zero_emits_nothing() {
            assert_eq!(decode_run_length("A0").unwrap(), "");
            assert_eq!(decode_run_length("A2B0C").unwrap(), "AAC");
        }

        #[test]
        fn test_leading_zeros_in_count() {
            assert_eq!(decode_run_length("A03").unwrap(), "AAA");
        }

        #[test]
        fn test_invalid_character() {
            let err = decode_run_length("A5-B").unwrap_err();
            assert!(matches!(err, SeqError::Parse { position: 2, .. }));
        }

        #[test]
        fn test_must_start_with_letter() {
            assert!(decode_run_length("3A").is_err());
        }

        #[test]
        fn test_decoded_len() {
            let tokens = parse_run_length("A5B10CD3").unwrap();
            assert_eq!(decoded_len(&tokens), 19);
        }
    }

    mod encode {
        use super::*;

        #[test]
        fn test_encode_example() {
            assert_eq!(
                encode_run_length("AAAAABBBBBBBBBBCDDD").unwrap(),
                "A5B10CD3"
            );
        }

        #[test]
        fn test_encode_empty() {
            assert_eq!(encode_run_length("").unwrap(), "");
        }

        #[test]
        fn test_encode_rejects_lowercase() {
            let err = encode_run_length("AAb").unwrap_err();
            assert!(matches!(err, SeqError::Parse { position: 2, .. }));
        }

        #[test]
        fn test_canonical_form() {
            assert_eq!(canonicalize_run_length("A1B0A2A3C").unwrap(), "A6C");
            assert_eq!(canonicalize_run_length("A5B10CD3").unwrap(), "A5B10CD3");
        }

        #[test]
        fn test_round_trip_matches_canonical_form() {
            for input in ["A5B10CD3", "A1A1", "B0", "Z2Y0Z3", "Q"] {
                let decoded = decode_run_length(input).unwrap();
                assert_eq!(
                    encode_run_length(&decoded).unwrap(),
                    canonicalize_run_length(input).unwrap(),
                    "round trip of {}",
                    input
                );
            }
        }
    }
}
