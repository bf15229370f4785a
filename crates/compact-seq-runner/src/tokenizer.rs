//! Splitting raw input into tokens.

/// Splits `input` on `delimiter`.
///
/// Input that is empty (after trimming, when `trim` is set) yields no tokens.
/// Whitespace delimiters collapse, so `"10♣  Q♥"` is two cards; any other
/// delimiter keeps empty tokens so the parser can reject them.
pub(crate) fn split_tokens(input: &str, delimiter: char, trim: bool) -> Vec<&str> {
    let input = if trim { input.trim() } else { input };
    if input.is_empty() {
        return Vec::new();
    }

    let tokens = input.split(delimiter).map(|t| if trim { t.trim() } else { t });
    if delimiter.is_whitespace() {
        tokens.filter(|t| !t.is_empty()).collect()
    } else {
        tokens.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_trim() {
        assert_eq!(split_tokens(" 2, 5 ,7-10 ", ',', true), vec!["2", "5", "7-10"]);
    }

    #[test]
    fn test_split_without_trim() {
        assert_eq!(split_tokens("2, 5", ',', false), vec!["2", " 5"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_tokens("", ',', true).is_empty());
        assert!(split_tokens("   ", ';', true).is_empty());
        assert!(split_tokens("", ',', false).is_empty());
    }

    #[test]
    fn test_empty_tokens_are_kept() {
        assert_eq!(split_tokens("1,,3", ',', true), vec!["1", "", "3"]);
    }

    #[test]
    fn test_whitespace_delimiter_collapses() {
        assert_eq!(split_tokens("10♣  Q♥ ", ' ', true), vec!["10♣", "Q♥"]);
    }
}
