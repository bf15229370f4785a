//! Token parsers built on nom.
//!
//! Every public parser takes one already-split token, must consume it
//! entirely, and reports failures as [`SeqError::Parse`] with the character
//! offset inside the token where parsing stopped.

use std::num::ParseIntError;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{anychar, char, digit0, digit1, satisfy},
    combinator::{all_consuming, cut, map_opt, map_res, opt, recognize, value, verify},
    error::ErrorKind,
    multi::many1,
    sequence::{pair, preceded, separated_pair, tuple},
    IResult,
};

use crate::error::{SeqError, SeqResult};
use crate::types::{Card, Hand, IntRange, Rank, RunLengthToken, TimeInterval};

/// Parse a compact range token: `5` or `7-10`.
///
/// # Examples
///
/// ```rust
/// use compact_seq::{parse_range, IntRange};
///
/// assert_eq!(parse_range("7-10").unwrap(), IntRange::new(7, 10).unwrap());
/// assert_eq!(parse_range("5").unwrap(), IntRange::single(5));
/// assert!(parse_range("10-7").is_err());
/// ```
pub fn parse_range(token: &str) -> SeqResult<IntRange> {
    let (start, end) = run_parser(token, range_token, describe_range)?;
    if start > end {
        return Err(SeqError::parse_at(
            token,
            0,
            format!("range start {} is greater than end {}", start, end),
        ));
    }
    Ok(IntRange::from_ordered(start, end))
}

/// Parse a signed decimal integer token such as `0`, `42` or `-12`.
pub fn parse_integer(token: &str) -> SeqResult<i64> {
    run_parser(
        token,
        map_res(recognize(pair(opt(char('-')), digit1)), |digits: &str| {
            digits.parse::<i64>()
        }),
        describe_range,
    )
}

/// Parse a run-length string `(Letter Digit*)+` into its tokens.
///
/// A letter without digits has a count of 1; an explicit `0` is kept.
pub fn parse_run_length(input: &str) -> SeqResult<Vec<RunLengthToken>> {
    run_parser(input, many1(run_length_group), describe_run_length)
}

/// Parse an `H:MM:SS` timestamp into whole seconds.
///
/// Hours may have any number of digits; minutes and seconds are exactly two
/// digits below 60.
pub fn parse_timestamp(token: &str) -> SeqResult<u64> {
    run_parser(token, timestamp, describe_timestamp)
}

/// Parse an `H:MM:SS-H:MM:SS` interval. The start must be before the end.
///
/// # Examples
///
/// ```rust
/// use compact_seq::parse_interval;
///
/// let cut = parse_interval("0:55:12-1:05:02").unwrap();
/// assert_eq!((cut.start(), cut.end()), (3312, 3902));
/// ```
pub fn parse_interval(token: &str) -> SeqResult<TimeInterval> {
    let (start, end) = run_parser(
        token,
        separated_pair(timestamp, char('-'), timestamp),
        describe_interval,
    )?;
    if start >= end {
        return Err(SeqError::parse_at(
            token,
            0,
            "interval start must be before its end",
        ));
    }
    Ok(TimeInterval::from_ordered(start, end))
}

/// Parse a card token: a rank (`2`-`10`, `J`, `Q`, `K`, `A`) followed by a
/// single suit character.
pub fn parse_card(token: &str) -> SeqResult<Card> {
    run_parser(token, card, describe_card)
}

/// Parse a hand record whose cards are separated by `delimiter`.
///
/// Cards never contain whitespace, so each card is trimmed and a whitespace
/// delimiter collapses repeats. A bad card is reported with the card as the
/// token; an empty card slot or a record with no cards is reported with the
/// whole record as the token.
///
/// # Examples
///
/// ```rust
/// use compact_seq::parse_hand;
///
/// let hand = parse_hand("10♣ Q♥ 10♠ Q♠ 10♦", ' ').unwrap();
/// assert_eq!(hand.len(), 5);
///
/// let err = parse_hand("   ", ' ').unwrap_err();
/// assert_eq!(err.token(), Some("   "));
/// ```
pub fn parse_hand(record: &str, delimiter: char) -> SeqResult<Hand> {
    let mut cards = Vec::new();
    let mut offset = 0;

    for piece in record.split(delimiter) {
        let card = piece.trim();
        if !card.is_empty() {
            cards.push(parse_card(card)?);
        } else if !delimiter.is_whitespace() {
            return Err(SeqError::parse_at(record, offset, "empty card"));
        }
        offset += piece.len() + delimiter.len_utf8();
    }

    if cards.is_empty() {
        return Err(SeqError::parse_at(record, 0, "hand has no cards"));
    }
    Ok(Hand::new(cards))
}

fn run_parser<'a, O, F>(
    token: &'a str,
    parser: F,
    describe: fn(ErrorKind, &str) -> String,
) -> SeqResult<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    if token.is_empty() {
        return Err(SeqError::parse_at(token, 0, "empty token"));
    }

    match all_consuming(parser)(token) {
        Ok((_, out)) => Ok(out),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let offset = token.len() - e.input.len();
            Err(SeqError::parse_at(token, offset, describe(e.code, e.input)))
        }
        Err(nom::Err::Incomplete(_)) => Err(SeqError::parse_at(
            token,
            token.len(),
            "incomplete input",
        )),
    }
}

fn unexpected(rest: &str) -> String {
    match rest.chars().next() {
        Some(c) => format!("unexpected character '{}'", c),
        None => "unexpected end of input".to_string(),
    }
}

// ============================================================================
// Ranges
// ============================================================================

fn range_token(input: &str) -> IResult<&str, (u64, u64)> {
    let (input, start) = number(input)?;
    let (input, end) = opt(preceded(char('-'), cut(number)))(input)?;
    Ok((input, (start, end.unwrap_or(start))))
}

fn number(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |digits: &str| digits.parse::<u64>())(input)
}

fn describe_range(kind: ErrorKind, rest: &str) -> String {
    match kind {
        ErrorKind::Digit if rest.is_empty() => "expected digits".to_string(),
        ErrorKind::Digit => format!("expected digits, {}", unexpected(rest)),
        ErrorKind::MapRes => "number does not fit in 64 bits".to_string(),
        _ => unexpected(rest),
    }
}

// ============================================================================
// Run-length strings
// ============================================================================

fn run_length_group(input: &str) -> IResult<&str, RunLengthToken> {
    let (input, letter) = satisfy(|c| c.is_ascii_uppercase())(input)?;
    let (input, count) = cut(map_res(digit0, repeat_count))(input)?;
    Ok((input, RunLengthToken::new(letter, count)))
}

fn repeat_count(digits: &str) -> Result<usize, ParseIntError> {
    if digits.is_empty() {
        Ok(1)
    } else {
        digits.parse()
    }
}

fn describe_run_length(kind: ErrorKind, rest: &str) -> String {
    match (kind, rest.chars().next()) {
        (ErrorKind::MapRes, _) => "repeat count is too large".to_string(),
        (_, Some(c)) if c.is_ascii_digit() => "repeat count must follow a letter".to_string(),
        (_, Some(c)) => format!("expected an uppercase letter or digit, found '{}'", c),
        (_, None) => "unexpected end of input".to_string(),
    }
}

// ============================================================================
// Timestamps and intervals
// ============================================================================

fn timestamp(input: &str) -> IResult<&str, u64> {
    map_opt(
        tuple((
            number,
            preceded(char(':'), sexagesimal),
            preceded(char(':'), sexagesimal),
        )),
        |(hours, minutes, seconds)| hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds),
    )(input)
}

/// Two digits in `00..=59`.
fn sexagesimal(input: &str) -> IResult<&str, u64> {
    verify(
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            |digits: &str| digits.parse::<u64>(),
        ),
        |v: &u64| *v < 60,
    )(input)
}

fn describe_timestamp(kind: ErrorKind, rest: &str) -> String {
    match kind {
        ErrorKind::Digit => "expected hours".to_string(),
        ErrorKind::Char => format!("expected ':', {}", unexpected(rest)),
        ErrorKind::TakeWhileMN => "expected two digits".to_string(),
        ErrorKind::Verify => "minutes and seconds must be below 60".to_string(),
        ErrorKind::MapRes | ErrorKind::MapOpt => "timestamp out of range".to_string(),
        _ => unexpected(rest),
    }
}

fn describe_interval(kind: ErrorKind, rest: &str) -> String {
    match kind {
        ErrorKind::Char => format!("expected ':' or '-', {}", unexpected(rest)),
        _ => describe_timestamp(kind, rest),
    }
}

// ============================================================================
// Cards
// ============================================================================

fn card(input: &str) -> IResult<&str, Card> {
    let (input, rank) = rank(input)?;
    let (input, suit) = verify(anychar, |c: &char| {
        !c.is_whitespace() && !c.is_ascii_digit()
    })(input)?;
    Ok((input, Card::new(rank, suit)))
}

fn rank(input: &str) -> IResult<&str, Rank> {
    alt((
        // "10" must be tried before the single-character ranks
        value(Rank::Ten, tag("10")),
        map_opt(anychar, Rank::from_char),
    ))(input)
}

fn describe_card(kind: ErrorKind, rest: &str) -> String {
    match kind {
        ErrorKind::MapOpt => "invalid rank".to_string(),
        ErrorKind::Eof if rest.is_empty() => "missing suit".to_string(),
        ErrorKind::Verify => "invalid suit".to_string(),
        _ => unexpected(rest),
    }
}
