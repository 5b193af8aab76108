//! Primitive value codec for problem-set documents
//!
//! Each supported field type knows how to read itself from a [`Segment`] and
//! how to write itself back as text. Parsing never panics; a malformed value
//! is reported as a [`CodecError`] and the caller decides whether that is
//! fatal.
//!
//! Supported grammar:
//! - integers: optional `-`, then decimal digits (`+5` is rejected)
//! - booleans: `true`/`yes`/`false`/`no`, case-insensitive; written as `yes`/`no`
//! - strings: `"..."` with no escape processing
//! - integer lists: `[1,2,3]`, `[]` when empty
//!
//! Strings and lists have no escape mechanism, so a string containing `"`
//! or a list element containing `,` does not survive a write/read cycle.

use super::segment::Segment;
use thiserror::Error;

const POS_OVERFLOW_GUARD: i32 = i32::MAX / 10;
const POS_LAST_DIGIT_GUARD: i32 = i32::MAX % 10;
const NEG_OVERFLOW_GUARD: i32 = i32::MIN / 10;
const NEG_LAST_DIGIT_GUARD: i32 = i32::MIN % 10;

/// Reasons a value could not be interpreted for its declared type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("value is empty")]
    Empty,

    #[error("unexpected character '{0}' in integer")]
    InvalidDigit(char),

    #[error("integer is out of range")]
    Overflow,

    #[error("expected one of yes/no/true/false")]
    InvalidBoolean,

    #[error("string must be enclosed in double quotes")]
    MissingQuotes,

    #[error("list must be enclosed in square brackets")]
    MissingBrackets,

    #[error("list element {index} is invalid: {reason}")]
    InvalidListElement { index: usize, reason: Box<CodecError> },
}

/// A field type that can be read from and written to document text
pub trait FieldCodec: Sized {
    /// Parse a value from a segment (surrounding whitespace is ignored)
    fn parse(segment: Segment<'_>) -> Result<Self, CodecError>;

    /// Append the textual form of the value to `out`
    fn encode(&self, out: &mut String);

    /// Default used when a column is registered without an explicit one
    fn column_default() -> Self;

    /// Convenience wrapper around [`FieldCodec::encode`]
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.encode(&mut out);
        out
    }
}

impl FieldCodec for i32 {
    fn parse(mut segment: Segment<'_>) -> Result<Self, CodecError> {
        segment.trim();
        if segment.is_empty() {
            return Err(CodecError::Empty);
        }

        let negative = segment.first_char() == Some('-');
        if negative {
            segment.remove_prefix(1);
            if segment.is_empty() {
                return Err(CodecError::Empty);
            }
        }

        // Negative values accumulate downwards so that i32::MIN is reachable.
        let mut result: i32 = 0;
        while let Some(c) = segment.read_left() {
            let digit = c.to_digit(10).ok_or(CodecError::InvalidDigit(c))? as i32;
            let digit = if negative { -digit } else { digit };

            if result > POS_OVERFLOW_GUARD
                || result < NEG_OVERFLOW_GUARD
                || (result == POS_OVERFLOW_GUARD && digit > POS_LAST_DIGIT_GUARD)
                || (result == NEG_OVERFLOW_GUARD && digit < NEG_LAST_DIGIT_GUARD)
            {
                return Err(CodecError::Overflow);
            }
            result = result * 10 + digit;
        }

        Ok(result)
    }

    fn encode(&self, out: &mut String) {
        write_int(*self, out);
    }

    fn column_default() -> Self {
        crate::constants::DEFAULT_INT_VALUE
    }
}

impl FieldCodec for bool {
    fn parse(mut segment: Segment<'_>) -> Result<Self, CodecError> {
        segment.trim();
        if segment.matches("true", false) || segment.matches("yes", false) {
            Ok(true)
        } else if segment.matches("false", false) || segment.matches("no", false) {
            Ok(false)
        } else {
            Err(CodecError::InvalidBoolean)
        }
    }

    fn encode(&self, out: &mut String) {
        out.push_str(if *self { "yes" } else { "no" });
    }

    fn column_default() -> Self {
        false
    }
}

impl FieldCodec for String {
    fn parse(mut segment: Segment<'_>) -> Result<Self, CodecError> {
        segment.trim();
        if segment.len() < 2 || segment.first_char() != Some('"') || segment.last_char() != Some('"')
        {
            return Err(CodecError::MissingQuotes);
        }
        segment.remove_prefix(1);
        segment.remove_suffix(1);
        Ok(segment.as_str().to_string())
    }

    fn encode(&self, out: &mut String) {
        out.reserve(self.len() + 2);
        out.push('"');
        out.push_str(self);
        out.push('"');
    }

    fn column_default() -> Self {
        String::new()
    }
}

impl FieldCodec for Vec<i32> {
    fn parse(mut segment: Segment<'_>) -> Result<Self, CodecError> {
        segment.trim();
        if segment.is_empty() {
            return Err(CodecError::Empty);
        }
        if segment.read_left() != Some('[') || segment.read_right() != Some(']') {
            return Err(CodecError::MissingBrackets);
        }

        segment.trim();
        if segment.is_empty() {
            return Ok(Vec::new());
        }

        let mut values = Vec::with_capacity(segment.count_chars(',') + 1);
        loop {
            let (element, more) = segment.split(',');
            let value = i32::parse(element).map_err(|reason| CodecError::InvalidListElement {
                index: values.len(),
                reason: Box::new(reason),
            })?;
            values.push(value);
            if !more {
                break;
            }
        }

        Ok(values)
    }

    fn encode(&self, out: &mut String) {
        // '[' + ']' + digits + separators
        let total = 2 + self.iter().map(|&v| int_len(v)).sum::<usize>() + self.len().saturating_sub(1);
        out.reserve(total);

        out.push('[');
        for (i, &v) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_int(v, out);
        }
        out.push(']');
    }

    fn column_default() -> Self {
        Vec::new()
    }
}

/// Number of characters needed to print `value`, sign included
pub fn int_len(mut value: i32) -> usize {
    if value == 0 {
        return 1;
    }
    let mut len = usize::from(value < 0);
    while value != 0 {
        value /= 10;
        len += 1;
    }
    len
}

/// Append the decimal form of `value` to `out`
///
/// The digit count is computed up front so the text is produced in one
/// pre-sized pass, right to left. Digits are taken from the signed remainder,
/// which keeps `i32::MIN` from overflowing.
pub fn write_int(value: i32, out: &mut String) {
    let len = int_len(value);
    let mut buf = [b'0'; 11];

    if value < 0 {
        buf[0] = b'-';
    }

    let mut rest = value;
    let mut pos = len;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (rest % 10).unsigned_abs() as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    // The buffer only ever holds ASCII digits and an optional sign.
    out.reserve(len);
    out.extend(buf[..len].iter().map(|&b| b as char));
}
