//! Whitespace replacement in linear time
//!
//! Each character is visited once; the string length is never recomputed
//! inside the loop.

use std::io::{BufRead, Write};

/// Replace every whitespace character with `-`
pub fn replace_spaces(text: &mut String) {
    if !text.chars().any(char::is_whitespace) {
        return;
    }

    *text = text
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
}

/// Copy `input` to `output` line by line, replacing whitespace in each line
///
/// Line terminators are preserved as `\n`. Returns the number of lines
/// written.
pub fn replace_spaces_in_stream<R: BufRead, W: Write>(input: R, mut output: W) -> std::io::Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let mut line = line?;
        replace_spaces(&mut line);
        writeln!(output, "{}", line)?;
        count += 1;
    }
    output.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_spaces() {
        let mut text = String::from("a b\tc  d");
        replace_spaces(&mut text);
        assert_eq!(text, "a-b-c--d");
    }

    #[test]
    fn test_without_whitespace() {
        let mut text = String::from("abc");
        replace_spaces(&mut text);
        assert_eq!(text, "abc");

        let mut empty = String::new();
        replace_spaces(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unicode_whitespace() {
        let mut text = String::from("é\u{00A0}ü");
        replace_spaces(&mut text);
        assert_eq!(text, "é-ü");
    }

    #[test]
    fn test_stream() {
        let input = std::io::Cursor::new("one two\r\nthree\n\nfour five six");
        let mut output = Vec::new();
        let lines = replace_spaces_in_stream(input, &mut output).unwrap();

        assert_eq!(lines, 4);
        assert_eq!(String::from_utf8(output).unwrap(), "one-two\nthree\n\nfour-five-six\n");
    }
}
