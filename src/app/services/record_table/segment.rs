//! Non-owning cursor over a slice of text
//!
//! A [`Segment`] never touches the buffer it points into. Every mutating
//! method only narrows or repositions the view, which makes it cheap to hand
//! out one segment per line (or per comma-separated chunk) while parsing.

/// Borrowed view over a run of characters inside a larger buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segment<'a> {
    text: &'a str,
}

impl<'a> Segment<'a> {
    /// Create a segment covering the whole of `text`
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Borrow the current contents of the view
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the view in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the contents of `dest` with the characters in the view
    pub fn copy_to(&self, dest: &mut String) {
        dest.clear();
        dest.push_str(self.text);
    }

    /// Number of occurrences of `c` in the view
    pub fn count_chars(&self, c: char) -> usize {
        self.text.chars().filter(|&ch| ch == c).count()
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Remove and return the first character, `None` when the view is empty
    pub fn read_left(&mut self) -> Option<char> {
        let c = self.first_char()?;
        self.text = &self.text[c.len_utf8()..];
        Some(c)
    }

    /// Remove and return the last character, `None` when the view is empty
    pub fn read_right(&mut self) -> Option<char> {
        let c = self.last_char()?;
        self.text = &self.text[..self.text.len() - c.len_utf8()];
        Some(c)
    }

    /// Drop up to `count` characters from the left; clamps at the view length
    pub fn remove_prefix(&mut self, count: usize) {
        let cut = self
            .text
            .char_indices()
            .nth(count)
            .map_or(self.text.len(), |(i, _)| i);
        self.text = &self.text[cut..];
    }

    /// Drop up to `count` characters from the right; clamps at the view length
    pub fn remove_suffix(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let cut = self
            .text
            .char_indices()
            .rev()
            .nth(count - 1)
            .map_or(0, |(i, _)| i);
        self.text = &self.text[..cut];
    }

    pub fn trim(&mut self) {
        self.trim_left();
        self.trim_right();
    }

    /// Strip whitespace (carriage returns included) from the left end
    pub fn trim_left(&mut self) {
        self.text = self.text.trim_start_matches(is_blank);
    }

    /// Strip whitespace (carriage returns included) from the right end
    pub fn trim_right(&mut self) {
        self.text = self.text.trim_end_matches(is_blank);
    }

    /// Exact-length comparison against `pattern`
    ///
    /// Case folding is ASCII-only, matching how keys and boolean tokens are
    /// written in problem-set documents.
    pub fn matches(&self, pattern: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.text == pattern
        } else {
            self.text.eq_ignore_ascii_case(pattern)
        }
    }

    /// Split off everything before the first `delimiter`
    ///
    /// Returns the prefix and whether the delimiter was found. When it is
    /// found, `self` moves past it; otherwise the whole remaining view becomes
    /// the prefix and `self` is left empty.
    pub fn split(&mut self, delimiter: char) -> (Segment<'a>, bool) {
        match self.text.find(delimiter) {
            Some(pos) => {
                let prefix = Segment::new(&self.text[..pos]);
                self.text = &self.text[pos + delimiter.len_utf8()..];
                (prefix, true)
            }
            None => {
                let prefix = *self;
                self.text = &self.text[self.text.len()..];
                (prefix, false)
            }
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(text: &'a str) -> Self {
        Segment::new(text)
    }
}

impl std::fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\r'
}
