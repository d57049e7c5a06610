//! Line splitting for source text.
//!
//! Lines break on `\n`; a `\r` immediately before the break is dropped, so CRLF files scan the same as LF files. A
//! trailing newline does not produce an extra empty line, and empty input produces no lines at all.

/// One line of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Raw line text without its line terminator
    pub text: &'a str,
    /// Byte offset of the first character of the line in the source
    pub offset: usize,
}

impl<'a> SourceLine<'a> {
    /// The line with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Iterator over the numbered lines of a source string.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    source: &'a str,
    pos: usize,
    number: usize,
}

impl<'a> SourceLines<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            number: 0,
        }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.source.len() {
            return None;
        }

        let rest = &self.source[self.pos..];
        let (line, consumed) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        let text = line.strip_suffix('\r').unwrap_or(line);

        let offset = self.pos;
        self.pos += consumed;
        self.number += 1;

        Some(SourceLine {
            number: self.number,
            text,
            offset,
        })
    }
}

/// Find a line by its 1-based number.
pub fn line_at(source: &str, number: usize) -> Option<SourceLine<'_>> {
    if number == 0 {
        return None;
    }
    SourceLines::new(source).nth(number - 1)
}
