//! Greedy word-packing text wrapper.
//!
//! Lines never exceed the character limit, with one exception: a single word
//! longer than the limit is emitted verbatim on its own line rather than
//! split. Rejoining the lines with single spaces reproduces the original
//! word sequence.

use std::str::SplitWhitespace;

/// Lazy, finite iterator over wrapped lines.
///
/// The iterator is `Clone`, so a wrap can be restarted (or resumed from any
/// point) without re-allocating the source text.
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    words: SplitWhitespace<'a>,
    /// Word that did not fit on the previously emitted line.
    carry: Option<&'a str>,
    max_len: usize,
}

impl<'a> WrappedLines<'a> {
    pub fn new(text: &'a str, max_len: usize) -> Self {
        Self {
            words: text.split_whitespace(),
            carry: None,
            max_len,
        }
    }
}

impl<'a> Iterator for WrappedLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.carry.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);

        for word in self.words.by_ref() {
            if line.len() + 1 + word.len() > self.max_len {
                self.carry = Some(word);
                return Some(line);
            }
            line.push(' ');
            line.push_str(word);
        }

        Some(line)
    }
}

/// Collects the wrapped lines of one paragraph.
pub fn wrap_paragraph(text: &str, max_len: usize) -> Vec<String> {
    WrappedLines::new(text, max_len).collect()
}
