#![forbid(unsafe_code)]

//! Text digit buffer.
//!
//! The editable value behind a text-mode entry session: a run of digits
//! with at most one decimal separator. Every operation is total; an input
//! that would violate an invariant leaves the buffer unchanged and
//! reports `false`.

use unicode_segmentation::UnicodeSegmentation;

/// A text buffer holding digits and at most one decimal separator.
///
/// Invariants:
/// - the configured separator occurs at most once;
/// - the separator is never the first character — pressing it on an empty
///   buffer inserts a leading `0` first, so the display never shows a bare
///   separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    text: String,
    separator: char,
}

impl DigitBuffer {
    /// Create an empty buffer using the given separator glyph.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self {
            text: String::new(),
            separator,
        }
    }

    /// Seed the buffer text (builder). Used when an entry session opens
    /// over an existing value.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The buffer contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The configured separator glyph.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the buffer already contains the separator.
    #[must_use]
    pub fn has_separator(&self) -> bool {
        self.text.contains(self.separator)
    }

    /// Append a digit. Returns `false` (no-op) for non-digit input.
    ///
    /// The engine imposes no length limit; bounds only exist in numeric
    /// mode.
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        self.text.push(digit);
        true
    }

    /// Append the separator.
    ///
    /// Idempotent: a buffer that already contains the separator is left
    /// unchanged. On an empty buffer, inserts `0` before the separator.
    pub fn push_separator(&mut self) -> bool {
        if self.has_separator() {
            return false;
        }
        if self.text.is_empty() {
            self.text.push('0');
        }
        self.text.push(self.separator);
        true
    }

    /// Remove the last grapheme cluster. No-op on an empty buffer.
    pub fn backspace(&mut self) -> bool {
        match self.text.grapheme_indices(true).last() {
            Some((idx, _)) => {
                self.text.truncate(idx);
                true
            }
            None => false,
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new('.')
    }
}
