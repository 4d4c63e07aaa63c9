#![forbid(unsafe_code)]

//! Single-line value readout.

use digitpad_core::geometry::Rect;
use digitpad_render::buffer::Buffer;
use digitpad_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{Widget, draw_text_span};

/// Horizontal alignment of the readout within its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Flush left.
    Leading,
    /// Centered.
    Center,
    /// Flush right (the usual convention for numeric entry).
    #[default]
    Trailing,
}

/// A one-line value display with a placeholder.
///
/// When the value overflows the area, the leading characters are dropped
/// so the most recently typed digits stay visible.
#[derive(Debug, Clone, Default)]
pub struct ValueDisplay<'a> {
    text: &'a str,
    placeholder: &'a str,
    alignment: Alignment,
    style: Style,
    placeholder_style: Style,
}

impl<'a> ValueDisplay<'a> {
    /// Create a display for the given value text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// Set the placeholder shown when the value is empty (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the alignment (builder).
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the value style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder style (builder).
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// The visible tail of `content` and its display width, given the
    /// available columns.
    fn visible_tail(content: &str, available: usize) -> (&str, usize) {
        let total: usize = content
            .graphemes(true)
            .map(UnicodeWidthStr::width)
            .sum();
        if total <= available {
            return (content, total);
        }
        let mut width = total;
        for (idx, g) in content.grapheme_indices(true) {
            if width <= available {
                return (&content[idx..], width);
            }
            width -= UnicodeWidthStr::width(g);
        }
        ("", 0)
    }
}

impl Widget for ValueDisplay<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (content, style) = if self.text.is_empty() {
            (self.placeholder, self.placeholder_style)
        } else {
            (self.text, self.style)
        };

        let (visible, width) = Self::visible_tail(content, area.width as usize);
        let slack = area.width as usize - width;
        let x = match self.alignment {
            Alignment::Leading => area.x,
            Alignment::Center => area.x + (slack / 2) as u16,
            Alignment::Trailing => area.x + slack as u16,
        };
        draw_text_span(buf, x, area.y, visible, style, area.right());
    }
}
