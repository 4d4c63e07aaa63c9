#![forbid(unsafe_code)]

//! Keypad entry widgets.
//!
//! The widget family mirrors how a small-screen entry control is
//! composed: an [`EntryField`] shows the current value and opens an
//! [`EntryScreen`] when activated; the screen pairs a [`ValueDisplay`]
//! readout with a [`Keypad`] grid and owns the entry session until the
//! user commits or cancels.

pub mod display;
pub mod entry;
pub mod field;
pub mod keypad;

pub use display::{Alignment, ValueDisplay};
pub use entry::{EntryScreen, ScreenAction};
pub use field::{EntryField, FieldEvent};
pub use keypad::{KeyFlash, Keypad};

use digitpad_core::geometry::Rect;
use digitpad_render::buffer::Buffer;
use digitpad_render::cell::Cell;
use digitpad_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A renderable component.
///
/// Widgets draw themselves into a [`Buffer`] within a given [`Rect`] and
/// hold no reference to any display; presentation is the backend's job.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Apply a style patch to a cell; unset fields leave the cell untouched.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs |= attrs;
    }
}

/// Apply a style to every cell in an area, preserving content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span at `(x, y)`, stopping at `max_x` (exclusive).
///
/// Returns the column after the last drawn character. Wide graphemes that
/// would straddle `max_x` are not drawn.
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            buf.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}
