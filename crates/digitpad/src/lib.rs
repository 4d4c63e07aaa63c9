#![forbid(unsafe_code)]

//! digitpad public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude. Apps embedding the keypad normally depend on this
//! crate alone.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use digitpad_core::bounds::Bounds;
pub use digitpad_core::digits::DigitBuffer;
pub use digitpad_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerKind, RotaryEvent,
};
pub use digitpad_core::geometry::{Rect, Sides};
pub use digitpad_core::locale::Locale;
pub use digitpad_core::number::NumberBuffer;
pub use digitpad_core::rotary::{MAX_DIAL_POSITION, RotaryAccumulator, RotaryBinding, detent};
pub use digitpad_core::session::{EntrySession, EntryValue, KeypadMode, PadKey};

// --- Render re-exports -----------------------------------------------------

pub use digitpad_render::buffer::Buffer;
pub use digitpad_render::cell::{Cell, PackedRgba, StyleFlags};

// --- Style re-exports ------------------------------------------------------

pub use digitpad_style::{PadTheme, Style};

// --- Widget re-exports -----------------------------------------------------

pub use digitpad_widgets::{
    Alignment, EntryField, EntryScreen, FieldEvent, KeyFlash, Keypad, ScreenAction, ValueDisplay,
    Widget,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for apps embedding digitpad.
///
/// The widgets themselves never fail; this covers the I/O surface of a
/// presenting backend.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while presenting.
    Io(std::io::Error),
    /// Backend error with message.
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for digitpad apps.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bounds, Buffer, EntryField, EntryScreen, EntrySession, EntryValue, Error, Event, KeyCode,
        KeyEvent, KeypadMode, Locale, PadTheme, Rect, Result, RotaryBinding, RotaryEvent, Style,
        Widget,
    };

    pub use crate::{core, render, style, widgets};
}

pub use digitpad_core as core;
pub use digitpad_render as render;
pub use digitpad_style as style;
pub use digitpad_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_and_source() {
        let err = Error::from(std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "boom");
        let err = Error::Backend("no display".into());
        assert_eq!(err.to_string(), "no display");
    }

    #[test]
    fn prelude_types_compose() {
        use crate::prelude::*;

        let mut field = EntryField::text(KeypadMode::Decimal).with_locale(&Locale::new("fr"));
        field.open();
        let area = Rect::from_size(11, 13);
        let _ = field.handle_event(area, &Event::Key(KeyEvent::new(KeyCode::Char('3'))));
        let _ = field.handle_event(area, &Event::Key(KeyEvent::new(KeyCode::Char(','))));
        let _ = field.handle_event(area, &Event::Key(KeyEvent::new(KeyCode::Enter)));
        assert_eq!(field.text_value(), Some("3,"));

        let mut buf = Buffer::new(11, 13);
        field.render(area, &mut buf);
    }
}
