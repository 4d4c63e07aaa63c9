#![forbid(unsafe_code)]

//! Entry sessions.
//!
//! An [`EntrySession`] owns the working copy of a value for the duration
//! of one entry: it is seeded when the entry surface opens, mutated only
//! through input events, and consumed by [`EntrySession::commit`] so the
//! final value can be written back to the caller exactly once. Dropping a
//! session without committing discards the edit.

use crate::bounds::Bounds;
use crate::digits::DigitBuffer;
use crate::event::{Event, KeyCode, KeyEventKind, RotaryEvent};
use crate::locale::Locale;
use crate::number::NumberBuffer;
use crate::rotary::{RotaryAccumulator, RotaryBinding, detent};

/// Which keys the pad offers.
///
/// Fixed for the life of a session; it only gates whether a separator key
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeypadMode {
    /// Digits and backspace only.
    #[default]
    Numbers,

    /// Digits, one decimal separator, and backspace.
    Decimal,
}

impl KeypadMode {
    /// Whether the pad shows a separator key.
    #[must_use]
    pub const fn has_separator(&self) -> bool {
        matches!(self, Self::Decimal)
    }
}

/// A logical keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadKey {
    /// A digit key, 0–9.
    Digit(u8),

    /// The decimal separator key.
    Separator,

    /// The backspace key.
    Backspace,
}

/// The value a session edits and ultimately yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    /// A text buffer of digits and at most one separator.
    Text(String),

    /// A bounded integer.
    Number(i64),
}

impl EntryValue {
    /// The text value, if this is a text entry.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The numeric value, if this is a numeric entry.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Repr {
    Text(DigitBuffer),
    Number {
        buffer: NumberBuffer,
        binding: RotaryBinding,
        accumulator: RotaryAccumulator,
    },
}

/// One entry session over a text or numeric working value.
#[derive(Debug, Clone)]
pub struct EntrySession {
    repr: Repr,
    mode: KeypadMode,
}

impl EntrySession {
    /// Create a text session with an explicit separator glyph.
    #[must_use]
    pub fn text(mode: KeypadMode, separator: char) -> Self {
        Self {
            repr: Repr::Text(DigitBuffer::new(separator)),
            mode,
        }
    }

    /// Create a text session with the separator resolved from a locale.
    #[must_use]
    pub fn text_for_locale(mode: KeypadMode, locale: &Locale) -> Self {
        Self::text(mode, locale.decimal_separator())
    }

    /// Create a numeric session. Numeric sessions always run the pad in
    /// [`KeypadMode::Numbers`].
    #[must_use]
    pub fn number(bounds: Bounds) -> Self {
        Self {
            repr: Repr::Number {
                buffer: NumberBuffer::new(bounds),
                binding: RotaryBinding::default(),
                accumulator: RotaryAccumulator::new(),
            },
            mode: KeypadMode::Numbers,
        }
    }

    /// Seed a text session's buffer (builder). Ignored on numeric
    /// sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        if let Repr::Text(buffer) = &mut self.repr {
            *buffer = buffer.clone().with_text(seed);
        }
        self
    }

    /// Seed a numeric session's value (builder), clamped into bounds.
    /// Ignored on text sessions.
    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        if let Repr::Number { buffer, .. } = &mut self.repr {
            *buffer = buffer.with_value(value);
        }
        self
    }

    /// Select the rotary binding strategy (builder). Ignored on text
    /// sessions.
    #[must_use]
    pub fn with_rotary(mut self, binding: RotaryBinding) -> Self {
        if let Repr::Number {
            binding: current, ..
        } = &mut self.repr
        {
            *current = binding;
        }
        self
    }

    /// The session's keypad mode.
    #[must_use]
    pub const fn mode(&self) -> KeypadMode {
        self.mode
    }

    /// The separator glyph, for text sessions.
    #[must_use]
    pub fn separator(&self) -> Option<char> {
        match &self.repr {
            Repr::Text(buffer) => Some(buffer.separator()),
            Repr::Number { .. } => None,
        }
    }

    /// Whether this session edits a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.repr, Repr::Number { .. })
    }

    /// Fractional rotary motion waiting on the next detent, for numeric
    /// sessions with the accumulated binding.
    #[must_use]
    pub fn pending_rotation(&self) -> f64 {
        match &self.repr {
            Repr::Number { accumulator, .. } => accumulator.pending(),
            Repr::Text(_) => 0.0,
        }
    }

    /// The working value rendered for display.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.repr {
            Repr::Text(buffer) => buffer.as_str().to_owned(),
            Repr::Number { buffer, .. } => buffer.value().to_string(),
        }
    }

    /// A snapshot of the working value.
    #[must_use]
    pub fn value(&self) -> EntryValue {
        match &self.repr {
            Repr::Text(buffer) => EntryValue::Text(buffer.as_str().to_owned()),
            Repr::Number { buffer, .. } => EntryValue::Number(buffer.value()),
        }
    }

    /// Close the session, yielding the final value.
    ///
    /// Consumes the session: the value can be written back at most once.
    #[must_use]
    pub fn commit(self) -> EntryValue {
        self.value()
    }

    /// Apply a logical keypad key. Returns `true` if the value changed.
    pub fn apply_key(&mut self, key: PadKey) -> bool {
        match &mut self.repr {
            Repr::Text(buffer) => match key {
                PadKey::Digit(d) => match char::from_digit(u32::from(d), 10) {
                    Some(c) => buffer.push_digit(c),
                    None => false,
                },
                PadKey::Separator => self.mode.has_separator() && buffer.push_separator(),
                PadKey::Backspace => buffer.backspace(),
            },
            Repr::Number { buffer, .. } => match key {
                PadKey::Digit(d) => match char::from_digit(u32::from(d), 10) {
                    Some(c) => buffer.push_digit(c),
                    None => false,
                },
                PadKey::Separator => false,
                PadKey::Backspace => buffer.backspace(),
            },
        }
    }

    /// Apply a rotary event. Returns `true` if the value changed.
    ///
    /// Events of the flavor the session's binding was not configured for
    /// are ignored; text sessions ignore rotary input entirely. A
    /// committed step that would leave bounds is rejected, but the
    /// accumulator has already reset by then, so one gesture tick never
    /// stacks up further motion.
    pub fn rotate(&mut self, event: RotaryEvent) -> bool {
        let Repr::Number {
            buffer,
            binding,
            accumulator,
        } = &mut self.repr
        else {
            return false;
        };
        match (*binding, event) {
            (RotaryBinding::Accumulated, RotaryEvent::Delta(delta)) => {
                match accumulator.feed(delta) {
                    Some(step) => buffer.step(step),
                    None => false,
                }
            }
            (RotaryBinding::Absolute, RotaryEvent::Position(position)) => {
                buffer.set_clamped(detent(position))
            }
            _ => false,
        }
    }

    /// Route a canonical event into the session.
    ///
    /// Digit characters, the separator glyph, and backspace feed the
    /// buffer; Up/Down act as single-detent dial steps (the stepper path
    /// on hardware without a dial); rotary events go to [`Self::rotate`].
    /// Returns `true` if the value changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.apply_key(PadKey::Digit(c as u8 - b'0'))
                }
                KeyCode::Char(c) if self.separator() == Some(c) => {
                    self.apply_key(PadKey::Separator)
                }
                KeyCode::Backspace => self.apply_key(PadKey::Backspace),
                KeyCode::Up => self.rotate(RotaryEvent::Delta(1.0)),
                KeyCode::Down => self.rotate(RotaryEvent::Delta(-1.0)),
                _ => false,
            },
            Event::Rotary(rotary) => self.rotate(*rotary),
            _ => false,
        }
    }
}
