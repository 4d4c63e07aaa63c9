#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Every event digitpad widgets consume is expressed here, so a backend
//! only has to translate its native input once. All events derive `Clone`
//! and `PartialEq` for use in tests and pattern matching.
//!
//! Coordinates are 0-indexed cell positions. Rotary events come in two
//! flavors matching the two dial-binding strategies: relative motion
//! deltas and absolute positions (see [`crate::rotary`]).

use bitflags::bitflags;
use std::time::Duration;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (touch/mouse) event.
    Pointer(PointerEvent),

    /// A rotary dial event.
    Rotary(RotaryEvent),

    /// The display was resized.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in cells.
        height: u16,
    },

    /// A periodic tick carrying the time elapsed since the previous tick.
    ///
    /// Drives time-based visual state (the pressed-key flash). Widgets
    /// never read a clock themselves.
    Tick(Duration),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a key event with no modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifiers (builder).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the kind (builder).
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a press (or key-repeat) of `c`.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }
}

/// Key codes.
///
/// Trimmed to the vocabulary a keypad control uses: characters (digits and
/// the separator glyph arrive as `Char`), editing, confirmation, and the
/// Up/Down pair that stands in for a single-detent dial step on hardware
/// without a dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key.
    Char(char),

    /// Backspace.
    Backspace,

    /// Enter / confirm.
    Enter,

    /// Escape / dismiss.
    Escape,

    /// Up arrow.
    Up,

    /// Down arrow.
    Down,
}

/// The kind of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when the source cannot distinguish).
    #[default]
    Press,

    /// Key is being held.
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event: a tap or release at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Down or up.
    pub kind: PointerKind,

    /// Column (0-indexed).
    pub x: u16,

    /// Row (0-indexed).
    pub y: u16,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// Convenience constructor for a pointer-down event.
    #[must_use]
    pub const fn down(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    /// Convenience constructor for a pointer-up event.
    #[must_use]
    pub const fn up(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Up, x, y)
    }
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Contact began.
    Down,

    /// Contact ended.
    Up,
}

/// A rotary dial event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotaryEvent {
    /// Relative motion since the last event, in fractional detents.
    ///
    /// Positive is clockwise. A single gesture tick may report any
    /// fraction; the accumulator decides when a full step commits.
    Delta(f64),

    /// Absolute dial position.
    ///
    /// Producers should pre-clamp the control range (see
    /// [`crate::rotary::MAX_DIAL_POSITION`]); the session clamps the
    /// resolved value into bounds regardless.
    Position(f64),
}
