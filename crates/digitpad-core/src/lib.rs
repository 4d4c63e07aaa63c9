#![forbid(unsafe_code)]

//! Core types for digitpad: input events, geometry, locale handling, and
//! the digit-entry engine.
//!
//! The engine is deliberately free of any rendering concern. A session is
//! seeded from a caller-owned value, mutated only through input events, and
//! committed back exactly once when entry finishes. Every engine operation
//! is total: invalid transitions (a digit that would leave bounds, a
//! backspace on an empty buffer, a duplicate separator) are silent no-ops,
//! never errors.

pub mod bounds;
pub mod digits;
pub mod event;
pub mod geometry;
pub mod locale;
pub mod number;
pub mod rotary;
pub mod session;

pub use bounds::Bounds;
pub use digits::DigitBuffer;
pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerKind, RotaryEvent,
};
pub use geometry::{Rect, Sides};
pub use locale::Locale;
pub use number::NumberBuffer;
pub use rotary::{RotaryAccumulator, RotaryBinding};
pub use session::{EntrySession, EntryValue, KeypadMode, PadKey};
