#![forbid(unsafe_code)]

//! The collapsed entry field.
//!
//! An [`EntryField`] is the tappable control an app embeds: it shows the
//! committed value (or a placeholder) and, when activated, opens an
//! [`EntryScreen`] seeded from that value. The screen owns the working
//! copy; the field's value changes only when the screen commits, exactly
//! once per entry.

use digitpad_core::bounds::Bounds;
use digitpad_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, PointerKind};
use digitpad_core::geometry::{Rect, Sides};
use digitpad_core::locale::Locale;
use digitpad_core::rotary::RotaryBinding;
use digitpad_core::session::{EntrySession, EntryValue, KeypadMode};
use digitpad_render::buffer::Buffer;
use digitpad_style::PadTheme;

use crate::display::{Alignment, ValueDisplay};
use crate::entry::{EntryScreen, ScreenAction};
use crate::{Widget, set_style_area};

/// Outcome of an event handled by the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The entry screen opened.
    Opened,

    /// The entry screen committed; the field value changed.
    Committed,

    /// The entry screen was dismissed without committing.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldValue {
    Text(String),
    Number(i64),
}

/// A tappable field that opens a keypad entry screen.
#[derive(Debug, Clone)]
pub struct EntryField {
    value: FieldValue,
    mode: KeypadMode,
    separator: char,
    bounds: Bounds,
    rotary: RotaryBinding,
    placeholder: String,
    alignment: Alignment,
    theme: PadTheme,
    armed: bool,
    screen: Option<EntryScreen>,
}

impl EntryField {
    fn with_value_kind(value: FieldValue, mode: KeypadMode) -> Self {
        Self {
            value,
            mode,
            separator: '.',
            bounds: Bounds::FULL,
            rotary: RotaryBinding::default(),
            placeholder: String::new(),
            alignment: Alignment::Center,
            theme: PadTheme::default(),
            armed: false,
            screen: None,
        }
    }

    /// Create a text field.
    #[must_use]
    pub fn text(mode: KeypadMode) -> Self {
        Self::with_value_kind(FieldValue::Text(String::new()), mode)
    }

    /// Create an integer field. Integer fields run the pad in
    /// [`KeypadMode::Numbers`].
    #[must_use]
    pub fn number() -> Self {
        Self::with_value_kind(FieldValue::Number(0), KeypadMode::Numbers)
    }

    /// Seed the text value (builder). Ignored on number fields.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        if let FieldValue::Text(value) = &mut self.value {
            *value = text.into();
        }
        self
    }

    /// Seed the numeric value (builder). Ignored on text fields.
    #[must_use]
    pub fn with_number(mut self, number: i64) -> Self {
        if let FieldValue::Number(value) = &mut self.value {
            *value = self.bounds.clamp(number);
        }
        self
    }

    /// Set the separator glyph (builder).
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Resolve the separator from a locale (builder).
    #[must_use]
    pub fn with_locale(self, locale: &Locale) -> Self {
        self.with_separator(locale.decimal_separator())
    }

    /// Set the bounds for number fields (builder); re-clamps the value.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        if let FieldValue::Number(value) = &mut self.value {
            *value = bounds.clamp(*value);
        }
        self
    }

    /// Set the rotary binding strategy for number fields (builder).
    #[must_use]
    pub fn with_rotary(mut self, rotary: RotaryBinding) -> Self {
        self.rotary = rotary;
        self
    }

    /// Set the placeholder (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the collapsed-value alignment (builder).
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the theme (builder).
    #[must_use]
    pub fn with_theme(mut self, theme: PadTheme) -> Self {
        self.theme = theme;
        self
    }

    /// The committed text value, for text fields.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(value) => Some(value),
            FieldValue::Number(_) => None,
        }
    }

    /// The committed numeric value, for number fields.
    #[must_use]
    pub const fn number_value(&self) -> Option<i64> {
        match &self.value {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    /// Whether the entry screen is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.screen.is_some()
    }

    /// Open the entry screen, seeding a session from the current value.
    pub fn open(&mut self) {
        if self.screen.is_some() {
            return;
        }
        let session = match &self.value {
            FieldValue::Text(value) => EntrySession::text(self.mode, self.separator)
                .with_seed(value.clone()),
            FieldValue::Number(value) => EntrySession::number(self.bounds)
                .with_value(*value)
                .with_rotary(self.rotary),
        };
        self.armed = false;
        self.screen = Some(
            EntryScreen::new(session)
                .with_placeholder(self.placeholder.clone())
                .with_alignment(Alignment::Trailing)
                .with_theme(self.theme),
        );
    }

    fn write_back(&mut self, committed: EntryValue) {
        match (&mut self.value, committed) {
            (FieldValue::Text(value), EntryValue::Text(text)) => *value = text,
            (FieldValue::Number(value), EntryValue::Number(number)) => *value = number,
            _ => {}
        }
    }

    /// Handle an event.
    ///
    /// Collapsed: Enter, or a pointer tap completed inside `area`, opens
    /// the screen. Open: everything is forwarded to the screen, which
    /// occupies the whole area as a modal.
    pub fn handle_event(&mut self, area: Rect, event: &Event) -> Option<FieldEvent> {
        if let Some(screen) = &mut self.screen {
            return match screen.handle_event(area, event)? {
                ScreenAction::Committed(value) => {
                    self.screen = None;
                    self.write_back(value);
                    Some(FieldEvent::Committed)
                }
                ScreenAction::Cancelled => {
                    self.screen = None;
                    Some(FieldEvent::Cancelled)
                }
            };
        }

        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.open();
                Some(FieldEvent::Opened)
            }
            Event::Pointer(pointer) => match pointer.kind {
                PointerKind::Down => {
                    self.armed = area.contains(pointer.x, pointer.y);
                    None
                }
                PointerKind::Up => {
                    if self.armed && area.contains(pointer.x, pointer.y) {
                        self.open();
                        Some(FieldEvent::Opened)
                    } else {
                        self.armed = false;
                        None
                    }
                }
            },
            _ => None,
        }
    }

    fn collapsed_text(&self) -> String {
        match &self.value {
            FieldValue::Text(value) => value.clone(),
            FieldValue::Number(value) => value.to_string(),
        }
    }
}

impl Widget for EntryField {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if let Some(screen) = &self.screen {
            screen.render(area, buf);
            return;
        }

        let style = if self.armed {
            self.theme.field_pressed
        } else {
            self.theme.field
        };
        set_style_area(buf, area, style);

        let text = self.collapsed_text();
        let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1)
            .inner(Sides::horizontal(1));
        ValueDisplay::new(&text)
            .with_placeholder(&self.placeholder)
            .with_alignment(self.alignment)
            .with_style(style)
            .with_placeholder_style(self.theme.placeholder)
            .render(line, buf);
    }
}
