#![forbid(unsafe_code)]

//! The modal entry screen: value readout over a keypad.

use std::time::Duration;

use digitpad_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, PointerKind};
use digitpad_core::geometry::{Rect, Sides};
use digitpad_core::session::{EntrySession, EntryValue, PadKey};
use digitpad_render::buffer::Buffer;
use digitpad_style::PadTheme;

use crate::display::{Alignment, ValueDisplay};
use crate::keypad::{KeyFlash, Keypad};
use crate::{Widget, set_style_area};

/// Outcome of an event handled by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// The user confirmed; the session's final value.
    Committed(EntryValue),

    /// The user dismissed without committing.
    Cancelled,
}

/// A modal entry surface owning one [`EntrySession`].
///
/// The readout takes a narrow band at the top of the area (about a sixth
/// of its height), the keypad the rest. Enter commits,
/// Escape cancels; pointer taps are hit-tested against the keypad; rotary
/// and Up/Down events reach numeric sessions. After the session ends the
/// screen goes inert and reports nothing further.
#[derive(Debug, Clone)]
pub struct EntryScreen {
    session: Option<EntrySession>,
    keypad: Keypad,
    flash: KeyFlash,
    placeholder: String,
    alignment: Alignment,
    theme: PadTheme,
}

impl EntryScreen {
    /// Create a screen over a session.
    #[must_use]
    pub fn new(session: EntrySession) -> Self {
        let keypad = Keypad::new(session.mode())
            .with_separator(session.separator().unwrap_or('.'));
        Self {
            session: Some(session),
            keypad,
            flash: KeyFlash::new(),
            placeholder: String::new(),
            alignment: Alignment::default(),
            theme: PadTheme::default(),
        }
    }

    /// Set the readout placeholder (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the readout alignment (builder).
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the theme (builder).
    #[must_use]
    pub fn with_theme(mut self, theme: PadTheme) -> Self {
        self.theme = theme;
        self.keypad = self.keypad.clone().with_theme(theme);
        self
    }

    /// The working value rendered for display, empty once the session
    /// has ended.
    #[must_use]
    pub fn display(&self) -> String {
        self.session
            .as_ref()
            .map(EntrySession::display)
            .unwrap_or_default()
    }

    /// Whether the session is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The readout and keypad areas for a given render area.
    #[must_use]
    pub fn layout(&self, area: Rect) -> (Rect, Rect) {
        let readout_h = (area.height / 6).max(1).min(area.height);
        let readout = Rect::new(area.x, area.y, area.width, readout_h)
            .inner(Sides::horizontal(1));
        let pad = Rect::new(
            area.x,
            area.y + readout_h,
            area.width,
            area.height.saturating_sub(readout_h),
        );
        (readout, pad)
    }

    /// Handle an event, possibly ending the session.
    pub fn handle_event(&mut self, area: Rect, event: &Event) -> Option<ScreenAction> {
        self.session.as_ref()?;

        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let session = self.session.take()?;
                return Some(ScreenAction::Committed(session.commit()));
            }
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) => {
                self.session = None;
                return Some(ScreenAction::Cancelled);
            }
            Event::Pointer(pointer) => match pointer.kind {
                PointerKind::Down => {
                    let (_, pad_area) = self.layout(area);
                    if let Some(key) = self.keypad.key_at(pad_area, pointer.x, pointer.y) {
                        self.flash.press(key);
                        if let Some(session) = &mut self.session {
                            session.apply_key(key);
                        }
                    }
                }
                PointerKind::Up => self.flash.release(),
            },
            Event::Tick(delta) => {
                self.flash.tick(*delta);
            }
            other => {
                if let Some(key) = self.pad_key_of(other) {
                    self.flash.press(key);
                    self.flash.release();
                }
                if let Some(session) = &mut self.session {
                    session.handle_event(other);
                }
            }
        }
        None
    }

    /// Advance time-based visual state outside the event stream.
    pub fn tick(&mut self, delta: Duration) {
        self.flash.tick(delta);
    }

    /// The on-screen key a key event corresponds to, for flashing.
    fn pad_key_of(&self, event: &Event) -> Option<PadKey> {
        let session = self.session.as_ref()?;
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(PadKey::Digit(c as u8 - b'0')),
            KeyCode::Char(c) if session.separator() == Some(c) => Some(PadKey::Separator),
            KeyCode::Backspace => Some(PadKey::Backspace),
            _ => None,
        }
    }
}

impl Widget for EntryScreen {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "EntryScreen",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let (readout_area, pad_area) = self.layout(area);
        let value = self.display();
        set_style_area(buf, readout_area, self.theme.display);
        ValueDisplay::new(&value)
            .with_placeholder(&self.placeholder)
            .with_alignment(self.alignment)
            .with_style(self.theme.display)
            .with_placeholder_style(self.theme.placeholder)
            .render(readout_area, buf);

        self.keypad
            .clone()
            .with_pressed(self.flash.active())
            .render(pad_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitpad_core::bounds::Bounds;
    use digitpad_core::event::{PointerEvent, RotaryEvent};
    use digitpad_core::session::KeypadMode;

    const AREA: Rect = Rect::new(0, 0, 11, 13);

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn decimal_screen() -> EntryScreen {
        EntryScreen::new(EntrySession::text(KeypadMode::Decimal, '.'))
    }

    #[test]
    fn typed_keys_reach_the_session() {
        let mut screen = decimal_screen();
        assert!(screen.handle_event(AREA, &press(KeyCode::Char('5'))).is_none());
        assert!(screen.handle_event(AREA, &press(KeyCode::Char('.'))).is_none());
        assert!(screen.handle_event(AREA, &press(KeyCode::Char('2'))).is_none());
        assert_eq!(screen.display(), "5.2");
    }

    #[test]
    fn enter_commits_the_working_value() {
        let mut screen = decimal_screen();
        screen.handle_event(AREA, &press(KeyCode::Char('8')));
        let action = screen.handle_event(AREA, &press(KeyCode::Enter));
        assert_eq!(
            action,
            Some(ScreenAction::Committed(EntryValue::Text("8".into())))
        );
        assert!(!screen.is_open());
    }

    #[test]
    fn escape_cancels() {
        let mut screen = decimal_screen();
        screen.handle_event(AREA, &press(KeyCode::Char('8')));
        assert_eq!(
            screen.handle_event(AREA, &press(KeyCode::Escape)),
            Some(ScreenAction::Cancelled)
        );
        assert!(!screen.is_open());
    }

    #[test]
    fn ended_screen_reports_nothing() {
        let mut screen = decimal_screen();
        screen.handle_event(AREA, &press(KeyCode::Escape));
        assert!(screen.handle_event(AREA, &press(KeyCode::Enter)).is_none());
        assert!(screen.handle_event(AREA, &press(KeyCode::Char('3'))).is_none());
        assert_eq!(screen.display(), "");
    }

    #[test]
    fn pointer_tap_presses_a_key() {
        let mut screen = decimal_screen();
        let (_, pad_area) = screen.layout(AREA);
        let rect = screen.keypad.key_rect(pad_area, 1, 1).unwrap();
        let tap = Event::Pointer(PointerEvent::down(rect.x, rect.y));
        screen.handle_event(AREA, &tap);
        assert_eq!(screen.display(), "5");
        assert_eq!(screen.flash.active(), Some(PadKey::Digit(5)));
    }

    #[test]
    fn pointer_release_starts_flash_revert() {
        let mut screen = decimal_screen();
        let (_, pad_area) = screen.layout(AREA);
        let rect = screen.keypad.key_rect(pad_area, 0, 0).unwrap();
        screen.handle_event(AREA, &Event::Pointer(PointerEvent::down(rect.x, rect.y)));
        screen.handle_event(AREA, &Event::Pointer(PointerEvent::up(rect.x, rect.y)));
        assert_eq!(screen.flash.active(), Some(PadKey::Digit(1)));
        screen.handle_event(AREA, &Event::Tick(Duration::from_millis(100)));
        assert_eq!(screen.flash.active(), None);
    }

    #[test]
    fn gutter_tap_does_nothing() {
        let mut screen = decimal_screen();
        // Row 0 of the whole area is the readout band.
        screen.handle_event(AREA, &Event::Pointer(PointerEvent::down(0, 0)));
        assert_eq!(screen.display(), "");
        assert_eq!(screen.flash.active(), None);
    }

    #[test]
    fn rotary_reaches_numeric_sessions() {
        let mut screen =
            EntryScreen::new(EntrySession::number(Bounds::new(0, 10)).with_value(4));
        screen.handle_event(AREA, &Event::Rotary(RotaryEvent::Delta(1.2)));
        assert_eq!(screen.display(), "5");
        screen.handle_event(AREA, &press(KeyCode::Down));
        assert_eq!(screen.display(), "4");
    }

    #[test]
    fn layout_reserves_readout_band() {
        let screen = decimal_screen();
        let (readout, pad) = screen.layout(Rect::new(0, 0, 12, 18));
        assert_eq!(readout.y, 0);
        assert_eq!(readout.height, 3);
        assert_eq!(pad.y, 3);
        assert_eq!(pad.height, 15);
        // Horizontal inset keeps the readout off the bezel.
        assert_eq!(readout.x, 1);
        assert_eq!(readout.width, 10);
    }

    #[test]
    fn render_shows_value_and_pad() {
        let mut screen = decimal_screen();
        screen.handle_event(AREA, &press(KeyCode::Char('7')));
        let mut buf = Buffer::new(11, 13);
        screen.render(AREA, &mut buf);
        let (readout, pad_area) = screen.layout(AREA);
        // Trailing-aligned value in the readout band.
        assert_eq!(buf.get(readout.right() - 1, readout.y).unwrap().ch, '7');
        // The '5' key cap is somewhere in the pad area.
        let five = screen.keypad.key_rect(pad_area, 1, 1).unwrap();
        let lx = five.x + (five.width - 1) / 2;
        let ly = five.y + five.height / 2;
        assert_eq!(buf.get(lx, ly).unwrap().ch, '5');
    }
}
