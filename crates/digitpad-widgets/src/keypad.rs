#![forbid(unsafe_code)]

//! The digit keypad grid.
//!
//! Four rows of three keys: `1 2 3` / `4 5 6` / `7 8 9` / separator, `0`,
//! backspace. In [`KeypadMode::Numbers`] the separator position is an
//! empty spacer. Keys are separated by a one-cell gutter and the grid is
//! centered in its render area.
//!
//! The widget itself is pure presentation plus hit-testing; which key
//! shows the pressed style comes from a [`KeyFlash`], whose delayed
//! revert keeps a tapped key visibly lit long enough to be perceived on
//! a quick tap.

use std::time::Duration;

use digitpad_core::geometry::Rect;
use digitpad_core::session::{KeypadMode, PadKey};
use digitpad_render::buffer::Buffer;
use digitpad_style::PadTheme;

use crate::{Widget, set_style_area};

const COLS: u16 = 3;
const ROWS: u16 = 4;

/// How long a released key keeps its pressed style.
pub const PRESS_LINGER: Duration = Duration::from_millis(80);

/// The keypad grid widget.
#[derive(Debug, Clone)]
pub struct Keypad {
    mode: KeypadMode,
    separator: char,
    theme: PadTheme,
    gap: u16,
    pressed: Option<PadKey>,
}

impl Keypad {
    /// Create a keypad for the given mode with a `.` separator.
    #[must_use]
    pub fn new(mode: KeypadMode) -> Self {
        Self {
            mode,
            separator: '.',
            theme: PadTheme::default(),
            gap: 1,
            pressed: None,
        }
    }

    /// Set the separator glyph shown on the separator key (builder).
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the theme (builder).
    #[must_use]
    pub fn with_theme(mut self, theme: PadTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the gutter width between keys (builder).
    #[must_use]
    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set which key renders with the pressed style (builder).
    #[must_use]
    pub fn with_pressed(mut self, pressed: Option<PadKey>) -> Self {
        self.pressed = pressed;
        self
    }

    /// The keypad mode.
    #[must_use]
    pub const fn mode(&self) -> KeypadMode {
        self.mode
    }

    /// The logical key at grid position `(row, col)`, if one exists.
    ///
    /// `None` for the separator position in `Numbers` mode.
    #[must_use]
    pub fn key_for_cell(&self, row: u16, col: u16) -> Option<PadKey> {
        match (row, col) {
            (0..=2, 0..=2) => Some(PadKey::Digit((1 + row * COLS + col) as u8)),
            (3, 0) => self.mode.has_separator().then_some(PadKey::Separator),
            (3, 1) => Some(PadKey::Digit(0)),
            (3, 2) => Some(PadKey::Backspace),
            _ => None,
        }
    }

    /// The glyph shown on a key cap.
    #[must_use]
    pub fn label(&self, key: PadKey) -> char {
        match key {
            PadKey::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            PadKey::Separator => self.separator,
            PadKey::Backspace => '⌫',
        }
    }

    fn grid(&self, area: Rect) -> Option<Grid> {
        let key_w = area.width.saturating_sub(self.gap * (COLS - 1)) / COLS;
        let key_h = area.height.saturating_sub(self.gap * (ROWS - 1)) / ROWS;
        if key_w == 0 || key_h == 0 {
            return None;
        }
        let used_w = key_w * COLS + self.gap * (COLS - 1);
        let used_h = key_h * ROWS + self.gap * (ROWS - 1);
        Some(Grid {
            origin_x: area.x + (area.width - used_w) / 2,
            origin_y: area.y + (area.height - used_h) / 2,
            key_w,
            key_h,
            gap: self.gap,
        })
    }

    /// The render rect of the key at `(row, col)` within `area`, if the
    /// area fits a grid at all.
    #[must_use]
    pub fn key_rect(&self, area: Rect, row: u16, col: u16) -> Option<Rect> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        self.grid(area).map(|g| g.rect(row, col))
    }

    /// Hit-test a point against the grid rendered in `area`.
    ///
    /// Gutters and the `Numbers`-mode spacer report `None`.
    #[must_use]
    pub fn key_at(&self, area: Rect, x: u16, y: u16) -> Option<PadKey> {
        let grid = self.grid(area)?;
        for row in 0..ROWS {
            for col in 0..COLS {
                if grid.rect(row, col).contains(x, y) {
                    return self.key_for_cell(row, col);
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy)]
struct Grid {
    origin_x: u16,
    origin_y: u16,
    key_w: u16,
    key_h: u16,
    gap: u16,
}

impl Grid {
    fn rect(&self, row: u16, col: u16) -> Rect {
        Rect::new(
            self.origin_x + col * (self.key_w + self.gap),
            self.origin_y + row * (self.key_h + self.gap),
            self.key_w,
            self.key_h,
        )
    }
}

impl Widget for Keypad {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Keypad",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let Some(grid) = self.grid(area) else {
            return;
        };

        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(key) = self.key_for_cell(row, col) else {
                    continue;
                };
                let rect = grid.rect(row, col);
                let style = if self.pressed == Some(key) {
                    self.theme.key_pressed
                } else {
                    self.theme.key
                };
                set_style_area(buf, rect, style);

                let lx = rect.x + (rect.width - 1) / 2;
                let ly = rect.y + rect.height / 2;
                if let Some(cell) = buf.get_mut(lx, ly) {
                    cell.ch = self.label(key);
                }
            }
        }
    }
}

/// Pressed-key visual state with a delayed revert.
///
/// Pressing lights a key immediately; releasing keeps it lit for the
/// linger interval, and a re-press during the linger cancels the pending
/// revert. Time is injected through [`KeyFlash::tick`]; the widget layer
/// never reads a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFlash {
    active: Option<PadKey>,
    countdown: Option<Duration>,
    linger: Duration,
}

impl KeyFlash {
    /// Create a flash state with the default linger interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: None,
            countdown: None,
            linger: PRESS_LINGER,
        }
    }

    /// Set the linger interval (builder).
    #[must_use]
    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    /// The key currently shown pressed, if any.
    #[must_use]
    pub const fn active(&self) -> Option<PadKey> {
        self.active
    }

    /// A key went down.
    pub fn press(&mut self, key: PadKey) {
        self.active = Some(key);
        self.countdown = None;
    }

    /// The contact ended; start the revert countdown.
    pub fn release(&mut self) {
        if self.active.is_some() {
            self.countdown = Some(self.linger);
        }
    }

    /// Advance time. Returns `true` when the pressed visual reverted.
    pub fn tick(&mut self, delta: Duration) -> bool {
        match self.countdown {
            Some(remaining) if delta >= remaining => {
                self.active = None;
                self.countdown = None;
                true
            }
            Some(remaining) => {
                self.countdown = Some(remaining - delta);
                false
            }
            None => false,
        }
    }
}

impl Default for KeyFlash {
    fn default() -> Self {
        Self::new()
    }
}
