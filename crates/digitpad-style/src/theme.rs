#![forbid(unsafe_code)]

//! Keypad theme presets.

use crate::Style;
use digitpad_render::cell::{PackedRgba, StyleFlags};

/// Visual theme for the keypad widgets.
///
/// The default preset mirrors the translucent gray chrome small-screen
/// keypads typically use; [`PadTheme::mono`] targets 1-bit displays where
/// only reverse video is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadTheme {
    /// Key cap at rest.
    pub key: Style,
    /// Key cap while pressed.
    pub key_pressed: Style,
    /// Value readout line.
    pub display: Style,
    /// Placeholder shown when the value is empty.
    pub placeholder: Style,
    /// Collapsed field background.
    pub field: Style,
    /// Collapsed field background while pressed.
    pub field_pressed: Style,
}

impl PadTheme {
    /// Translucent gray chrome on a dark background.
    #[must_use]
    pub fn gray() -> Self {
        Self {
            key: Style::new()
                .fg(PackedRgba::WHITE)
                .bg(PackedRgba::gray(128).with_opacity(0.5)),
            key_pressed: Style::new()
                .fg(PackedRgba::WHITE)
                .bg(PackedRgba::gray(128).with_opacity(0.7))
                .bold(),
            display: Style::new().fg(PackedRgba::WHITE).bold(),
            placeholder: Style::new().fg(PackedRgba::WHITE).dim(),
            field: Style::new()
                .fg(PackedRgba::WHITE)
                .bg(PackedRgba::gray(128).with_opacity(0.2)),
            field_pressed: Style::new()
                .fg(PackedRgba::WHITE)
                .bg(PackedRgba::gray(128).with_opacity(0.1)),
        }
    }

    /// Monochrome preset for 1-bit displays: reverse video only.
    #[must_use]
    pub fn mono() -> Self {
        Self {
            key: Style::new(),
            key_pressed: Style::new().attrs(StyleFlags::REVERSE),
            display: Style::new().bold(),
            placeholder: Style::new().dim(),
            field: Style::new().underline(),
            field_pressed: Style::new().attrs(StyleFlags::REVERSE),
        }
    }
}

impl Default for PadTheme {
    fn default() -> Self {
        Self::gray()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_gray() {
        assert_eq!(PadTheme::default(), PadTheme::gray());
    }

    #[test]
    fn gray_pressed_is_more_opaque() {
        let theme = PadTheme::gray();
        let rest = theme.key.bg.unwrap().a();
        let pressed = theme.key_pressed.bg.unwrap().a();
        assert!(pressed > rest);
    }

    #[test]
    fn mono_uses_no_color() {
        let theme = PadTheme::mono();
        assert!(theme.key.fg.is_none() && theme.key.bg.is_none());
        assert_eq!(theme.key_pressed.attrs, Some(StyleFlags::REVERSE));
    }
}
