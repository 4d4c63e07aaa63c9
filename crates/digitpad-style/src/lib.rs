#![forbid(unsafe_code)]

//! Styling for digitpad widgets.
//!
//! A [`Style`] is a patch: each field is optional, and applying a style to
//! a cell only touches the fields that are set. Widgets compose styles from
//! a [`PadTheme`] rather than hard-coding colors.

pub mod theme;

pub use theme::PadTheme;

use digitpad_render::cell::{PackedRgba, StyleFlags};

/// A style patch: optional foreground, background, and attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<PackedRgba>,
    /// Background color, if set.
    pub bg: Option<PackedRgba>,
    /// Style flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style that changes nothing.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color (builder).
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color (builder).
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags (builder).
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Add bold to the attribute flags (builder).
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(StyleFlags::BOLD)
    }

    /// Add dim to the attribute flags (builder).
    #[must_use]
    pub fn dim(self) -> Self {
        self.with_flag(StyleFlags::DIM)
    }

    /// Add underline to the attribute flags (builder).
    #[must_use]
    pub fn underline(self) -> Self {
        self.with_flag(StyleFlags::UNDERLINE)
    }

    /// Add reverse video to the attribute flags (builder).
    #[must_use]
    pub fn reverse(self) -> Self {
        self.with_flag(StyleFlags::REVERSE)
    }

    fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flag);
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }

    /// Whether the style changes nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style() {
        assert!(Style::new().is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn builders_set_fields() {
        let s = Style::new().fg(PackedRgba::WHITE).bg(PackedRgba::BLACK);
        assert_eq!(s.fg, Some(PackedRgba::WHITE));
        assert_eq!(s.bg, Some(PackedRgba::BLACK));
        assert!(s.attrs.is_none());
    }

    #[test]
    fn flag_builders_accumulate() {
        let s = Style::new().bold().dim();
        assert_eq!(s.attrs, Some(StyleFlags::BOLD | StyleFlags::DIM));
    }

    #[test]
    fn merge_prefers_other() {
        let base = Style::new().fg(PackedRgba::WHITE).bold();
        let over = Style::new().fg(PackedRgba::BLACK);
        let merged = base.merge(over);
        assert_eq!(merged.fg, Some(PackedRgba::BLACK));
        assert_eq!(merged.attrs, Some(StyleFlags::BOLD));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let s = Style::new().fg(PackedRgba::gray(100)).reverse();
        assert_eq!(s.merge(Style::new()), s);
        assert_eq!(Style::new().merge(s), s);
    }
}
