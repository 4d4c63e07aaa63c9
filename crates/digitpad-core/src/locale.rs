#![forbid(unsafe_code)]

//! Locale-driven decimal separator resolution.
//!
//! The only locale fact the keypad needs is which glyph denotes the
//! decimal point. The lookup is a plain table over BCP 47-style tags;
//! callers inject the resolved glyph into a session at construction, and
//! the engine treats it as an opaque single character from then on.

/// A locale identified by a BCP 47-style tag, e.g. `"en-US"` or `"de"`.
///
/// Matching is case-insensitive and accepts `_` as a tag separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

/// Languages whose convention is the decimal comma.
const COMMA_LANGUAGES: &[&str] = &[
    "az", "be", "bg", "bs", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr", "hr", "hu",
    "id", "is", "it", "kk", "lt", "lv", "mk", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru",
    "sk", "sl", "sq", "sr", "sv", "tr", "uk", "vi",
];

/// Languages using the Arabic decimal separator.
const ARABIC_SEPARATOR_LANGUAGES: &[&str] = &["ar", "fa", "ur"];

/// Regions that override their language's convention with the point.
const POINT_REGIONS: &[&str] = &["ch", "li"];

impl Locale {
    /// Create a locale from a tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The POSIX locale: decimal point, no region.
    #[must_use]
    pub fn posix() -> Self {
        Self::new("C")
    }

    /// The locale tag as given.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Primary language subtag, lowercased.
    fn language(&self) -> String {
        self.tag
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase()
    }

    /// Region subtag, lowercased, if present.
    fn region(&self) -> Option<String> {
        self.tag
            .split(['-', '_'])
            .nth(1)
            .filter(|s| s.len() == 2)
            .map(str::to_ascii_lowercase)
    }

    /// The glyph this locale uses for the decimal point.
    ///
    /// Unknown tags fall back to `'.'`. Swiss-style regions use the point
    /// regardless of language.
    #[must_use]
    pub fn decimal_separator(&self) -> char {
        if let Some(region) = self.region()
            && POINT_REGIONS.contains(&region.as_str())
        {
            return '.';
        }
        let lang = self.language();
        if COMMA_LANGUAGES.contains(&lang.as_str()) {
            ','
        } else if ARABIC_SEPARATOR_LANGUAGES.contains(&lang.as_str()) {
            '٫'
        } else {
            '.'
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::posix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_locales() {
        assert_eq!(Locale::new("en-US").decimal_separator(), '.');
        assert_eq!(Locale::new("en").decimal_separator(), '.');
        assert_eq!(Locale::new("ja-JP").decimal_separator(), '.');
        assert_eq!(Locale::posix().decimal_separator(), '.');
    }

    #[test]
    fn comma_locales() {
        assert_eq!(Locale::new("de-DE").decimal_separator(), ',');
        assert_eq!(Locale::new("fr").decimal_separator(), ',');
        assert_eq!(Locale::new("pt-BR").decimal_separator(), ',');
    }

    #[test]
    fn swiss_region_overrides_language() {
        assert_eq!(Locale::new("de-CH").decimal_separator(), '.');
        assert_eq!(Locale::new("fr-CH").decimal_separator(), '.');
        assert_eq!(Locale::new("de-LI").decimal_separator(), '.');
    }

    #[test]
    fn arabic_separator() {
        assert_eq!(Locale::new("ar-EG").decimal_separator(), '٫');
        assert_eq!(Locale::new("fa").decimal_separator(), '٫');
    }

    #[test]
    fn underscore_and_case_tolerant() {
        assert_eq!(Locale::new("DE_de").decimal_separator(), ',');
        assert_eq!(Locale::new("de_CH").decimal_separator(), '.');
    }

    #[test]
    fn unknown_falls_back_to_point() {
        assert_eq!(Locale::new("tlh").decimal_separator(), '.');
        assert_eq!(Locale::new("").decimal_separator(), '.');
    }
}
