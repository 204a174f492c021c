use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A display language supported by the site.
///
/// The wire form (persisted preference, serialized config) is the lowercase
/// two-letter code (`"en"` / `"de"`). Anything else is not a language and
/// must be treated as "no preference" by consumers.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// The counterpart language, for the two-way switcher.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::De,
            Self::De => Self::En,
        }
    }

    /// Stable lowercase code used for persistence.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Lenient parse: any value that is not exactly a supported code
    /// yields `None` instead of an error.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::Language;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip() {
        for lang in Language::iter() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        for raw in ["fr", "", "null", "EN ", "english", "de-DE"] {
            assert_eq!(Language::from_code(raw), None, "{raw:?} must not parse");
        }
    }

    #[test]
    fn other_is_an_involution() {
        assert_eq!(Language::En.other(), Language::De);
        assert_eq!(Language::De.other().other(), Language::De);
    }
}
