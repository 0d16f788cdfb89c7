//! Supported interface languages.

/// One entry of the fixed language list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    /// BCP 47 code, unique per entry.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name in the language itself.
    pub native_name: &'static str,
    /// Short symbol shown on the toggle button.
    pub symbol: &'static str,
}

/// The language list. The first entry is the fallback.
pub static LANGUAGES: [Language; 2] = [
    Language {
        code: "en",
        name: "English",
        native_name: "English",
        symbol: "🇺🇸",
    },
    Language {
        code: "hi",
        name: "Hindi",
        native_name: "हिन्दी",
        symbol: "🇮🇳",
    },
];

impl Language {
    /// Look up a language by code.
    pub fn lookup(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|lang| lang.code == code)
    }

    /// Look up a language by code, falling back to the first entry.
    pub fn find(code: &str) -> &'static Language {
        Self::lookup(code).unwrap_or_else(|| {
            log::warn!("unknown language code {code:?}, using {}", LANGUAGES[0].code);
            &LANGUAGES[0]
        })
    }

    /// All languages in display order.
    pub fn all() -> &'static [Language] {
        &LANGUAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        assert_ne!(LANGUAGES[0].code, LANGUAGES[1].code);
    }

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(Language::find("en").name, "English");
        assert_eq!(Language::find("hi").native_name, "हिन्दी");
    }

    #[test]
    fn test_unknown_code_falls_back_to_first() {
        assert_eq!(Language::lookup("fr"), None);
        assert_eq!(Language::find("fr"), &LANGUAGES[0]);
        assert_eq!(Language::find(""), &LANGUAGES[0]);
        assert_eq!(Language::find("EN"), &LANGUAGES[0]);
    }
}
