//! Supported site languages and the fixed picker list.
//!
//! The order of [`LANGUAGES`] is the render order of the language switcher.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::i18n::LocaleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Ar,
    Ku,
    Fa,
    Tr,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::En,
        LanguageCode::Ar,
        LanguageCode::Ku,
        LanguageCode::Fa,
        LanguageCode::Tr,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ar => "ar",
            LanguageCode::Ku => "ku",
            LanguageCode::Fa => "fa",
            LanguageCode::Tr => "tr",
        }
    }

    /// Script direction used for the `dir` attribute of the app root.
    pub fn direction(self) -> TextDirection {
        match self {
            LanguageCode::Ar | LanguageCode::Ku | LanguageCode::Fa => TextDirection::Rtl,
            LanguageCode::En | LanguageCode::Tr => TextDirection::Ltr,
        }
    }

    /// Fluent locale folder backing this language.
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            LanguageCode::En => unic_langid::langid!("en"),
            LanguageCode::Ar => unic_langid::langid!("ar"),
            LanguageCode::Ku => unic_langid::langid!("ku"),
            LanguageCode::Fa => unic_langid::langid!("fa"),
            LanguageCode::Tr => unic_langid::langid!("tr"),
        }
    }

    /// First requested locale whose primary subtag is one of ours.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Option<LanguageCode> {
        requested
            .iter()
            .find_map(|id| id.language.as_str().parse::<LanguageCode>().ok())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = LocaleError;

    /// Accepts bare codes (`ar`) and region-tagged forms (`ar-SA`, `fa_IR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.code() == primary)
            .ok_or_else(|| LocaleError::UnknownLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// One entry of the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: LanguageCode,
    pub display_name: &'static str,
    pub flag_glyph: &'static str,
}

pub const LANGUAGES: [LanguageOption; 5] = [
    LanguageOption {
        code: LanguageCode::En,
        display_name: "English",
        flag_glyph: "🇺🇸",
    },
    LanguageOption {
        code: LanguageCode::Ar,
        display_name: "العربية",
        flag_glyph: "🇸🇦",
    },
    LanguageOption {
        code: LanguageCode::Ku,
        display_name: "کوردی",
        flag_glyph: "",
    },
    LanguageOption {
        code: LanguageCode::Fa,
        display_name: "فارسی",
        flag_glyph: "🇮🇷",
    },
    LanguageOption {
        code: LanguageCode::Tr,
        display_name: "Türkçe",
        flag_glyph: "🇹🇷",
    },
];

/// Flag shown on the switcher trigger. Empty when the list has no match.
pub fn flag_glyph(code: LanguageCode) -> &'static str {
    LANGUAGES
        .iter()
        .find(|option| option.code == code)
        .map(|option| option.flag_glyph)
        .unwrap_or("")
}

pub const BRAND_SUBTITLE: &str = "Supporting Health & Advocacy for Middle Eastern Societies";

pub fn brand_title(code: LanguageCode) -> &'static str {
    match code {
        LanguageCode::Ar => "شمس",
        _ => "SHAMS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_order_matches_code_order() {
        let codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes, LanguageCode::ALL.to_vec());
    }

    #[test]
    fn trigger_glyph_follows_active_language() {
        let expected = ["🇺🇸", "🇸🇦", "", "🇮🇷", "🇹🇷"];
        for (code, glyph) in LanguageCode::ALL.into_iter().zip(expected) {
            assert_eq!(flag_glyph(code), glyph, "glyph for {code}");
        }
    }

    #[test]
    fn brand_title_is_arabic_only_for_arabic() {
        assert_eq!(brand_title(LanguageCode::Ar), "شمس");
        assert_eq!(brand_title(LanguageCode::En), "SHAMS");
        assert_eq!(brand_title(LanguageCode::Fa), "SHAMS");
    }

    #[test]
    fn parses_codes_and_region_tags() {
        assert_eq!("AR".parse::<LanguageCode>().unwrap(), LanguageCode::Ar);
        assert_eq!("fa-IR".parse::<LanguageCode>().unwrap(), LanguageCode::Fa);
        assert_eq!("tr_TR".parse::<LanguageCode>().unwrap(), LanguageCode::Tr);
        let err = "de".parse::<LanguageCode>().unwrap_err();
        assert!(matches!(err, LocaleError::UnknownLanguage(ref tag) if tag == "de"));
    }

    #[test]
    fn negotiate_skips_unsupported_locales() {
        let requested: Vec<LanguageIdentifier> = ["de-DE", "ku", "en-US"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(LanguageCode::negotiate(&requested), Some(LanguageCode::Ku));
        assert_eq!(LanguageCode::negotiate(&[]), None);
    }

    #[test]
    fn rtl_languages() {
        assert_eq!(LanguageCode::Ar.direction(), TextDirection::Rtl);
        assert_eq!(LanguageCode::Ku.direction().as_attr(), "rtl");
        assert_eq!(LanguageCode::Tr.direction(), TextDirection::Ltr);
    }
}
